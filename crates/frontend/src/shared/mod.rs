pub mod api_utils;
pub mod date_utils;
pub mod dialogs;
pub mod number_format;
pub mod theme;
