pub mod controller;
pub mod form;
pub mod list;
pub mod page;

pub use controller::InventoryController;
pub use page::InventoryPage;
