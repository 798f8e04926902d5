pub mod aggregate;
pub mod record;
