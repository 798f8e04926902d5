pub mod a001_inventory_item;
pub mod common;
