pub mod a001_category;
pub mod a002_supplier;
pub mod a003_product;
pub mod a004_order;
