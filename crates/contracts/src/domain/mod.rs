pub mod a001_remote_product;
pub mod a002_sheet_row;
pub mod a003_catalog_entry;
