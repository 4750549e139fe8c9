pub mod aggregate;

pub use aggregate::{ColumnMapping, SheetRow};
