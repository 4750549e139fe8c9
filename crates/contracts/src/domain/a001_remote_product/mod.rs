pub mod aggregate;

pub use aggregate::{RemoteProduct, MAX_IMAGES};
