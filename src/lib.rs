pub mod core;
pub mod logger;
pub mod server;
pub mod types;

pub use crate::core::data::Catalog;
pub use crate::core::error::{CatalogError, Issue, Result};
pub use crate::types::Project;
