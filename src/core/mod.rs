pub mod data;
pub mod error;
pub mod settings;
pub mod validation;
