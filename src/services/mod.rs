// Service exports
pub mod loader;

pub use loader::{load_model, parse_model, LoadError};
