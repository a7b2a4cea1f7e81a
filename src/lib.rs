// Relver - release version manager
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::version::Version;
pub use services::version_file::{VersionFile, DEFAULT_VERSION_KEY};
pub use utils::error::{RelverError, Result};
