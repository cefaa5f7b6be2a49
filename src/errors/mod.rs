pub mod config_error;
pub mod manifest_error;

pub use config_error::ConfigError;
pub use manifest_error::ManifestError;
