//! # modlog-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ConfigError, DecodeConfig, Environment};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
