//! Configuration structs

mod app_config;

pub use app_config::{ConfigError, DecodeConfig, Environment};
