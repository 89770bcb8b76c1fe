pub mod config;

pub use config::{AppConfig, ConfigError, CorsConfig, ServerConfig};
