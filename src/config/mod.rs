//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, GameConfig, LogFormat, LoggingConfig, PasswordConfig, ServerConfig, SessionConfig,
};
