use serde::Deserialize;

use crate::domain::scoring::{DEFAULT_KEYWORD_POINTS, DEFAULT_SECRET_KEYWORDS};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Session cookie settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Mark the cookie `Secure`; enable when served over HTTPS
    #[serde(default)]
    pub secure_cookie: bool,
    /// Hours a session stays valid after login
    #[serde(default = "default_session_ttl_hours")]
    pub ttl_hours: u64,
}

/// Scoring rules
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_keyword_points")]
    pub keyword_points: u64,
    #[serde(default = "default_secret_keywords")]
    pub secret_keywords: Vec<String>,
}

/// Argon2id cost for newly hashed passwords
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_level() -> String {
    "info".to_string()
}

fn default_cookie_name() -> String {
    "konquest.sid".to_string()
}

fn default_session_ttl_hours() -> u64 {
    24
}

fn default_keyword_points() -> u64 {
    DEFAULT_KEYWORD_POINTS
}

fn default_secret_keywords() -> Vec<String> {
    DEFAULT_SECRET_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_memory_kib() -> u32 {
    argon2::Params::DEFAULT_M_COST
}

fn default_iterations() -> u32 {
    argon2::Params::DEFAULT_T_COST
}

fn default_parallelism() -> u32 {
    argon2::Params::DEFAULT_P_COST
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
            ttl_hours: default_session_ttl_hours(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            keyword_points: default_keyword_points(),
            secret_keywords: default_secret_keywords(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/default`, `config/local`, and
    /// `APP__*` environment variables, in increasing precedence.
    ///
    /// A plain `PORT` variable overrides everything else.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("game.secret_keywords")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
