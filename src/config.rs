//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Read once at startup and handed to whatever needs it.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Default name of the resource directory, relative to the working directory
pub const DEFAULT_RESOURCES_DIR_NAME: &str = "Resources";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Hosting environment (controls development-only surfaces)
    pub environment: Environment,
    /// Static resource configuration
    pub resources: ResourcesConfig,
    /// HTTPS redirection configuration
    pub https: HttpsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Hosting environment the process runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development: API documentation is exposed
    Development,
    /// Anything else
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name, case-insensitively
    ///
    /// Unknown names map to [`Environment::Production`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Whether development-only features should be enabled
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "Development"),
            Self::Production => write!(f, "Production"),
        }
    }
}

/// Static resource configuration
#[derive(Debug, Clone)]
pub struct ResourcesConfig {
    /// Mount `/api/resources` and `/resources/*`
    pub enabled: bool,
    /// Directory exposed under `/resources`
    pub dir: PathBuf,
}

/// HTTPS redirection configuration
#[derive(Debug, Clone, Default)]
pub struct HttpsConfig {
    /// Port plain-HTTP requests are redirected to; `None` disables redirection
    pub redirect_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                host: "0.0.0.0".to_string(),
            },
            environment: Environment::default(),
            resources: ResourcesConfig {
                enabled: true,
                dir: default_resources_dir(),
            },
            https: HttpsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            environment: env::var("APP_ENV")
                .map(|name| Environment::parse(&name))
                .unwrap_or(defaults.environment),
            resources: ResourcesConfig {
                enabled: env::var("RESOURCES_ENABLED")
                    .ok()
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(defaults.resources.enabled),
                dir: env::var_os("RESOURCES_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.resources.dir),
            },
            https: HttpsConfig {
                redirect_port: env::var("HTTPS_PORT").ok().and_then(|p| p.parse().ok()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_resources_dir() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DEFAULT_RESOURCES_DIR_NAME)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
