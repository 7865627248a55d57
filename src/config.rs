//! Server configuration module

use std::path::PathBuf;

use clap::Parser;

/// Secret used when `SESSION_SECRET` is not configured
pub const DEV_SESSION_SECRET: &str = "this-should-be-something-unguessable";

/// Ubermelon storefront configuration
#[derive(Debug, Parser)]
#[command(name = "ubermelon", about = "Ubermelon storefront server", long_about = None)]
pub struct ServerConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// TOML catalog file; the built-in catalog is used when omitted
    #[arg(short, long, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    /// Secret used to sign session cookies
    #[arg(
        long,
        env = "SESSION_SECRET",
        default_value = DEV_SESSION_SECRET,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub session_secret: String,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether sessions are signed with the well-known development secret
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEV_SESSION_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "ubermelon",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--catalog",
            "melons.toml",
            "--session-secret",
            "s3cret",
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert_eq!(config.catalog, Some(PathBuf::from("melons.toml")));
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = ServerConfig::try_parse_from(["ubermelon", "--port", "melon"]);

        assert!(result.is_err());
    }
}
