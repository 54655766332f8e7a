// Configuration module entry point
// Manages application configuration and shared request-path state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, DatabaseConfig, HttpConfig, LoggingConfig, ServerConfig};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/todos";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.keep_alive", true)?
            .set_default("database.url", database_url)?
            .set_default("database.max_connections", 5)?
            .set_default("logging.request_log_file", "log.txt")?
            .set_default("logging.access_log", true)?
            .set_default("http.max_body_size", 102_400)? // 100KB, the framework-level default
            .build()?;

        settings.try_deserialize()
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no_such_config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5000);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.server.max_connections.is_none());
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.logging.request_log_file, "log.txt");
        assert_eq!(cfg.http.max_body_size, 102_400);
    }

    #[test]
    fn test_socket_addr_parses_from_defaults() {
        let cfg = Config::load_from("no_such_config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
    }
}
