//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Built once at startup and shared read-only with the router.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `STATUS_PATH` — positional exit artifact (default: `"data/saida_posicional.json"`)
/// - `PRICES_PATH` — price snapshot artifact (default: `"data/precos_saida.json"`)
/// - `STATIC_DIR` — dashboard assets (default: `"static"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub status_path: PathBuf,
    pub prices_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
            status_path: lookup("STATUS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.status_path),
            prices_path: lookup("PRICES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.prices_path),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            status_path: PathBuf::from("data/saida_posicional.json"),
            prices_path: PathBuf::from("data/precos_saida.json"),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serial_test::serial;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.status_path, PathBuf::from("data/saida_posicional.json"));
        assert_eq!(config.prices_path, PathBuf::from("data/precos_saida.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = from_pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8090"),
            ("LOG_FORMAT", "JSON"),
            ("STATUS_PATH", "/srv/saida/saida_posicional.json"),
            ("STATIC_DIR", "/srv/saida/public"),
        ]);

        assert_eq!(config.addr(), "127.0.0.1:8090");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.status_path,
            PathBuf::from("/srv/saida/saida_posicional.json")
        );
        assert_eq!(config.prices_path, PathBuf::from("data/precos_saida.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/saida/public"));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = from_pairs(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 3000);

        let config = from_pairs(&[("PORT", "70000")]);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_unknown_log_format_is_text() {
        let config = from_pairs(&[("LOG_FORMAT", "pretty")]);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        // SAFETY: serialized with every other test touching the environment.
        unsafe {
            std::env::set_var("STATUS_PATH", "/tmp/env-saida.json");
            std::env::set_var("PORT", "4100");
        }

        let config = Config::from_env();

        unsafe {
            std::env::remove_var("STATUS_PATH");
            std::env::remove_var("PORT");
        }

        assert_eq!(config.status_path, PathBuf::from("/tmp/env-saida.json"));
        assert_eq!(config.port, 4100);
    }
}
