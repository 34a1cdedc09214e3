use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built widget, served as fallback
    pub static_dir: String,
    /// `["*"]` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: "dist".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o.trim() == "*")
    }
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Current working directory
/// 3. Built-in defaults
///
/// A malformed file is logged and ignored; the service always starts.
pub fn load_config() -> Config {
    for path in candidate_paths() {
        if !path.exists() {
            continue;
        }
        tracing::info!("Loading config from: {}", path.display());
        match std::fs::read_to_string(&path) {
            Ok(raw) => match parse_config(&raw, |name| std::env::var(name).ok()) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Invalid config {}: {}", path.display(), e);
                    break;
                }
            },
            Err(e) => {
                tracing::warn!("Cannot read config {}: {}", path.display(), e);
                break;
            }
        }
    }

    tracing::info!("Using default configuration");
    Config::default()
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

/// Expand environment placeholders, then parse TOML
pub fn parse_config<F>(raw: &str, lookup: F) -> Result<Config, toml::de::Error>
where
    F: Fn(&str) -> Option<String>,
{
    toml::from_str(&expand_env_vars(raw, lookup))
}

/// Replace `$NAME` and `${NAME}` with values from `lookup`
///
/// Unknown variables and unterminated `${` are kept as written.
pub fn expand_env_vars<F>(raw: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                match lookup(name) {
                    Some(value) => result.push_str(&value),
                    None => result.push_str(&rest[pos..pos + 3 + end]),
                }
                rest = &braced[end + 1..];
                continue;
            }
            result.push('$');
            rest = after;
            continue;
        }

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if name_len == 0 {
            result.push('$');
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        match lookup(name) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                result.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str) -> Option<String> {
        match name {
            "SMARTAIR_ORIGIN" => Some("https://smartair.space".to_string()),
            "PORT" => Some("9000".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_env_vars() {
        assert_eq!(expand_env_vars("${PORT}", env), "9000");
        assert_eq!(expand_env_vars("port=$PORT;", env), "port=9000;");
        assert_eq!(expand_env_vars("$MISSING and ${MISSING}", env), "$MISSING and ${MISSING}");
        assert_eq!(expand_env_vars("cost: 5$ ${oops", env), "cost: 5$ ${oops");
        assert_eq!(expand_env_vars("no vars", env), "no vars");
    }

    #[test]
    fn test_parse_config_with_placeholders() {
        let raw = r#"
[server]
port = ${PORT}
cors_origins = ["${SMARTAIR_ORIGIN}", "http://localhost:8080"]
"#;
        let config = parse_config(raw, env).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.server.cors_origins,
            vec!["https://smartair.space", "http://localhost:8080"]
        );
        assert!(!config.server.allows_any_origin());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("", env).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.server.allows_any_origin());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_config("[server\nport = ", env).is_err());
    }

    #[test]
    fn test_repo_config_parses() {
        let raw = include_str!("../../../../config.toml");
        let config = parse_config(raw, env).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.static_dir, "dist");
    }
}
