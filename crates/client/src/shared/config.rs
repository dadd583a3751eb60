use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON snapshot directory
    File,
    /// Running D.A.D backend
    Api,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub kind: SourceKind,
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default)]
    pub base_url: String,
    /// Bearer token issued by the backend login endpoint
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Acting user; empty means admin view of everything
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_path")]
    pub path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_export_path() -> String {
    "export.csv".into()
}

fn default_log_level() -> String {
    "info,reqwest=warn,hyper=warn".into()
}

fn default_log_dir() -> String {
    "logs".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[source]
kind = "file"
dir = "data"

[export]
path = "export.csv"

[logging]
level = "info,reqwest=warn,hyper=warn"
dir = "logs"
"#;

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Explicit(PathBuf),
    NextToExe(PathBuf),
    Embedded,
}

/// Load configuration
///
/// Search order:
/// 1. `--config` path, which must exist
/// 2. config.toml next to the executable
/// 3. embedded default config
///
/// Runs before tracing is initialized, so the origin is returned for the
/// caller to log.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigOrigin)> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigOrigin::Explicit(path.to_path_buf())));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let config = read_config(&config_path)?;
                return Ok((config, ConfigOrigin::NextToExe(config_path)));
            }
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok((config, ConfigOrigin::Embedded))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read config {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Resolve a configured path
/// Relative paths are taken relative to the executable directory when that
/// directory has the target, otherwise relative to the current directory
pub fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(path);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.dir, "data");
        assert_eq!(config.source.timeout_secs, 30);
        assert!(config.session.username.is_empty());
        assert_eq!(config.export.path, "export.csv");
    }

    #[test]
    fn test_api_config() {
        let config: Config = toml::from_str(
            r#"
            [source]
            kind = "api"
            base_url = "http://dad.local:8080"
            token = "abc"

            [session]
            username = "jdoe"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.kind, SourceKind::Api);
        assert_eq!(config.source.token, "abc");
        assert_eq!(config.session.username, "jdoe");
        assert_eq!(config.logging.dir, "logs");
    }

    #[test]
    fn test_unknown_source_kind_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[source]\nkind = \"ftp\"\n");
        assert!(config.is_err());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let result = load_config(Some(Path::new("/nonexistent/dad/config.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(resolve_path("/tmp/dad"), PathBuf::from("/tmp/dad"));
    }
}
