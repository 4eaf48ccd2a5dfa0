//! Runtime configuration from environment variables.
//!
//! Supported:
//! - `CMD_LOG_MODE`: `stderr` (default) or `file`
//! - `CMD_LOG_FILE`: log path when logging to a file (default `cmd-engine.log`)
//! - `CMD_STRICT_VALIDATION`: `1`/`true`/`yes` to reject out-of-range input
//!
//! `CMD_SANITIZE_MAX_BYTES` and `RUST_LOG` are read where they are used.

use std::path::PathBuf;

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMode {
    /// Standard error, keeping stdout free for the report
    Stderr,
    /// Append to a file
    File(PathBuf),
}

/// Engine runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub log_mode: LogMode,
    /// Wrap the engine in the range pre-check decorator
    pub strict_validation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Stderr,
            strict_validation: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment (best-effort).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(mode) = lookup("CMD_LOG_MODE") {
            if mode.trim().eq_ignore_ascii_case("file") {
                let path = lookup("CMD_LOG_FILE")
                    .filter(|p| !p.trim().is_empty())
                    .unwrap_or_else(|| "cmd-engine.log".to_string());
                cfg.log_mode = LogMode::File(PathBuf::from(path));
            }
        }

        if let Some(v) = lookup("CMD_STRICT_VALIDATION") {
            cfg.strict_validation = is_truthy(&v);
        }

        cfg
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), EngineConfig::default());
    }

    #[test]
    fn test_file_logging() {
        let cfg = config_from(&[("CMD_LOG_MODE", "file"), ("CMD_LOG_FILE", "/tmp/cmd.log")]);
        assert_eq!(cfg.log_mode, LogMode::File(PathBuf::from("/tmp/cmd.log")));

        let cfg = config_from(&[("CMD_LOG_MODE", "FILE")]);
        assert_eq!(cfg.log_mode, LogMode::File(PathBuf::from("cmd-engine.log")));
    }

    #[test]
    fn test_strict_validation_flag() {
        assert!(config_from(&[("CMD_STRICT_VALIDATION", "YES")]).strict_validation);
        assert!(!config_from(&[("CMD_STRICT_VALIDATION", "0")]).strict_validation);
        assert!(!config_from(&[("CMD_STRICT_VALIDATION", "maybe")]).strict_validation);
    }
}
