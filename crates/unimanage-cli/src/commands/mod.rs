//! CLI command implementations.

pub mod records;
pub mod serve;
pub mod session;

use anyhow::Context;
use std::path::Path;
use unimanage_core::UniManageConfig;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "unimanage.yaml";

/// Load the configuration. An explicit path must exist; without one the
/// default file is used if present, otherwise built-in defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<UniManageConfig> {
    match path {
        Some(path) => UniManageConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => UniManageConfig::from_file(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("failed to load config from {DEFAULT_CONFIG_FILE}")),
        None => {
            tracing::debug!("No config file, using defaults");
            Ok(UniManageConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "institution: Riverside University\ndashboard:\n  port: 9090").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.institution_name(), "Riverside University");
        assert_eq!(config.dashboard.port, 9090);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
