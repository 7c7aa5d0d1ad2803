//! Configuration file discovery and loading.
//!
//! Looks for configuration in the project root:
//! 1. Project config (`.locale-chain.yml`)
//! 2. Local overrides (`.locale-chain.local.yml`), merged over the project config
//!
//! When neither exists the built-in chain is used.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::layer_configs;
use crate::config::schema::LocaleConfig;
use crate::config::validator::validate;
use crate::error::{LocaleError, Result};

/// Project config file name.
pub const CONFIG_FILE: &str = ".locale-chain.yml";

/// Local override file name.
pub const LOCAL_CONFIG_FILE: &str = ".locale-chain.local.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config: .locale-chain.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .locale-chain.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_FILE)),
            project_local: existing(project_root.join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config file exists.
    pub fn has_any(&self) -> bool {
        self.project.is_some() || self.project_local.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LocaleError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LocaleError::Io(e)
        }
    })
}

/// Parse YAML content into a config. Blank content is an empty config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LocaleConfig> {
    if content.trim().is_empty() {
        return Ok(LocaleConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LocaleError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LocaleConfig> {
    let content = read(path)?;
    parse_config(&content, path)
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read(path)?;
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| LocaleError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the project's config files.
///
/// Returns [`LocaleConfig::builtin`] when no config file exists. A local
/// override without a project config is merged over an empty config.
pub fn load_merged_config(project_root: &Path) -> Result<LocaleConfig> {
    let paths = ConfigPaths::discover(project_root);
    if !paths.has_any() {
        tracing::debug!("No config in {}, using built-in chain", project_root.display());
        return Ok(LocaleConfig::builtin());
    }

    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    let merged = layer_configs(&values);
    let source = paths
        .project_local
        .as_deref()
        .or(paths.project.as_deref())
        .unwrap_or(project_root);

    serde_yaml::from_value(merged).map_err(|e| LocaleError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the effective config.
///
/// An explicit path is loaded on its own; otherwise the project root is
/// searched with [`load_merged_config`].
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<LocaleConfig> {
    let config = match explicit {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => load_merged_config(project_root)?,
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SourceConfig;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_nothing_in_empty_dir() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(!paths.has_any());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = TempDir::new().unwrap();
        write(&temp, CONFIG_FILE, "default_locale: en");
        write(&temp, LOCAL_CONFIG_FILE, "default_locale: de");
        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.all_existing().len(), 2);
        assert!(paths.all_existing()[0].ends_with(CONFIG_FILE));
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LocaleError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, CONFIG_FILE, "sources: [unclosed");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, LocaleError::ConfigParseError { .. }));
    }

    #[test]
    fn blank_file_is_empty_config() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, CONFIG_FILE, "\n");
        assert_eq!(load_config_file(&path).unwrap(), LocaleConfig::default());
    }

    #[test]
    fn merged_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            load_merged_config(temp.path()).unwrap(),
            LocaleConfig::builtin()
        );
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            CONFIG_FILE,
            "default_locale: en-US\nsources:\n  - type: cookie\n    priority: 5\n",
        );
        write(&temp, LOCAL_CONFIG_FILE, "default_locale: de-DE\n");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.default_locale.as_deref(), Some("de-DE"));
        assert_eq!(
            config.sources,
            vec![SourceConfig::Cookie {
                name: None,
                priority: 5
            }]
        );
    }

    #[test]
    fn local_sources_replace_project_sources() {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            CONFIG_FILE,
            "sources:\n  - type: cookie\n  - type: query\n",
        );
        write(&temp, LOCAL_CONFIG_FILE, "sources:\n  - type: env\n");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].kind(), "env");
    }

    #[test]
    fn load_config_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        write(&temp, CONFIG_FILE, "default_locale: en");
        let explicit = write(&temp, "other.yml", "default_locale: ja");

        let config = load_config(Some(&explicit), temp.path()).unwrap();
        assert_eq!(config.default_locale.as_deref(), Some("ja"));
    }

    #[test]
    fn load_config_validates() {
        let temp = TempDir::new().unwrap();
        write(&temp, CONFIG_FILE, "default_locale: '!!'");
        let err = load_config(None, temp.path()).unwrap_err();
        assert!(matches!(err, LocaleError::ConfigValidationError { .. }));
    }
}
