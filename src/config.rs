use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = ".gitsemver.toml";

/// Name of the configuration file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "git-semver.toml";

/// Represents the complete configuration for git-semver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub separators: SeparatorsConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Returns the default suffix separator.
fn default_suffix_separator() -> String {
    "-".to_string()
}

/// Separators used both for parsing and rendering versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SeparatorsConfig {
    #[serde(default)]
    pub prefix: String,

    #[serde(default = "default_suffix_separator")]
    pub suffix: String,
}

impl Default for SeparatorsConfig {
    fn default() -> Self {
        SeparatorsConfig {
            prefix: String::new(),
            suffix: default_suffix_separator(),
        }
    }
}

/// Where to look for tags when `--gitdir` is not given.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.gitsemver.toml` in current directory
/// 3. `git-semver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config() {
            Some(path) => path,
            None => {
                debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.separators.prefix, "");
        assert_eq!(config.separators.suffix, "-");
        assert_eq!(config.repository.path, None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_separators() {
        let config: Config = toml::from_str("[separators]\nprefix = \"/\"\n").unwrap();
        assert_eq!(config.separators.prefix, "/");
        assert_eq!(config.separators.suffix, "-");
    }

    #[test]
    fn test_repository_path() {
        let config: Config = toml::from_str("[repository]\npath = \"../app\"\n").unwrap();
        assert_eq!(config.repository.path, Some(PathBuf::from("../app")));
    }
}
