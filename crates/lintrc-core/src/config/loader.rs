//! Configuration file discovery and loading
//!
//! A profile document is a single mapping of profile name to profile
//! structure. Loaded profiles are layered over the built-ins, so documents
//! can say `"extends": ["recommended"]` without redeclaring the base.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use super::profile::ProfileConfig;
use super::registry::ConfigRegistry;
use crate::error::LintrcError;
use crate::result::Result;

/// Candidate file names in priority order
const CONFIG_FILE_NAMES: &[&str] = &[
    ".lintrc.json",
    ".lintrc.jsonc",
    ".lintrc.yaml",
    "lintrc.json",
    "lintrc.yaml",
];

/// Configuration loader for discovering and loading profile documents
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover a profile document by traversing upward from start_path.
    ///
    /// Tries `.lintrc.json`, `.lintrc.jsonc`, `.lintrc.yaml`,
    /// `lintrc.json`, `lintrc.yaml` in each directory, moving up until a
    /// document is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| LintrcError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.exists() && config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Load a registry from a specific profile document.
    ///
    /// Supports JSON (.json), JSONC (.jsonc, comments and trailing commas)
    /// and YAML (.yaml, .yml). Profiles in the document are layered over
    /// the built-in profiles.
    pub fn load_from_file(path: &Path) -> Result<ConfigRegistry> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LintrcError::io_error(path.to_path_buf(), e))?;

        let ext = path.extension().and_then(|e| e.to_str());
        let profiles: IndexMap<String, ProfileConfig> = match ext {
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                LintrcError::config_error(format!(
                    "Failed to parse '{}': {e}",
                    path.display()
                ))
            })?,
            Some("jsonc") => json5::from_str(&content).map_err(|e| {
                LintrcError::config_error(format!(
                    "Failed to parse '{}': {e}",
                    path.display()
                ))
            })?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
                LintrcError::config_error(format!(
                    "Failed to parse '{}': {e}",
                    path.display()
                ))
            })?,
            _ => {
                return Err(LintrcError::config_error(format!(
                    "Unsupported config extension for '{}' (expected .json, .jsonc, .yaml, or .yml)",
                    path.display()
                )));
            }
        };

        let mut registry = ConfigRegistry::builtin();
        for (name, profile) in profiles {
            registry.insert(name, profile);
        }

        Ok(registry)
    }

    /// Load a registry from a path or by auto-discovery.
    ///
    /// If a custom path is provided, loads from that path. Otherwise walks
    /// up from `start_dir` (or the current directory) looking for a
    /// document; with nothing found, the built-in registry is returned.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<ConfigRegistry> {
        let config_path = if let Some(path) = custom_path {
            if !path.exists() {
                return Err(LintrcError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        } else {
            let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
            Self::auto_discover(search_dir)?
        };

        match config_path {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using built-in profiles");
                Ok(ConfigRegistry::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile::RuleLevel;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintrc.json",
            r#"{
                "strict": {
                    "extends": ["recommended"],
                    "rules": {"no-console": "error"}
                }
            }"#,
        );

        let registry = ConfigLoader::load_from_file(&config_path).unwrap();
        let resolved = registry.resolve("strict").unwrap();
        assert_eq!(
            resolved.rules.get("no-console").unwrap().level,
            RuleLevel::Error
        );
        // Base came from the built-in layer
        assert_eq!(
            resolved.rules.get("no-undef").unwrap().level,
            RuleLevel::Error
        );
    }

    #[test]
    fn test_load_from_file_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            ".lintrc.jsonc",
            r#"{
                // project-wide strictness bump
                "strict": {
                    "rules": {"semi": ["error", "always"],},
                }
            }"#,
        );

        let registry = ConfigLoader::load_from_file(&config_path).unwrap();
        assert!(registry.contains("strict"));
    }

    #[test]
    fn test_load_from_file_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintrc.yaml",
            r#"
strict:
  extends:
    - recommended
  ignorePatterns:
    - coverage/
"#,
        );

        let registry = ConfigLoader::load_from_file(&config_path).unwrap();
        let resolved = registry.resolve("strict").unwrap();
        assert!(resolved.is_ignored("coverage/lcov.info"));
    }

    #[test]
    fn test_loaded_profile_replaces_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "lintrc.json",
            r#"{"default": {"rules": {"semi": "off"}}}"#,
        );

        let registry = ConfigLoader::load_from_file(&config_path).unwrap();
        let resolved = registry.resolve("default").unwrap();
        assert_eq!(resolved.rules.get("semi").unwrap().level, RuleLevel::Off);
        assert!(resolved.rules.get("no-console").is_none());
    }

    #[test]
    fn test_auto_discover() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), "lintrc.json", r#"{}"#);

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), ".lintrc.json", r#"{}"#);
        create_temp_config(temp_dir.path(), "lintrc.json", r#"{}"#);

        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".lintrc.json");
    }

    #[test]
    fn test_load_without_document_returns_builtins() {
        let temp_dir = TempDir::new().unwrap();
        let registry = ConfigLoader::load(None, Some(temp_dir.path())).unwrap();
        assert!(registry.contains("default"));
        assert!(registry.contains("security"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Some(Path::new("nonexistent.json")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "invalid.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(temp_dir.path(), "lintrc.toml", "[strict]");

        let err = ConfigLoader::load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension"));
    }
}
