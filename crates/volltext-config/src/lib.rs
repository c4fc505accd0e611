use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid document pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read document match: {source}")]
    UnreadableMatch { source: glob::GlobError },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the annotated documents (JSON sibling arrays).
    pub documents_path: PathBuf,
    /// Glob patterns relative to `documents_path`.
    #[serde(default = "default_include")]
    pub include: Vec<String>,
    /// Fail `check` on any serialization error or round-trip mismatch.
    #[serde(default)]
    pub strict: bool,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

fn default_include() -> Vec<String> {
    vec!["**/*.json".to_string()]
}

impl Config {
    pub fn new(documents_path: impl Into<PathBuf>) -> Self {
        Self {
            documents_path: documents_path.into(),
            include: default_include(),
            strict: false,
            pretty: false,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded documents path
        config.documents_path =
            Self::expand_path(&config.documents_path).unwrap_or(config.documents_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/volltext");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Files under `documents_path` matching any `include` pattern, sorted
    /// and without duplicates.
    pub fn document_files(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();
        for pattern in &self.include {
            let full = self.documents_path.join(pattern);
            let full = full.to_string_lossy();
            let matches = glob::glob(&full).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in matches {
                let path = entry.map_err(|source| ConfigError::UnreadableMatch { source })?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/volltext/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::new("/tmp/test-documents");
        original.strict = true;

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_defaults_for_optional_keys() {
        let config: Config = toml::from_str(r#"documents_path = "/data""#).unwrap();

        assert_eq!(config.include, vec!["**/*.json".to_string()]);
        assert!(!config.strict);
        assert!(!config.pretty);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("VOLLTEXT_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$VOLLTEXT_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("VOLLTEXT_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "strict = true").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let mut test_config = Config::new("/tmp/test-documents");
        test_config.include = vec!["beschreibungen/*.json".to_string()];
        test_config.pretty = true;

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("VOLLTEXT_ROOT", "/custom/documents");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, r#"documents_path = "$VOLLTEXT_ROOT/hsp""#).unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.documents_path, PathBuf::from("/custom/documents/hsp"));

        unsafe {
            env::remove_var("VOLLTEXT_ROOT");
        }
    }

    #[test]
    fn test_document_files_match_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::write(root.join("one.json"), "[]").unwrap();
        std::fs::write(root.join("a/b/two.json"), "[]").unwrap();
        std::fs::write(root.join("a/notes.txt"), "").unwrap();

        let mut config = Config::new(root);
        config.include = vec!["**/*.json".to_string(), "*.json".to_string()];
        let files = config.document_files().unwrap();

        assert_eq!(files, vec![root.join("a/b/two.json"), root.join("one.json")]);
    }

    #[test]
    fn test_document_files_invalid_pattern() {
        let mut config = Config::new("/tmp");
        config.include = vec!["[".to_string()];

        let result = config.document_files();

        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }
}
