use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Words always treated as correct.
    #[serde(default)]
    pub ignored_words: Vec<String>,

    /// Lowercase every token before matching.
    #[serde(default)]
    pub ignore_uppercase: bool,

    /// Tokens matching any of these regexes are skipped.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        ignored_words: Vec<String>,
        ignore_uppercase: bool,
        cli_patterns: Vec<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".triecheck.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        config.ignored_words.extend(ignored_words);
        config.ignore_patterns.extend(cli_patterns);
        if ignore_uppercase {
            config.ignore_uppercase = true;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        self.ignored_words.extend(other.ignored_words);
        self.ignore_patterns.extend(other.ignore_patterns);
        if other.ignore_uppercase {
            self.ignore_uppercase = true;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "triecheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
