use argcursor_engine::{Representation, StopWordList};
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

    #[error("Failed to read stopwords file at {stopwords_path}: {source}")]
    StopwordsReadError {
        stopwords_path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How command-line tokens are handed to the cursor.
    pub representation: Representation,
    /// Inline stopword list; takes precedence over `stopwords_file`.
    pub stopwords: Option<Vec<String>>,
    /// File with one stopword per line.
    pub stopwords_file: Option<PathBuf>,
}

impl Config {
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

        // Expand shell variables and tilde in the stopwords path
        config.stopwords_file = config
            .stopwords_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        log::debug!("Loaded config from {}", config_path.display());
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
        let config_dir = shellexpand::tilde("~/.config/argcursor");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves the configured stopwords, falling back to the default list.
    pub fn stopword_list(&self) -> Result<StopWordList, ConfigError> {
        if let Some(words) = &self.stopwords {
            return Ok(StopWordList::new(words));
        }
        let Some(path) = &self.stopwords_file else {
            return Ok(StopWordList::default());
        };

        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::StopwordsReadError {
                stopwords_path: path.clone(),
                source,
            })?;
        Ok(StopWordList::new(
            content.lines().map(str::trim).filter(|line| !line.is_empty()),
        ))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
