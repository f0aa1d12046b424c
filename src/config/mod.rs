// src/config/mod.rs
pub mod types;

pub use self::types::{Config, ExportConfig, RankSettings, TextConfig, WalkConfig};

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::tokens::Tokenizer;

pub const CONFIG_FILE: &str = "wordgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wordgraph.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Loads and validates a specific config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::io(e, path))?;
        let config = Self::parse_toml(&content, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses TOML content. `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns `GraphError::Config` on malformed TOML.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| GraphError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Rejects values the rank engine cannot work with.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let rank = &self.rank;
        if !(0.0..=1.0).contains(&rank.damping) {
            return Err(GraphError::InvalidConfig(format!(
                "rank.damping must be within [0, 1], got {}",
                rank.damping
            )));
        }
        if rank.max_iterations == 0 {
            return Err(GraphError::InvalidConfig(
                "rank.max_iterations must be at least 1".to_string(),
            ));
        }
        if rank.tolerance.is_nan() || rank.tolerance <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "rank.tolerance must be positive, got {}",
                rank.tolerance
            )));
        }
        if self.export.image_format.trim().is_empty() {
            return Err(GraphError::InvalidConfig(
                "export.image_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Tokenizer matching the `[text]` settings.
    #[must_use]
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new().with_contractions(self.text.expand_contractions)
    }
}
