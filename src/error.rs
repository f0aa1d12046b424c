// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Graphviz render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        GraphError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
