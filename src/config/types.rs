use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::pagerank::{self, RankConfig, RankInit};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSettings {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub init: RankInit,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            init: RankInit::default(),
        }
    }
}

impl RankSettings {
    /// Converts to the engine's config format.
    #[must_use]
    pub fn to_rank_config(&self) -> RankConfig {
        RankConfig {
            damping: self.damping,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            init: self.init,
        }
    }
}

const fn default_damping() -> f64 { pagerank::DAMPING }
const fn default_max_iterations() -> usize { pagerank::MAX_ITERATIONS }
const fn default_tolerance() -> f64 { pagerank::TOLERANCE }

/// Where exported graphs go and how Graphviz is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_dot_path")]
    pub dot_path: PathBuf,
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,
    #[serde(default = "default_image_format")]
    pub image_format: String,
    #[serde(default = "default_dot_command")]
    pub dot_command: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dot_path: default_dot_path(),
            image_path: default_image_path(),
            image_format: default_image_format(),
            dot_command: default_dot_command(),
        }
    }
}

fn default_dot_path() -> PathBuf { PathBuf::from("graph.dot") }
fn default_image_path() -> PathBuf { PathBuf::from("graph.png") }
fn default_image_format() -> String { "png".to_string() }
fn default_dot_command() -> String { "dot".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default = "default_walk_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub save: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            output_path: default_walk_path(),
            save: false,
        }
    }
}

fn default_walk_path() -> PathBuf { PathBuf::from("random_walk.txt") }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub expand_contractions: bool,
    /// Fixed RNG seed. Unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Contents of `wordgraph.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankSettings,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub text: TextConfig,
}
