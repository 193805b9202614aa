use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout directions the flowchart renderer accepts
const DIRECTIONS: [&str; 5] = ["TD", "TB", "LR", "RL", "BT"];

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub output: OutputConfig,
    pub diagram: DiagramConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

/// Diagram settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub enabled: bool,
    pub direction: String,
    pub max_label_words: usize,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Documentation".to_string(),
            description: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./wikimap-site"),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            direction: "TD".to_string(),
            max_label_words: 8,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        direction: Option<String>,
        no_diagram: bool,
    ) {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if let Some(dir) = direction {
            self.diagram.direction = dir;
        }

        if no_diagram {
            self.diagram.enabled = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !DIRECTIONS.contains(&self.diagram.direction.as_str()) {
            return Err(Error::config_validation(format!(
                "direction must be one of {} (got {:?})",
                DIRECTIONS.join(", "),
                self.diagram.direction
            )));
        }

        if self.diagram.max_label_words == 0 {
            return Err(Error::config_validation(
                "diagram max_label_words must be at least 1",
            ));
        }

        Ok(())
    }
}
