//! Core domain: RON game configuration loaded at startup.

use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::movement::ControllerConfig;

/// Location of the game configuration, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/tabby.ron";

/// Top-level layout of `tabby.ron`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub sounds: SoundConfig,
}

/// Asset paths for the controller's sound cues. A missing path keeps that cue silent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub jump: Option<String>,
    pub splash: Option<String>,
}

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a configuration from RON source. `origin` names the source in errors.
pub fn parse_game_config(contents: &str, origin: &str) -> Result<GameConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: origin.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Read and parse the configuration file at `path`.
pub fn load_game_config(path: &Path) -> Result<GameConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_game_config(&contents, &file_name)
}
