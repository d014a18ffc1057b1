use std::path::{Path, PathBuf};

use clap::ValueEnum;
use mineboard_core::{CellCount, Coord, GameConfig, GameError};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Preset {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSection {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
}

/// Contents of the optional TOML settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub seed: Option<u64>,
    pub game: GameSection,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }
}

/// Values given on the command line, each overriding the settings file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<Preset>,
    pub game: GameSection,
    pub seed: Option<u64>,
}

fn pick<T>(cli: Option<T>, file: Option<T>, preset: T) -> T {
    cli.or(file).unwrap_or(preset)
}

/// Final, validated session settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub config: GameConfig,
    pub seed: Option<u64>,
}

impl Settings {
    /// Layers command line over file over preset, then validates the result.
    pub fn resolve(file: &FileSettings, overrides: &Overrides) -> Result<Self, ConfigError> {
        let base = overrides.preset.unwrap_or_default().config();
        let config = GameConfig::new(
            pick(overrides.game.rows, file.game.rows, base.rows),
            pick(overrides.game.cols, file.game.cols, base.cols),
            pick(overrides.game.mines, file.game.mines, base.mines),
        )?;

        Ok(Self {
            config,
            seed: overrides.seed.or(file.seed),
        })
    }
}
