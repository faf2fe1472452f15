use config::{Config, ConfigError, Environment, File, FileFormat};
use grid_system::{CoordinateConverter, WorldPoint};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
/// Environment overrides look like `MATCH_BOARD_BOARD__WIDTH=10`.
const ENV_PREFIX: &str = "MATCH_BOARD";

/// Everything the demo reads from configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub window: WindowSettings,
}

/// Layout of the board grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub origin: WorldPoint,
    pub orientation: CoordinateConverter,
    /// Draw the outline and cell labels.
    pub debug: bool,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            cell_size: 1.0,
            origin: WorldPoint::new(4.0, 4.0, 0.0),
            orientation: CoordinateConverter::Vertical,
            debug: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Screen pixels per world unit.
    pub pixels_per_unit: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Match Board".to_string(),
            width: 800,
            height: 600,
            pixels_per_unit: 56.0,
        }
    }
}

/// Loads settings from the default file (if present) and the environment.
pub fn load_config() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);
    load_from(Config::builder().add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false)))
}

fn load_from(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
