//! Mosaic configuration persistence
//!
//! Stores snapping and interaction preferences in `~/.config/mosaic/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::canvas::{
    CanvasSettings, DEFAULT_GRID_SIZE, DEFAULT_HANDLE_SIZE, DEFAULT_MIN_TILE_SIZE,
    DEFAULT_SNAP_DISTANCE,
};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicConfig {
    /// Grid spacing for move snapping (document units)
    #[serde(default = "default_grid_size")]
    pub grid_size: i32,
    /// Edge snap threshold (document units)
    #[serde(default = "default_snap_distance")]
    pub snap_distance: i32,
    #[serde(default = "default_true")]
    pub grid_snap: bool,
    #[serde(default = "default_true")]
    pub edge_snap: bool,
    /// Corner handle size (view pixels)
    #[serde(default = "default_handle_size")]
    pub handle_size: i32,
    /// Resize floor (document units)
    #[serde(default = "default_min_tile_size")]
    pub min_tile_size: i32,
    /// How close a split line may get to the tile edge while dragging (view pixels)
    #[serde(default = "default_split_line_margin")]
    pub split_line_margin: i32,
    /// Scale multiplier per wheel step
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Where new tiles land when no origin is given
    #[serde(default = "default_origin")]
    pub default_origin: Point,
}

fn default_grid_size() -> i32 {
    DEFAULT_GRID_SIZE
}

fn default_snap_distance() -> i32 {
    DEFAULT_SNAP_DISTANCE
}

fn default_true() -> bool {
    true
}

fn default_handle_size() -> i32 {
    DEFAULT_HANDLE_SIZE
}

fn default_min_tile_size() -> i32 {
    DEFAULT_MIN_TILE_SIZE
}

fn default_split_line_margin() -> i32 {
    10
}

fn default_zoom_step() -> f64 {
    1.1
}

fn default_origin() -> Point {
    Point::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            snap_distance: default_snap_distance(),
            grid_snap: true,
            edge_snap: true,
            handle_size: default_handle_size(),
            min_tile_size: default_min_tile_size(),
            split_line_margin: default_split_line_margin(),
            zoom_step: default_zoom_step(),
            default_origin: default_origin(),
        }
    }
}

impl MosaicConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<MosaicConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.grid_size <= 0 {
            tracing::warn!("Ignoring grid_size {}", self.grid_size);
            self.grid_size = defaults.grid_size;
        }
        if self.snap_distance < 0 {
            self.snap_distance = defaults.snap_distance;
        }
        if self.handle_size <= 0 {
            self.handle_size = defaults.handle_size;
        }
        if self.min_tile_size <= 0 {
            self.min_tile_size = defaults.min_tile_size;
        }
        if self.split_line_margin < 0 {
            self.split_line_margin = defaults.split_line_margin;
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            tracing::warn!("Ignoring zoom_step {}", self.zoom_step);
            self.zoom_step = defaults.zoom_step;
        }
        self
    }

    /// Canvas tunables derived from this config
    pub fn canvas_settings(&self) -> CanvasSettings {
        CanvasSettings {
            grid_size: self.grid_snap.then_some(self.grid_size),
            snap_distance: self.edge_snap.then_some(self.snap_distance),
            min_tile_size: self.min_tile_size,
            handle_size: self.handle_size,
            default_origin: self.default_origin,
        }
    }
}
