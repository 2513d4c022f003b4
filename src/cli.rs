//! Command-line argument parsing for the headless mosaic tool
//!
//! Supports:
//! - Laying out images left to right
//! - Applying a YAML edit script
//! - Zoom-to-fit against a viewport and exporting the flattened PNG

use clap::Parser;
use std::path::PathBuf;

use crate::raster::is_image_file;

/// Compose images into one flattened PNG
#[derive(Parser, Debug)]
#[command(name = "mosaic", version, about = "Compose images into one flattened PNG")]
pub struct CliArgs {
    /// Images to place on the canvas, left to right
    #[arg(value_name = "IMAGES", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output file (".png" is appended when missing)
    #[arg(short, long, default_value = "mosaic.png")]
    pub out: PathBuf,

    /// YAML edit script applied after the images are placed
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable grid and edge snapping
    #[arg(long)]
    pub no_snap: bool,

    /// Viewport width in view pixels (used by zoom_to_fit)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Viewport height in view pixels (used by zoom_to_fit)
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

impl CliArgs {
    /// Validate argument combinations clap can't express
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Viewport must be non-empty, got {}x{}",
                self.width, self.height
            ));
        }
        if let Some(dup) = self
            .paths
            .iter()
            .enumerate()
            .find_map(|(i, p)| self.paths[..i].contains(p).then_some(p))
        {
            tracing::warn!("{} is listed more than once", dup.display());
        }
        for path in self.paths.iter().filter(|p| !is_image_file(p)) {
            tracing::warn!("{} does not look like an image", path.display());
        }
        Ok(())
    }
}
