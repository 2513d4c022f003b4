//! Headless mosaic host
//!
//! Places images left to right, applies an optional edit script and writes
//! the flattened canvas as a PNG.
//!
//! Usage:
//!   mosaic a.png b.png -o out.png
//!   mosaic a.png b.png --script edits.yaml --no-snap

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use mosaic::cli::CliArgs;
use mosaic::commands::Cmd;
use mosaic::messages::{AppMsg, Msg};
use mosaic::model::AppModel;
use mosaic::script::EditScript;
use mosaic::update::update;
use mosaic::MosaicConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    mosaic::tracing::init();
    args.validate().map_err(|e| anyhow!(e))?;

    let mut config = match &args.config {
        Some(path) => MosaicConfig::load_from(path),
        None => MosaicConfig::load(),
    };
    if args.no_snap {
        config.grid_snap = false;
        config.edge_snap = false;
    }

    let mut model = AppModel::new(config, args.width, args.height);
    let tiles = model
        .import_row(&args.paths)
        .map_err(|e| anyhow!(e.user_message()))
        .context("Failed to load images")?;
    eprintln!("Placed {} image(s)", tiles.len());

    if let Some(script_path) = &args.script {
        let script = EditScript::from_file(script_path).map_err(|e| anyhow!(e))?;
        script
            .run(&mut model)
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Edit script {} failed", script_path.display()))?;
    }

    let export = Msg::App(AppMsg::Export {
        path: args.out.clone(),
    });
    let mut saved = None;
    if let Some(cmd) = update(&mut model, export) {
        for cmd in cmd.into_vec() {
            if let Some(path) = process_cmd(cmd)? {
                saved = Some(path);
            }
        }
    }

    match saved {
        Some(path) => {
            eprintln!(
                "Saved {} tile(s) to {}",
                model.canvas.len(),
                path.display()
            );
            Ok(())
        }
        None => bail!("Nothing was written"),
    }
}

/// Perform one side effect; returns the written path for `SaveImage`
fn process_cmd(cmd: Cmd) -> Result<Option<PathBuf>> {
    match cmd {
        Cmd::SaveImage { path, raster } => {
            let written = raster
                .save_png(&path)
                .map_err(|e| anyhow!(e.user_message()))?;
            Ok(Some(written))
        }
        Cmd::Rejected(e) => bail!(e.user_message()),
        // Nothing to show without a window
        Cmd::None
        | Cmd::Redraw
        | Cmd::Batch(_)
        | Cmd::ShowContextMenu { .. }
        | Cmd::ConfirmCrop { .. }
        | Cmd::ConfirmSplitLine { .. }
        | Cmd::RequestGridSize { .. } => Ok(None),
    }
}
