//! Mosaic - Elm-style image mosaic engine
//!
//! This crate provides the document model and gesture controller for
//! arranging raster tiles on one canvas and flattening them into a single
//! image, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod raster;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::MosaicConfig;
pub use error::{EditOutcome, MosaicError};
pub use messages::Msg;
pub use model::AppModel;
