//! Error and outcome types for canvas commands
//!
//! Every command is all-or-nothing: when an `Err` is returned, or an edit
//! reports [`EditOutcome::Unchanged`], the document model is exactly as it was
//! before the call.

use crate::model::TileId;

/// Errors surfaced to the host as rejected commands
#[derive(Debug, Clone, PartialEq)]
pub enum MosaicError {
    /// Scale was zero, negative, NaN or infinite; the prior scale is kept
    InvalidScale(f64),
    /// Grid split rows/cols were not positive integers; the host should re-prompt
    InvalidPartitionCount { rows: String, cols: String },
    /// The raster provider could not decode an image
    Decode(String),
    /// The flattened raster could not be written
    Encode(String),
    /// A scale-aware division was attempted with a zero factor
    DivisionByZero,
    /// The referenced tile is not on the canvas
    UnknownTile(TileId),
    /// Flatten was requested with no tiles on the canvas
    EmptyCanvas,
    /// A new gesture was started while another one is still active
    GestureInProgress,
}

impl MosaicError {
    /// Get a user-friendly message suitable for a dialog or status line
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidScale(_) => "Zoom level must be a positive number".to_string(),
            Self::InvalidPartitionCount { .. } => {
                "Rows and columns must be whole numbers greater than zero".to_string()
            }
            Self::Decode(msg) => format!("Error opening image: {}", msg),
            Self::Encode(msg) => format!("Error saving image: {}", msg),
            Self::DivisionByZero => "Internal error: division by zero".to_string(),
            Self::UnknownTile(_) => "That image is no longer on the canvas".to_string(),
            Self::EmptyCanvas => "Nothing to save".to_string(),
            Self::GestureInProgress => "Finish the current action first".to_string(),
        }
    }
}

impl std::fmt::Display for MosaicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScale(scale) => write!(f, "invalid scale {}", scale),
            Self::InvalidPartitionCount { rows, cols } => {
                write!(f, "invalid partition count {}x{}", rows, cols)
            }
            Self::Decode(msg) => write!(f, "decode error: {}", msg),
            Self::Encode(msg) => write!(f, "encode error: {}", msg),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownTile(id) => write!(f, "unknown tile {}", id.0),
            Self::EmptyCanvas => write!(f, "canvas is empty"),
            Self::GestureInProgress => write!(f, "a gesture is already in progress"),
        }
    }
}

impl std::error::Error for MosaicError {}

/// Why a crop or split had nothing to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateGeometry {
    /// The requested rectangle has zero or negative extent
    EmptyRect,
    /// The split coordinate lies at or beyond a raster edge
    SplitAtEdge,
    /// More partitions were requested than the tile has pixels or document units
    TooManyPartitions,
}

impl std::fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRect => write!(f, "empty rectangle"),
            Self::SplitAtEdge => write!(f, "split at tile edge"),
            Self::TooManyPartitions => write!(f, "too many partitions for tile size"),
        }
    }
}

/// Result of an edit that may legitimately have nothing to do
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome<T = ()> {
    Applied(T),
    Unchanged(DegenerateGeometry),
}

impl<T> EditOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }

    /// The applied value, if any
    pub fn applied(self) -> Option<T> {
        match self {
            EditOutcome::Applied(v) => Some(v),
            EditOutcome::Unchanged(_) => None,
        }
    }
}
