#![warn(missing_docs)]
//! Panel placement: randomized, non-overlapping panel geometry on a canvas.

mod config;
mod panel;
mod placer;

pub use config::{CountRange, PlacementConfig};
pub use panel::{panel_extent, Orientation, Panel};
pub use placer::{place_panels, OverlapFn, PanelPlacer};

use thiserror::Error;

/// Errors emitted when a placement configuration cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Validation errors describing why a configuration is inconsistent.
    #[error("invalid placement config: {0}")]
    InvalidConfig(String),
}
