#![warn(missing_docs)]
//! Scene composition: panels, icons, and their detector labels on one canvas.

mod canvas;
mod composer;
mod output;
mod palette;
mod scene;

pub use canvas::Canvas;
pub use composer::SceneComposer;
pub use output::DatasetLayout;
pub use palette::{ChannelRange, Palette};
pub use scene::{generate_scene, Scene, SceneConfig};

use panelsynth_layout::LayoutError;
use thiserror::Error;

/// Errors that can stop a scene from being generated or written.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Scene configuration is unusable.
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
    /// Placement configuration is unusable.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Image encoding failed.
    #[error("failed to encode scene image: {0}")]
    Image(#[from] image::ImageError),
    /// Filesystem failure while writing outputs.
    #[error("failed to write scene outputs: {0}")]
    Io(#[from] std::io::Error),
}
