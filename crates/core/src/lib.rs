#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod annotation;
pub mod geometry;

use rand::{rngs::StdRng, SeedableRng};

// Re-export commonly used types
pub use annotation::{format_labels, parse_labels, Annotation, AnnotationParseError, ObjectClass};
pub use geometry::{CanvasSize, PixelBox};

const IMAGE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Helper to derive a reproducible RNG for one image of a batch.
///
/// Each image gets its own stream so batches are reproducible no matter how
/// indices are distributed across workers.
pub fn image_rng(batch_seed: u64, image_index: u64) -> StdRng {
    let seed = batch_seed ^ image_index.wrapping_add(1).wrapping_mul(IMAGE_SEED_SALT);
    StdRng::seed_from_u64(seed)
}
