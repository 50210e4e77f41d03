use image::Rgba;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::SceneError;

/// Inclusive per-channel range for random colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRange {
    /// Lowest channel value.
    pub min: u8,
    /// Highest channel value.
    pub max: u8,
}

impl ChannelRange {
    /// Create a range; `min..=max`.
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Draw an opaque colour with each of R, G, B sampled independently.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba<u8> {
        let mut channel = || rng.gen_range(self.min..=self.max);
        Rgba([channel(), channel(), channel(), 255])
    }

    /// Whether every channel of `color` lies within the range.
    pub fn contains(&self, color: Rgba<u8>) -> bool {
        color.0[..3].iter().all(|c| (self.min..=self.max).contains(c))
    }
}

/// Colour ranges for the canvas background and panel fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas background channel range.
    pub background: ChannelRange,
    /// Panel fill channel range.
    pub panel: ChannelRange,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: ChannelRange::new(150, 255),
            panel: ChannelRange::new(100, 200),
        }
    }
}

impl Palette {
    /// Validate both ranges.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (name, range) in [("background", self.background), ("panel", self.panel)] {
            if range.min > range.max {
                return Err(SceneError::InvalidConfig(format!(
                    "{name} colour range is empty ({}..={})",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn samples_stay_in_range() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..200 {
            let bg = palette.background.sample(&mut rng);
            let panel = palette.panel.sample(&mut rng);
            assert!(palette.background.contains(bg));
            assert!(palette.panel.contains(panel));
            assert_eq!((bg[3], panel[3]), (255, 255));
        }
    }

    #[test]
    fn rejects_inverted_range() {
        let palette = Palette {
            panel: ChannelRange::new(200, 100),
            ..Palette::default()
        };
        assert!(matches!(palette.validate(), Err(SceneError::InvalidConfig(_))));
    }
}
