use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Inclusive integer range sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Smallest value (inclusive).
    pub min: u32,
    /// Largest value (inclusive).
    pub max: u32,
}

impl CountRange {
    /// Create a range; `min..=max`.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Degenerate range that always yields `value`.
    pub const fn exactly(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Draw a value uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.as_range())
    }

    /// The range as a std inclusive range.
    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    fn validate(&self, name: &str) -> Result<(), LayoutError> {
        if self.min > self.max {
            return Err(LayoutError::InvalidConfig(format!(
                "{name} range is empty ({}..={})",
                self.min, self.max
            )));
        }
        if self.min == 0 {
            return Err(LayoutError::InvalidConfig(format!("{name} must be > 0")));
        }
        Ok(())
    }
}

/// Knobs for panel placement. Defaults reproduce the reference generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Requested number of panels per image.
    pub panel_count: CountRange,
    /// Candidate budget shared by the whole placement session.
    pub attempt_budget: u32,
    /// Icons per panel.
    pub icon_count: CountRange,
    /// Square icon edge in pixels.
    pub icon_size: CountRange,
    /// Gap between neighbouring icons.
    pub spacing: u32,
    /// Inner margin between the panel edge and its icons, on every side.
    pub margin: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            panel_count: CountRange::new(3, 10),
            attempt_budget: 50,
            icon_count: CountRange::new(2, 6),
            icon_size: CountRange::new(40, 60),
            spacing: 10,
            margin: 10,
        }
    }
}

impl PlacementConfig {
    /// Validate the configuration and return `Ok(())` if every range is usable.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.panel_count.validate("panel_count")?;
        self.icon_count.validate("icon_count")?;
        self.icon_size.validate("icon_size")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn defaults_are_reference_values() {
        let cfg = PlacementConfig::default();
        assert_eq!(cfg.panel_count, CountRange::new(3, 10));
        assert_eq!(cfg.attempt_budget, 50);
        assert_eq!(cfg.icon_count, CountRange::new(2, 6));
        assert_eq!(cfg.icon_size, CountRange::new(40, 60));
        assert_eq!((cfg.spacing, cfg.margin), (10, 10));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_zero_ranges() {
        let cfg = PlacementConfig {
            icon_count: CountRange::new(4, 2),
            ..PlacementConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(LayoutError::InvalidConfig(_))));

        let cfg = PlacementConfig {
            icon_size: CountRange::exactly(0),
            ..PlacementConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(LayoutError::InvalidConfig("icon_size must be > 0".into()))
        );
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let range = CountRange::new(40, 60);
        for _ in 0..500 {
            assert!(range.as_range().contains(&range.sample(&mut rng)));
        }
        assert_eq!(CountRange::exactly(7).sample(&mut rng), 7);
    }
}
