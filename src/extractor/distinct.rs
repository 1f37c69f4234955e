use tracing::{debug, trace};

use super::histogram::Histogram;
use super::{Extractor, PixelSource};
use crate::color::distance;
use crate::{settings, Color, Error, Result};

/// Frequency based extractor
///
/// Ranks the exact colors of an image by how often they occur and walks down
/// that ranking, keeping a color only when it is at least `min_distance` away
/// from every color kept before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distinct {
    min_distance: f64,
}

impl Default for Distinct {
    fn default() -> Self {
        Self::with_min_distance(settings::MIN_DISTINCT_DISTANCE)
    }
}

impl Distinct {
    /// Extractor with a custom distinctness threshold
    pub fn with_min_distance(min_distance: f64) -> Self {
        Self { min_distance }
    }

    /// Minimum distance between two kept colors
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    fn is_distinct(&self, candidate: &Color, kept: &[Color]) -> bool {
        kept.iter()
            .all(|color| distance(candidate, color) >= self.min_distance)
    }

    fn select(&self, ranked: impl Iterator<Item = Color>, limit: usize) -> Vec<Color> {
        let mut kept = Vec::new();
        for candidate in ranked {
            if kept.len() >= limit {
                break;
            }
            if self.is_distinct(&candidate, &kept) {
                kept.push(candidate);
            } else {
                trace!(color = %candidate, "too close to a kept color");
            }
        }
        kept
    }
}

impl Extractor for Distinct {
    fn extract<S>(&self, source: &S, num_colors: i32) -> Result<Vec<Color>>
    where
        S: PixelSource + ?Sized,
    {
        if num_colors <= 0 {
            return Err(Error::InvalidColorCount(num_colors));
        }

        let histogram = Histogram::from_source(source);
        debug!(unique = histogram.len(), "built color histogram");

        let colors = self.select(
            histogram.ranked().map(|(color, _)| color),
            num_colors as usize,
        );
        debug!(
            requested = num_colors,
            selected = colors.len(),
            min_distance = self.min_distance,
            "selected distinct colors"
        );
        Ok(colors)
    }
}
