use std::cmp::Reverse;
use std::collections::HashMap;

use priority_queue::PriorityQueue;

use super::PixelSource;
use crate::Color;

#[derive(Debug, Clone, Copy)]
struct Bucket {
    count: usize,
    first_seen: usize,
}

/// Exact RGBA occurrence counts of the visible pixels of an image
#[derive(Debug, Default)]
pub(crate) struct Histogram {
    buckets: HashMap<Color, Bucket>,
}

impl Histogram {
    /// Scans row by row. Fully transparent pixels are not counted.
    pub(crate) fn from_source<S: PixelSource + ?Sized>(source: &S) -> Self {
        let (width, height) = source.size();
        let mut histogram = Self::default();
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, a] = source.rgba(x, y);
                if a == 0 {
                    continue;
                }
                histogram.insert(Color::new(r, g, b, a));
            }
        }
        histogram
    }

    fn insert(&mut self, color: Color) {
        let first_seen = self.buckets.len();
        self.buckets
            .entry(color)
            .or_insert(Bucket {
                count: 0,
                first_seen,
            })
            .count += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    #[cfg(test)]
    pub(crate) fn count_of(&self, color: &Color) -> usize {
        self.buckets.get(color).map(|b| b.count).unwrap_or(0)
    }

    /// Colors by descending count; equal counts keep scan order.
    pub(crate) fn ranked(self) -> impl Iterator<Item = (Color, usize)> {
        self.buckets
            .into_iter()
            .map(|(color, bucket)| (color, (bucket.count, Reverse(bucket.first_seen))))
            .collect::<PriorityQueue<_, _>>()
            .into_sorted_iter()
            .map(|(color, (count, _))| (color, count))
    }
}
