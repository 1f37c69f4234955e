use std::cmp::Ordering;
use std::fmt;
use std::slice;
use std::vec;

use itertools::Itertools;

use crate::extractor::{self, PixelSource};
use crate::harmony::{by_hue, by_lightness};
use crate::{Color, Hsl, Result};

/// Ordered collection of colors.
///
/// Order is meaningful and duplicates are allowed. Every derivation returns a
/// new palette; [`Palette::sort_by_hsl`] is the only method that changes a
/// palette in place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Colors in palette order
    pub colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, keeping their order
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Palette {
        colors.into_iter().collect()
    }

    /// Create a palette of at most `num_colors` dominant colors of an image,
    /// most frequent first.
    ///
    /// Fails when `num_colors` is not positive.
    pub fn from_image<S>(source: &S, num_colors: i32) -> Result<Palette>
    where
        S: PixelSource + ?Sized,
    {
        extractor::extract(source, num_colors).map(Palette::from)
    }

    /// Take the colors out of the palette
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the colors in order
    pub fn iter(&self) -> slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Sort in place by hue, then saturation, then lightness.
    ///
    /// A disabled key is skipped. Colors equal on every enabled key keep their
    /// relative order.
    pub fn sort_by_hsl(&mut self, by_hue: bool, by_saturation: bool, by_lightness: bool) {
        sort_by_hsl(&mut self.colors, by_hue, by_saturation, by_lightness);
    }

    /// Shades of every color, all together ordered by lightness
    pub fn shades(&self, n: usize, strength: f64) -> Palette {
        let mut colors: Vec<Color> = self
            .iter()
            .flat_map(|color| color.shades(n, strength))
            .collect();
        colors.sort_by(by_lightness);
        Palette { colors }
    }

    /// The colors followed by their analogous neighbours, ordered by lightness
    pub fn analogous(&self) -> Palette {
        let mut colors = self.extended(|color| color.analogous());
        colors.sort_by(by_lightness);
        Palette { colors }
    }

    /// The colors followed by their complements, ordered by hue
    pub fn complementary(&self) -> Palette {
        let mut colors = self.extended(|color| [color.complementary()]);
        colors.sort_by(by_hue);
        Palette { colors }
    }

    /// The colors followed by their triadic companions
    pub fn triadic(&self) -> Palette {
        Palette::from(self.extended(|color| color.triadic()))
    }

    /// The colors followed by their tetradic companions
    pub fn tetradic(&self) -> Palette {
        Palette::from(self.extended(|color| color.tetradic()))
    }

    /// The colors followed by their complementary accents and the accents'
    /// neighbours
    pub fn analogous_accent(&self) -> Palette {
        Palette::from(self.extended(|color| color.analogous_accent()))
    }

    /// `r, g, b` of every color in `[0, 1]`, flattened
    pub fn to_flat_rgb(&self) -> Vec<f64> {
        self.iter()
            .flat_map(|color| {
                let [r, g, b, _] = color.to_floats();
                [r, g, b]
            })
            .collect()
    }

    /// `r, g, b, a` of every color in `[0, 1]`, flattened
    pub fn to_flat_rgba(&self) -> Vec<f64> {
        self.iter().flat_map(Color::to_floats).collect()
    }

    fn extended<D>(&self, derive: impl Fn(&Color) -> D) -> Vec<Color>
    where
        D: IntoIterator<Item = Color>,
    {
        self.iter()
            .cloned()
            .chain(self.iter().flat_map(derive))
            .collect()
    }
}

/// Sort colors in place by hue, then saturation, then lightness, skipping
/// disabled keys. The sort is stable.
pub fn sort_by_hsl(colors: &mut [Color], by_hue: bool, by_saturation: bool, by_lightness: bool) {
    colors.sort_by(|a, b| {
        let (Hsl { h: h1, s: s1, l: l1 }, Hsl { h: h2, s: s2, l: l2 }) = (a.to_hsl(), b.to_hsl());

        if by_hue && h1 != h2 {
            return h1.total_cmp(&h2);
        }
        if by_saturation && s1 != s2 {
            return s1.total_cmp(&s2);
        }
        if by_lightness && l1 != l2 {
            return l1.total_cmp(&l2);
        }
        Ordering::Equal
    });
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Palette { colors }
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Palette {
            colors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "colors: {}", self.colors.iter().join(", "))
    }
}
