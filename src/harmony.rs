//! Colors derived from a single base color by rotating its hue or shifting its
//! lightness. Every derived color keeps the alpha of its base.

use std::cmp::Ordering;

use crate::color::{clamp_unit, Color, Hsl};
use crate::settings;

impl Color {
    /// `n` shades of this color spread over a lightness range of `strength`.
    ///
    /// The base lightness is always part of the result. The other shades
    /// alternate lighter and darker at growing offsets of
    /// `strength * i / (n - 1)`, clamped to `[0, 1]`. The result is ordered
    /// by ascending lightness.
    pub fn shades(&self, n: usize, strength: f64) -> Vec<Color> {
        if n == 0 {
            return Vec::new();
        }

        let Hsl { h, s, l } = self.to_hsl();
        let alpha = self.alpha();
        let mut shades = Vec::with_capacity(n);
        shades.push(Color::from_hsl(h, s, clamp_unit(l), alpha));

        let steps = n - 1;
        for i in 1..=steps {
            let offset = strength * i as f64 / steps as f64;
            let shifted = if i % 2 == 1 { l + offset } else { l - offset };
            shades.push(Color::from_hsl(h, s, clamp_unit(shifted), alpha));
        }

        shades.sort_by(by_lightness);
        shades
    }

    /// The color opposite on the hue wheel
    pub fn complementary(&self) -> Color {
        self.rotate(settings::COMPLEMENTARY_OFFSET)
    }

    /// The two colors a third of the hue wheel away
    pub fn triadic(&self) -> [Color; 2] {
        settings::TRIADIC_OFFSETS.map(|offset| self.rotate(offset))
    }

    /// The three colors a quarter, half and three quarters of the hue wheel away
    pub fn tetradic(&self) -> [Color; 3] {
        settings::TETRADIC_OFFSETS.map(|offset| self.rotate(offset))
    }

    /// Neighbours at `+30` and `-30` degrees, in that order
    pub fn analogous(&self) -> [Color; 2] {
        [
            self.rotate(settings::ANALOGOUS_OFFSET),
            self.rotate(-settings::ANALOGOUS_OFFSET),
        ]
    }

    /// The complementary accent flanked by its analogous neighbours:
    /// `[accent - 30, accent, accent + 30]`
    pub fn analogous_accent(&self) -> [Color; 3] {
        let accent = settings::COMPLEMENTARY_OFFSET;
        [
            self.rotate(accent - settings::ANALOGOUS_OFFSET),
            self.rotate(accent),
            self.rotate(accent + settings::ANALOGOUS_OFFSET),
        ]
    }

    /// Rotate the hue by `degrees`, keeping saturation, lightness and alpha
    pub fn rotate(&self, degrees: f64) -> Color {
        let Hsl { h, s, l } = self.to_hsl();
        Color::from_hsl((h + degrees).rem_euclid(360.0), s, l, self.alpha())
    }
}

pub(crate) fn by_lightness(a: &Color, b: &Color) -> Ordering {
    a.to_hsl().l.total_cmp(&b.to_hsl().l)
}

pub(crate) fn by_hue(a: &Color, b: &Color) -> Ordering {
    a.to_hsl().h.total_cmp(&b.to_hsl().h)
}
