//! RGBA color value, HSL conversion and the weighted RGB distance metric.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::ParseColorError;

/// 8-bit RGBA color
///
/// The four bytes are the only stored state; hex, float and HSL forms are
/// computed when asked for.
#[derive(Debug, Default, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha, 255 is fully opaque
    pub a: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Hsl {
    /// Hue
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

impl Hsl {
    /// Convert back to a color with the given alpha in `[0, 1]`
    pub fn to_color(self, alpha: f64) -> Color {
        Color::from_hsl(self.h, self.s, self.l, alpha)
    }
}

impl Color {
    /// Create a color from its channel bytes
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`, the `#` being optional.
    ///
    /// This is the lenient parser: a string of any other length gives the
    /// zero color `{0, 0, 0, 0}`, and a channel whose two digits are not hex
    /// decodes as 0. Use [`str::parse`] to get a [`ParseColorError`] instead.
    pub fn from_hex(hex: &str) -> Color {
        let digits = strip_hash(hex);
        match digits.len() {
            6 => Color::new(
                hex_channel(digits, 0).unwrap_or(0),
                hex_channel(digits, 1).unwrap_or(0),
                hex_channel(digits, 2).unwrap_or(0),
                u8::MAX,
            ),
            8 => Color::new(
                hex_channel(digits, 0).unwrap_or(0),
                hex_channel(digits, 1).unwrap_or(0),
                hex_channel(digits, 2).unwrap_or(0),
                hex_channel(digits, 3).unwrap_or(0),
            ),
            _ => Color::default(),
        }
    }

    /// Create a color from channels in `[0, 1]`.
    ///
    /// Inputs are clamped, scaled to 255 and truncated.
    pub fn from_floats(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color::new(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
    }

    /// Create a color from hue (any value, taken modulo 360), saturation,
    /// lightness and alpha in `[0, 1]`.
    pub fn from_hsl(h: f64, s: f64, l: f64, a: f64) -> Color {
        let h = h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Color::from_floats(r + m, g + m, b + m, a)
    }

    /// Convert to HSL. Grays have hue and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let [r, g, b, _] = self.to_floats();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        // Red wins ties for the maximum, then green.
        let h = if max == r {
            let h = (g - b) / delta;
            if g < b {
                h + 6.0
            } else {
                h
            }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Channels scaled to `[0, 1]` in RGBA order
    pub fn to_floats(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f64::from(c) / 255.0)
    }

    /// Alpha scaled to `[0, 1]`
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Uppercase `#RRGGBB`; alpha is not included
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceptual distance to another color, see [`distance`]
    pub fn distance(&self, other: &Color) -> f64 {
        distance(self, other)
    }
}

/// Redness-weighted Euclidean distance over RGB.
///
/// `sqrt((2 + r̄/256)·ΔR² + 4·ΔG² + (2 + (255 - r̄)/256)·ΔB²)` where `r̄` is the
/// mean red of both colors. Alpha is ignored.
pub fn distance(c1: &Color, c2: &Color) -> f64 {
    let (r1, g1, b1) = (f64::from(c1.r), f64::from(c1.g), f64::from(c1.b));
    let (r2, g2, b2) = (f64::from(c2.r), f64::from(c2.g), f64::from(c2.b));
    let r_mean = (r1 + r2) / 2.0;
    let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);

    ((2.0 + r_mean / 256.0) * dr * dr
        + 4.0 * dg * dg
        + (2.0 + (255.0 - r_mean) / 256.0) * db * db)
        .sqrt()
}

pub(crate) fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn to_byte(v: f64) -> u8 {
    (clamp_unit(v) * 255.0) as u8
}

fn strip_hash(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

fn hex_channel(digits: &str, index: usize) -> Option<u8> {
    let pair = digits.get(2 * index..2 * index + 2)?;
    if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(pair, 16).ok()
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hash(s);
        let channels = match digits.len() {
            6 => 3,
            8 => 4,
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        let mut bytes = [u8::MAX; 4];
        for (i, byte) in bytes.iter_mut().take(channels).enumerate() {
            *byte = hex_channel(digits, i).ok_or_else(|| {
                let pair = digits.get(2 * i..2 * i + 2).unwrap_or(digits);
                ParseColorError::InvalidHex(pair.to_string())
            })?;
        }

        let [r, g, b, a] = bytes;
        Ok(Color::new(r, g, b, a))
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Color::new(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::new(255, 0, 0, 255);

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::from_hex("#FF8000"), Color::new(255, 128, 0, 255));
        assert_eq!(Color::from_hex("ff800080"), Color::new(255, 128, 0, 128));
        assert_eq!(Color::from_hex("#0a0B0c"), Color::new(10, 11, 12, 255));
    }

    #[test]
    fn lenient_hex_falls_back_to_zero_color() {
        assert_eq!(Color::from_hex("#FFF"), Color::default());
        assert_eq!(Color::from_hex(""), Color::default());
        assert_eq!(Color::from_hex("##FF0000"), Color::default());
        assert_eq!(Color::from_hex("#GG0000"), Color::new(0, 0, 0, 255));
        assert_eq!(Color::from_hex("+F0000"), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn strict_hex_reports_errors() {
        assert_eq!("#00FF00".parse::<Color>(), Ok(Color::new(0, 255, 0, 255)));
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ParseColorError::InvalidLength(5))
        );
        assert_eq!(
            "12zz56".parse::<Color>(),
            Err(ParseColorError::InvalidHex("zz".to_string()))
        );
    }

    #[test]
    fn hex_output_is_uppercase_without_alpha() {
        assert_eq!(Color::new(171, 205, 239, 16).to_hex(), "#ABCDEF");
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "#010203");
    }

    #[test]
    fn floats_are_clamped_and_truncated() {
        assert_eq!(
            Color::from_floats(-1.0, 2.0, 0.5, 1.0),
            Color::new(0, 255, 127, 255)
        );
        assert_eq!(Color::from_floats(0.999, 0.0, 0.0, 0.0).r, 254);
    }

    #[test]
    fn primaries_convert_to_hsl() {
        assert_eq!(RED.to_hsl(), Hsl { h: 0.0, s: 1.0, l: 0.5 });
        assert_eq!(Color::new(0, 255, 0, 255).to_hsl().h, 120.0);
        assert_eq!(Color::new(0, 0, 255, 255).to_hsl().h, 240.0);
        // red and blue tie for the maximum
        assert_eq!(Color::new(255, 0, 255, 255).to_hsl().h, 300.0);
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        let hsl = Color::new(128, 128, 128, 255).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn hue_wraps_modulo_360() {
        let blue = Color::from_hsl(240.0, 1.0, 0.5, 1.0);
        assert_eq!(Color::from_hsl(-120.0, 1.0, 0.5, 1.0), blue);
        assert_eq!(Color::from_hsl(600.0, 1.0, 0.5, 1.0), blue);
        assert_eq!(blue, Color::new(0, 0, 255, 255));
    }

    #[test]
    fn hsl_round_trip_is_within_one() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let c = Color::new(r, g, b, 200);
                    let back = c.to_hsl().to_color(c.alpha());
                    for (x, y) in [(c.r, back.r), (c.g, back.g), (c.b, back.b), (c.a, back.a)] {
                        assert!(
                            (i16::from(x) - i16::from(y)).abs() <= 1,
                            "{:?} came back as {:?}",
                            c,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn distance_is_zero_to_self_and_symmetric() {
        let a = Color::new(10, 200, 30, 255);
        let b = Color::new(250, 20, 90, 0);
        assert_eq!(a.distance(&a), 0.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn distance_weights_channels() {
        // rMean = 127.5 for a full red swing
        let black = Color::new(0, 0, 0, 255);
        let expected = ((2.0 + 127.5 / 256.0) * 255.0 * 255.0_f64).sqrt();
        assert!((distance(&black, &RED) - expected).abs() < 1e-9);
        assert_eq!(distance(&black, &Color::new(0, 10, 0, 255)), 20.0);
    }

    #[test]
    fn converts_to_and_from_image_pixels() {
        let pixel: Rgba<u8> = RED.into();
        assert_eq!(pixel, Rgba([255, 0, 0, 255]));
        assert_eq!(Color::from(Rgba([1, 2, 3, 4])), Color::new(1, 2, 3, 4));
    }
}
