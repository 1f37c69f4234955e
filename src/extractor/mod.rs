use image::{GenericImageView, Pixel};

use crate::{Color, Result};

mod distinct;
mod histogram;

pub use distinct::Distinct;

/// Anything that can hand out 8-bit RGBA pixels on a `width × height` grid
pub trait PixelSource {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Channels of the pixel at `(x, y)` in RGBA order
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

/// Subpixel type that can be brought down to 8 bits
pub trait Channel: Copy {
    /// Scale to `0..=255`
    fn to_u8(self) -> u8;
}

impl Channel for u8 {
    fn to_u8(self) -> u8 {
        self
    }
}

impl Channel for u16 {
    fn to_u8(self) -> u8 {
        (self >> 8) as u8
    }
}

impl Channel for f32 {
    fn to_u8(self) -> u8 {
        (self.clamp(0.0, 1.0) * 255.0) as u8
    }
}

impl<I> PixelSource for I
where
    I: GenericImageView,
    <I::Pixel as Pixel>::Subpixel: Channel,
{
    fn size(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).to_rgba().0.map(Channel::to_u8)
    }
}

/// Extractor trait
pub trait Extractor {
    /// Picks at most `num_colors` representative colors from the source, most
    /// frequent first. Fails when `num_colors` is not positive.
    fn extract<S>(&self, source: &S, num_colors: i32) -> Result<Vec<Color>>
    where
        S: PixelSource + ?Sized;
}

/// Extract with the default [`Distinct`] extractor
pub fn extract<S>(source: &S, num_colors: i32) -> Result<Vec<Color>>
where
    S: PixelSource + ?Sized,
{
    Distinct::default().extract(source, num_colors)
}
