//! End-to-end checks from in-memory images to derived palettes.

use grapes::{extract, Color, Distinct, Error, Extractor, Palette, PixelSource};
use image::{DynamicImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

const RED: Color = Color::new(255, 0, 0, 255);
const BLUE: Color = Color::new(0, 0, 255, 255);

fn red_red_red_blue() -> RgbaImage {
    RgbaImage::from_fn(2, 2, |x, y| {
        if (x, y) == (1, 1) {
            BLUE.into()
        } else {
            RED.into()
        }
    })
}

/// Pixel source that is not an image, to check the trait on its own.
struct Stripes {
    width: u32,
}

impl PixelSource for Stripes {
    fn size(&self) -> (u32, u32) {
        (self.width, 3)
    }

    fn rgba(&self, x: u32, _y: u32) -> [u8; 4] {
        if x % 3 == 0 {
            [0, 255, 0, 255]
        } else {
            [0, 0, 0, 255]
        }
    }
}

#[test]
fn most_frequent_color_comes_first() {
    assert_eq!(extract(&red_red_red_blue(), 2), Ok(vec![RED, BLUE]));
}

#[test]
fn fewer_colors_than_requested() {
    assert_eq!(extract(&red_red_red_blue(), 10), Ok(vec![RED, BLUE]));
}

#[test]
fn transparent_image_is_empty() {
    let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));
    for n in [1, 5, 100] {
        assert_eq!(extract(&image, n), Ok(Vec::new()));
    }
}

#[test]
fn non_positive_count_is_an_error() {
    let image = red_red_red_blue();
    assert_eq!(extract(&image, 0), Err(Error::InvalidColorCount(0)));
    assert_eq!(
        Palette::from_image(&image, -1),
        Err(Error::InvalidColorCount(-1))
    );
}

#[test]
fn dynamic_images_are_pixel_sources() {
    let image = DynamicImage::ImageRgba8(red_red_red_blue());
    let palette = Palette::from_image(&image, 1).unwrap();
    assert_eq!(palette.into_colors(), vec![RED]);
}

#[test]
fn custom_pixel_source() {
    let colors = Distinct::default().extract(&Stripes { width: 6 }, 4).unwrap();
    assert_eq!(
        colors,
        vec![Color::new(0, 0, 0, 255), Color::new(0, 255, 0, 255)]
    );
}

#[test]
fn extracted_palette_derives_harmonies() {
    let palette = Palette::from_image(&red_red_red_blue(), 2).unwrap();

    let mut sorted = palette.clone();
    sorted.sort_by_hsl(true, false, false);
    assert_eq!(sorted.colors, vec![RED, BLUE]);

    assert_eq!(palette.triadic().len(), 6);
    assert_eq!(palette.tetradic().len(), 8);
    assert_eq!(palette.analogous_accent().len(), 8);
    assert_eq!(palette.analogous().len(), 6);
    assert_eq!(palette.shades(5, 0.15).len(), 10);
    assert_eq!(palette.to_flat_rgba().len(), 8);
}

#[test]
fn hex_round_trip() {
    for color in [RED, BLUE, Color::new(18, 52, 86, 7)] {
        let back = Color::from_hex(&format!("{}FF", color.to_hex()));
        assert_eq!((back.r, back.g, back.b, back.a), (color.r, color.g, color.b, 255));
    }
}
