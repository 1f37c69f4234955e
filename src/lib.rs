//! Extract dominant colors from images and derive palettes from them
//!
//! Colors are ranked by how often they occur in an image and kept only when
//! they are far enough apart under a redness-weighted RGB distance. From there
//! shades and hue harmonies (complementary, triadic, tetradic, analogous and
//! analogous accent) can be derived for single colors or whole palettes.
//!
//! ```
//! use grapes::{Color, Palette};
//! use image::{Rgba, RgbaImage};
//!
//! let image = RgbaImage::from_fn(2, 2, |x, y| {
//!     if x + y == 2 { Rgba([0, 0, 255, 255]) } else { Rgba([255, 0, 0, 255]) }
//! });
//! let palette = Palette::from_image(&image, 2)?;
//! assert_eq!(palette.to_string(), "colors: #FF0000, #0000FF");
//!
//! let accents = palette.complementary();
//! assert_eq!(accents.len(), 4);
//! assert_eq!(Color::from_hex("#FF0000").complementary().to_hex(), "#00FFFF");
//! # Ok::<(), grapes::Error>(())
//! ```

#![deny(missing_docs)]

pub use color::{distance, Color, Hsl};
pub use error::{Error, ParseColorError, Result};
pub use extractor::*;
pub use palette::{sort_by_hsl, Palette};

mod color;
mod error;
mod extractor;
mod harmony;
mod palette;
pub mod settings;
