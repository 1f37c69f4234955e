//! Tuning constants shared by the extractor and the harmony functions.

/// Minimum weighted RGB distance for two extracted colors to both be kept.
pub const MIN_DISTINCT_DISTANCE: f64 = 100.0;

/// Hue offset of an analogous neighbour, in degrees.
pub const ANALOGOUS_OFFSET: f64 = 30.0;
/// Hue offset of the complementary color.
pub const COMPLEMENTARY_OFFSET: f64 = 180.0;
/// Hue offsets of the triadic companions.
pub const TRIADIC_OFFSETS: [f64; 2] = [120.0, 240.0];
/// Hue offsets of the tetradic companions.
pub const TETRADIC_OFFSETS: [f64; 3] = [90.0, 180.0, 270.0];
