pub use image::Rgba;

/// Pixel buffer every facade operation works on: straight-alpha RGBA8.
pub type Canvas = image::RgbaImage;

/// Default fill and text color.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully transparent pixel, used for regions a transform leaves uncovered.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Integer placement offset for compositing and text operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal offset in pixels, positive to the right.
    pub x: i64,
    /// Vertical offset in pixels, positive downwards.
    pub y: i64,
}

impl Point {
    /// Build a point from pixel offsets.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
