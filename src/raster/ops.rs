use image::{Rgba, imageops};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};

use crate::foundation::{
    core::{Canvas, Point, TRANSPARENT, WHITE},
    error::{PixelforgeError, PixelforgeResult},
};

/// Resampling filter applied by every resize.
const RESIZE_FILTER: imageops::FilterType = imageops::FilterType::CatmullRom;

/// Allocate a fresh canvas filled with `background`, or white when absent.
pub fn create_empty_image(
    width: u32,
    height: u32,
    background: Option<Rgba<u8>>,
) -> PixelforgeResult<Canvas> {
    ensure_positive(width, height)?;
    Ok(Canvas::from_pixel(width, height, background.unwrap_or(WHITE)))
}

/// Resize `canvas` in place to exact pixel dimensions, resampling its
/// content.
pub fn resize_image(canvas: &mut Canvas, width: u32, height: u32) -> PixelforgeResult<()> {
    ensure_positive(width, height)?;
    *canvas = imageops::resize(&*canvas, width, height, RESIZE_FILTER);
    Ok(())
}

/// Scale both canvas dimensions by an integer multiplier, in place.
///
/// `ratio` is a whole-number multiplier, not a fractional scale. A ratio of
/// zero is rejected instead of collapsing the canvas.
pub fn resize_image_by_ratio(canvas: &mut Canvas, ratio: u32) -> PixelforgeResult<()> {
    if ratio == 0 {
        return Err(PixelforgeError::invalid_dimension(
            "resize ratio must be greater than zero",
        ));
    }
    let (width, height) = canvas.dimensions();
    resize_image(canvas, width * ratio, height * ratio)
}

/// Composite `background` onto `main` at `point` (origin when absent) with
/// full opacity, mutating `main`.
///
/// When `resize_background` is set, `background` is first resized in place to
/// `main`'s dimensions; that side effect on `background` is part of the
/// contract.
pub fn add_background_image(
    background: &mut Canvas,
    main: &mut Canvas,
    point: Option<Point>,
    resize_background: bool,
) -> PixelforgeResult<()> {
    if resize_background {
        let (width, height) = main.dimensions();
        resize_image(background, width, height)?;
    }
    let point = point.unwrap_or_default();
    imageops::overlay(main, &*background, point.x, point.y);
    Ok(())
}

/// Rotate `canvas` in place by `angle_degrees` about its center.
///
/// The canvas grows to the rotated bounding box; pixels the source does not
/// cover are transparent.
pub fn rotate_image(canvas: &mut Canvas, angle_degrees: f32) {
    let (width, height) = canvas.dimensions();
    let theta = f64::from(angle_degrees).to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());

    let out_width = (f64::from(width) * cos + f64::from(height) * sin)
        .round()
        .max(1.0) as u32;
    let out_height = (f64::from(width) * sin + f64::from(height) * cos)
        .round()
        .max(1.0) as u32;

    // Pivots sit on pixel centers ((w - 1) / 2), so quarter-turn angles map
    // lattice points onto lattice points.
    let center_to_origin =
        Projection::translate(-(width as f32 - 1.0) / 2.0, -(height as f32 - 1.0) / 2.0);
    let origin_to_center = Projection::translate(
        (out_width as f32 - 1.0) / 2.0,
        (out_height as f32 - 1.0) / 2.0,
    );
    let projection = origin_to_center * Projection::rotate(theta as f32) * center_to_origin;

    let mut rotated = Canvas::from_pixel(out_width, out_height, TRANSPARENT);
    warp_into(
        &*canvas,
        &projection,
        Interpolation::Nearest,
        TRANSPARENT,
        &mut rotated,
    );
    *canvas = rotated;
}

fn ensure_positive(width: u32, height: u32) -> PixelforgeResult<()> {
    if width == 0 || height == 0 {
        return Err(PixelforgeError::invalid_dimension(format!(
            "canvas dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/ops.rs"]
mod tests;
