//! pixelforge is a small image composition toolkit.
//!
//! It wraps the `image`/`imageproc` raster stack behind a flat, stateless
//! operation set: create blank canvases, resize, composite a background onto
//! a main image, rotate, draw plain or word-wrapped text, serialize through
//! PNG/Base64, and fetch remote images over HTTP.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless**: no canvas, font, or connection is retained between calls;
//!   every operation works on caller-owned buffers and handles.
//! - **Mutate in place**: operations on an existing canvas modify it through
//!   `&mut` and produce no new identity; create/decode operations return
//!   fresh buffers.
//! - **Straight RGBA8 end-to-end**: every [`Canvas`] is an
//!   [`image::RgbaImage`].
//! - **Remote fetch never raises**: download failures are logged and returned
//!   as [`FetchFailure`] values, not errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod net;
mod raster;
mod text;

pub use codec::png::{base64_to_image, decode_image, encode_png, image_to_base64};
pub use foundation::core::{Canvas, Point, Rgba, TRANSPARENT, WHITE};
pub use foundation::error::{PixelforgeError, PixelforgeResult};
pub use net::fetch::{FetchFailure, download_image, fetch_image};
pub use raster::ops::{
    add_background_image, create_empty_image, resize_image, resize_image_by_ratio, rotate_image,
};
pub use text::draw::{draw_text, draw_text_in_rect};
pub use text::font::{FontStyle, SizedFont, load_font};
