use std::path::Path;

use ab_glyph::{FontArc, PxScale};
use anyhow::Context;

use crate::foundation::error::PixelforgeResult;

/// Typeface style requested when loading a font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright, regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Bold weight with italic slant.
    BoldItalic,
}

/// Opaque handle bundling a parsed typeface with a pixel size and style.
///
/// Handles are immutable. The facade keeps no font cache: every
/// [`load_font`] call re-reads and re-parses the file.
#[derive(Clone, Debug)]
pub struct SizedFont {
    face: FontArc,
    size_px: f32,
    style: FontStyle,
}

impl SizedFont {
    /// Pixel size the handle was created with.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Style the handle was created with.
    ///
    /// A font file carries one designed style; the requested style is
    /// recorded here, missing variants are not synthesized.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub(crate) fn scale(&self) -> PxScale {
        PxScale::from(self.size_px)
    }

    pub(crate) fn face(&self) -> &FontArc {
        &self.face
    }
}

/// Load a typeface from `path` and produce a sized, styled handle.
pub fn load_font(
    path: impl AsRef<Path>,
    size_px: f32,
    style: FontStyle,
) -> PixelforgeResult<SizedFont> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read font file {}", path.display()))?;
    let face = FontArc::try_from_vec(bytes)
        .with_context(|| format!("parse font file {}", path.display()))?;
    Ok(SizedFont {
        face,
        size_px,
        style,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
