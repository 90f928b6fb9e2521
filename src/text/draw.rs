use image::Rgba;
use imageproc::drawing::{draw_text_mut, text_size};

use crate::foundation::core::{Canvas, WHITE};
use crate::text::font::SizedFont;

/// Vertical gap inserted between wrapped lines, in pixels.
const LINE_GAP_PX: i32 = 5;

/// Draw `text` as a single line with its top-left corner at the point.
///
/// The `color` argument is part of the operation's contract but is not
/// honored: single-line text always renders white. Callers that need colored
/// text use [`draw_text_in_rect`], which does apply `color`.
pub fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    font: &SizedFont,
    point_x: i32,
    point_y: i32,
    color: Option<Rgba<u8>>,
) {
    let _ = color;
    draw_text_mut(
        canvas,
        WHITE,
        point_x,
        point_y,
        font.scale(),
        font.face(),
        text,
    );
}

/// Draw `text` word-wrapped into a rectangle `rectangle_width` pixels wide.
///
/// Words are split on single spaces and packed greedily: a word whose
/// measured width no longer fits flushes the accumulated line and starts the
/// next one below it. A word wider than the rectangle still occupies its own
/// line; no word is ever split. Lines render in `color`, or white when
/// absent.
#[tracing::instrument(skip(canvas, font))]
pub fn draw_text_in_rect(
    canvas: &mut Canvas,
    text: &str,
    font: &SizedFont,
    rectangle_width: u32,
    text_point_x: i32,
    text_point_y: i32,
    color: Option<Rgba<u8>>,
) {
    let fill = color.unwrap_or(WHITE);
    let lines = layout_wrapped_lines(text, rectangle_width, |word| {
        text_size(font.scale(), font.face(), word)
    });
    for line in &lines {
        draw_text_mut(
            canvas,
            fill,
            text_point_x,
            text_point_y + line.y_offset,
            font.scale(),
            font.face(),
            &line.text,
        );
    }
}

/// One flushed line of wrapped text, offset vertically from the block origin.
#[derive(Clone, Debug, PartialEq, Eq)]
struct WrappedLine {
    text: String,
    y_offset: i32,
}

/// Greedy line packing over `measure`, the per-word metrics source.
///
/// The accumulated text keeps the trailing space after every word, matching
/// the drawn output. A line flush advances the offset by the current word's
/// measured height plus [`LINE_GAP_PX`].
fn layout_wrapped_lines(
    text: &str,
    rectangle_width: u32,
    mut measure: impl FnMut(&str) -> (u32, u32),
) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    let mut line_size = 0;
    let mut line_text = String::new();
    let mut line_offset = 0;

    for word in text.split(' ') {
        let (word_width, word_height) = measure(word);

        if approximate_line_width(line_size, word_width) > rectangle_width {
            lines.push(WrappedLine {
                text: std::mem::take(&mut line_text),
                y_offset: line_offset,
            });
            line_offset += word_height as i32 + LINE_GAP_PX;
            line_size = word_width;
            line_text.push_str(word);
            line_text.push(' ');
            continue;
        }

        line_text.push_str(word);
        line_text.push(' ');
        line_size += word_width;
    }

    if !line_text.is_empty() {
        lines.push(WrappedLine {
            text: line_text,
            y_offset: line_offset,
        });
    }

    lines
}

/// Width policy for the wrapping loop: the running sum of individual word
/// widths.
///
/// This under- or overestimates the true kerned line width. Swapping in a
/// whole-line measurer here changes the policy without touching the loop.
fn approximate_line_width(line_size: u32, word_width: u32) -> u32 {
    line_size + word_width
}

#[cfg(test)]
#[path = "../../tests/unit/text/draw.rs"]
mod tests;
