use tracing::trace;

use crate::core::{GlyphSet, VaseLayout, Viewport};
use crate::render::{RectPrimitive, RenderFrame};

const OUTLINE_STROKE_WIDTH: f64 = 1.0;
const FILL_STROKE_WIDTH: f64 = 1.0;

/// Materializes the scene for one draw pass.
///
/// Per glyph index `i`: one stroke-only outline rect sized to the container
/// height and one filled rect sized to the animated fill value, both at
/// `layout.x_offset(i)` and anchored to the shared baseline. `fill_values`
/// carries the per-glyph animated heights; the record's own `fill_level` is
/// the animation target, not what is on screen mid-transition.
#[must_use]
pub fn build_render_frame(
    viewport: Viewport,
    layout: VaseLayout,
    glyphs: &GlyphSet,
    fill_values: &[f64],
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);

    for (index, record) in glyphs.records().iter().enumerate() {
        let x = layout.x_offset(index);

        frame = frame.with_rect(RectPrimitive::outlined(
            x,
            layout.shape_y(record.container_height),
            layout.vase_width,
            record.container_height,
            record.color,
            OUTLINE_STROKE_WIDTH,
        ));

        // The elastic easing may overshoot past the target, including past
        // the container top; only negative heights are floored since a rect
        // cannot have one.
        let fill_height = fill_values
            .get(index)
            .copied()
            .unwrap_or(record.fill_level)
            .max(0.0);
        frame = frame.with_rect(RectPrimitive::filled(
            x,
            layout.shape_y(fill_height),
            layout.vase_width,
            fill_height,
            record.color,
            FILL_STROKE_WIDTH,
        ));
    }

    trace!(glyphs = glyphs.len(), rects = frame.rects.len(), "built render frame");
    frame
}
