//! Paint targets that commands render onto.
//!
//! `Surface` mirrors the small subset of a 2D canvas API the sketchpad needs:
//! a paint state (line width, colors, font size), path building, stroking and
//! text. Commands never talk to egui or tiny-skia directly, so the same replay
//! drives the live canvas, the PNG export and the draw-call recorder.

use egui::{Color32, Pos2};

mod glyphs;
mod pixmap;
mod recording;
mod shapes;

pub use glyphs::GlyphRasterizer;
pub use pixmap::PixmapSurface;
pub use recording::{DrawCall, RecordingSurface};
pub use shapes::ShapeSurface;

/// Transient paint settings of a surface, read by `stroke` and `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    pub line_width: f32,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub font_size: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            font_size: 10.0,
        }
    }
}

/// A drawing surface with canvas-like semantics.
///
/// Coordinates are logical canvas pixels; a surface may scale them (the export
/// pixmap does). A path is a list of polylines plus circles, started by
/// `begin_path` and painted by `stroke`.
pub trait Surface {
    fn paint_state(&self) -> PaintState;

    fn set_paint_state(&mut self, state: PaintState);

    /// Fill the whole surface with `background` and drop any pending path.
    fn clear(&mut self, background: Color32);

    fn begin_path(&mut self);

    fn move_to(&mut self, point: Pos2);

    /// Without a preceding `move_to` this behaves like one.
    fn line_to(&mut self, point: Pos2);

    /// Add a full circle outline to the current path.
    fn circle(&mut self, center: Pos2, radius: f32);

    /// Outline the current path with the line width and stroke color.
    fn stroke(&mut self);

    /// Draw `text` in the fill color, with `origin` on the left end of the baseline.
    fn fill_text(&mut self, text: &str, origin: Pos2);
}

/// Path under construction, shared by the surfaces that rasterize.
#[derive(Debug, Default, Clone)]
pub(crate) struct PathBuffer {
    polylines: Vec<Vec<Pos2>>,
    circles: Vec<(Pos2, f32)>,
}

impl PathBuffer {
    pub(crate) fn clear(&mut self) {
        self.polylines.clear();
        self.circles.clear();
    }

    pub(crate) fn move_to(&mut self, point: Pos2) {
        self.polylines.push(vec![point]);
    }

    pub(crate) fn line_to(&mut self, point: Pos2) {
        match self.polylines.last_mut() {
            Some(polyline) => polyline.push(point),
            None => self.move_to(point),
        }
    }

    pub(crate) fn circle(&mut self, center: Pos2, radius: f32) {
        self.circles.push((center, radius));
    }

    /// Polylines with at least one segment; a lone `move_to` paints nothing.
    pub(crate) fn visible_polylines(&self) -> impl Iterator<Item = &[Pos2]> {
        self.polylines
            .iter()
            .filter(|polyline| polyline.len() >= 2)
            .map(Vec::as_slice)
    }

    pub(crate) fn circles(&self) -> &[(Pos2, f32)] {
        &self.circles
    }
}
