use egui::epaint::text::Fonts;
use egui::{Color32, FontId, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::{PaintState, PathBuffer, Surface};

/// Collects `egui::Shape`s for the live canvas.
///
/// Canvas-local coordinates are offset by the top-left corner of `rect`, the
/// screen area the canvas occupies.
pub struct ShapeSurface<'a> {
    fonts: &'a Fonts,
    rect: Rect,
    state: PaintState,
    path: PathBuffer,
    shapes: Vec<Shape>,
}

impl<'a> ShapeSurface<'a> {
    pub fn new(fonts: &'a Fonts, rect: Rect) -> Self {
        Self {
            fonts,
            rect,
            state: PaintState::default(),
            path: PathBuffer::default(),
            shapes: Vec::new(),
        }
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for ShapeSurface<'_> {
    fn paint_state(&self) -> PaintState {
        self.state
    }

    fn set_paint_state(&mut self, state: PaintState) {
        self.state = state;
    }

    fn clear(&mut self, background: Color32) {
        self.shapes.clear();
        self.path.clear();
        self.shapes.push(Shape::rect_filled(self.rect, 0.0, background));
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.path.circle(center, radius);
    }

    fn stroke(&mut self) {
        let stroke = EguiStroke::new(self.state.line_width, self.state.stroke_color);
        let mut shapes = Vec::new();
        for polyline in self.path.visible_polylines() {
            let points = polyline.iter().map(|p| self.to_screen(*p)).collect();
            shapes.push(Shape::line(points, stroke));
        }
        for &(center, radius) in self.path.circles() {
            shapes.push(Shape::circle_stroke(self.to_screen(center), radius, stroke));
        }
        self.shapes.extend(shapes);
    }

    fn fill_text(&mut self, text: &str, origin: Pos2) {
        let galley = self.fonts.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(self.state.font_size),
            self.state.fill_color,
        );
        // Galleys are positioned by their top-left; lift by the first baseline
        let baseline = galley
            .rows
            .first()
            .and_then(|row| row.glyphs.first())
            .map_or(galley.size().y, |glyph| glyph.pos.y);
        let top_left = self.to_screen(origin) - Vec2::new(0.0, baseline);
        self.shapes.push(Shape::galley(top_left, galley, self.state.fill_color));
    }
}
