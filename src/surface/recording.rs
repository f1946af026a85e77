use egui::{Color32, Pos2};

use super::{PaintState, Surface};

/// One call made against a [`RecordingSurface`], with the paint state that
/// was in effect for calls that actually paint.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color32),
    BeginPath,
    MoveTo(Pos2),
    LineTo(Pos2),
    Circle { center: Pos2, radius: f32 },
    Stroke { line_width: f32, color: Color32 },
    FillText { text: String, origin: Pos2, font_size: f32, color: Color32 },
}

/// A surface that paints nothing and remembers every call, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    state: PaintState,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of segments drawn so far
    pub fn line_to_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::LineTo(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn paint_state(&self) -> PaintState {
        self.state
    }

    fn set_paint_state(&mut self, state: PaintState) {
        self.state = state;
    }

    fn clear(&mut self, background: Color32) {
        self.calls.push(DrawCall::Clear(background));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Pos2) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Pos2) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.calls.push(DrawCall::Circle { center, radius });
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke {
            line_width: self.state.line_width,
            color: self.state.stroke_color,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Pos2) {
        self.calls.push(DrawCall::FillText {
            text: text.to_owned(),
            origin,
            font_size: self.state.font_size,
            color: self.state.fill_color,
        });
    }
}
