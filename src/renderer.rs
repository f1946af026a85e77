use std::cell::Cell;
use std::rc::Rc;

use egui::{Color32, Context, Painter, Rect, Shape};

use crate::command::CommandHistory;
use crate::event::{EventHandler, RedrawFlag};
use crate::session::Session;
use crate::surface::{ShapeSurface, Surface};

/// Clear to `background` and replay every committed command in order.
pub fn render_committed(surface: &mut dyn Surface, history: &CommandHistory, background: Color32) {
    surface.clear(background);
    for command in history.committed() {
        command.render(surface);
    }
}

/// Full redraw of the live canvas: committed commands, then the stroke in
/// progress, then the cursor indicator.
pub fn render_scene(surface: &mut dyn Surface, session: &Session) {
    render_committed(surface, session.history(), session.background());
    if let Some(stroke) = session.current_stroke() {
        stroke.render(surface);
    }
    session.pen().render_indicator(surface, session.sticker_size());
}

/// Paints the canvas from a cached shape list, rebuilt only after a session
/// notification or when the canvas moved on screen.
#[derive(Debug)]
pub struct CanvasRenderer {
    dirty: Rc<Cell<bool>>,
    shapes: Vec<Shape>,
    last_rect: Option<Rect>,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self {
            dirty: Rc::new(Cell::new(true)),
            shapes: Vec::new(),
            last_rect: None,
        }
    }

    /// Handler to subscribe on the session so changes mark the cache dirty
    pub fn redraw_handler(&self) -> Box<dyn EventHandler> {
        Box::new(RedrawFlag::new(Rc::clone(&self.dirty)))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Rebuild the cache if needed and paint it into `rect`
    pub fn paint(&mut self, ctx: &Context, painter: &Painter, rect: Rect, session: &Session) {
        if self.dirty.get() || self.last_rect != Some(rect) {
            self.shapes = ctx.fonts(|fonts| {
                let mut surface = ShapeSurface::new(fonts, rect);
                render_scene(&mut surface, session);
                surface.into_shapes()
            });
            self.last_rect = Some(rect);
            self.dirty.set(false);
        }
        painter.extend(self.shapes.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchConfig;
    use crate::surface::{DrawCall, RecordingSurface};
    use egui::pos2;

    #[test]
    fn test_scene_order() {
        let mut session = Session::new(&SketchConfig::default());
        session.select_sticker("🎃");
        session.pointer_down(pos2(5.0, 5.0));
        session.select_marker();
        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_move(pos2(2.0, 2.0));

        let mut surface = RecordingSurface::new();
        render_scene(&mut surface, &session);
        let calls = surface.calls();

        assert_eq!(calls[0], DrawCall::Clear(Color32::WHITE));
        assert!(matches!(&calls[1], DrawCall::FillText { text, .. } if text == "🎃"));
        assert_eq!(calls[2], DrawCall::BeginPath);
        assert_eq!(calls[3], DrawCall::MoveTo(pos2(1.0, 1.0)));
        assert_eq!(calls[4], DrawCall::LineTo(pos2(2.0, 2.0)));
        assert!(matches!(calls.last(), Some(DrawCall::Stroke { .. })));
        assert!(calls.contains(&DrawCall::Circle { center: pos2(2.0, 2.0), radius: 1.5 }));
    }

    #[test]
    fn test_notifications_mark_renderer_dirty() {
        let ctx = Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(256.0, 256.0));
        let mut session = Session::new(&SketchConfig::default());
        let mut renderer = CanvasRenderer::new();
        session.subscribe(renderer.redraw_handler());

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            renderer.paint(ctx, &painter, rect, &session);
        });
        assert!(!renderer.is_dirty());

        assert!(!session.undo());
        assert!(!renderer.is_dirty());

        session.pointer_move(pos2(3.0, 3.0));
        assert!(renderer.is_dirty());
    }
}
