use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas-local coordinates, as consumed by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug)]
pub struct InputHandler {
    /// Last canvas-local position, `None` while the pointer is off the canvas
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Read this frame's pointer state from egui and translate it
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.translate(hover, pressed, released)
    }

    /// Turn one frame of screen-space pointer state into canvas events.
    ///
    /// Order within a frame: leave or move first, then press, then release.
    pub fn translate(&mut self, hover: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let local = hover
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| (pos - self.canvas_rect.min).to_pos2());

        match local {
            Some(position) => {
                if Some(position) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { position });
                }
                if pressed {
                    events.push(InputEvent::PointerDown { position });
                }
                if released {
                    events.push(InputEvent::PointerUp { position });
                }
            }
            None if self.last_pointer_pos.is_some() => events.push(InputEvent::PointerLeave),
            None => {}
        }

        self.last_pointer_pos = local;
        events
    }
}
