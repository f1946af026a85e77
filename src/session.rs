//! The drawing session: one controller that owns the pen, the history and the
//! stroke in progress, and tells subscribers when the picture changes.
//!
//! All mutation goes through `&mut Session`, one event at a time. Every
//! handler runs to completion and notifies synchronously before returning.

use egui::{Color32, Pos2};

use crate::command::CommandHistory;
use crate::config::SketchConfig;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::input::InputEvent;
use crate::pen::{Pen, Tool};
use crate::sticker::StickerPlacement;
use crate::stroke::Stroke;

#[derive(Debug)]
pub struct Session {
    pen: Pen,
    history: CommandHistory,
    /// Built on pointer-down, moved into the history on pointer-up
    current_stroke: Option<Stroke>,
    background: Color32,
    sticker_size: f32,
    events: EventBus,
}

impl Session {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            pen: Pen::new(config),
            history: CommandHistory::new(),
            current_stroke: None,
            background: config.background,
            sticker_size: config.sticker_size,
            events: EventBus::new(),
        }
    }

    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current_stroke.as_ref()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Place a sticker immediately, or start a stroke at `position` with the
    /// marker settings of this instant.
    pub fn pointer_down(&mut self, position: Pos2) {
        if self.pen.is_active() {
            log::debug!("Pointer down while a stroke is active, ignoring");
            return;
        }
        self.pen.set_position(Some(position));

        match self.pen.tool().clone() {
            Tool::Sticker(glyph) => {
                log::debug!("Placing sticker {glyph} at {position:?}");
                self.history
                    .commit(StickerPlacement::new(glyph, position, self.sticker_size));
            }
            Tool::Marker => {
                log::debug!("Starting stroke at {position:?}");
                let mut stroke = Stroke::new(self.pen.color(), self.pen.thickness());
                stroke.add_point(position);
                self.current_stroke = Some(stroke);
                self.pen.set_active(true);
            }
        }
        self.events.emit(SketchEvent::ContentChanged);
    }

    pub fn pointer_move(&mut self, position: Pos2) {
        self.pen.set_position(Some(position));

        match self.current_stroke.as_mut().filter(|_| self.pen.is_active()) {
            Some(stroke) => {
                stroke.add_point(position);
                self.events.emit(SketchEvent::ContentChanged);
            }
            None => self.events.emit(SketchEvent::ToolMoved),
        }
    }

    /// Commit the stroke in progress. Without one, hide the cursor instead.
    pub fn pointer_up(&mut self) {
        if self.pen.is_active() {
            if let Some(stroke) = self.current_stroke.take() {
                log::debug!("Finishing stroke with {} points", stroke.points().len());
                self.history.commit(stroke);
            }
            self.pen.set_active(false);
        } else {
            self.pen.set_position(None);
        }
        self.events.emit(SketchEvent::ContentChanged);
    }

    /// Leaving the canvas ends a stroke exactly like releasing the pointer
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            log::info!("Undo: {} committed, {} to redo", self.history.len(), self.history.redo_stack().len());
            self.events.emit(SketchEvent::ContentChanged);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            log::info!("Redo: {} committed, {} to redo", self.history.len(), self.history.redo_stack().len());
            self.events.emit(SketchEvent::ContentChanged);
        }
        changed
    }

    /// Drop the whole drawing, including any stroke in progress
    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({} commands)", self.history.len());
        self.history.clear();
        self.current_stroke = None;
        self.pen.set_active(false);
        self.events.emit(SketchEvent::ContentChanged);
    }

    pub fn select_marker(&mut self) {
        self.pen.select_marker();
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn select_thin_marker(&mut self) {
        self.pen.select_thin_marker();
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn select_thick_marker(&mut self) {
        self.pen.select_thick_marker();
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        log::debug!("Selected sticker {glyph}");
        self.pen.select_sticker(glyph);
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.pen.set_thickness(thickness);
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn set_thickness_normalized(&mut self, value: f32) {
        self.pen.set_thickness_normalized(value);
        self.events.emit(SketchEvent::ToolMoved);
    }

    pub fn set_hue(&mut self, degrees: f32) {
        self.pen.set_hue(degrees);
        self.events.emit(SketchEvent::ToolMoved);
    }
}
