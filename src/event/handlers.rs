use std::cell::Cell;
use std::rc::Rc;

use crate::event::{EventHandler, SketchEvent};

/// Marks a shared flag dirty on every event. The renderer owns the other end
/// and clears it after repainting.
#[derive(Debug, Clone)]
pub struct RedrawFlag {
    dirty: Rc<Cell<bool>>,
}

impl RedrawFlag {
    pub fn new(dirty: Rc<Cell<bool>>) -> Self {
        Self { dirty }
    }
}

impl EventHandler for RedrawFlag {
    fn handle_event(&mut self, event: &SketchEvent) {
        log::trace!("Redraw requested by {:?}", event);
        self.dirty.set(true);
    }
}
