use crate::event::{EventHandler, SketchEvent};

/// A simple event bus for broadcasting sketch events to registered handlers.
///
/// Delivery is synchronous: `emit` returns after every handler has run.
pub struct EventBus {
    handlers: Vec<Box<dyn EventHandler>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&mut self, event: SketchEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_handler_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        for id in 0..2 {
            let seen = Rc::clone(&seen);
            bus.subscribe(Box::new(move |event: &SketchEvent| seen.borrow_mut().push((id, *event))));
        }

        bus.emit(SketchEvent::ToolMoved);

        assert_eq!(
            *seen.borrow(),
            vec![(0, SketchEvent::ToolMoved), (1, SketchEvent::ToolMoved)]
        );
    }
}
