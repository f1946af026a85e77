mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::SketchEvent;
pub use handlers::RedrawFlag;

pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SketchEvent),
{
    fn handle_event(&mut self, event: &SketchEvent) {
        self(event)
    }
}
