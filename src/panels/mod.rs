mod central_panel;
mod sticker_panel;
mod tools_panel;

pub use central_panel::canvas_panel;
pub use sticker_panel::sticker_panel;
pub use tools_panel::marker_panel;
