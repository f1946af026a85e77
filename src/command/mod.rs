mod history;

use crate::sticker::StickerPlacement;
use crate::stroke::Stroke;
use crate::surface::Surface;

pub use history::CommandHistory;

/// A replayable drawing operation kept in the history
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A finished freehand stroke
    Stroke(Stroke),
    /// A glyph stamped at a point
    Sticker(StickerPlacement),
}

impl Command {
    /// Replay this command onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::Stroke(stroke) => stroke.render(surface),
            Command::Sticker(sticker) => sticker.render(surface),
        }
    }

    /// Short label for history listings
    pub fn name(&self) -> &'static str {
        match self {
            Command::Stroke(_) => "Stroke",
            Command::Sticker(_) => "Sticker",
        }
    }
}

impl From<Stroke> for Command {
    fn from(stroke: Stroke) -> Self {
        Command::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Command {
    fn from(sticker: StickerPlacement) -> Self {
        Command::Sticker(sticker)
    }
}
