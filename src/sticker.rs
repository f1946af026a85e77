use egui::{Color32, Pos2};

use crate::surface::{PaintState, Surface};

/// A glyph stamped once at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    glyph: String,
    position: Pos2,
    size: f32,
}

impl StickerPlacement {
    pub fn new(glyph: impl Into<String>, position: Pos2, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        render_glyph(surface, &self.glyph, self.position, self.size);
    }
}

/// Draw `glyph` in black with its baseline at `position`. Also used for the
/// sticker cursor preview.
pub(crate) fn render_glyph(surface: &mut dyn Surface, glyph: &str, position: Pos2, size: f32) {
    let saved = surface.paint_state();
    surface.set_paint_state(PaintState {
        fill_color: Color32::BLACK,
        font_size: size,
        ..saved
    });
    surface.fill_text(glyph, position);
    surface.set_paint_state(saved);
}
