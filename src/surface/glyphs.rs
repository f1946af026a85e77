use ab_glyph::{point, Font, FontRef, PxScale, ScaleFont};
use egui::Color32;
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::error::SketchResult;

/// Rasterizes text into a pixmap using the fonts egui bundles, tried in the
/// same order as egui's proportional family.
pub struct GlyphRasterizer {
    fonts: Vec<FontRef<'static>>,
}

impl GlyphRasterizer {
    pub fn new() -> SketchResult<Self> {
        let fonts = [
            epaint_default_fonts::UBUNTU_LIGHT,
            epaint_default_fonts::NOTO_EMOJI_REGULAR,
            epaint_default_fonts::EMOJI_ICON,
        ]
        .into_iter()
        .map(FontRef::try_from_slice)
        .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fonts })
    }

    /// First font that has a real glyph for `ch`
    fn font_for(&self, ch: char) -> Option<&FontRef<'static>> {
        self.fonts.iter().find(|font| font.glyph_id(ch).0 != 0)
    }

    /// Draw `text` with its baseline starting at `origin` (pixel coordinates).
    /// Characters no font covers are skipped.
    pub fn draw_text(&self, pixmap: &mut Pixmap, text: &str, origin: (f32, f32), px: f32, color: Color32) {
        let mut caret = origin.0;
        for ch in text.chars() {
            let Some(font) = self.font_for(ch) else {
                continue;
            };
            let scaled = font.as_scaled(PxScale::from(px));
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = point(caret, origin.1);
            caret += scaled.h_advance(glyph.id);

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|x, y, coverage| {
                    blend_pixel(
                        pixmap,
                        bounds.min.x as i32 + x as i32,
                        bounds.min.y as i32 + y as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

/// Source-over blend of `color` at `coverage` into one premultiplied pixel.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color32, coverage: f32) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let index = (y * width + x) as usize;
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let alpha = coverage.clamp(0.0, 1.0) * a as f32 / 255.0;

    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];
    let over = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
    let out_a = over(255, dst.alpha());
    let blended = PremultipliedColorU8::from_rgba(
        over(r, dst.red()).min(out_a),
        over(g, dst.green()).min(out_a),
        over(b, dst.blue()).min(out_a),
        out_a,
    );
    if let Some(blended) = blended {
        pixels[index] = blended;
    }
}
