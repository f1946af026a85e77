use egui::{Color32, Pos2};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

use super::{GlyphRasterizer, PaintState, PathBuffer, Surface};
use crate::error::{SketchError, SketchResult};

/// Offscreen raster surface. Logical coordinates are multiplied by `scale`
/// so a small canvas fills a larger pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    scale: f32,
    state: PaintState,
    path: PathBuffer,
    glyphs: GlyphRasterizer,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> SketchResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(SketchError::SurfaceAllocation { width, height })?;
        Ok(Self {
            pixmap,
            scale,
            state: PaintState::default(),
            path: PathBuffer::default(),
            glyphs: GlyphRasterizer::new()?,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA copy of the pixels
    pub fn to_rgba_image(&self) -> SketchResult<image::RgbaImage> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        image::RgbaImage::from_raw(width, height, data)
            .ok_or(SketchError::SurfaceAllocation { width, height })
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }
}

impl Surface for PixmapSurface {
    fn paint_state(&self) -> PaintState {
        self.state
    }

    fn set_paint_state(&mut self, state: PaintState) {
        self.state = state;
    }

    fn clear(&mut self, background: Color32) {
        let [r, g, b, a] = background.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        self.path.clear();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Pos2) {
        self.path.line_to(point);
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.path.circle(center, radius);
    }

    fn stroke(&mut self) {
        let paint = Self::paint(self.state.stroke_color);
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        let transform = self.transform();

        let mut paths = Vec::new();
        for polyline in self.path.visible_polylines() {
            let mut builder = PathBuilder::new();
            builder.move_to(polyline[0].x, polyline[0].y);
            for point in &polyline[1..] {
                builder.line_to(point.x, point.y);
            }
            paths.extend(builder.finish());
        }
        for &(center, radius) in self.path.circles() {
            paths.extend(PathBuilder::from_circle(center.x, center.y, radius));
        }
        for path in &paths {
            self.pixmap.stroke_path(path, &paint, &stroke, transform, None);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Pos2) {
        let origin = (origin.x * self.scale, origin.y * self.scale);
        let px = self.state.font_size * self.scale;
        self.glyphs.draw_text(&mut self.pixmap, text, origin, px, self.state.fill_color);
    }
}
