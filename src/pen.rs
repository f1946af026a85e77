use egui::ecolor::Hsva;
use egui::{Color32, Pos2};

use crate::config::SketchConfig;
use crate::sticker::render_glyph;
use crate::surface::{PaintState, Surface};

/// What a pointer-down does on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw freehand strokes
    #[default]
    Marker,
    /// Stamp the given glyph
    Sticker(String),
}

/// Live pointer state and marker settings.
#[derive(Debug, Clone)]
pub struct Pen {
    /// `None` while the pointer is off the canvas; hides the cursor indicator
    position: Option<Pos2>,
    active: bool,
    tool: Tool,
    thickness: f32,
    color: Color32,
    hue: f32,
    thin_thickness: f32,
    thick_thickness: f32,
    min_thickness: f32,
    max_thickness: f32,
}

impl Pen {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            position: None,
            active: false,
            tool: Tool::Marker,
            thickness: config.thin_thickness,
            color: config.marker_color,
            hue: 0.0,
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            min_thickness: config.min_thickness,
            max_thickness: config.max_thickness,
        }
    }

    pub fn position(&self) -> Option<Pos2> {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Last hue set through [`Pen::set_hue`], in degrees
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Where the current thickness sits in the slider range, in `[0, 1]`
    pub fn thickness_normalized(&self) -> f32 {
        let span = self.max_thickness - self.min_thickness;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.thickness - self.min_thickness) / span).clamp(0.0, 1.0)
    }

    pub(crate) fn set_position(&mut self, position: Option<Pos2>) {
        self.position = position;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn select_marker(&mut self) {
        self.tool = Tool::Marker;
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.tool = Tool::Sticker(glyph.into());
    }

    pub fn select_thin_marker(&mut self) {
        self.select_marker();
        self.thickness = self.thin_thickness;
    }

    pub fn select_thick_marker(&mut self) {
        self.select_marker();
        self.thickness = self.thick_thickness;
    }

    /// Set the marker width. Non-positive or non-finite widths are ignored.
    pub fn set_thickness(&mut self, thickness: f32) {
        if thickness.is_finite() && thickness > 0.0 {
            self.thickness = thickness;
        } else {
            log::warn!("Ignoring invalid marker thickness {thickness}");
        }
    }

    /// Map a slider value in `[0, 1]` linearly onto the thickness range
    pub fn set_thickness_normalized(&mut self, value: f32) {
        let value = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
        self.thickness = self.min_thickness + value * (self.max_thickness - self.min_thickness);
    }

    /// Set the marker color to a fully saturated hue (degrees, wraps around)
    pub fn set_hue(&mut self, degrees: f32) {
        self.hue = degrees.rem_euclid(360.0);
        self.color = Hsva::new(self.hue / 360.0, 1.0, 1.0, 1.0).into();
    }

    /// Draw the cursor indicator: a ring as wide as the marker, or the
    /// selected glyph. Nothing while the position is unknown.
    pub fn render_indicator(&self, surface: &mut dyn Surface, sticker_size: f32) {
        let Some(position) = self.position else {
            return;
        };
        match &self.tool {
            Tool::Marker => {
                let saved = surface.paint_state();
                surface.set_paint_state(PaintState {
                    line_width: self.thickness,
                    stroke_color: self.color,
                    ..saved
                });
                surface.begin_path();
                surface.circle(position, self.thickness);
                surface.stroke();
                surface.set_paint_state(saved);
            }
            Tool::Sticker(glyph) => render_glyph(surface, glyph, position, sticker_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use egui::pos2;

    fn pen() -> Pen {
        Pen::new(&SketchConfig::default())
    }

    #[test]
    fn test_presets_switch_back_to_marker() {
        let mut pen = pen();
        pen.select_sticker("🎃");
        pen.select_thick_marker();
        assert_eq!(pen.tool(), &Tool::Marker);
        assert_eq!(pen.thickness(), 4.0);

        pen.select_thin_marker();
        assert_eq!(pen.thickness(), 1.5);
    }

    #[test]
    fn test_normalized_thickness_clamps() {
        let mut pen = pen();
        pen.set_thickness_normalized(0.0);
        assert_eq!(pen.thickness(), 1.0);
        pen.set_thickness_normalized(1.0);
        assert_eq!(pen.thickness(), 10.0);
        pen.set_thickness_normalized(0.5);
        assert_eq!(pen.thickness(), 5.5);
        pen.set_thickness_normalized(3.0);
        assert_eq!(pen.thickness(), 10.0);
        pen.set_thickness_normalized(-1.0);
        assert_eq!(pen.thickness(), 1.0);
        assert_eq!(pen.thickness_normalized(), 0.0);
    }

    #[test]
    fn test_invalid_thickness_is_ignored() {
        let mut pen = pen();
        pen.set_thickness(0.0);
        pen.set_thickness(f32::NAN);
        assert_eq!(pen.thickness(), 1.5);
    }

    #[test]
    fn test_hue_sets_saturated_color() {
        let mut pen = pen();
        assert_eq!(pen.color(), Color32::BLACK);
        pen.set_hue(0.0);
        assert_eq!(pen.color(), Color32::from_rgb(255, 0, 0));
        pen.set_hue(480.0);
        assert_eq!(pen.hue(), 120.0);
    }

    #[test]
    fn test_hidden_cursor_draws_nothing() {
        let mut surface = RecordingSurface::new();
        pen().render_indicator(&mut surface, 30.0);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_marker_cursor_is_a_ring() {
        let mut pen = pen();
        pen.set_position(Some(pos2(8.0, 9.0)));
        let mut surface = RecordingSurface::new();
        pen.render_indicator(&mut surface, 30.0);
        assert!(surface.calls().contains(&DrawCall::Circle { center: pos2(8.0, 9.0), radius: 1.5 }));
    }

    #[test]
    fn test_sticker_cursor_previews_glyph() {
        let mut pen = pen();
        pen.select_sticker("👽");
        pen.set_position(Some(pos2(8.0, 9.0)));
        let mut surface = RecordingSurface::new();
        pen.render_indicator(&mut surface, 30.0);
        assert!(matches!(
            &surface.calls()[0],
            DrawCall::FillText { text, .. } if text == "👽"
        ));
    }
}
