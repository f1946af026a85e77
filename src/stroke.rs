use egui::{Color32, Pos2};

use crate::surface::{PaintState, Surface};

/// A freehand line: ordered points drawn with a fixed color and thickness.
///
/// Color and thickness are captured when the stroke starts; changing the
/// marker afterwards never touches a stroke that already exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    /// Create an empty stroke
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self::with_points(color, thickness, Vec::new())
    }

    pub fn with_points(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Paint the stroke as one path. An empty stroke issues no calls; a
    /// single point produces a path without segments, which paints nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        let saved = surface.paint_state();
        surface.set_paint_state(PaintState {
            line_width: self.thickness,
            stroke_color: self.color,
            ..saved
        });

        surface.begin_path();
        surface.move_to(*first);
        for point in rest {
            surface.line_to(*point);
        }
        surface.stroke();

        surface.set_paint_state(saved);
    }
}
