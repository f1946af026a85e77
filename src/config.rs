use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::SketchResult;

/// Settings for the sketchpad. Every field has a default, so a config file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Logical size of the live canvas in pixels
    pub canvas_size: Vec2,
    pub background: Color32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// Range the width slider maps its normalized value onto
    pub min_thickness: f32,
    pub max_thickness: f32,
    /// Marker color until the hue slider is touched
    pub marker_color: Color32,
    /// Font size used for placed and previewed stickers
    pub sticker_size: f32,
    pub default_stickers: Vec<String>,
    /// Storage key the sticker catalog is persisted under
    pub storage_key: String,
    pub export: ExportConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(256.0, 256.0),
            background: Color32::WHITE,
            thin_thickness: 1.5,
            thick_thickness: 4.0,
            min_thickness: 1.0,
            max_thickness: 10.0,
            marker_color: Color32::BLACK,
            sticker_size: 30.0,
            default_stickers: vec!["👽".to_owned(), "👻".to_owned(), "🎃".to_owned()],
            storage_key: "sketchpad.stickers".to_owned(),
            export: ExportConfig::default(),
        }
    }
}

impl SketchConfig {
    pub fn from_json_str(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SketchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Export settings with the background taken from the canvas
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            background: self.background,
            ..self.export.clone()
        }
    }
}

/// Offscreen export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Pixel size of the exported image
    pub size: [u32; 2],
    /// Uniform scale from canvas coordinates to export pixels
    pub scale: f32,
    pub file_name: String,
    pub output_dir: PathBuf,
    /// Not read from config files; follows `SketchConfig::background`
    #[serde(skip)]
    pub background: Color32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            size: [1024, 1024],
            scale: 4.0,
            file_name: "sketchpad.png".to_owned(),
            output_dir: PathBuf::from("."),
            background: Color32::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SketchConfig::from_json_str(r#"{ "thick_thickness": 6.0 }"#).unwrap();
        assert_eq!(config.thick_thickness, 6.0);
        assert_eq!(config.thin_thickness, 1.5);
        assert_eq!(config.export.size, [1024, 1024]);
        assert_eq!(config.default_stickers.len(), 3);
    }

    #[test]
    fn test_export_scale_fills_export_size() {
        let config = SketchConfig::default();
        assert_eq!(config.canvas_size.x * config.export.scale, config.export.size[0] as f32);
        assert_eq!(config.canvas_size.y * config.export.scale, config.export.size[1] as f32);
    }

    #[test]
    fn test_export_background_follows_canvas() {
        let config = SketchConfig::from_json_str(
            r#"{ "background": [250, 240, 200, 255], "export": { "background": [0, 0, 0, 255] } }"#,
        )
        .unwrap();
        assert_eq!(config.background, Color32::from_rgb(250, 240, 200));
        assert_eq!(config.export_config().background, Color32::from_rgb(250, 240, 200));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(SketchConfig::from_json_str("{ not json").is_err());
    }
}
