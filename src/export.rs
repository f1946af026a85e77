//! Flatten the committed drawing into a PNG.
//!
//! Export replays the same commands as the live canvas onto an offscreen
//! pixmap at a higher resolution. The stroke in progress and the cursor are
//! never part of an export.

use std::io::Cursor;
use std::path::PathBuf;

use crate::command::CommandHistory;
use crate::config::ExportConfig;
use crate::error::SketchResult;
use crate::renderer::render_committed;
use crate::surface::PixmapSurface;

/// Render the committed history into an RGBA image of `config.size`
pub fn render_image(history: &CommandHistory, config: &ExportConfig) -> SketchResult<image::RgbaImage> {
    let [width, height] = config.size;
    let mut surface = PixmapSurface::new(width, height, config.scale)?;
    render_committed(&mut surface, history, config.background);
    surface.to_rgba_image()
}

/// Render and encode as PNG bytes
pub fn render_png(history: &CommandHistory, config: &ExportConfig) -> SketchResult<Vec<u8>> {
    let image = render_image(history, config)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write the PNG to `config.output_dir/config.file_name` and return the path
pub fn save_png(history: &CommandHistory, config: &ExportConfig) -> SketchResult<PathBuf> {
    let bytes = render_png(history, config)?;
    let path = config.output_dir.join(&config.file_name);
    std::fs::write(&path, bytes)?;
    log::info!("Exported {} commands to {}", history.len(), path.display());
    Ok(path)
}
