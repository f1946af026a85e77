use egui::{Color32, Pos2};
use sketchpad::export::{render_image, render_png, save_png};
use sketchpad::{CommandHistory, ExportConfig, StickerPlacement, Stroke};

fn create_test_history() -> CommandHistory {
    let mut history = CommandHistory::new();
    history.commit(Stroke::with_points(
        Color32::BLACK,
        4.0,
        vec![Pos2::new(10.0, 100.0), Pos2::new(200.0, 100.0)],
    ));
    history
}

#[test]
fn test_export_scales_committed_strokes() {
    let image = render_image(&create_test_history(), &ExportConfig::default()).unwrap();
    assert_eq!(image.dimensions(), (1024, 1024));

    // Untouched background stays white
    assert_eq!(image.get_pixel(5, 5).0, [255, 255, 255, 255]);
    // (100, 100) on the canvas lands at (400, 400) in the export
    let on_line = image.get_pixel(400, 400).0;
    assert!(on_line[0] < 64 && on_line[3] == 255);
    // but not at the unscaled position
    assert_eq!(image.get_pixel(100, 50).0, [255, 255, 255, 255]);
}

#[test]
fn test_export_rasterizes_emoji_stickers() {
    let placement = StickerPlacement::new("👻", Pos2::new(50.0, 80.0), 30.0);
    assert_eq!(placement.glyph(), "👻");
    let config = ExportConfig::default();
    // Baseline and font size both scale with the export
    let baseline = (placement.position().y * config.scale) as u32;
    let left = (placement.position().x * config.scale) as u32;
    let px = (placement.size() * config.scale) as u32;

    let mut history = CommandHistory::new();
    history.commit(placement);
    let image = render_image(&history, &config).unwrap();

    let dark_in_glyph_box = (left..left + px)
        .flat_map(|x| (baseline - px..baseline).map(move |y| (x, y)))
        .filter(|&(x, y)| image.get_pixel(x, y).0[0] < 128)
        .count();
    assert!(dark_in_glyph_box > 100);
    // Nothing leaks into the opposite corner
    assert_eq!(image.get_pixel(900, 900).0, [255, 255, 255, 255]);
}

#[test]
fn test_undone_commands_are_not_exported() {
    let mut history = create_test_history();
    history.undo();
    let image = render_image(&history, &ExportConfig::default()).unwrap();
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn test_png_bytes_decode() {
    let bytes = render_png(&create_test_history(), &ExportConfig::default()).unwrap();
    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1024, 1024));
}

#[test]
fn test_save_uses_fixed_file_name() {
    let dir = std::env::temp_dir().join(format!("sketchpad-export-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = ExportConfig {
        output_dir: dir.clone(),
        ..ExportConfig::default()
    };

    let path = save_png(&create_test_history(), &config).unwrap();

    assert_eq!(path, dir.join("sketchpad.png"));
    assert!(path.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
