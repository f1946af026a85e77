use egui::Rect;

use crate::catalog::StickerCatalog;
use crate::config::SketchConfig;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{canvas_panel, marker_panel, sticker_panel};
use crate::renderer::CanvasRenderer;
use crate::session::Session;

pub const APP_NAME: &str = "Paint '24";

/// The sketchpad window: marker controls, the canvas and the sticker sidebar.
pub struct SketchApp {
    pub(crate) config: SketchConfig,
    pub(crate) session: Session,
    pub(crate) renderer: CanvasRenderer,
    pub(crate) input: InputHandler,
    pub(crate) catalog: StickerCatalog,
    /// Text field of the "Add a sticker" control
    pub(crate) new_sticker: String,
    /// Outcome of the last export, shown under the canvas
    pub(crate) status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let catalog = StickerCatalog::load(cc.storage, &config.storage_key, &config.default_stickers);
        Self::with_catalog(config, catalog)
    }

    /// Build the app around an already loaded catalog
    pub fn with_catalog(config: SketchConfig, catalog: StickerCatalog) -> Self {
        let mut session = Session::new(&config);
        let renderer = CanvasRenderer::new();
        session.subscribe(renderer.redraw_handler());

        Self {
            input: InputHandler::new(Rect::from_min_size(egui::Pos2::ZERO, config.canvas_size)),
            config,
            session,
            renderer,
            catalog,
            new_sticker: String::new(),
            status: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &StickerCatalog {
        &self.catalog
    }

    pub(crate) fn export(&mut self) {
        self.status = Some(match export::save_png(self.session.history(), &self.config.export_config()) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    pub(crate) fn add_sticker(&mut self, storage: Option<&mut (dyn eframe::Storage + 'static)>) {
        let glyph = std::mem::take(&mut self.new_sticker);
        let result = match storage {
            Some(storage) => self.catalog.add_and_persist(&glyph, storage),
            None => Ok(self.catalog.add(&glyph)),
        };
        match result {
            Ok(true) => {
                if let Some(added) = self.catalog.stickers().last().cloned() {
                    self.session.select_sticker(added);
                }
            }
            Ok(false) => {}
            Err(err) => log::error!("Failed to store stickers: {err}"),
        }
    }

    pub(crate) fn remove_sticker(&mut self, glyph: &str, storage: Option<&mut (dyn eframe::Storage + 'static)>) {
        let result = match storage {
            Some(storage) => self.catalog.remove_and_persist(glyph, storage),
            None => Ok(self.catalog.remove(glyph)),
        };
        match result {
            Ok(true) => {
                if matches!(self.session.pen().tool(), crate::pen::Tool::Sticker(selected) if selected == glyph) {
                    self.session.select_marker();
                }
            }
            Ok(false) => {}
            Err(err) => log::error!("Failed to store stickers: {err}"),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = self.catalog.persist(storage) {
            log::error!("Failed to store stickers: {err}");
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        marker_panel(self, ctx);
        sticker_panel(self, ctx, frame);
        canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pen::Tool;

    fn create_test_app() -> SketchApp {
        let config = SketchConfig::default();
        let catalog = StickerCatalog::new(config.storage_key.clone(), &config.default_stickers);
        SketchApp::with_catalog(config, catalog)
    }

    fn add(app: &mut SketchApp, glyph: &str) {
        app.new_sticker = glyph.to_owned();
        app.add_sticker(None);
    }

    #[test]
    fn test_added_sticker_is_selected() {
        let mut app = create_test_app();
        add(&mut app, "⭐");

        assert_eq!(app.catalog().stickers().last().map(String::as_str), Some("⭐"));
        assert_eq!(app.session().pen().tool(), &Tool::Sticker("⭐".to_owned()));
        assert!(app.new_sticker.is_empty());
    }

    #[test]
    fn test_removing_selected_sticker_reverts_to_marker() {
        let mut app = create_test_app();
        add(&mut app, "⭐");

        app.remove_sticker("⭐", None);

        assert!(!app.catalog().contains("⭐"));
        assert_eq!(app.session().pen().tool(), &Tool::Marker);
    }

    #[test]
    fn test_removing_other_sticker_keeps_tool() {
        let mut app = create_test_app();
        add(&mut app, "⭐");

        app.remove_sticker("👻", None);

        assert!(!app.catalog().contains("👻"));
        assert_eq!(app.session().pen().tool(), &Tool::Sticker("⭐".to_owned()));
    }

    #[test]
    fn test_empty_add_changes_nothing() {
        let mut app = create_test_app();
        let before = app.catalog().stickers().to_vec();

        add(&mut app, "   ");

        assert_eq!(app.catalog().stickers(), before.as_slice());
        assert_eq!(app.session().pen().tool(), &Tool::Marker);
    }
}
