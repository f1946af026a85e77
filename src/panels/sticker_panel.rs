use crate::SketchApp;
use crate::pen::Tool;

/// Sticker buttons plus the add/remove controls
pub fn sticker_panel(app: &mut SketchApp, ctx: &egui::Context, frame: &mut eframe::Frame) {
    egui::SidePanel::right("sticker_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Stickers");

            let field = ui.add(egui::TextEdit::singleline(&mut app.new_sticker).hint_text("🐸"));
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add a sticker").clicked() || submitted {
                app.add_sticker(frame.storage_mut());
            }

            ui.separator();

            let selected = match app.session.pen().tool() {
                Tool::Sticker(glyph) => Some(glyph.clone()),
                Tool::Marker => None,
            };
            let mut chosen = None;
            let mut removed = None;
            for glyph in app.catalog.stickers() {
                ui.horizontal(|ui| {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ui
                        .selectable_label(is_selected, egui::RichText::new(glyph).size(20.0))
                        .clicked()
                    {
                        chosen = Some(glyph.clone());
                    }
                    if ui.small_button("✖").on_hover_text("Remove sticker").clicked() {
                        removed = Some(glyph.clone());
                    }
                });
            }

            if let Some(glyph) = chosen {
                app.session.select_sticker(glyph);
            }
            if let Some(glyph) = removed {
                app.remove_sticker(&glyph, frame.storage_mut());
            }
        });
}
