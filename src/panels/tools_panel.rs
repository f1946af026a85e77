use crate::SketchApp;
use crate::pen::Tool;

/// Marker presets, width and hue controls
pub fn marker_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("marker_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Marker Size");

            let pen = app.session.pen();
            let on_marker = *pen.tool() == Tool::Marker;
            let thickness = pen.thickness();
            let color = pen.color();
            let mut width = pen.thickness_normalized();
            let mut hue = pen.hue();

            ui.horizontal(|ui| {
                let thin = on_marker && thickness == app.config.thin_thickness;
                let thick = on_marker && thickness == app.config.thick_thickness;
                if ui.selectable_label(thin, "thin").clicked() {
                    app.session.select_thin_marker();
                }
                if ui.selectable_label(thick, "thick").clicked() {
                    app.session.select_thick_marker();
                }
            });

            ui.separator();

            if ui.add(egui::Slider::new(&mut width, 0.0..=1.0).text("width")).changed() {
                app.session.set_thickness_normalized(width);
            }
            if ui.add(egui::Slider::new(&mut hue, 0.0..=359.0).text("hue")).changed() {
                app.session.set_hue(hue);
            }

            ui.horizontal(|ui| {
                ui.label(format!("{thickness:.1}px"));
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, color);
            });
        });
}
