use crate::SketchApp;
use crate::app::APP_NAME;

/// The drawing canvas with its clear/export and undo/redo rows
pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(APP_NAME);

        let (response, painter) = ui.allocate_painter(app.config.canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        // Handle input
        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx) {
            app.session.handle_input(&event);
        }

        // Render the canvas
        app.renderer.paint(ctx, &painter, canvas_rect, &app.session);

        ui.horizontal(|ui| {
            if ui.button("clear").clicked() {
                app.session.clear();
            }
            if ui.button("export").clicked() {
                app.export();
            }
        });

        ui.horizontal(|ui| {
            let history = app.session.history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
            if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                app.session.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                app.session.redo();
            }
        });

        let history = app.session.history();
        ui.label(format!(
            "{} committed, {} to redo",
            history.len(),
            history.redo_stack().len()
        ));
        if let Some(status) = &app.status {
            ui.label(status.as_str());
        }
    });

    // Buttons run after the canvas was painted this frame
    if app.renderer.is_dirty() {
        ctx.request_repaint();
    }
}
