use crate::app::PinviewApp;

pub fn show(ctx: &egui::Context, app: &mut PinviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref path) = app.ui_state.image_set_path {
                ui.label(path.display().to_string());
                ui.separator();
            }
            if app.ui_state.loading {
                ui.spinner();
                ui.separator();
            }
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(viewport) = app.session.viewport() {
                ui.label(format!("Zoom: {:.0}%", viewport.zoom * 100.0));
                ui.separator();
            }
            ui.label(format!("Markers: {}", app.board.markers().len()));
            ui.separator();
            ui.label(format!("Overlays: {}", app.overlays.len()));
            if app.gesture.is_armed() {
                ui.separator();
                ui.label("Placing marker");
            }
        });

        ui.add_space(2.0);
    });
}
