use crate::app::PinviewApp;
use crate::convert::{to_egui_rect, to_pixel_point, to_pixel_rect};
use crate::panels::{overlays, placement};

pub fn show(ctx: &egui::Context, app: &mut PinviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let canvas = to_pixel_rect(rect);
        app.ui_state.canvas_rect = Some(canvas);
        if let Some(viewport) = app.session.viewport_mut() {
            viewport.set_canvas(canvas);
        }

        let texture_id = app
            .viewport
            .texture
            .as_ref()
            .filter(|_| app.session.is_ready())
            .map(|t| t.id());
        let Some(texture_id) = texture_id else {
            show_placeholder(ui, app.ui_state.loading);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_zoom(ui, &response, app);
        handle_pan(ui, &response, app);
        placement::handle_pointer(ctx, ui, &response, app);

        if response.double_clicked() && !app.gesture.is_armed() {
            app.fit_view();
        }

        app.sync_overlays();

        let Some(viewport) = app.session.viewport() else {
            return;
        };
        let painter = ui.painter_at(rect);
        draw_image(&painter, texture_id, to_egui_rect(viewport.image_rect()));
        overlays::draw(&painter, &app.overlays, viewport);
        if let Some(preview) = app.gesture.preview() {
            overlays::draw_preview(&painter, preview);
        }

        draw_viewing_label(ui, rect, &app.viewport.viewing_label);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut PinviewApp) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }
    let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };

    let zoom_factor = (scroll_delta as f64 * 0.005).exp();
    let (min, max) = (app.settings.min_zoom, app.settings.max_zoom);
    if let Some(viewport) = app.session.viewport_mut() {
        viewport.zoom_at(to_pixel_point(mouse_pos), zoom_factor, min, max);
    }
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut PinviewApp) {
    let command = ui.input(|i| i.modifiers.command);
    let primary_pan = response.dragged_by(egui::PointerButton::Primary)
        && !command
        && !app.gesture.is_armed();
    if response.dragged_by(egui::PointerButton::Middle) || primary_pan {
        let delta = response.drag_delta();
        if let Some(viewport) = app.session.viewport_mut() {
            viewport.pan_by(delta.x as f64, delta.y as f64);
        }
    }
}

fn draw_image(painter: &egui::Painter, texture_id: egui::TextureId, img_rect: egui::Rect) {
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    let text = if loading {
        "Loading..."
    } else {
        "Open an image set to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
