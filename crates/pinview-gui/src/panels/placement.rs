use pinview_core::consts::MARKER_HIT_RADIUS_PX;
use pinview_core::translate::hit_test;

use crate::app::PinviewApp;
use crate::convert::to_pixel_point;

/// Route pointer input on the viewport to marker placement and deletion.
pub fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut PinviewApp,
) {
    handle_placement(ui, response, app);
    handle_delete(response, app);
    update_cursor(ctx, response, app);
}

fn handle_placement(ui: &egui::Ui, response: &egui::Response, app: &mut PinviewApp) {
    let (pressed, released, pos, command) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.modifiers.command,
        )
    });
    let Some(pos) = pos.map(to_pixel_point) else {
        return;
    };

    if pressed && response.hovered() {
        if let Some(commit) = app.gesture.press(pos, command) {
            app.place_marker_at(commit);
        }
    }

    if app.gesture.is_placing() {
        app.gesture.drag(pos);
        if released {
            if let Some(commit) = app.gesture.release(pos) {
                app.place_marker_at(commit);
            }
        }
    }
}

fn handle_delete(response: &egui::Response, app: &mut PinviewApp) {
    if !response.secondary_clicked() {
        return;
    }
    let Some(pos) = response.interact_pointer_pos() else {
        return;
    };
    let hit = hit_test(
        to_pixel_point(pos),
        app.board.markers(),
        MARKER_HIT_RADIUS_PX,
        &app.session,
    );
    if let Some(id) = hit {
        app.delete_marker(id);
    }
}

fn update_cursor(ctx: &egui::Context, response: &egui::Response, app: &PinviewApp) {
    if !response.hovered() {
        return;
    }
    if app.gesture.is_armed() || ctx.input(|i| i.modifiers.command) {
        ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
    } else if response.dragged() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    }
}
