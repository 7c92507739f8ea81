use pinview_core::markers::{MarkerId, SidebarEntry};

use crate::app::PinviewApp;
use crate::convert::to_color32;
use crate::panels::section_header;

/// What the user asked for in the sidebar this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    AddMarker,
    CancelPlacement,
    DeleteMarker(MarkerId),
    ClearMarkers,
    PrevImage,
    NextImage,
    SetShowReferencePin(bool),
}

pub fn show(ctx: &egui::Context, app: &mut PinviewApp) {
    let entries = app.board.sidebar_entries();
    let image_status = app
        .images
        .as_ref()
        .map(|set| format!("{}/{}", set.active_index() + 1, set.len()));
    let image_name = app.images.as_ref().map(|set| set.active().display_name());
    let armed = app.gesture.is_armed();
    let show_pin = app.show_reference_pin;

    let mut actions = Vec::new();
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(240.0)
        .show_animated(ctx, app.ui_state.sidebar_open, |ui| {
            ui.add_space(4.0);
            ui.heading("Menu");
            ui.separator();

            section_header(ui, "Image", image_status.as_deref());
            ui.label(image_name.as_deref().unwrap_or("No image set"));
            ui.horizontal(|ui| {
                let enabled = image_status.is_some();
                if ui.add_enabled(enabled, egui::Button::new("< Prev")).clicked() {
                    actions.push(SidebarAction::PrevImage);
                }
                if ui.add_enabled(enabled, egui::Button::new("Next >")).clicked() {
                    actions.push(SidebarAction::NextImage);
                }
            });
            ui.add_space(6.0);

            egui::CollapsingHeader::new("Pin options")
                .default_open(true)
                .show(ui, |ui| {
                    let mut show = show_pin;
                    if ui.checkbox(&mut show, "Show reference pin").changed() {
                        actions.push(SidebarAction::SetShowReferencePin(show));
                    }
                });

            egui::CollapsingHeader::new(format!("Markers ({})", entries.len()))
                .default_open(true)
                .show(ui, |ui| {
                    marker_controls(ui, armed, &mut actions);
                    ui.separator();
                    marker_list(ui, &entries, &mut actions);
                });
        });

    for action in actions {
        app.apply_sidebar_action(action);
    }
}

fn marker_controls(ui: &mut egui::Ui, armed: bool, actions: &mut Vec<SidebarAction>) {
    if armed {
        ui.label(
            egui::RichText::new("Click or drag on the image to place")
                .color(egui::Color32::from_rgb(255, 200, 0)),
        );
        if ui.button("Cancel").clicked() {
            actions.push(SidebarAction::CancelPlacement);
        }
    } else if ui.button("+ Add marker").clicked() {
        actions.push(SidebarAction::AddMarker);
    }
    ui.small("Ctrl-click places directly, right-click deletes");
}

fn marker_list(ui: &mut egui::Ui, entries: &[SidebarEntry], actions: &mut Vec<SidebarAction>) {
    if entries.is_empty() {
        ui.label(egui::RichText::new("No markers").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 32.0).max(60.0))
        .show(ui, |ui| {
            for entry in entries {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, to_color32(entry.color));
                    ui.label(&entry.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Delete marker").clicked() {
                            actions.push(SidebarAction::DeleteMarker(entry.id));
                        }
                    });
                });
            }
        });

    if ui.button("Clear all").clicked() {
        actions.push(SidebarAction::ClearMarkers);
    }
}
