use pinview_core::geometry::PixelPoint;
use pinview_core::overlay::Overlay;
use pinview_core::viewport::{ViewTransform, ZoomPanViewport};

use crate::convert::{to_color32, to_pos2};
use crate::overlay_layer::OverlayLayer;

const REFERENCE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 220, 255);
const MARKER_RADIUS: f32 = 6.0;

/// Paint every overlay at its current screen position.
pub fn draw(painter: &egui::Painter, layer: &OverlayLayer, viewport: &ZoomPanViewport) {
    for overlay in layer.iter() {
        match overlay {
            Overlay::ReferenceSquare(rect) => {
                let min = to_pos2(viewport.image_to_pixel(rect.min()));
                let max = to_pos2(viewport.image_to_pixel(rect.max()));
                painter.rect_stroke(
                    egui::Rect::from_min_max(min, max),
                    0.0,
                    egui::Stroke::new(2.0, REFERENCE_COLOR),
                    egui::epaint::StrokeKind::Outside,
                );
            }
            Overlay::ReferencePin(point) => {
                draw_pin(painter, to_pos2(viewport.image_to_pixel(*point)));
            }
            Overlay::Marker {
                position,
                label,
                color,
                ..
            } => {
                let center = to_pos2(viewport.image_to_pixel(*position));
                draw_marker(painter, center, to_color32(*color), label);
            }
        }
    }
}

/// Ghost marker following an in-flight drag placement.
pub fn draw_preview(painter: &egui::Painter, at: PixelPoint) {
    let center = to_pos2(at);
    painter.circle_filled(center, MARKER_RADIUS, egui::Color32::from_white_alpha(90));
    painter.circle_stroke(center, MARKER_RADIUS, egui::Stroke::new(1.5, egui::Color32::WHITE));
}

fn draw_pin(painter: &egui::Painter, tip: egui::Pos2) {
    let head = tip - egui::vec2(0.0, 18.0);
    painter.line_segment([tip, head], egui::Stroke::new(2.0, REFERENCE_COLOR));
    painter.circle_filled(head, 5.0, REFERENCE_COLOR);
    painter.circle_stroke(head, 5.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
}

fn draw_marker(painter: &egui::Painter, center: egui::Pos2, color: egui::Color32, label: &str) {
    painter.circle_filled(center, MARKER_RADIUS, color);
    painter.circle_stroke(center, MARKER_RADIUS, egui::Stroke::new(1.5, egui::Color32::BLACK));
    painter.text(
        center + egui::vec2(MARKER_RADIUS + 4.0, 0.0),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}
