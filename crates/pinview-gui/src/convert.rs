use pinview_core::geometry::{PixelPoint, PixelRect};
use pinview_core::markers::MarkerColor;
use pinview_core::source::SourceImage;

pub fn source_to_color_image(image: &SourceImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    )
}

pub fn to_pixel_point(pos: egui::Pos2) -> PixelPoint {
    PixelPoint::new(pos.x as f64, pos.y as f64)
}

pub fn to_pos2(p: PixelPoint) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

pub fn to_pixel_rect(rect: egui::Rect) -> PixelRect {
    PixelRect {
        min: to_pixel_point(rect.min),
        max: to_pixel_point(rect.max),
    }
}

pub fn to_egui_rect(rect: PixelRect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos2(rect.min), to_pos2(rect.max))
}

pub fn to_color32(color: MarkerColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
