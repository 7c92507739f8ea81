/// Texture and labels for the image currently on screen.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub viewing_label: String,
}
