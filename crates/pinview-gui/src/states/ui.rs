use std::path::PathBuf;

use pinview_core::geometry::PixelRect;

/// Overall UI state.
pub struct UIState {
    pub image_set_path: Option<PathBuf>,
    pub sidebar_open: bool,
    /// Viewport rect from the last frame, used to size a freshly opened session.
    pub canvas_rect: Option<PixelRect>,
    pub loading: bool,
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            image_set_path: None,
            sidebar_open: true,
            canvas_rect: None,
            loading: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
