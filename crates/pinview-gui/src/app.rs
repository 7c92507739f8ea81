use std::path::PathBuf;
use std::sync::mpsc;

use tracing::{debug, info};

use pinview_core::config::{ImageSetConfig, ViewerSettings};
use pinview_core::geometry::{PixelPoint, PixelRect};
use pinview_core::gesture::PlacementGesture;
use pinview_core::image_set::ImageSet;
use pinview_core::markers::{MarkerBoard, MarkerId};
use pinview_core::overlay::{OverlaySynchronizer, RedrawOutcome};
use pinview_core::session::{SessionEvent, SessionState, ViewerSession};
use pinview_core::source::SourceImage;
use pinview_core::viewport::ZoomPanViewport;

use crate::convert::source_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::overlay_layer::OverlayLayer;
use crate::panels;
use crate::panels::sidebar::SidebarAction;
use crate::states::{UIState, ViewportState};
use crate::worker;

/// Canvas assumed for a session opened before the viewport was ever laid out.
const FALLBACK_CANVAS: [f64; 2] = [1024.0, 768.0];

pub struct PinviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub settings: ViewerSettings,
    pub images: Option<ImageSet>,
    pub session: ViewerSession<ZoomPanViewport>,
    pub board: MarkerBoard,
    pub overlays: OverlayLayer,
    pub sync: OverlaySynchronizer,
    pub gesture: PlacementGesture,
    pub show_reference_pin: bool,
    pub show_about: bool,
    redraw_pending: bool,
}

impl PinviewApp {
    pub fn new(ctx: &egui::Context, image_set: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let mut app = Self::with_channels(cmd_tx, result_rx);
        if let Some(path) = image_set {
            app.load_image_set(path);
        }
        app
    }

    fn with_channels(
        cmd_tx: mpsc::Sender<WorkerCommand>,
        result_rx: mpsc::Receiver<WorkerResult>,
    ) -> Self {
        let settings = ViewerSettings::default();
        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            board: MarkerBoard::new(settings.marker_palette.clone()),
            show_reference_pin: settings.show_reference_pin,
            settings,
            images: None,
            session: ViewerSession::new(),
            overlays: OverlayLayer::default(),
            sync: OverlaySynchronizer::new(),
            gesture: PlacementGesture::default(),
            show_about: false,
            redraw_pending: false,
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn load_image_set(&mut self, path: PathBuf) {
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::LoadImageSet { path });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageSetLoaded { path, config } => {
                    self.apply_image_set(path, config);
                }
                WorkerResult::SourceOpened {
                    generation,
                    index,
                    image,
                } => {
                    self.attach_source(ctx, generation, index, &image);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn apply_image_set(&mut self, path: PathBuf, config: ImageSetConfig) {
        let (settings, images) = match config.into_parts() {
            Ok(parts) => parts,
            Err(e) => {
                self.ui_state.loading = false;
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        info!(path = %path.display(), images = images.len(), "Image set applied");
        self.ui_state.add_log(format!(
            "Opened image set {} ({} images)",
            path.display(),
            images.len()
        ));

        self.board = MarkerBoard::new(settings.marker_palette.clone());
        self.show_reference_pin = settings.show_reference_pin;
        self.settings = settings;
        self.images = Some(images);
        self.ui_state.image_set_path = Some(path);
        self.gesture.disarm();
        self.open_active_image();
    }

    /// Start a new viewer session for the active image.
    fn open_active_image(&mut self) {
        let Some(images) = &self.images else {
            return;
        };
        let index = images.active_index();
        let path = images.active().source.clone();
        let generation = self.session.open();
        self.clear_display();
        self.board.set_active_image(index);
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::OpenSource {
            generation,
            index,
            path,
        });
    }

    fn attach_source(
        &mut self,
        ctx: &egui::Context,
        generation: u64,
        index: usize,
        image: &SourceImage,
    ) {
        if generation != self.session.generation() {
            debug!(generation, index, "Dropping decode for a superseded session");
            return;
        }

        let canvas = self.ui_state.canvas_rect.unwrap_or_else(|| {
            PixelRect::from_min_size(PixelPoint::default(), FALLBACK_CANVAS[0], FALLBACK_CANVAS[1])
        });
        let mut viewport =
            ZoomPanViewport::new(canvas, (image.width as f64, image.height as f64));
        viewport.fit(self.settings.min_zoom, self.settings.max_zoom);

        if !self.session.attach(generation, viewport) {
            return;
        }

        let texture = ctx.load_texture(
            "viewport",
            source_to_color_image(image),
            egui::TextureOptions::LINEAR,
        );
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some([image.width as usize, image.height as usize]);
        self.viewport.viewing_label = self
            .images
            .as_ref()
            .map(|set| format!("{} ({}/{})", set.active().display_name(), index + 1, set.len()))
            .unwrap_or_default();
        self.ui_state.loading = false;
    }

    /// React to session lifecycle changes.
    fn handle_session_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::Opened { generation } => {
                    debug!(generation, "Session opened, scheduling overlay redraw");
                    self.request_redraw();
                }
                SessionEvent::Closed { generation } => {
                    // A close queued by a reopen refers to a session already replaced.
                    if generation != self.session.generation()
                        || self.session.state() != SessionState::Closed
                    {
                        debug!(generation, "Ignoring close of a superseded session");
                        continue;
                    }
                    debug!(generation, "Session closed, discarding overlays");
                    self.clear_display();
                }
            }
        }
    }

    /// Drop the texture and overlays tied to the previous session.
    fn clear_display(&mut self) {
        self.overlays.reset();
        self.viewport.texture = None;
        self.viewport.image_size = None;
        self.viewport.viewing_label.clear();
    }

    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Bring the overlay layer in line with marker state if anything changed.
    pub fn sync_overlays(&mut self) {
        if !self.redraw_pending {
            return;
        }
        let Some(images) = &self.images else {
            return;
        };
        let outcome = self.sync.redraw(
            self.board.markers(),
            images.active(),
            self.show_reference_pin,
            &self.session,
            &mut self.overlays,
        );
        if let RedrawOutcome::Drawn { .. } = outcome {
            self.redraw_pending = false;
        }
    }

    /// Place a marker at a viewport pixel.
    pub fn place_marker_at(&mut self, pixel: PixelPoint) {
        if let Some(marker) = self.board.add_marker(pixel, None, &self.session) {
            self.ui_state.add_log(format!(
                "Placed {} at ({:.4}, {:.4})",
                marker.label, marker.position.x, marker.position.y
            ));
            self.request_redraw();
        }
    }

    pub fn delete_marker(&mut self, id: MarkerId) {
        if self.board.delete_marker(id) {
            self.request_redraw();
        }
    }

    pub fn next_image(&mut self) {
        if let Some(images) = &mut self.images {
            images.next();
            self.open_active_image();
            self.request_redraw();
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(images) = &mut self.images {
            images.prev();
            self.open_active_image();
            self.request_redraw();
        }
    }

    pub fn set_show_reference_pin(&mut self, show: bool) {
        if self.show_reference_pin != show {
            self.show_reference_pin = show;
            self.request_redraw();
        }
    }

    pub fn fit_view(&mut self) {
        let (min, max) = (self.settings.min_zoom, self.settings.max_zoom);
        if let Some(viewport) = self.session.viewport_mut() {
            viewport.fit(min, max);
        }
    }

    pub fn apply_sidebar_action(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::AddMarker => self.gesture.arm(),
            SidebarAction::CancelPlacement => self.gesture.disarm(),
            SidebarAction::DeleteMarker(id) => self.delete_marker(id),
            SidebarAction::ClearMarkers => {
                self.board.clear_all();
                self.request_redraw();
            }
            SidebarAction::PrevImage => self.prev_image(),
            SidebarAction::NextImage => self.next_image(),
            SidebarAction::SetShowReferencePin(show) => self.set_show_reference_pin(show),
        }
    }
}

impl eframe::App for PinviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_session_events();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Pinview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Pinview");
                        ui.label("Image markers and reference pins");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use pinview_core::geometry::NormalizedPoint;

    const TWO_IMAGES: &str = r#"
[[images]]
source = "a.png"
reference_square = { x = 0.1, y = 0.1, width = 0.2, height = 0.2 }
reference_pin = { x = 0.5, y = 0.5 }

[[images]]
source = "b.png"
reference_square = { x = 0.3, y = 0.3, width = 0.1, height = 0.1 }
"#;

    struct Harness {
        app: PinviewApp,
        ctx: egui::Context,
        cmd_rx: mpsc::Receiver<WorkerCommand>,
        result_tx: mpsc::Sender<WorkerResult>,
    }

    impl Harness {
        /// App with a loaded two-image set whose first decode is still in flight.
        fn loaded() -> Self {
            let (cmd_tx, cmd_rx) = mpsc::channel();
            let (result_tx, result_rx) = mpsc::channel();
            let mut harness = Self {
                app: PinviewApp::with_channels(cmd_tx, result_rx),
                ctx: egui::Context::default(),
                cmd_rx,
                result_tx,
            };
            let config = ImageSetConfig::parse(TWO_IMAGES, Path::new(".")).unwrap();
            harness.deliver(WorkerResult::ImageSetLoaded {
                path: PathBuf::from("set.toml"),
                config,
            });
            harness
        }

        /// Run the per-frame bookkeeping that precedes the panels.
        fn deliver(&mut self, result: WorkerResult) {
            self.result_tx.send(result).unwrap();
            self.app.poll_results(&self.ctx);
            self.app.handle_session_events();
        }

        /// The most recent `OpenSource` request as `(generation, index)`.
        fn last_open_request(&self) -> (u64, usize) {
            let mut last = None;
            while let Ok(cmd) = self.cmd_rx.try_recv() {
                if let WorkerCommand::OpenSource {
                    generation, index, ..
                } = cmd
                {
                    last = Some((generation, index));
                }
            }
            last.expect("no OpenSource command sent")
        }

        fn decode(&mut self, generation: u64, index: usize) {
            self.deliver(WorkerResult::SourceOpened {
                generation,
                index,
                image: SourceImage {
                    width: 4,
                    height: 4,
                    rgba: vec![0; 64],
                },
            });
        }

        fn decode_requested(&mut self) {
            let (generation, index) = self.last_open_request();
            self.decode(generation, index);
        }
    }

    #[test]
    fn test_next_image_keeps_new_texture() {
        let mut h = Harness::loaded();
        h.decode_requested();
        assert!(h.app.session.is_ready());

        h.app.next_image();
        assert!(h.app.viewport.texture.is_none());
        // The close of the first session is drained in the same frame as the
        // second attach.
        h.decode_requested();

        assert!(h.app.session.is_ready());
        assert!(h.app.viewport.texture.is_some());
        assert_eq!(h.app.viewport.image_size, Some([4, 4]));
    }

    #[test]
    fn test_close_clears_display() {
        let mut h = Harness::loaded();
        h.decode_requested();
        h.app.sync_overlays();
        assert_eq!(h.app.overlays.len(), 2);

        h.app.session.close();
        h.app.handle_session_events();

        assert!(h.app.viewport.texture.is_none());
        assert_eq!(h.app.overlays.len(), 0);
    }

    #[test]
    fn test_skipped_redraw_stays_pending_until_open() {
        let mut h = Harness::loaded();
        h.app.request_redraw();
        h.app.sync_overlays();
        assert!(h.app.redraw_pending);
        assert_eq!(h.app.overlays.len(), 0);

        h.decode_requested();
        h.app.sync_overlays();

        assert!(!h.app.redraw_pending);
        // Reference square and reference pin.
        assert_eq!(h.app.overlays.len(), 2);
    }

    #[test]
    fn test_next_image_switches_marker_list() {
        let mut h = Harness::loaded();
        h.decode_requested();
        h.app.board.place(NormalizedPoint::new(0.25, 0.75), None);
        assert_eq!(h.app.board.markers().len(), 1);

        h.app.next_image();
        assert_eq!(h.app.board.active_image(), 1);
        assert!(h.app.board.markers().is_empty());

        h.app.prev_image();
        assert_eq!(h.app.board.active_image(), 0);
        assert_eq!(h.app.board.markers().len(), 1);
    }

    #[test]
    fn test_superseded_decode_dropped() {
        let mut h = Harness::loaded();
        let (first, _) = h.last_open_request();

        h.app.next_image();
        let (second, index) = h.last_open_request();
        assert_ne!(first, second);

        h.decode(first, 0);
        assert!(!h.app.session.is_ready());
        assert!(h.app.viewport.texture.is_none());

        h.decode(second, index);
        assert!(h.app.session.is_ready());
        assert_eq!(h.app.session.generation(), second);
    }
}
