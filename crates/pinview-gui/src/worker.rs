use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use tracing::{debug, warn};

use pinview_core::config::ImageSetConfig;
use pinview_core::source::SourceImage;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decode thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("pinview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, err: &anyhow::Error) {
    warn!("{err:#}");
    send(tx, ctx, WorkerResult::Error { message: format!("{err:#}") });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImageSet { path } => match load_image_set(&path) {
                Ok(config) => send(&tx, &ctx, WorkerResult::ImageSetLoaded { path, config }),
                Err(e) => send_error(&tx, &ctx, &e),
            },
            WorkerCommand::OpenSource {
                generation,
                index,
                path,
            } => {
                let start = Instant::now();
                match open_source(&path) {
                    Ok(image) => {
                        send_log(
                            &tx,
                            &ctx,
                            format!(
                                "Decoded {} ({}x{}) in {}ms",
                                path.display(),
                                image.width,
                                image.height,
                                start.elapsed().as_millis()
                            ),
                        );
                        send(
                            &tx,
                            &ctx,
                            WorkerResult::SourceOpened {
                                generation,
                                index,
                                image,
                            },
                        );
                    }
                    Err(e) => send_error(&tx, &ctx, &e),
                }
            }
        }
    }
    debug!("Worker channel closed");
}

fn load_image_set(path: &Path) -> anyhow::Result<ImageSetConfig> {
    ImageSetConfig::load(path)
        .with_context(|| format!("Failed to load image set {}", path.display()))
}

fn open_source(path: &Path) -> anyhow::Result<SourceImage> {
    SourceImage::open(path).with_context(|| format!("Failed to open image {}", path.display()))
}
