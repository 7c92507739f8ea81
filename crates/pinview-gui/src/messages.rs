use std::path::PathBuf;

use pinview_core::config::ImageSetConfig;
use pinview_core::source::SourceImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Read and validate an image set file.
    LoadImageSet { path: PathBuf },

    /// Decode the source image of entry `index` for session `generation`.
    OpenSource {
        generation: u64,
        index: usize,
        path: PathBuf,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageSetLoaded {
        path: PathBuf,
        config: ImageSetConfig,
    },
    SourceOpened {
        generation: u64,
        index: usize,
        image: SourceImage,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
