mod app;
mod convert;
mod messages;
mod overlay_layer;
mod panels;
mod states;
mod worker;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pinview", version, about = "Image viewer with click-to-place markers")]
struct Args {
    /// Image set file (TOML) to open on startup
    #[arg(short, long)]
    image_set: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pinview"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinview",
        options,
        Box::new(move |cc| Ok(Box::new(app::PinviewApp::new(&cc.egui_ctx, args.image_set)))),
    )
}
