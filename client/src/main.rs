//! # Greenstein AI Desktop Client
//!
//! Binary entrypoint: initializes structured logging, then hands control
//! to eframe which drives the [`App`] render loop.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use greenstein_client::ui::theme;
use greenstein_client::App;

fn main() -> eframe::Result<()> {
    init_tracing();
    tracing::info!("Starting Greenstein AI client");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Greenstein AI")
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Greenstein AI",
        options,
        Box::new(|cc| {
            theme::apply_visuals(&cc.egui_ctx);
            Ok(Box::new(App::new()))
        }),
    )
}

/// Structured logging to stderr.
///
/// Filter defaults keep dependency noise down; override with `RUST_LOG`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("greenstein_client=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
