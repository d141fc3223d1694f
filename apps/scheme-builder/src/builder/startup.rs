use super::*;

pub(crate) fn run() -> Result<(), eframe::Error> {
    if let Err(error) = init_tracing() {
        eprintln!("Scheme Builder logging setup error: {error}");
    }

    let options = match LaunchOptions::from_process() {
        Ok(options) => options,
        Err(error) => {
            tracing::error!(%error, "scheme builder startup error");
            return Ok(());
        }
    };
    tracing::info!(initial_uri = %options.editor.initial_uri, "starting scheme builder");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([880.0, 720.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(SchemeBuilderApp::new(options)))),
    )
}

pub(super) fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}
