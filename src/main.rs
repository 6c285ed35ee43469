use mu_painter::gui::{self, PainterApp};
use mu_painter::logging;
use mu_painter::settings::{Settings, DEFAULT_SETTINGS_FILE};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings = match Settings::load(DEFAULT_SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(err) => {
            logging::init(false);
            tracing::error!("failed to load settings: {err:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(settings.debug_logging);

    match panic::catch_unwind(AssertUnwindSafe(|| run(settings))) {
        Ok(Ok(())) => {
            tracing::info!("painter closed");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            tracing::error!("{err:#}");
            tracing::error!(
                "a graphical display with OpenGL support is required; check DISPLAY/WAYLAND_DISPLAY and your GPU drivers"
            );
            ExitCode::FAILURE
        }
        Err(payload) => {
            let panic_message = if let Some(message) = payload.downcast_ref::<&str>() {
                (*message).to_string()
            } else if let Some(message) = payload.downcast_ref::<String>() {
                message.clone()
            } else {
                "unknown panic payload".to_string()
            };
            tracing::error!(panic_message, "painter shut down after an unexpected failure");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> anyhow::Result<()> {
    let options = gui::native_options(&settings);
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|cc| Box::new(PainterApp::new(&cc.egui_ctx))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the painter window: {err}"))
}
