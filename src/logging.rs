use tracing_subscriber::EnvFilter;

/// Initialise logging for the painter.
///
/// Without `debug` the filter is pinned to `info` so a stray `RUST_LOG` in the
/// user's environment cannot flood the console with per-segment traces. With
/// `debug` the level drops to `debug` and `RUST_LOG` may override it.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(true)))
    } else {
        EnvFilter::new(filter_directive(false))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn filter_directive(debug: bool) -> &'static str {
    // eframe/winit are chatty at debug; keep them at warn either way.
    if debug {
        "debug,eframe=warn,winit=warn,egui_glow=warn"
    } else {
        "info,eframe=warn,winit=warn,egui_glow=warn"
    }
}
