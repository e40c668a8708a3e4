mod app_state;
mod cli;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "dockview=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Dockview crashed ---");
        if let Some(location) = info.location() {
            eprintln!("at {}:{}", location.file(), location.line());
        }
        eprintln!("------------------------\n");
        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // Logging waits for the config so its level can apply; a load failure
    // is reported once logging is up.
    let loaded = dockview_config::load_config(args.config.as_deref());
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => dockview_config::DockviewConfig::default(),
    };
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive());
    init_logging(&directive);

    tracing::info!("Dockview v{} starting...", env!("CARGO_PKG_VERSION"));
    match (&loaded, &args.config) {
        (Err(e), _) => tracing::warn!("Config load failed, using defaults: {e}"),
        (Ok(_), Some(path)) => tracing::info!(path = %path.display(), "Using config override"),
        (Ok(_), None) => tracing::info!("Config loaded"),
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::DockviewApp::new(config, args.assets);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
