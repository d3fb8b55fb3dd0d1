mod app_state;
mod cli;
mod demo;

use std::borrow::Cow;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use tiramisu_bridge::{PreloadSource, TiramisuOptions};
use tiramisu_common::ConfigError;
use tiramisu_config::TiramisuConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Tiramisu panicked: {info}");
        default_hook(info);
    }));
}

fn load_config(path: Option<&Path>) -> Result<TiramisuConfig, ConfigError> {
    match path {
        Some(path) => tiramisu_config::toml_loader::load_from_path(path),
        None => tiramisu_config::load_config(),
    }
}

fn init_logging(override_directive: Option<&str>, config: &TiramisuConfig) {
    let fallback = format!("tiramisu={}", config.logging.level.as_str());
    let directive = override_directive.unwrap_or(&fallback);
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse().or_else(|_| fallback.parse()) {
        Ok(d) => filter.add_directive(d),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Logging level comes from config, so load it first and report later
    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(args.log_level.as_deref(), &config);

    tracing::info!("Tiramisu v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    config.window.debug |= args.debug;

    let page: Cow<'static, str> = match &args.html {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(html) => Cow::Owned(html),
            Err(e) => {
                tracing::error!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Cow::Borrowed(demo::DEMO_PAGE),
    };

    let options = TiramisuOptions {
        preload: config
            .runtime
            .preload_path
            .clone()
            .map_or(PreloadSource::Embedded, PreloadSource::File),
        fs_api: config.runtime.fs_api,
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    let mut app = app_state::TiramisuApp::new(config, options, page, |host| {
        demo::bind(host);
        Ok(())
    });

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
