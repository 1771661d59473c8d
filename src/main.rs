mod app;
#[cfg(not(target_arch = "wasm32"))]
mod cli;
mod config;
mod domain;
mod infra;
mod ui;
mod usecase;


use crate::app::App;
use crate::config::ViewerConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let cli = cli::Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("regview: {err:#}");
            std::process::exit(2);
        }
    };

    init_logging(&config.log_level);
    tracing::info!(
        source = %config.data_source,
        page_size = config.page_size,
        schema = ?config.schema,
        "starting regview"
    );

    launch(config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    launch(ViewerConfig::default());
}

/// `RUST_LOG` wins over the configured level.
#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("regview={level}")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "desktop")]
fn launch(config: ViewerConfig) {
    let mut desktop = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Regulations"));
    match config::default_webview_data_dir() {
        Ok(dir) => desktop = desktop.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %err, "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: ViewerConfig) {
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
