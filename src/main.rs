mod bootstrap;
mod config;
mod devserver;

use bootstrap::{HttpFetcher, LoadOutcome, Loader};
use config::Config;
use devserver::ProxySelector;
use std::env;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        // stdout is reserved for the --print-devserver JSON
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config_path = parse_config_path();
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    init_tracing(config.app.log_level.as_deref());

    let selector = ProxySelector::new(config.devserver.clone());

    // Bundler startup path: print the dev-server config and exit.
    if env::args().any(|arg| arg == "--print-devserver") {
        let bundler = selector.bundler_config(&config.app.env);
        match serde_json::to_string_pretty(&bundler) {
            Ok(json) => println!("{}", json),
            Err(e) => error!(error = %e, "Failed to serialize dev-server config"),
        }
        return;
    }

    let settings = selector.settings(&config.app.env);
    info!(
        config = %config_path,
        port = settings.port,
        target = %selector.target(),
        "Dev server settings computed"
    );

    // One bootstrap load against the backend, the same load a page
    // request would trigger.
    let fetcher = match HttpFetcher::new(selector.target()) {
        Ok(f) => f,
        Err(e) => {
            error!(error = %e, "Failed to create fetcher");
            return;
        }
    };

    let loader = Loader::new(config.app.env.clone(), config.loader.clone(), fetcher);

    match loader.load().await {
        LoadOutcome::Loaded(metadata) => {
            info!(
                app_name = ?metadata.app_name(),
                app_version = ?metadata.app_version(),
                "Bootstrap data loaded"
            );
        }
        LoadOutcome::Fallback { metadata, reason } => {
            warn!(
                error = %reason,
                app_name = ?metadata.app_name(),
                "Serving fallback bootstrap data"
            );
        }
    }
}
