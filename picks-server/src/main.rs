use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser};
use picks_config::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigOverrides,
};
use picks_server::{AppState, create_app};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "picks-server")]
#[command(about = "Development host for the Personalized Picks preview")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Directory served as the site root
    #[arg(long, env = "PICKS_ASSET_ROOT")]
    root: Option<PathBuf>,

    /// Document returned for `/` and unknown paths, relative to the root
    #[arg(long, env = "PICKS_ENTRY_DOCUMENT")]
    entry: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "PICKS_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Alternate .env file
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Allow cross-origin requests from any origin
    #[arg(long, default_value_t = false)]
    dev: bool,
}

impl ServeArgs {
    fn loader_options(&self) -> ConfigLoaderOptions {
        ConfigLoaderOptions {
            config_path: self.config.clone(),
            env_file: self.env_file.clone(),
            overrides: ConfigOverrides {
                host: self.host.clone(),
                port: self.port,
                asset_root: self.root.clone(),
                entry_document: self.entry.clone(),
                dev_mode: self.dev.then_some(true),
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_server(cli.serve).await
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let ConfigLoad { config, warnings } =
        ConfigLoader::with_options(args.loader_options())
            .load()
            .context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file in use");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(warning = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(warning = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        assets.root = %config.assets.root().display(),
        assets.entry = %config.assets.entry_document.display(),
        dev_mode = config.dev_mode,
        "serving static assets"
    );

    let addr = config.server.bind_address();
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Preview available at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
