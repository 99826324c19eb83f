//! HTTP server for the Menu Allergen Engine.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu_allergen_engine::api::{AppState, create_router};
use menu_allergen_engine::config::ConfigLoader;

/// Serves allergen screening for school meal menus over HTTP.
#[derive(Parser, Debug)]
#[command(name = "menu-allergen-engine", version, about)]
struct Args {
    /// Directory holding program.yaml, allergens.yaml and schools.yaml
    #[arg(long, env = "MBG_CONFIG_DIR", default_value = "./config/mbg")]
    config_dir: PathBuf,

    /// Address to listen on
    #[arg(long, env = "MBG_BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: String,
}

/// Loads the program configuration and serves the API until shutdown.
///
/// # Errors
///
/// Returns an error if the tracing filter is invalid, the configuration
/// cannot be loaded, or the listener cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("menu_allergen_engine=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config_dir).with_context(|| {
        format!(
            "failed to load configuration from {}",
            args.config_dir.display()
        )
    })?;

    tracing::info!(
        program = %config.program().code,
        version = %config.program().version,
        schools = config.schools().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;

    tracing::info!("-- Starting Menu Allergen Engine on {}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
