//! Products API - REST server

use core_config::tracing::{init_tracing, install_color_eyre};
use products_api::{app, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let router = app(&state);

    info!(
        environment = ?state.config.environment,
        "Starting Products API on {}",
        state.config.server.address()
    );

    axum_helpers::create_app(router, &state.config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
