use tracing_subscriber::{EnvFilter, fmt};

use event_registrations::shell::config::AppConfig;
use event_registrations::shell::http::router;
use event_registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        events_file = %config.events_file.display(),
        registrations_file = %config.registrations_file.display(),
        "opening record files"
    );
    let state = AppState::from_config(&config).await?;

    let app = router(state);

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Event registrations API: http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
