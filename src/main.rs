use tokio::net::TcpListener;

use docu_chat::infrastructure::di::create_application_container_with;
use docu_chat::infrastructure::observability::{
    DEFAULT_GLOBAL_HANDLER, TracingConfig, init_tracing, set_global_handler_from_str,
};
use docu_chat::presentation::config::{active_profiles, load_active_settings};
use docu_chat::presentation::create_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = load_active_settings()?;
    init_tracing(&TracingConfig::from_settings(&settings), settings.server.port)?;
    set_global_handler_from_str(DEFAULT_GLOBAL_HANDLER)?;
    tracing::info!(
        profiles = ?active_profiles(),
        environment = %settings.server.env_name,
        "Settings loaded"
    );

    let container = create_application_container_with(settings);
    let app = create_app(&container)?;

    let addr = app.address();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
