use anyhow::Context;

use shoplist_infra::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shoplist_observability::init();

    let config = ServerConfig::from_env().context("failed to load server config")?;
    let addr = config.socket_addr();

    let app = shoplist_api::app::build_app(shoplist_api::app::services::in_memory_store());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
