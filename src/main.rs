use tracing::info;
use web_pos::config::Config;
use web_pos::lifecycle::{setup_tracing, PosSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    setup_tracing(&config.logging.filter);

    let system = PosSystem::new(&config.actors);
    let app = web_pos::api::router(system.clients(), config.server.max_upload_bytes);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "web-pos listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    system.shutdown().await?;
    Ok(())
}
