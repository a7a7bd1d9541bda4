use recipe_chef::{api, Config, GeminiClient, RecipeMcpServer};
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Gemini API key loaded ({})", config.api_key.preview());
    tracing::info!("Gemini model configured: {}", config.model);
    tracing::info!("Upstream base URL: {}", config.base_url);

    let client = Arc::new(GeminiClient::new(&config)?);
    let ct = tokio_util::sync::CancellationToken::new();

    // MCP transport shares the HTTP listener
    let (sse_server, sse_router) = SseServer::new(SseServerConfig {
        bind: config.bind_addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: ct.clone(),
        sse_keep_alive: None,
    });

    let mcp_client = client.clone();
    let mcp_ct = sse_server.with_service(move || RecipeMcpServer::new(mcp_client.clone()));

    let app = api::router(client).merge(sse_router);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Recipe server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::info!("Shutting down...");
            mcp_ct.cancel();
            ct.cancel();
        })
        .await?;

    Ok(())
}
