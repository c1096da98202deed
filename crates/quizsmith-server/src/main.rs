use eyre::Result;

use quizsmith_server::config::ServerConfig;
use quizsmith_server::state::AppState;
use quizsmith_server::{aws, router, templates};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let aws_config = aws::build_aws_config(&config.region).await;
    let tera = templates::build_templates().map_err(|e| eyre::eyre!("template error: {e}"))?;

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, aws_config, tera);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "server listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
