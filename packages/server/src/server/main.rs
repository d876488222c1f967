// Main entry point for the UI generation API server

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anthropic_client::AnthropicClient;
use codegen::model::AnthropicModel;
use codegen::{CodeModel, Generator, SkillLibrary};
use server_core::server::{build_app, AppState};
use server_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,codegen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting UI Generator API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.model,
        skill_data_dir = %config.skill_data_dir,
        "Configuration loaded"
    );

    // Explicit dependency construction: client -> model -> skills -> generator.
    let client = AnthropicClient::new(config.anthropic_api_key.clone());
    let model: Box<dyn CodeModel> = Box::new(
        AnthropicModel::new(client)
            .with_model(&config.model)
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature),
    );
    let skills = SkillLibrary::new(&config.skill_data_dir);
    let generator = Arc::new(Generator::new(model, skills));

    let state = AppState { generator };
    let app = build_app(state, &config.cors_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
