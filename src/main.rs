//! AI Music Mood Recommender
//!
//! This application serves a single page where a user describes their mood,
//! asks a chat-completion model for three matching songs and shows the reply
//! with a word cloud of the mood and a bar chart of the suggestions.

mod api;
mod core;
mod models;
mod visualization;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::constants::{env, prompt};
use crate::core::logging::init_logging;
use crate::core::provider::Provider;
use crate::core::providers::OpenAIProvider;
use crate::core::recommender::Recommender;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // A missing key is reported but not fatal; requests fail at the provider
    if !config.has_api_key() {
        error!(
            "{} is not set; recommendation requests will fail authentication",
            env::API_KEY
        );
    }

    let provider: Arc<dyn Provider> = match OpenAIProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.request_timeout,
    ) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            error!("Failed to create provider: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Using provider: {}", provider.provider_name());

    // Create application state
    let app_state = AppState {
        config: config.clone(),
        recommender: Arc::new(Recommender::new(provider)),
    };

    // Create router
    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🎵 AI Music Mood Recommender v{}", env!("CARGO_PKG_VERSION"));
    println!("✅ Configuration loaded successfully");
    println!("   Base URL: {}", config.base_url);
    println!("   Model: {}", prompt::MODEL);
    match config.request_timeout {
        Some(secs) => println!("   Request Timeout: {}s", secs),
        None => println!("   Request Timeout: client default"),
    }
    println!("   Server: {}:{}", config.host, config.port);
    println!(
        "   API Key: {}",
        if config.has_api_key() {
            "Configured"
        } else {
            "Missing"
        }
    );
    println!();
}

/// Print help message
fn print_help() {
    println!("AI Music Mood Recommender v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: mood-music-recommender [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  OPENAI_API_KEY - Your OpenAI API key");
    println!("  CONFIG_PATH - Path to the TOML config file (default: config.toml)");
    println!("  RUST_LOG - Overrides the configured log level");
    println!();
    println!("Config file sections:");
    println!("  [server]  host (default: 0.0.0.0), port (default: 8501), log_level (default: info)");
    println!("  [openai]  base_url (default: https://api.openai.com/v1)");
    println!("  [request] timeout_secs (default: HTTP client default)");
}
