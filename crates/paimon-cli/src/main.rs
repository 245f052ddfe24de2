mod chat;

use anyhow::Result;
use paimon_core::{GeminiProvider, KnowledgeBase, PaimonConfig, Responder};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Log to `~/.paimon/paimon.log`; stdout belongs to the terminal UI.
fn init_logging() -> Result<()> {
    let path = PaimonConfig::resolve_path("paimon.log");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("paimon=info,paimon_core=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = PaimonConfig::load()?;
    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("⚠️  {e}");
            std::process::exit(1);
        }
    };

    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    let provider = Arc::new(GeminiProvider::with_base_url(
        &config.base_url,
        api_key,
        &config.model,
    ));
    tracing::info!(model = %config.model, characters = knowledge.len(), "paimon starting");

    let responder = Arc::new(Responder::new(knowledge, provider));
    chat::run(responder).await
}
