use std::sync::Arc;

use trivia_api::api::{AppState, router};
use trivia_api::config::Config;
use trivia_api::store::memory::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let program = std::env::args().next().unwrap_or_else(|| "trivia-api".to_string());
            eprintln!("{}", e);
            eprintln!("{}", Config::usage(&program));
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Question store:
    let store = match &config.seed_path {
        Some(path) => {
            tracing::info!("Loading seed data from {}", path.display());
            MemoryStore::from_seed_file(path)?
        }
        None => {
            tracing::info!("No seed file given, starting with an empty question store");
            MemoryStore::with_default_categories()
        }
    };
    tracing::info!("Store ready with {} questions", store.question_count());

    // 2. HTTP router:
    let app = router(AppState::new(Arc::new(store), config.page_size));

    // 3. Start HTTP server:
    tracing::info!(
        "HTTP server listening on {} (page size {})",
        config.bind_addr,
        config.page_size
    );
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
