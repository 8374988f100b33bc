//! MedPulse — content-intelligence and karma backend for a medical
//! professional network.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod demo;
mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("MEDPULSE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Load the demo posts into a fresh store.
fn run_seed(data_dir: &PathBuf) -> anyhow::Result<()> {
    let config = medpulse_core::MedPulseConfig::from_env(data_dir)?;
    let store = medpulse_store::SocialStore::open(&config.data_paths.socialdb)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;

    let mut inserted = 0;
    for post in demo::demo_posts() {
        match store.add_post(&post) {
            Ok(id) => {
                let analysis = medpulse_text::analyze_sentiment(&post.content);
                let _ = store.record_analysis(Some(id), &analysis);
                let _ = store.append_activity(&post.author_id, medpulse_karma::ActivityType::CreatePost);
                inserted += 1;
            }
            Err(medpulse_core::Error::DuplicateContent(_)) => {
                info!("Skipping already-seeded post: {}", post.title);
            }
            Err(e) => return Err(anyhow::anyhow!("Seed failed: {}", e)),
        }
    }
    info!("Seeded {} demo posts", inserted);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--seed" | "seed" => {
                let data_dir = if args.len() > 2 {
                    PathBuf::from(&args[2])
                } else {
                    resolve_data_dir()
                };
                run_seed(&data_dir)?;
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("MedPulse — medical network content-intelligence backend");
                println!();
                println!("Usage: medpulse [command]");
                println!();
                println!("Commands:");
                println!("  (none)               Start the server");
                println!("  seed [data-dir]      Load demo posts into the store");
                println!("  help                 Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'medpulse help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = medpulse_core::MedPulseConfig::from_env(&data_dir)?;
    let port = config.port;

    let store = medpulse_store::SocialStore::open(&config.data_paths.socialdb)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;

    let state = Arc::new(AppState::new(config, store));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MedPulse server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
