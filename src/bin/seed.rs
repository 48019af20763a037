use std::path::PathBuf;

use guitar_specs::config::AppConfig;
use guitar_specs::store::PostgresStore;
use guitar_specs::{logging, seed};

/// Load a dataset file and insert it, without checking for existing rows.
///
/// Usage: `seed [path]`. Defaults to `bootstrap.seed_path`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init(config.is_development());

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.bootstrap.seed_path.clone());

    let dataset = seed::load(&path)?;
    if dataset.is_empty() {
        log::warn!("seed_empty path={}", path.display());
        return Ok(());
    }
    log::info!("seed_loaded path={} {}", path.display(), dataset.summary());

    let store = PostgresStore::connect(&config.database_url(), config.database.max_connections)
        .await?;
    let summary = seed::apply(&store, dataset).await?;

    log::info!("seed_applied guitars={} {}", summary.guitars, summary);
    Ok(())
}
