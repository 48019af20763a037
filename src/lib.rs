pub mod api;
pub mod bootstrap;
pub mod config;
pub mod logging;
pub mod model;
pub mod seed;
pub mod store;

pub use api::routes::create_router;
pub use bootstrap::{
    BootstrapError, BootstrapOutcome, BootstrapOverrides, BootstrapPolicy, BootstrapSettings,
    SeedDecision, SeedOutcome, Stage,
};
pub use model::*;
pub use seed::SeedError;
pub use store::{CatalogStore, PostgresStore, SeedWriter};

/// Load config, bootstrap the database and serve the catalog API until the
/// listener fails.
pub async fn run_server() -> anyhow::Result<()> {
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let config = crate::config::AppConfig::load()?;
    logging::init(config.is_development());
    log::info!(
        "config_loaded env={} server={} auto_migrate={} auto_seed={}",
        config.env,
        config.server_address(),
        config.bootstrap.auto_migrate,
        config.bootstrap.auto_seed
    );

    let store = PostgresStore::connect(&config.database_url(), config.database.max_connections)
        .await?;

    let outcome =
        bootstrap::run(&BootstrapPolicy::defaults(), &config.bootstrap, &store).await?;
    log::debug!("bootstrap_done migrated={} seed={:?}", outcome.migrated, outcome.seed);

    let app = create_router::<PostgresStore>().with_state(Arc::new(store));

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("server_start address={}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
