use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use crate::bootstrap::SeedOutcome;
use crate::model::Dataset;
use crate::seed;
use crate::store::PostgresStore;

pub type MigrateFn =
    Arc<dyn Fn(PostgresStore, PathBuf) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;
pub type CountRowsFn =
    Arc<dyn Fn(PostgresStore, String) -> BoxFuture<'static, anyhow::Result<i64>> + Send + Sync>;
pub type LoadDatasetFn = Arc<dyn Fn(&Path) -> anyhow::Result<Dataset> + Send + Sync>;
pub type ApplyDatasetFn =
    Arc<dyn Fn(PostgresStore, Dataset) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;
pub type LogOutcomeFn = Arc<dyn Fn(&SeedOutcome) + Send + Sync>;

/// The operations bootstrap is made of.
///
/// [`BootstrapPolicy::defaults`] binds the real migration runner, row counter,
/// seed loader and ingestor. Tests replace single entries through
/// [`BootstrapOverrides`].
#[derive(Clone)]
pub struct BootstrapPolicy {
    pub migrate: MigrateFn,
    pub count_rows: CountRowsFn,
    pub load_dataset: LoadDatasetFn,
    pub apply_dataset: ApplyDatasetFn,
    pub log_outcome: LogOutcomeFn,
}

impl BootstrapPolicy {
    pub fn defaults() -> Self {
        Self {
            migrate: Arc::new(|store: PostgresStore, path: PathBuf| {
                run_migration(store, path).boxed()
            }),
            count_rows: Arc::new(|store: PostgresStore, table: String| {
                count_rows(store, table).boxed()
            }),
            load_dataset: Arc::new(load_dataset),
            apply_dataset: Arc::new(|store: PostgresStore, dataset: Dataset| {
                apply_dataset(store, dataset).boxed()
            }),
            log_outcome: Arc::new(log_outcome),
        }
    }

    /// Defaults with every entry set in `overrides` replaced.
    pub fn with_overrides(overrides: BootstrapOverrides) -> Self {
        let defaults = Self::defaults();
        Self {
            migrate: overrides.migrate.unwrap_or(defaults.migrate),
            count_rows: overrides.count_rows.unwrap_or(defaults.count_rows),
            load_dataset: overrides.load_dataset.unwrap_or(defaults.load_dataset),
            apply_dataset: overrides.apply_dataset.unwrap_or(defaults.apply_dataset),
            log_outcome: overrides.log_outcome.unwrap_or(defaults.log_outcome),
        }
    }
}

impl Default for BootstrapPolicy {
    fn default() -> Self {
        Self::defaults()
    }
}

impl std::fmt::Debug for BootstrapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapPolicy").finish_non_exhaustive()
    }
}

async fn run_migration(store: PostgresStore, path: PathBuf) -> anyhow::Result<()> {
    store.run_script(&path).await?;
    Ok(())
}

async fn count_rows(store: PostgresStore, table: String) -> anyhow::Result<i64> {
    store.count_rows(&table).await
}

fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    Ok(seed::load(path)?)
}

async fn apply_dataset(store: PostgresStore, dataset: Dataset) -> anyhow::Result<()> {
    seed::apply(&store, dataset).await?;
    Ok(())
}

fn log_outcome(outcome: &SeedOutcome) {
    match outcome {
        SeedOutcome::Applied(summary) => {
            log::info!("seed_applied guitars={} {}", summary.guitars, summary)
        }
        SeedOutcome::Skipped(count) => {
            log::info!("seed_skip reason=data_exists guitars={}", count)
        }
    }
}

/// A partial [`BootstrapPolicy`]; unset entries fall back to the defaults.
#[derive(Clone, Default)]
pub struct BootstrapOverrides {
    pub migrate: Option<MigrateFn>,
    pub count_rows: Option<CountRowsFn>,
    pub load_dataset: Option<LoadDatasetFn>,
    pub apply_dataset: Option<ApplyDatasetFn>,
    pub log_outcome: Option<LogOutcomeFn>,
}

impl BootstrapOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn migrate<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(PostgresStore, PathBuf) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.migrate = Some(Arc::new(move |store: PostgresStore, path: PathBuf| {
            f(store, path).boxed()
        }));
        self
    }

    pub fn count_rows<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(PostgresStore, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<i64>> + Send + 'static,
    {
        self.count_rows = Some(Arc::new(move |store: PostgresStore, table: String| {
            f(store, table).boxed()
        }));
        self
    }

    pub fn load_dataset<F>(mut self, f: F) -> Self
    where
        F: Fn(&Path) -> anyhow::Result<Dataset> + Send + Sync + 'static,
    {
        self.load_dataset = Some(Arc::new(f));
        self
    }

    pub fn apply_dataset<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(PostgresStore, Dataset) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.apply_dataset = Some(Arc::new(move |store: PostgresStore, dataset: Dataset| {
            f(store, dataset).boxed()
        }));
        self
    }

    pub fn log_outcome<F>(mut self, f: F) -> Self
    where
        F: Fn(&SeedOutcome) + Send + Sync + 'static,
    {
        self.log_outcome = Some(Arc::new(f));
        self
    }
}
