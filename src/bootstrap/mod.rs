//! Start-up bootstrap: optional migration followed by seeding an empty database.
//!
//! ```text
//! migrate (if auto_migrate) -> count rows (if auto_seed) -> 0  -> load -> apply -> log applied
//!                                                      -> >0 -> log skipped
//! ```
//!
//! Every stage failure ends bootstrap with [`BootstrapError`]; nothing is
//! retried. Running bootstrap again is safe: a populated table is skipped,
//! and an empty one gets the same deterministic insert sequence.

pub mod policy;

pub use policy::*;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::DatasetSummary;
use crate::store::PostgresStore;

/// Which bootstrap stages run, and what they operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapSettings {
    pub auto_migrate: bool,
    pub migrate_path: PathBuf,
    pub auto_seed: bool,
    pub seed_path: PathBuf,
    /// Table whose row count decides between seeding and skipping.
    pub seed_table: String,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            auto_migrate: false,
            migrate_path: PathBuf::from("migrations/001_init.sql"),
            auto_seed: false,
            seed_path: PathBuf::from("data/guitars.json"),
            seed_table: "guitar".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Migrate,
    Count,
    Load,
    Apply,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Migrate => "migrate",
            Stage::Count => "count",
            Stage::Load => "load",
            Stage::Apply => "apply",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("bootstrap failed at {stage} stage")]
pub struct BootstrapError {
    pub stage: Stage,
    #[source]
    pub source: anyhow::Error,
}

impl BootstrapError {
    fn at(stage: Stage) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| Self { stage, source }
    }
}

/// What is reported to the outcome logger once seeding is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Applied(DatasetSummary),
    /// Seeding skipped; carries the observed row count.
    Skipped(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedDecision {
    NotConfigured,
    Applied(DatasetSummary),
    Skipped { existing: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOutcome {
    pub migrated: bool,
    pub seed: SeedDecision,
}

/// Run bootstrap against `store`.
///
/// The store handle is only passed through to the capabilities; it is not
/// closed here.
pub async fn run(
    policy: &BootstrapPolicy,
    settings: &BootstrapSettings,
    store: &PostgresStore,
) -> Result<BootstrapOutcome, BootstrapError> {
    let mut migrated = false;
    if settings.auto_migrate {
        (policy.migrate)(store.clone(), settings.migrate_path.clone())
            .await
            .inspect_err(|e| {
                log::error!(
                    "migrate_failed path={} error={:#}",
                    settings.migrate_path.display(),
                    e
                )
            })
            .map_err(BootstrapError::at(Stage::Migrate))?;
        migrated = true;
    }

    if !settings.auto_seed {
        return Ok(BootstrapOutcome {
            migrated,
            seed: SeedDecision::NotConfigured,
        });
    }

    let count = (policy.count_rows)(store.clone(), settings.seed_table.clone())
        .await
        .inspect_err(|e| {
            log::error!("seed_check_failed table={} error={:#}", settings.seed_table, e)
        })
        .map_err(BootstrapError::at(Stage::Count))?;

    if count > 0 {
        (policy.log_outcome)(&SeedOutcome::Skipped(count));
        return Ok(BootstrapOutcome {
            migrated,
            seed: SeedDecision::Skipped { existing: count },
        });
    }

    let dataset = (policy.load_dataset)(&settings.seed_path)
        .inspect_err(|e| {
            log::error!(
                "seed_load_failed path={} error={:#}",
                settings.seed_path.display(),
                e
            )
        })
        .map_err(BootstrapError::at(Stage::Load))?;
    let summary = dataset.summary();

    (policy.apply_dataset)(store.clone(), dataset)
        .await
        .inspect_err(|e| log::error!("seed_apply_failed error={:#}", e))
        .map_err(BootstrapError::at(Stage::Apply))?;

    (policy.log_outcome)(&SeedOutcome::Applied(summary));
    Ok(BootstrapOutcome {
        migrated,
        seed: SeedDecision::Applied(summary),
    })
}
