use std::path::PathBuf;

use crate::model::{EntityKind, UnknownTag};

/// A dataset field that has no representation in the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error(transparent)]
    InvalidTag(#[from] UnknownTag),
    #[error("{value} is not representable as a numeric")]
    Numeric { value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to open seed file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read seed document")]
    Read(#[source] std::io::Error),
    #[error("malformed seed document")]
    Parse(#[source] serde_json::Error),
    #[error("cannot coerce {entity} {key} field {field}")]
    Coercion {
        entity: EntityKind,
        key: String,
        field: &'static str,
        #[source]
        source: CoercionError,
    },
    #[error("failed to insert {entity} {key}")]
    Insertion {
        entity: EntityKind,
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

impl SeedError {
    /// Entity kind whose phase produced the error, if the error came from ingestion.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            SeedError::Coercion { entity, .. } | SeedError::Insertion { entity, .. } => {
                Some(*entity)
            }
            _ => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, SeedError::Open { .. } | SeedError::Read(_))
    }
}
