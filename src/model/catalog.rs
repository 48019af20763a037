use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Id;

/// Row of the guitar listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarListItem {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A guitar joined with its brand name, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarRecord {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: Option<i32>,
    pub description: Option<String>,
}

/// Spec value rendered for display: spec code and its textual value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub code: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarDetail {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub specs: BTreeMap<String, String>,
    pub media: Vec<MediaItem>,
}

impl GuitarDetail {
    pub fn assemble(record: GuitarRecord, specs: Vec<SpecEntry>, media: Vec<MediaItem>) -> Self {
        Self {
            id: record.id,
            slug: record.slug,
            name: record.name,
            brand: record.brand,
            model: record.model,
            kind: record.kind,
            year: record.year,
            description: record.description,
            specs: specs.into_iter().map(|s| (s.code, s.value)).collect(),
            media,
        }
    }
}
