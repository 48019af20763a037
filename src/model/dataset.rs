use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Id = String;

/// Snapshot of every seed entity, decoded once from the seed document.
///
/// Lists are kept in document order; the ingestor walks them in dependency
/// order (brands, specs, spec options, guitars, spec values, media).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub brands: Vec<Brand>,
    pub specs: Vec<Spec>,
    pub spec_options: Vec<SpecOption>,
    pub guitars: Vec<Guitar>,
    pub guitar_spec_values: Vec<GuitarSpecValue>,
    pub guitar_media: Vec<GuitarMedia>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Id,
    pub name: String,
}

/// Definition of a guitar spec field (e.g. scale length, body wood).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub id: Id,
    pub code: String,
    pub label: String,
    pub value_type: String,
    pub unit: Option<String>,
    pub filterable: bool,
    pub searchable: bool,
    /// Restricts the spec to one guitar type; tag is validated at ingestion.
    pub guitar_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecOption {
    pub id: Id,
    pub spec_id: Id,
    pub value: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guitar {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub brand_id: Id,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One spec value attached to a guitar.
///
/// The four `value_*` fields are independently optional. Nothing checks that
/// exactly one is populated; rows carrying several are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarSpecValue {
    pub guitar_id: Id,
    pub spec_id: Id,
    pub value_text: Option<String>,
    pub value_number: Option<f64>,
    pub value_bool: Option<bool>,
    pub value_option_id: Option<Id>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarMedia {
    pub id: Id,
    pub guitar_id: Id,
    pub kind: String,
    pub url: String,
    pub sort_order: i32,
}

/// Per-kind row counts of a dataset, used for outcome logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub brands: usize,
    pub specs: usize,
    pub spec_options: usize,
    pub guitars: usize,
    pub guitar_spec_values: usize,
    pub guitar_media: usize,
}

impl DatasetSummary {
    pub fn total(&self) -> usize {
        self.brands
            + self.specs
            + self.spec_options
            + self.guitars
            + self.guitar_spec_values
            + self.guitar_media
    }
}

impl Dataset {
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            brands: self.brands.len(),
            specs: self.specs.len(),
            spec_options: self.spec_options.len(),
            guitars: self.guitars.len(),
            guitar_spec_values: self.guitar_spec_values.len(),
            guitar_media: self.guitar_media.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary().total() == 0
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "brands={} specs={} spec_options={} guitars={} guitar_spec_values={} guitar_media={}",
            self.brands,
            self.specs,
            self.spec_options,
            self.guitars,
            self.guitar_spec_values,
            self.guitar_media
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_each_kind() {
        let dataset = Dataset {
            brands: vec![Brand {
                id: "b1".to_string(),
                name: "Fender".to_string(),
            }],
            guitar_media: vec![
                GuitarMedia {
                    id: "m1".to_string(),
                    guitar_id: "g1".to_string(),
                    kind: "image".to_string(),
                    url: "https://example.com/1.jpg".to_string(),
                    sort_order: 0,
                },
                GuitarMedia {
                    id: "m2".to_string(),
                    guitar_id: "g1".to_string(),
                    kind: "image".to_string(),
                    url: "https://example.com/2.jpg".to_string(),
                    sort_order: 1,
                },
            ],
            ..Dataset::default()
        };

        let summary = dataset.summary();
        assert_eq!(summary.brands, 1);
        assert_eq!(summary.guitar_media, 2);
        assert_eq!(summary.total(), 3);
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn test_summary_display_lists_all_kinds() {
        let summary = DatasetSummary {
            guitars: 4,
            ..DatasetSummary::default()
        };
        assert_eq!(
            summary.to_string(),
            "brands=0 specs=0 spec_options=0 guitars=4 guitar_spec_values=0 guitar_media=0"
        );
    }
}
