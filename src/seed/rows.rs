use chrono::{DateTime, Utc};
use bigdecimal::BigDecimal;

use crate::model::{
    Brand, EntityKind, Guitar, GuitarMedia, GuitarSpecValue, GuitarType, Id, Spec, SpecOption,
    SpecSource,
};
use crate::seed::coerce::{coerce, coerce_tag, Nullable};
use crate::seed::error::{CoercionError, SeedError};

/// One row ready for insertion, with every optional field in store form.
///
/// Entity kinds without optional fields are inserted as decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedRow {
    Brand(Brand),
    Spec(SpecRow),
    SpecOption(SpecOption),
    Guitar(GuitarRow),
    GuitarSpecValue(GuitarSpecValueRow),
    GuitarMedia(GuitarMedia),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecRow {
    pub id: Id,
    pub code: String,
    pub label: String,
    pub value_type: String,
    pub unit: Nullable<String>,
    pub filterable: bool,
    pub searchable: bool,
    pub guitar_type: Nullable<GuitarType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuitarRow {
    pub id: Id,
    pub slug: String,
    pub name: String,
    pub brand_id: Id,
    pub model: String,
    pub kind: String,
    pub year: Nullable<i32>,
    pub description: Nullable<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuitarSpecValueRow {
    pub guitar_id: Id,
    pub spec_id: Id,
    pub value_text: Nullable<String>,
    pub value_number: Nullable<BigDecimal>,
    pub value_bool: Nullable<bool>,
    pub value_option_id: Nullable<Id>,
    pub source: Nullable<SpecSource>,
}

impl SeedRow {
    pub fn kind(&self) -> EntityKind {
        match self {
            SeedRow::Brand(_) => EntityKind::Brand,
            SeedRow::Spec(_) => EntityKind::Spec,
            SeedRow::SpecOption(_) => EntityKind::SpecOption,
            SeedRow::Guitar(_) => EntityKind::Guitar,
            SeedRow::GuitarSpecValue(_) => EntityKind::GuitarSpecValue,
            SeedRow::GuitarMedia(_) => EntityKind::GuitarMedia,
        }
    }

    /// Identifies the row in error messages; spec values are keyed by `guitar/spec`.
    pub fn key(&self) -> String {
        match self {
            SeedRow::Brand(row) => row.id.clone(),
            SeedRow::Spec(row) => row.id.clone(),
            SeedRow::SpecOption(row) => row.id.clone(),
            SeedRow::Guitar(row) => row.id.clone(),
            SeedRow::GuitarSpecValue(row) => spec_value_key(&row.guitar_id, &row.spec_id),
            SeedRow::GuitarMedia(row) => row.id.clone(),
        }
    }
}

fn spec_value_key(guitar_id: &str, spec_id: &str) -> String {
    format!("{}/{}", guitar_id, spec_id)
}

/// Attach entity context to a coercion failure.
fn field_error<'a>(
    entity: EntityKind,
    key: &'a str,
    field: &'static str,
) -> impl FnOnce(CoercionError) -> SeedError + 'a {
    move |source| SeedError::Coercion {
        entity,
        key: key.to_string(),
        field,
        source,
    }
}

impl TryFrom<Spec> for SpecRow {
    type Error = SeedError;

    fn try_from(spec: Spec) -> Result<Self, Self::Error> {
        let kind = EntityKind::Spec;
        let unit = coerce(spec.unit).map_err(field_error(kind, &spec.id, "unit"))?;
        let guitar_type = coerce_tag(spec.guitar_type)
            .map_err(field_error(kind, &spec.id, "guitar_type"))?;

        Ok(SpecRow {
            id: spec.id,
            code: spec.code,
            label: spec.label,
            value_type: spec.value_type,
            unit,
            filterable: spec.filterable,
            searchable: spec.searchable,
            guitar_type,
        })
    }
}

impl TryFrom<Guitar> for GuitarRow {
    type Error = SeedError;

    fn try_from(guitar: Guitar) -> Result<Self, Self::Error> {
        let kind = EntityKind::Guitar;
        let year = coerce(guitar.year).map_err(field_error(kind, &guitar.id, "year"))?;
        let description = coerce(guitar.description)
            .map_err(field_error(kind, &guitar.id, "description"))?;

        Ok(GuitarRow {
            id: guitar.id,
            slug: guitar.slug,
            name: guitar.name,
            brand_id: guitar.brand_id,
            model: guitar.model,
            kind: guitar.kind,
            year,
            description,
            created_at: guitar.created_at,
            updated_at: guitar.updated_at,
        })
    }
}

impl TryFrom<GuitarSpecValue> for GuitarSpecValueRow {
    type Error = SeedError;

    fn try_from(value: GuitarSpecValue) -> Result<Self, Self::Error> {
        let kind = EntityKind::GuitarSpecValue;
        let key = spec_value_key(&value.guitar_id, &value.spec_id);

        Ok(GuitarSpecValueRow {
            value_text: coerce(value.value_text).map_err(field_error(kind, &key, "value_text"))?,
            value_number: coerce(value.value_number)
                .map_err(field_error(kind, &key, "value_number"))?,
            value_bool: coerce(value.value_bool).map_err(field_error(kind, &key, "value_bool"))?,
            value_option_id: coerce(value.value_option_id)
                .map_err(field_error(kind, &key, "value_option_id"))?,
            source: coerce_tag(value.source).map_err(field_error(kind, &key, "source"))?,
            guitar_id: value.guitar_id,
            spec_id: value.spec_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn spec_value() -> GuitarSpecValue {
        GuitarSpecValue {
            guitar_id: "g1".to_string(),
            spec_id: "s1".to_string(),
            value_text: None,
            value_number: None,
            value_bool: None,
            value_option_id: None,
            source: None,
        }
    }

    #[test]
    fn test_spec_row_coerces_optional_fields() {
        let row = SpecRow::try_from(Spec {
            id: "s1".to_string(),
            code: "scale_length".to_string(),
            label: "Scale length".to_string(),
            value_type: "number".to_string(),
            unit: Some("mm".to_string()),
            filterable: true,
            searchable: false,
            guitar_type: None,
        })
        .unwrap();

        assert_eq!(row.unit.get().map(String::as_str), Some("mm"));
        assert!(!row.guitar_type.is_valid());
    }

    #[test]
    fn test_spec_row_rejects_unknown_guitar_type() {
        let err = SpecRow::try_from(Spec {
            id: "s9".to_string(),
            code: "pickups".to_string(),
            label: "Pickups".to_string(),
            value_type: "text".to_string(),
            unit: None,
            filterable: false,
            searchable: false,
            guitar_type: Some("theremin".to_string()),
        })
        .unwrap_err();

        match err {
            SeedError::Coercion {
                entity, key, field, ..
            } => {
                assert_eq!(entity, EntityKind::Spec);
                assert_eq!(key, "s9");
                assert_eq!(field, "guitar_type");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_guitar_row_keeps_absent_year_null() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let row = GuitarRow::try_from(Guitar {
            id: "g1".to_string(),
            slug: "gibson-les-paul".to_string(),
            name: "Les Paul".to_string(),
            brand_id: "b2".to_string(),
            model: "Standard".to_string(),
            kind: "electric".to_string(),
            year: None,
            description: Some("Mahogany body".to_string()),
            created_at: at,
            updated_at: at,
        })
        .unwrap();

        assert!(!row.year.is_valid());
        assert!(row.description.is_valid());
        assert_eq!(SeedRow::Guitar(row).key(), "g1");
    }

    #[test]
    fn test_spec_value_allows_several_populated_values() {
        let row = GuitarSpecValueRow::try_from(GuitarSpecValue {
            value_text: Some("22".to_string()),
            value_number: Some(22.0),
            value_bool: Some(true),
            value_option_id: Some("o1".to_string()),
            source: Some("retailer".to_string()),
            ..spec_value()
        })
        .unwrap();

        assert!(row.value_text.is_valid());
        assert_eq!(row.value_number.get().unwrap().to_string(), "22");
        assert_eq!(row.value_bool.get(), Some(&true));
        assert!(row.value_option_id.is_valid());
        assert_eq!(row.source.get(), Some(&SpecSource::Retailer));
    }

    #[test]
    fn test_spec_value_error_carries_composite_key() {
        let err = GuitarSpecValueRow::try_from(GuitarSpecValue {
            value_number: Some(f64::INFINITY),
            ..spec_value()
        })
        .unwrap_err();

        assert_eq!(err.entity(), Some(EntityKind::GuitarSpecValue));
        assert_eq!(err.to_string(), "cannot coerce guitar_spec_value g1/s1 field value_number");
    }
}
