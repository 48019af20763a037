use crate::model::{Dataset, DatasetSummary, EntityKind};
use crate::seed::error::SeedError;
use crate::seed::rows::{GuitarRow, GuitarSpecValueRow, SeedRow, SpecRow};
use crate::store::SeedWriter;

/// Insert every entity of `dataset` through `writer`.
///
/// Rows go in one phase per entity kind, in [`EntityKind::INSERT_ORDER`], and
/// each row is inserted exactly once. The first coercion or insertion failure
/// stops ingestion; rows already written stay written, so callers that need
/// all-or-nothing seeding wrap the writer in a transaction.
pub async fn apply<W>(writer: &W, dataset: Dataset) -> Result<DatasetSummary, SeedError>
where
    W: SeedWriter + ?Sized,
{
    let summary = dataset.summary();
    let Dataset {
        brands,
        specs,
        spec_options,
        guitars,
        guitar_spec_values,
        guitar_media,
    } = dataset;

    log::debug!("seed_phase entity={} rows={}", EntityKind::Brand, brands.len());
    for brand in brands {
        insert(writer, SeedRow::Brand(brand)).await?;
    }

    log::debug!("seed_phase entity={} rows={}", EntityKind::Spec, specs.len());
    for spec in specs {
        insert(writer, SeedRow::Spec(SpecRow::try_from(spec)?)).await?;
    }

    log::debug!("seed_phase entity={} rows={}", EntityKind::SpecOption, spec_options.len());
    for option in spec_options {
        insert(writer, SeedRow::SpecOption(option)).await?;
    }

    log::debug!("seed_phase entity={} rows={}", EntityKind::Guitar, guitars.len());
    for guitar in guitars {
        insert(writer, SeedRow::Guitar(GuitarRow::try_from(guitar)?)).await?;
    }

    log::debug!(
        "seed_phase entity={} rows={}",
        EntityKind::GuitarSpecValue,
        guitar_spec_values.len()
    );
    for value in guitar_spec_values {
        let row = GuitarSpecValueRow::try_from(value)?;
        insert(writer, SeedRow::GuitarSpecValue(row)).await?;
    }

    log::debug!("seed_phase entity={} rows={}", EntityKind::GuitarMedia, guitar_media.len());
    for media in guitar_media {
        insert(writer, SeedRow::GuitarMedia(media)).await?;
    }

    Ok(summary)
}

async fn insert<W>(writer: &W, row: SeedRow) -> Result<(), SeedError>
where
    W: SeedWriter + ?Sized,
{
    let entity = row.kind();
    let key = row.key();
    writer
        .insert_row(row)
        .await
        .map_err(|source| SeedError::Insertion {
            entity,
            key,
            source,
        })
}
