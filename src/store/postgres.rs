use std::path::Path;

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{GuitarListItem, GuitarRecord, Id, MediaItem, SpecEntry};
use crate::seed::SeedRow;
use crate::store::migrate::{self, MigrationError};
use crate::store::traits::{CatalogStore, SeedWriter};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Build a store whose connections are opened on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .connect_lazy(database_url)
            .context("Invalid PostgreSQL connection string")?;

        Ok(Self { pool })
    }

    pub async fn run_script(&self, path: &Path) -> Result<(), MigrationError> {
        migrate::run_script(&self.pool, path).await
    }

    /// Count the rows of `table`. The name is quoted, never interpolated raw.
    pub async fn count_rows(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to count rows of {}", table))?;

        Ok(count)
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait::async_trait]
impl SeedWriter for PostgresStore {
    async fn insert_row(&self, row: SeedRow) -> Result<()> {
        let query = match row {
            SeedRow::Brand(brand) => sqlx::query("INSERT INTO brand (id, name) VALUES ($1, $2)")
                .bind(brand.id)
                .bind(brand.name),
            SeedRow::Spec(spec) => sqlx::query(
                r#"
                INSERT INTO spec (id, code, label, value_type, unit, filterable, searchable, guitar_type)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(spec.id)
            .bind(spec.code)
            .bind(spec.label)
            .bind(spec.value_type)
            .bind(spec.unit.into_option())
            .bind(spec.filterable)
            .bind(spec.searchable)
            .bind(spec.guitar_type.into_option()),
            SeedRow::SpecOption(option) => sqlx::query(
                "INSERT INTO spec_option (id, spec_id, value, sort_order) VALUES ($1, $2, $3, $4)",
            )
            .bind(option.id)
            .bind(option.spec_id)
            .bind(option.value)
            .bind(option.sort_order),
            SeedRow::Guitar(guitar) => sqlx::query(
                r#"
                INSERT INTO guitar (id, slug, name, brand_id, model, "type", year, description, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(guitar.id)
            .bind(guitar.slug)
            .bind(guitar.name)
            .bind(guitar.brand_id)
            .bind(guitar.model)
            .bind(guitar.kind)
            .bind(guitar.year.into_option())
            .bind(guitar.description.into_option())
            .bind(guitar.created_at)
            .bind(guitar.updated_at),
            SeedRow::GuitarSpecValue(value) => sqlx::query(
                r#"
                INSERT INTO guitar_spec_value
                    (guitar_id, spec_id, value_text, value_number, value_bool, value_option_id, source)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(value.guitar_id)
            .bind(value.spec_id)
            .bind(value.value_text.into_option())
            .bind(value.value_number.into_option())
            .bind(value.value_bool.into_option())
            .bind(value.value_option_id.into_option())
            .bind(value.source.into_option()),
            SeedRow::GuitarMedia(media) => sqlx::query(
                "INSERT INTO guitar_media (id, guitar_id, kind, url, sort_order) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(media.id)
            .bind(media.guitar_id)
            .bind(media.kind)
            .bind(media.url)
            .bind(media.sort_order),
        };

        query
            .execute(&self.pool)
            .await
            .context("Failed to insert seed row")?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogStore for PostgresStore {
    async fn list_guitars(&self) -> Result<Vec<GuitarListItem>> {
        let rows = sqlx::query(
            r#"
            SELECT g.id, g.slug, g.name, b.name AS brand, g.model, g."type" AS kind, g.year,
                (SELECT m.url FROM guitar_media m
                 WHERE m.guitar_id = g.id
                 ORDER BY m.sort_order, m.id
                 LIMIT 1) AS thumbnail
            FROM guitar g
            JOIN brand b ON b.id = g.brand_id
            ORDER BY g.name, g.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list guitars")?;

        let guitars = rows
            .into_iter()
            .map(|row| GuitarListItem {
                id: row.get("id"),
                slug: row.get("slug"),
                name: row.get("name"),
                brand: row.get("brand"),
                model: row.get("model"),
                kind: row.get("kind"),
                year: row.get("year"),
                thumbnail: row.get("thumbnail"),
            })
            .collect();

        Ok(guitars)
    }

    async fn get_guitar_by_slug(&self, slug: &str) -> Result<Option<GuitarRecord>> {
        let row = sqlx::query(
            r#"
            SELECT g.id, g.slug, g.name, b.name AS brand, g.model, g."type" AS kind, g.year, g.description
            FROM guitar g
            JOIN brand b ON b.id = g.brand_id
            WHERE g.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch guitar")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(GuitarRecord {
            id: row.get("id"),
            slug: row.get("slug"),
            name: row.get("name"),
            brand: row.get("brand"),
            model: row.get("model"),
            kind: row.get("kind"),
            year: row.get("year"),
            description: row.get("description"),
        }))
    }

    async fn get_guitar_specs(&self, guitar_id: &Id) -> Result<Vec<SpecEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT s.code,
                COALESCE(
                    v.value_text,
                    v.value_number::text || COALESCE(' ' || s.unit, ''),
                    CASE WHEN v.value_bool THEN 'true' WHEN NOT v.value_bool THEN 'false' END,
                    o.value,
                    ''
                ) AS value
            FROM guitar_spec_value v
            JOIN spec s ON s.id = v.spec_id
            LEFT JOIN spec_option o ON o.id = v.value_option_id
            WHERE v.guitar_id = $1
            ORDER BY s.code
            "#,
        )
        .bind(guitar_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load guitar specs")?;

        Ok(rows
            .into_iter()
            .map(|row| SpecEntry {
                code: row.get("code"),
                value: row.get("value"),
            })
            .collect())
    }

    async fn get_guitar_media(&self, guitar_id: &Id) -> Result<Vec<MediaItem>> {
        let rows = sqlx::query(
            "SELECT kind, url FROM guitar_media WHERE guitar_id = $1 ORDER BY sort_order, id",
        )
        .bind(guitar_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load guitar media")?;

        Ok(rows
            .into_iter()
            .map(|row| MediaItem {
                kind: row.get("kind"),
                url: row.get("url"),
            })
            .collect())
    }
}
