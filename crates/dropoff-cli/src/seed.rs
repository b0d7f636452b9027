//! Seed command: load the YAML dataset into Postgres.
//!
//! Categories upsert by name; centers upsert by `(name, address)`, so
//! reseeding is idempotent. Junction rows are rebuilt per center to pick up
//! category changes.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context};
use sqlx::PgPool;

use dropoff_core::{AppConfig, Center, SeedFile};
use dropoff_db::PoolConfig;

pub async fn run(config: &AppConfig, dataset_path: &Path) -> anyhow::Result<()> {
    let Some(database_url) = config.database_url.as_deref() else {
        bail!("DATABASE_URL is required to seed the database");
    };

    let seed = SeedFile::load(dataset_path)
        .with_context(|| format!("loading dataset from {}", dataset_path.display()))?;

    let pool = dropoff_db::connect_pool(database_url, PoolConfig::from_app_config(config))
        .await
        .context("connecting to the database")?;
    dropoff_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    let category_ids = upsert_categories(&pool, &seed).await?;
    tracing::info!(count = category_ids.len(), "categories upserted");

    let mut inserted = 0usize;
    for center in &seed.centers {
        upsert_center(&pool, center, &category_ids).await?;
        inserted += 1;
    }
    tracing::info!(count = inserted, "centers upserted");

    println!(
        "seeded {} categories and {} centers from {}",
        category_ids.len(),
        inserted,
        dataset_path.display()
    );
    Ok(())
}

/// Upsert all categories and return name → id.
async fn upsert_categories(
    pool: &PgPool,
    seed: &SeedFile,
) -> anyhow::Result<HashMap<String, i64>> {
    let mut ids = HashMap::new();
    for category in &seed.categories {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, icon, color) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (name) DO UPDATE SET icon = EXCLUDED.icon, color = EXCLUDED.color \
             RETURNING id",
        )
        .bind(&category.name)
        .bind(&category.icon)
        .bind(&category.color)
        .fetch_one(pool)
        .await
        .with_context(|| format!("upserting category {}", category.name))?;
        ids.insert(category.name.clone(), id);
    }
    Ok(ids)
}

async fn upsert_center(
    pool: &PgPool,
    center: &Center,
    category_ids: &HashMap<String, i64>,
) -> anyhow::Result<()> {
    let hours = center
        .hours_of_operation
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .context("serializing hours")?;

    let center_id: i64 = sqlx::query_scalar(
        "INSERT INTO centers \
            (name, address, city, state, zip_code, latitude, longitude, \
             phone, email, website, hours_of_operation, accepted_items, \
             organization_type, description, special_instructions) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
         ON CONFLICT (name, address) DO UPDATE SET \
            city = EXCLUDED.city, \
            state = EXCLUDED.state, \
            zip_code = EXCLUDED.zip_code, \
            latitude = EXCLUDED.latitude, \
            longitude = EXCLUDED.longitude, \
            phone = EXCLUDED.phone, \
            email = EXCLUDED.email, \
            website = EXCLUDED.website, \
            hours_of_operation = EXCLUDED.hours_of_operation, \
            accepted_items = EXCLUDED.accepted_items, \
            organization_type = EXCLUDED.organization_type, \
            description = EXCLUDED.description, \
            special_instructions = EXCLUDED.special_instructions, \
            updated_at = NOW() \
         RETURNING id",
    )
    .bind(&center.name)
    .bind(&center.address)
    .bind(&center.city)
    .bind(&center.state)
    .bind(&center.zip_code)
    .bind(center.latitude)
    .bind(center.longitude)
    .bind(&center.phone)
    .bind(&center.email)
    .bind(&center.website)
    .bind(hours)
    .bind(&center.accepted_items)
    .bind(&center.organization_type)
    .bind(&center.description)
    .bind(&center.special_instructions)
    .fetch_one(pool)
    .await
    .with_context(|| format!("upserting center {}", center.name))?;

    sqlx::query("DELETE FROM center_categories WHERE center_id = $1")
        .bind(center_id)
        .execute(pool)
        .await?;

    for (position, tag) in center.categories.iter().enumerate() {
        let Some(category_id) = category_ids.get(&tag.name) else {
            tracing::warn!(center = %center.name, category = %tag.name, "unknown category tag, skipping");
            continue;
        };
        let position = i16::try_from(position).unwrap_or(i16::MAX);
        sqlx::query(
            "INSERT INTO center_categories (center_id, category_id, position) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (center_id, category_id) DO UPDATE SET position = EXCLUDED.position",
        )
        .bind(center_id)
        .bind(category_id)
        .bind(position)
        .execute(pool)
        .await?;
    }

    Ok(())
}
