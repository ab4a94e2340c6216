use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use lushu_numerology::lucky::LuckyNumbersAnalysis;
use lushu_numerology::personality::PersonalityAnalysis;
use lushu_numerology::planes::{MissingNumberEffect, Plane};
use lushu_numerology::reading::LuShuGridRecord;
use lushu_numerology::{calculate_reading, BirthDate, Reading};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Row};
use uuid::Uuid;

use crate::models::{ReadingRecord, ReadingSummary};

const INSERT_READING: &str = r#"
    INSERT INTO numerology.readings
    (id, owner_id, title, date_of_birth, mulank, destiny, lu_shu_grid,
     personality_analysis, lucky_numbers, active_planes, missing_numbers)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
"#;

fn insert_query(id: Uuid, owner_id: Uuid, reading: &Reading) -> Query<'_, Postgres, PgArguments> {
    sqlx::query(INSERT_READING)
        .bind(id)
        .bind(owner_id)
        .bind(reading.title.as_deref())
        .bind(reading.date_of_birth.naive())
        .bind(i16::from(reading.mulank))
        .bind(i16::from(reading.destiny))
        .bind(Json(&reading.lu_shu_grid))
        .bind(Json(&reading.personality_analysis))
        .bind(Json(&reading.lucky_numbers))
        .bind(reading.active_planes.as_ref().map(Json))
        .bind(reading.missing_numbers.as_ref().map(Json))
}

pub async fn init_db(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn insert_reading(pool: &PgPool, owner_id: Uuid, reading: &Reading) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();

    insert_query(id, owner_id, reading)
        .execute(pool)
        .await
        .context("failed to insert reading")?;

    tracing::info!(%id, %owner_id, dob = %reading.date_of_birth, "reading saved");
    Ok(id)
}

pub async fn fetch_readings(
    pool: &PgPool,
    owner_id: Uuid,
    limit: i64,
) -> anyhow::Result<Vec<ReadingSummary>> {
    tracing::debug!(%owner_id, limit, "listing readings");

    let rows = sqlx::query(
        "SELECT id, title, date_of_birth, mulank, destiny, created_at \
         FROM numerology.readings \
         WHERE owner_id = $1 \
         ORDER BY created_at DESC \
         LIMIT $2",
    )
    .bind(owner_id)
    .bind(limit.max(1))
    .fetch_all(pool)
    .await?;

    let mut summaries = Vec::new();
    for row in rows {
        summaries.push(ReadingSummary {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            date_of_birth: row.try_get("date_of_birth")?,
            mulank: row.try_get("mulank")?,
            destiny: row.try_get("destiny")?,
            created_at: row.try_get("created_at")?,
        });
    }

    Ok(summaries)
}

pub async fn fetch_reading(
    pool: &PgPool,
    owner_id: Uuid,
    id: Uuid,
) -> anyhow::Result<Option<ReadingRecord>> {
    tracing::debug!(%owner_id, %id, "fetching reading");

    let row = sqlx::query(
        "SELECT id, owner_id, title, date_of_birth, mulank, destiny, lu_shu_grid, \
         personality_analysis, lucky_numbers, active_planes, missing_numbers, created_at \
         FROM numerology.readings \
         WHERE owner_id = $1 AND id = $2",
    )
    .bind(owner_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| record_from_row(&row)).transpose()
}

fn record_from_row(row: &PgRow) -> anyhow::Result<ReadingRecord> {
    let date_of_birth: NaiveDate = row.try_get("date_of_birth")?;
    let mulank: i16 = row.try_get("mulank")?;
    let destiny: i16 = row.try_get("destiny")?;
    let lu_shu_grid: Json<LuShuGridRecord> = row.try_get("lu_shu_grid")?;
    let personality_analysis: Json<PersonalityAnalysis> = row.try_get("personality_analysis")?;
    let lucky_numbers: Json<LuckyNumbersAnalysis> = row.try_get("lucky_numbers")?;
    let active_planes: Option<Json<Vec<Plane>>> = row.try_get("active_planes")?;
    let missing_numbers: Option<Json<Vec<MissingNumberEffect>>> = row.try_get("missing_numbers")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(ReadingRecord {
        id: row.try_get("id")?,
        owner_id: row.try_get("owner_id")?,
        created_at,
        reading: Reading {
            date_of_birth: BirthDate::from_naive(date_of_birth)?,
            mulank: u8::try_from(mulank).context("stored mulank out of range")?,
            destiny: u8::try_from(destiny).context("stored destiny out of range")?,
            lu_shu_grid: lu_shu_grid.0,
            personality_analysis: personality_analysis.0,
            lucky_numbers: lucky_numbers.0,
            active_planes: active_planes.map(|planes| planes.0),
            missing_numbers: missing_numbers.map(|missing| missing.0),
            title: row.try_get("title")?,
        },
    })
}

pub async fn rename_reading(
    pool: &PgPool,
    owner_id: Uuid,
    id: Uuid,
    title: Option<&str>,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE numerology.readings SET title = $3 WHERE owner_id = $1 AND id = $2",
    )
    .bind(owner_id)
    .bind(id)
    .bind(title.filter(|t| !t.trim().is_empty()))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_reading(pool: &PgPool, owner_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM numerology.readings WHERE owner_id = $1 AND id = $2")
        .bind(owner_id)
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        tracing::info!(%id, %owner_id, "reading deleted");
    }
    Ok(deleted)
}

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    owner_id: Uuid,
    date_of_birth: String,
    title: Option<String>,
}

/// Parses `owner_id,date_of_birth,title` rows and computes a reading for each.
/// The first bad row aborts with its line number.
pub fn read_import_rows<R: std::io::Read>(source: R) -> anyhow::Result<Vec<(Uuid, Reading)>> {
    let mut reader = csv::Reader::from_reader(source);
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 2;
        let row = result.with_context(|| format!("malformed row on line {line}"))?;
        let date = BirthDate::parse_iso(&row.date_of_birth)
            .with_context(|| format!("bad date of birth on line {line}"))?;
        rows.push((row.owner_id, calculate_reading(&date).with_title(row.title)));
    }

    Ok(rows)
}

pub async fn import_csv(pool: &PgPool, csv_path: &std::path::Path) -> anyhow::Result<usize> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let rows = read_import_rows(file)?;

    let mut tx = pool.begin().await?;
    let mut inserted = 0usize;

    for (owner_id, reading) in rows.iter() {
        let result = insert_query(Uuid::new_v4(), *owner_id, reading)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        }
    }

    tx.commit().await?;
    tracing::info!(inserted, path = %csv_path.display(), "import finished");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_rows_compute_readings() {
        let csv = "owner_id,date_of_birth,title\n\
                   3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,1990-07-20,Avery\n\
                   0c22f1f1-9184-4fd4-9b21-28c68a6a89dc,1985-03-29,\n";
        let rows = read_import_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let (owner, reading) = &rows[0];
        assert_eq!(owner.to_string(), "3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2");
        assert_eq!(reading.mulank, 2);
        assert_eq!(reading.destiny, 1);
        assert_eq!(reading.title.as_deref(), Some("Avery"));

        assert!(rows[1].1.title.is_none());
    }

    #[test]
    fn import_rejects_bad_dates_with_line_number() {
        let csv = "owner_id,date_of_birth,title\n\
                   3d7f5d6f-24f7-4e8e-8b4b-3e7e44b4a7b2,1990-02-30,x\n";
        let err = read_import_rows(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
