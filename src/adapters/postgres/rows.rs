//! Row decoding shared by the PostgreSQL adapters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::catalog::{LanguageSet, Level, ProgLanguage, Stack};
use crate::domain::foundation::{DomainError, LanguageId, LevelId, Timestamp, UserId};

/// Maps a sqlx error to a database `DomainError` with context.
pub(super) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("Failed to {}: {}", context, e))
}

pub(super) fn stack(row: &PgRow, column: &str) -> Result<Stack, DomainError> {
    let raw: String = row.try_get(column).map_err(db_error("decode stack"))?;
    raw.parse()
        .map_err(|e| DomainError::database(format!("Corrupt stack column: {}", e)))
}

pub(super) fn optional_stack(row: &PgRow, column: &str) -> Result<Option<Stack>, DomainError> {
    let raw: Option<String> = row.try_get(column).map_err(db_error("decode stack"))?;
    raw.map(|s| {
        s.parse()
            .map_err(|e| DomainError::database(format!("Corrupt stack column: {}", e)))
    })
    .transpose()
}

pub(super) fn user_id(row: &PgRow, column: &str) -> Result<UserId, DomainError> {
    let raw: String = row.try_get(column).map_err(db_error("decode user id"))?;
    UserId::new(raw).map_err(|e| DomainError::database(format!("Corrupt user id: {}", e)))
}

pub(super) fn timestamp(row: &PgRow, column: &str) -> Result<Timestamp, DomainError> {
    let value: DateTime<Utc> = row.try_get(column).map_err(db_error("decode timestamp"))?;
    Ok(Timestamp::from_datetime(value))
}

/// Non-negative INTEGER column as `u32`.
pub(super) fn unsigned(row: &PgRow, column: &str) -> Result<u32, DomainError> {
    let value: i32 = row.try_get(column).map_err(db_error("decode integer"))?;
    u32::try_from(value)
        .map_err(|_| DomainError::database(format!("Negative value in {}", column)))
}

/// Level from the `level_id` and `level_name` columns; `None` when NULL.
pub(super) fn optional_level(row: &PgRow) -> Result<Option<Level>, DomainError> {
    let id: Option<Uuid> = row.try_get("level_id").map_err(db_error("decode level"))?;
    let name: Option<String> = row.try_get("level_name").map_err(db_error("decode level"))?;
    Ok(match (id, name) {
        (Some(id), Some(name)) => Some(Level::new(LevelId::from_uuid(id), name)),
        _ => None,
    })
}

/// `u32` field as a Postgres INTEGER.
pub(super) fn to_i32(value: u32, column: &str) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| DomainError::database(format!("{} out of range", column)))
}

/// Loads language sets for many owners from a join table.
///
/// `table` and `owner_column` are fixed identifiers, never user input.
pub(super) async fn languages_by_owner(
    pool: &PgPool,
    table: &'static str,
    owner_column: &'static str,
    owners: &[Uuid],
) -> Result<HashMap<Uuid, LanguageSet>, DomainError> {
    if owners.is_empty() {
        return Ok(HashMap::new());
    }
    let sql = format!(
        "SELECT j.{owner_column} AS owner, l.id, l.name \
         FROM {table} j JOIN languages l ON l.id = j.language_id \
         WHERE j.{owner_column} = ANY($1)"
    );
    let rows = sqlx::query(&sql)
        .bind(owners)
        .fetch_all(pool)
        .await
        .map_err(db_error("load languages"))?;

    let mut sets: HashMap<Uuid, LanguageSet> = HashMap::new();
    for row in rows {
        let owner: Uuid = row.try_get("owner").map_err(db_error("decode language"))?;
        let id: Uuid = row.try_get("id").map_err(db_error("decode language"))?;
        let name: String = row.try_get("name").map_err(db_error("decode language"))?;
        sets.entry(owner)
            .or_default()
            .insert(ProgLanguage::new(LanguageId::from_uuid(id), name));
    }
    Ok(sets)
}
