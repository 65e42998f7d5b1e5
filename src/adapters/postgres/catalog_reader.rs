//! PostgreSQL implementation of CatalogReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::catalog::{LanguageSet, Level, ProgLanguage};
use crate::domain::foundation::{DomainError, LanguageId, LevelId};
use crate::ports::{unknown_languages, CatalogReader};

use super::rows::db_error;

#[derive(Clone)]
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM levels ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list levels"))?;

        rows.iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(db_error("decode level"))?;
                let name: String = row.try_get("name").map_err(db_error("decode level"))?;
                Ok(Level::new(LevelId::from_uuid(id), name))
            })
            .collect()
    }

    async fn list_languages(&self) -> Result<Vec<ProgLanguage>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM languages ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list languages"))?;

        rows.iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(db_error("decode language"))?;
                let name: String = row.try_get("name").map_err(db_error("decode language"))?;
                Ok(ProgLanguage::new(LanguageId::from_uuid(id), name))
            })
            .collect()
    }

    async fn find_level(&self, id: &LevelId) -> Result<Option<Level>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM levels WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("find level"))?;

        row.map(|row| {
            let name: String = row.try_get("name").map_err(db_error("decode level"))?;
            Ok(Level::new(*id, name))
        })
        .transpose()
    }

    async fn find_languages_by_names(&self, names: &[String]) -> Result<LanguageSet, DomainError> {
        let wanted: Vec<String> = names.iter().map(|n| n.trim().to_lowercase()).collect();
        let rows = sqlx::query("SELECT id, name FROM languages WHERE LOWER(name) = ANY($1)")
            .bind(&wanted)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("resolve languages"))?;

        let mut found = LanguageSet::new();
        for row in &rows {
            let id: Uuid = row.try_get("id").map_err(db_error("decode language"))?;
            let name: String = row.try_get("name").map_err(db_error("decode language"))?;
            found.insert(ProgLanguage::new(LanguageId::from_uuid(id), name));
        }

        let missing: Vec<String> = names
            .iter()
            .filter(|n| !found.iter().any(|l| l.name.eq_ignore_ascii_case(n.trim())))
            .cloned()
            .collect();
        if missing.is_empty() {
            Ok(found)
        } else {
            Err(unknown_languages(&missing))
        }
    }
}
