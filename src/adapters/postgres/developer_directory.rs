//! PostgreSQL implementation of DeveloperDirectory.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::catalog::{LanguageSet, ProgLanguage, Stack};
use crate::domain::developer::Developer;
use crate::domain::foundation::{DomainError, LanguageId, UserId};
use crate::ports::DeveloperDirectory;

use super::rows::{db_error, optional_level, optional_stack, user_id};

const SELECT_USERS: &str = r#"
    SELECT u.id, u.username, u.name, u.email, u.stack,
           u.level_id, lv.name AS level_name
    FROM users u
    LEFT JOIN levels lv ON lv.id = u.level_id
"#;

#[derive(Clone)]
pub struct PostgresDeveloperDirectory {
    pool: PgPool,
}

impl PostgresDeveloperDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate(&self, rows: Vec<PgRow>) -> Result<Vec<Developer>, DomainError> {
        let ids: Vec<String> = rows
            .iter()
            .map(|row| row.try_get("id"))
            .collect::<Result<_, _>>()
            .map_err(db_error("decode user"))?;
        let mut languages = self.languages_for(&ids).await?;

        rows.iter()
            .map(|row| {
                let id = user_id(row, "id")?;
                Ok(Developer {
                    languages: languages.remove(id.as_str()).unwrap_or_default(),
                    id,
                    username: row.try_get("username").map_err(db_error("decode user"))?,
                    name: row.try_get("name").map_err(db_error("decode user"))?,
                    email: row.try_get("email").map_err(db_error("decode user"))?,
                    stack: optional_stack(row, "stack")?,
                    level: optional_level(row)?,
                })
            })
            .collect()
    }

    async fn languages_for(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, LanguageSet>, DomainError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query(
            r#"
            SELECT ul.user_id, l.id, l.name
            FROM user_languages ul
            JOIN languages l ON l.id = ul.language_id
            WHERE ul.user_id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("load user languages"))?;

        let mut sets: HashMap<String, LanguageSet> = HashMap::new();
        for row in rows {
            let owner: String = row.try_get("user_id").map_err(db_error("decode language"))?;
            let id: Uuid = row.try_get("id").map_err(db_error("decode language"))?;
            let name: String = row.try_get("name").map_err(db_error("decode language"))?;
            sets.entry(owner)
                .or_default()
                .insert(ProgLanguage::new(LanguageId::from_uuid(id), name));
        }
        Ok(sets)
    }

    async fn fetch_one(&self, sql: &str, bind: &str) -> Result<Option<Developer>, DomainError> {
        let rows = sqlx::query(sql)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find user"))?;
        Ok(self.hydrate(rows).await?.into_iter().next())
    }
}

#[async_trait]
impl DeveloperDirectory for PostgresDeveloperDirectory {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Developer>, DomainError> {
        self.fetch_one(&format!("{SELECT_USERS} WHERE u.id = $1"), id.as_str())
            .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Developer>, DomainError> {
        self.fetch_one(&format!("{SELECT_USERS} WHERE u.username = $1"), username)
            .await
    }

    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Developer>, DomainError> {
        let rows = sqlx::query(&format!("{SELECT_USERS} WHERE u.stack = $1"))
            .bind(stack.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find users by stack"))?;
        self.hydrate(rows).await
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<Developer>, DomainError> {
        let raw: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let rows = sqlx::query(&format!("{SELECT_USERS} WHERE u.id = ANY($1)"))
            .bind(&raw)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find users"))?;
        self.hydrate(rows).await
    }
}
