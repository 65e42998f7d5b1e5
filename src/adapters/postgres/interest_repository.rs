//! PostgreSQL implementation of InterestRepository.
//!
//! Uniqueness comes from `UNIQUE (user_id, session_id)`; a conflicting
//! insert affects zero rows and is reported as a duplicate.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::InterestedParticipant;
use crate::ports::{InterestInsert, InterestRepository};

use super::rows::{db_error, user_id};

#[derive(Clone)]
pub struct PostgresInterestRepository {
    pool: PgPool,
}

impl PostgresInterestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterestRepository for PostgresInterestRepository {
    async fn record(&self, interest: &InterestedParticipant) -> Result<InterestInsert, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO interested_participants (id, user_id, session_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, session_id) DO NOTHING
            "#,
        )
        .bind(interest.id.as_uuid())
        .bind(interest.user_id.as_str())
        .bind(interest.session_id.as_uuid())
        .bind(interest.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("record interest"))?;

        Ok(if result.rows_affected() == 0 {
            InterestInsert::Duplicate
        } else {
            InterestInsert::Inserted
        })
    }

    async fn exists(&self, user_id: &UserId, session_id: &SessionId) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM interested_participants WHERE user_id = $1 AND session_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(session_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check interest"))
    }

    async fn list_user_ids(&self, session_id: &SessionId) -> Result<Vec<UserId>, DomainError> {
        let rows = sqlx::query(
            "SELECT user_id FROM interested_participants WHERE session_id = $1 ORDER BY created_at",
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list interested users"))?;

        rows.iter().map(|row| user_id(row, "user_id")).collect()
    }
}
