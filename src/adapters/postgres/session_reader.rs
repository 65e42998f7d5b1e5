//! PostgreSQL implementation of SessionReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ProjectId, UserId};
use crate::ports::{SessionReader, SessionView};

use super::rows::db_error;
use super::session_repository::{hydrate_sessions, SELECT_SESSIONS};

#[derive(Clone)]
pub struct PostgresSessionReader {
    pool: PgPool,
}

impl PostgresSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn views(&self, filter: &str, bind: Bind<'_>) -> Result<Vec<SessionView>, DomainError> {
        let sql = format!("{SELECT_SESSIONS} {filter} ORDER BY s.schedule_date_time");
        let query = sqlx::query(&sql);
        let query = match bind {
            Bind::User(id) => query.bind(id.as_str()),
            Bind::Project(id) => query.bind(id),
        };
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list sessions"))?;

        let sessions = hydrate_sessions(&self.pool, rows).await?;
        Ok(sessions.iter().map(SessionView::from).collect())
    }
}

enum Bind<'a> {
    User(&'a UserId),
    Project(Uuid),
}

#[async_trait]
impl SessionReader for PostgresSessionReader {
    async fn list_hosted(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        self.views("WHERE s.host_id = $1", Bind::User(user_id)).await
    }

    async fn list_participating(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        self.views(
            "WHERE s.id IN (SELECT session_id FROM session_participants WHERE user_id = $1)",
            Bind::User(user_id),
        )
        .await
    }

    async fn list_interested(&self, user_id: &UserId) -> Result<Vec<SessionView>, DomainError> {
        self.views(
            "WHERE s.id IN (SELECT session_id FROM interested_participants WHERE user_id = $1)",
            Bind::User(user_id),
        )
        .await
    }

    async fn list_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<SessionView>, DomainError> {
        self.views("WHERE s.project_id = $1", Bind::Project(*project_id.as_uuid()))
            .await
    }
}
