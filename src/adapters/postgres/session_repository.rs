//! PostgreSQL implementation of SessionRepository.
//!
//! Session rows carry scalar fields; languages and participants live in
//! join tables. `add_participant` and `update` lock the session row so the
//! limit check and the write happen under one transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};
use uuid::Uuid;

use crate::domain::catalog::Stack;
use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, SessionId, UserId};
use crate::domain::session::{ParticipantLimit, Session, LIMIT_BELOW_CONFIRMED_REASON};
use crate::ports::{ParticipantInsert, SessionRepository};

use super::rows::{
    db_error, languages_by_owner, optional_level, stack, timestamp, to_i32, unsigned, user_id,
};

pub(super) const SELECT_SESSIONS: &str = r#"
    SELECT s.id, s.project_id, s.host_id, s.description, s.schedule_date_time,
           s.duration_minutes, s.session_link, s.participant_limit, s.active,
           s.public, s.stack, s.level_id, lv.name AS level_name,
           s.created_at, s.updated_at
    FROM sessions s
    LEFT JOIN levels lv ON lv.id = s.level_id
"#;

fn session_not_found(id: &SessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionNotFound,
        format!("Session not found: {}", id),
    )
}

/// Decodes session rows, loading their languages and participants.
pub(super) async fn hydrate_sessions(
    pool: &PgPool,
    rows: Vec<PgRow>,
) -> Result<Vec<Session>, DomainError> {
    let ids: Vec<Uuid> = rows
        .iter()
        .map(|row| row.try_get("id"))
        .collect::<Result<_, _>>()
        .map_err(db_error("decode session"))?;
    let mut languages = languages_by_owner(pool, "session_languages", "session_id", &ids).await?;
    let mut participants = participants_by_session(pool, &ids).await?;

    rows.iter()
        .map(|row| {
            let id: Uuid = row.try_get("id").map_err(db_error("decode session"))?;
            let project_id: Uuid = row.try_get("project_id").map_err(db_error("decode session"))?;
            Ok(Session::reconstitute(
                SessionId::from_uuid(id),
                ProjectId::from_uuid(project_id),
                user_id(row, "host_id")?,
                row.try_get("description").map_err(db_error("decode session"))?,
                timestamp(row, "schedule_date_time")?,
                unsigned(row, "duration_minutes")?,
                row.try_get("session_link").map_err(db_error("decode session"))?,
                ParticipantLimit::new(unsigned(row, "participant_limit")?),
                row.try_get("active").map_err(db_error("decode session"))?,
                row.try_get("public").map_err(db_error("decode session"))?,
                stack(row, "stack")?,
                optional_level(row)?,
                languages.remove(&id).unwrap_or_default(),
                participants.remove(&id).unwrap_or_default(),
                timestamp(row, "created_at")?,
                timestamp(row, "updated_at")?,
            ))
        })
        .collect()
}

async fn participants_by_session(
    pool: &PgPool,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<UserId>>, DomainError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = sqlx::query(
        r#"
        SELECT session_id, user_id FROM session_participants
        WHERE session_id = ANY($1)
        ORDER BY confirmed_at
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await
    .map_err(db_error("load participants"))?;

    let mut participants: HashMap<Uuid, Vec<UserId>> = HashMap::new();
    for row in &rows {
        let session_id: Uuid = row.try_get("session_id").map_err(db_error("decode participant"))?;
        participants
            .entry(session_id)
            .or_default()
            .push(user_id(row, "user_id")?);
    }
    Ok(participants)
}

/// Locks the session row for the rest of the transaction.
async fn lock_session(
    conn: &mut PgConnection,
    session_id: &SessionId,
) -> Result<ParticipantLimit, DomainError> {
    let row = sqlx::query("SELECT participant_limit FROM sessions WHERE id = $1 FOR UPDATE")
        .bind(session_id.as_uuid())
        .fetch_optional(&mut *conn)
        .await
        .map_err(db_error("lock session"))?
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(ParticipantLimit::new(unsigned(&row, "participant_limit")?))
}

async fn count_participants(
    conn: &mut PgConnection,
    session_id: &SessionId,
) -> Result<usize, DomainError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM session_participants WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .fetch_one(&mut *conn)
            .await
            .map_err(db_error("count participants"))?;
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

async fn replace_languages(conn: &mut PgConnection, session: &Session) -> Result<(), DomainError> {
    sqlx::query("DELETE FROM session_languages WHERE session_id = $1")
        .bind(session.id().as_uuid())
        .execute(&mut *conn)
        .await
        .map_err(db_error("clear session languages"))?;

    for language_id in session.languages().ids() {
        sqlx::query("INSERT INTO session_languages (session_id, language_id) VALUES ($1, $2)")
            .bind(session.id().as_uuid())
            .bind(language_id.as_uuid())
            .execute(&mut *conn)
            .await
            .map_err(db_error("insert session language"))?;
    }
    Ok(())
}

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, sql: &str, bind: Uuid) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(sql)
            .bind(bind)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("query sessions"))?;
        hydrate_sessions(&self.pool, rows).await
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, project_id, host_id, description, schedule_date_time,
                duration_minutes, session_link, participant_limit, active, public,
                stack, level_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.project_id().as_uuid())
        .bind(session.host_id().as_str())
        .bind(session.description())
        .bind(session.schedule_date_time().as_datetime())
        .bind(to_i32(session.duration_minutes(), "duration_minutes")?)
        .bind(session.session_link())
        .bind(to_i32(session.participant_limit().value(), "participant_limit")?)
        .bind(session.is_active())
        .bind(session.is_public())
        .bind(session.stack().as_str())
        .bind(session.level().map(|l| *l.id.as_uuid()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", session.project_id()),
            ),
            _ => DomainError::database(format!("Failed to insert session: {}", e)),
        })?;

        replace_languages(&mut *tx, session).await?;
        tx.commit().await.map_err(db_error("commit session"))?;
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        lock_session(&mut *tx, session.id()).await?;
        let confirmed = count_participants(&mut *tx, session.id()).await?;
        if !session.participant_limit().allows_total(confirmed) {
            return Err(DomainError::validation(
                "participant_limit",
                LIMIT_BELOW_CONFIRMED_REASON,
            ));
        }

        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                description = $2, schedule_date_time = $3, duration_minutes = $4,
                session_link = $5, participant_limit = $6, active = $7, public = $8,
                stack = $9, level_id = $10, updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.description())
        .bind(session.schedule_date_time().as_datetime())
        .bind(to_i32(session.duration_minutes(), "duration_minutes")?)
        .bind(session.session_link())
        .bind(to_i32(session.participant_limit().value(), "participant_limit")?)
        .bind(session.is_active())
        .bind(session.is_public())
        .bind(session.stack().as_str())
        .bind(session.level().map(|l| *l.id.as_uuid()))
        .bind(session.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("update session"))?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(session.id()));
        }

        replace_languages(&mut *tx, session).await?;
        tx.commit().await.map_err(db_error("commit session"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self
            .fetch(&format!("{SELECT_SESSIONS} WHERE s.id = $1"), *id.as_uuid())
            .await?;
        Ok(sessions.into_iter().next())
    }

    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Session>, DomainError> {
        self.fetch(
            &format!("{SELECT_SESSIONS} WHERE s.project_id = $1 ORDER BY s.schedule_date_time"),
            *project_id.as_uuid(),
        )
        .await
    }

    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!("{SELECT_SESSIONS} WHERE s.stack = $1"))
            .bind(stack.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find sessions by stack"))?;
        hydrate_sessions(&self.pool, rows).await
    }

    async fn add_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<ParticipantInsert, DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        let limit = lock_session(&mut *tx, session_id).await?;

        let present: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM session_participants WHERE session_id = $1 AND user_id = $2)",
        )
        .bind(session_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error("check participant"))?;
        if present {
            return Ok(ParticipantInsert::AlreadyPresent);
        }

        if !limit.admits(count_participants(&mut *tx, session_id).await?) {
            return Ok(ParticipantInsert::LimitReached {
                limit: limit.value(),
            });
        }

        sqlx::query("INSERT INTO session_participants (session_id, user_id) VALUES ($1, $2)")
            .bind(session_id.as_uuid())
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error("insert participant"))?;

        tx.commit().await.map_err(db_error("commit participant"))?;
        Ok(ParticipantInsert::Inserted)
    }

    async fn is_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<bool, DomainError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM session_participants WHERE session_id = $1 AND user_id = $2)",
        )
        .bind(session_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check participant"))
    }
}
