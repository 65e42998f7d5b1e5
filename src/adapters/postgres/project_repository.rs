//! PostgreSQL implementation of ProjectRepository.
//!
//! The project row and its `project_languages` rows are written in one
//! transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};
use uuid::Uuid;

use crate::domain::catalog::Level;
use crate::domain::foundation::{DomainError, ErrorCode, LevelId, ProjectId, UserId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::rows::{db_error, languages_by_owner, stack, timestamp, user_id};

const SELECT_PROJECTS: &str = r#"
    SELECT p.id, p.owner_id, p.name, p.description, p.image_url, p.stack,
           p.level_id, lv.name AS level_name, p.active, p.created_at, p.updated_at
    FROM projects p
    JOIN levels lv ON lv.id = p.level_id
"#;

#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate(&self, rows: Vec<PgRow>) -> Result<Vec<Project>, DomainError> {
        let ids: Vec<Uuid> = rows
            .iter()
            .map(|row| row.try_get("id"))
            .collect::<Result<_, _>>()
            .map_err(db_error("decode project"))?;
        let mut languages =
            languages_by_owner(&self.pool, "project_languages", "project_id", &ids).await?;

        rows.iter()
            .map(|row| {
                let id: Uuid = row.try_get("id").map_err(db_error("decode project"))?;
                let level_id: Uuid = row.try_get("level_id").map_err(db_error("decode project"))?;
                let level_name: String =
                    row.try_get("level_name").map_err(db_error("decode project"))?;
                Ok(Project::reconstitute(
                    ProjectId::from_uuid(id),
                    user_id(row, "owner_id")?,
                    row.try_get("name").map_err(db_error("decode project"))?,
                    row.try_get("description").map_err(db_error("decode project"))?,
                    row.try_get("image_url").map_err(db_error("decode project"))?,
                    stack(row, "stack")?,
                    languages.remove(&id).unwrap_or_default(),
                    Level::new(LevelId::from_uuid(level_id), level_name),
                    row.try_get("active").map_err(db_error("decode project"))?,
                    timestamp(row, "created_at")?,
                    timestamp(row, "updated_at")?,
                ))
            })
            .collect()
    }
}

async fn replace_languages(conn: &mut PgConnection, project: &Project) -> Result<(), DomainError> {
    sqlx::query("DELETE FROM project_languages WHERE project_id = $1")
        .bind(project.id().as_uuid())
        .execute(&mut *conn)
        .await
        .map_err(db_error("clear project languages"))?;

    for language_id in project.languages().ids() {
        sqlx::query("INSERT INTO project_languages (project_id, language_id) VALUES ($1, $2)")
            .bind(project.id().as_uuid())
            .bind(language_id.as_uuid())
            .execute(&mut *conn)
            .await
            .map_err(db_error("insert project language"))?;
    }
    Ok(())
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        sqlx::query(
            r#"
            INSERT INTO projects (
                id, owner_id, name, description, image_url, stack, level_id,
                active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.owner_id().as_str())
        .bind(project.name())
        .bind(project.description())
        .bind(project.image_url())
        .bind(project.stack().as_str())
        .bind(project.level().id.as_uuid())
        .bind(project.is_active())
        .bind(project.created_at().as_datetime())
        .bind(project.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("insert project"))?;

        replace_languages(&mut *tx, project).await?;
        tx.commit().await.map_err(db_error("commit project"))?;
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(db_error("begin transaction"))?;

        let result = sqlx::query(
            r#"
            UPDATE projects SET
                name = $2, description = $3, image_url = $4, stack = $5,
                level_id = $6, active = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(project.id().as_uuid())
        .bind(project.name())
        .bind(project.description())
        .bind(project.image_url())
        .bind(project.stack().as_str())
        .bind(project.level().id.as_uuid())
        .bind(project.is_active())
        .bind(project.updated_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("update project"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project not found: {}", project.id()),
            ));
        }

        replace_languages(&mut *tx, project).await?;
        tx.commit().await.map_err(db_error("commit project"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let rows = sqlx::query(&format!("{SELECT_PROJECTS} WHERE p.id = $1"))
            .bind(id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("find project"))?;
        Ok(self.hydrate(rows).await?.into_iter().next())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(&format!(
            "{SELECT_PROJECTS} WHERE p.owner_id = $1 ORDER BY p.created_at DESC"
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("find projects by owner"))?;
        self.hydrate(rows).await
    }
}
