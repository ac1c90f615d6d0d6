use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_posting::JobPostingRow;
use crate::models::skills::{SkillsAdvice, SkillsPreparationRow};
use crate::models::{
    ExperienceLevel, JobPosting, JobPostingFilter, NewJobPosting, ScratchItem, SkillsPreparation,
    NOT_SPECIFIED,
};
use crate::positions::distinct_positions;
use crate::store::Store;

/// PostgreSQL-backed store. Cheap to clone; shares the pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_job_posting(&self, posting: NewJobPosting) -> Result<JobPosting, AppError> {
        let row = sqlx::query_as::<_, JobPostingRow>(
            r#"
            INSERT INTO job_postings
                (id, company, position, experience, tech_stack, preferred_skills,
                 original_text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&posting.company)
        .bind(&posting.position)
        .bind(posting.experience.as_str())
        .bind(&posting.tech_stack)
        .bind(&posting.preferred_skills)
        .bind(&posting.original_text)
        .bind(posting.created_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job posting {} ({})", row.id, row.position);
        Ok(row.into())
    }

    async fn get_job_posting(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let row = sqlx::query_as::<_, JobPostingRow>("SELECT * FROM job_postings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(JobPosting::from))
    }

    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
    ) -> Result<Vec<JobPosting>, AppError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM job_postings WHERE TRUE");
        if let Some(position) = &filter.position {
            query.push(" AND position = ").push_bind(position);
        }
        if let Some(experience) = filter.experience {
            query.push(" AND experience = ").push_bind(experience.as_str());
        }
        query.push(" ORDER BY created_at DESC");
        if let Some(limit) = filter.limit {
            query.push(" LIMIT ").push_bind(limit);
        }

        let rows = query
            .build_query_as::<JobPostingRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }

    async fn delete_job_posting(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted job posting {id}");
        }
        Ok(deleted)
    }

    async fn list_positions(&self) -> Result<Vec<String>, AppError> {
        // Ordering is left to `distinct_positions` so it does not depend on the column collation.
        let rows = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT position FROM job_postings WHERE position <> $1",
        )
        .bind(NOT_SPECIFIED)
        .fetch_all(&self.pool)
        .await?;
        Ok(distinct_positions(rows.iter().map(String::as_str)))
    }

    async fn find_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
    ) -> Result<Option<SkillsPreparation>, AppError> {
        let row = sqlx::query_as::<_, SkillsPreparationRow>(
            r#"
            SELECT * FROM skills_preparations
            WHERE position = $1 AND experience = $2
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(position)
        .bind(experience.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(SkillsPreparation::from))
    }

    async fn insert_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
        advice: SkillsAdvice,
    ) -> Result<SkillsPreparation, AppError> {
        let row = sqlx::query_as::<_, SkillsPreparationRow>(
            r#"
            INSERT INTO skills_preparations
                (id, position, experience, essential_skills, bonus_skills,
                 recommendations, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(position)
        .bind(experience.as_str())
        .bind(&advice.essential_skills)
        .bind(&advice.bonus_skills)
        .bind(&advice.recommendations)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Cached skills preparation for {position} ({experience})");
        Ok(row.into())
    }

    async fn insert_scratch_item(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ScratchItem, AppError> {
        Ok(sqlx::query_as::<_, ScratchItem>(
            "INSERT INTO scratch_items (id, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn get_scratch_item(&self, id: Uuid) -> Result<Option<ScratchItem>, AppError> {
        Ok(
            sqlx::query_as::<_, ScratchItem>("SELECT * FROM scratch_items WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_scratch_item_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ScratchItem>, AppError> {
        Ok(sqlx::query_as::<_, ScratchItem>(
            "SELECT * FROM scratch_items WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_scratch_items(&self) -> Result<Vec<ScratchItem>, AppError> {
        Ok(
            sqlx::query_as::<_, ScratchItem>("SELECT * FROM scratch_items ORDER BY name, id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn update_scratch_item(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<u64, AppError> {
        let result =
            sqlx::query("UPDATE scratch_items SET name = $2, description = $3 WHERE id = $1")
                .bind(id)
                .bind(name)
                .bind(description)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    async fn delete_scratch_item(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM scratch_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
