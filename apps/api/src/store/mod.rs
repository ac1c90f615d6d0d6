//! Document store for the three collections the API reads and writes.
//!
//! `AppState` carries an `Arc<dyn Store>`. Production uses `PgStore`; router
//! tests use the in-memory backend.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skills::SkillsAdvice;
use crate::models::{
    ExperienceLevel, JobPosting, JobPostingFilter, NewJobPosting, ScratchItem, SkillsPreparation,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    // Job postings

    async fn insert_job_posting(&self, posting: NewJobPosting) -> Result<JobPosting, AppError>;

    async fn get_job_posting(&self, id: Uuid) -> Result<Option<JobPosting>, AppError>;

    /// Postings matching every set filter field, newest first.
    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
    ) -> Result<Vec<JobPosting>, AppError>;

    /// Returns `false` when no posting had that id.
    async fn delete_job_posting(&self, id: Uuid) -> Result<bool, AppError>;

    /// Distinct positions, sorted, without the "not specified" sentinel.
    async fn list_positions(&self) -> Result<Vec<String>, AppError>;

    // Skills preparation cache

    /// The earliest cached result for the key, if any.
    async fn find_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
    ) -> Result<Option<SkillsPreparation>, AppError>;

    async fn insert_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
        advice: SkillsAdvice,
    ) -> Result<SkillsPreparation, AppError>;

    // Scratch items

    async fn insert_scratch_item(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ScratchItem, AppError>;

    async fn get_scratch_item(&self, id: Uuid) -> Result<Option<ScratchItem>, AppError>;

    async fn find_scratch_item_by_name(&self, name: &str)
        -> Result<Option<ScratchItem>, AppError>;

    async fn list_scratch_items(&self) -> Result<Vec<ScratchItem>, AppError>;

    /// Number of items modified (0 or 1).
    async fn update_scratch_item(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<u64, AppError>;

    /// Number of items deleted (0 or 1).
    async fn delete_scratch_item(&self, id: Uuid) -> Result<u64, AppError>;
}
