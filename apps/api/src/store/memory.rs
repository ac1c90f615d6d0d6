use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::skills::SkillsAdvice;
use crate::models::{
    ExperienceLevel, JobPosting, JobPostingFilter, NewJobPosting, ScratchItem, SkillsPreparation,
};
use crate::positions::distinct_positions;
use crate::store::Store;

fn matches(filter: &JobPostingFilter, posting: &JobPosting) -> bool {
    filter
        .position
        .as_deref()
        .map_or(true, |position| posting.position == position)
        && filter
            .experience
            .map_or(true, |experience| posting.experience == experience)
}

#[derive(Default)]
struct Collections {
    job_postings: Vec<JobPosting>,
    skills_preparations: Vec<SkillsPreparation>,
    scratch_items: Vec<ScratchItem>,
}

/// In-process store for router tests. Insertion order stands in for `created_at`.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn job_posting_count(&self) -> usize {
        self.inner.lock().unwrap().job_postings.len()
    }

    pub fn skills_preparation_count(&self) -> usize {
        self.inner.lock().unwrap().skills_preparations.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_job_posting(&self, posting: NewJobPosting) -> Result<JobPosting, AppError> {
        let posting = posting.into_posting(Uuid::new_v4());
        self.inner
            .lock()
            .unwrap()
            .job_postings
            .push(posting.clone());
        Ok(posting)
    }

    async fn get_job_posting(&self, id: Uuid) -> Result<Option<JobPosting>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.job_postings.iter().find(|p| p.id == id).cloned())
    }

    async fn list_job_postings(
        &self,
        filter: &JobPostingFilter,
    ) -> Result<Vec<JobPosting>, AppError> {
        let inner = self.inner.lock().unwrap();
        let limit = filter
            .limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX);
        Ok(inner
            .job_postings
            .iter()
            .rev()
            .filter(|p| matches(filter, p))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete_job_posting(&self, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.job_postings.len();
        inner.job_postings.retain(|p| p.id != id);
        Ok(inner.job_postings.len() < before)
    }

    async fn list_positions(&self) -> Result<Vec<String>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(distinct_positions(
            inner.job_postings.iter().map(|p| p.position.as_str()),
        ))
    }

    async fn find_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
    ) -> Result<Option<SkillsPreparation>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .skills_preparations
            .iter()
            .find(|s| s.position == position && s.experience == experience)
            .cloned())
    }

    async fn insert_skills_preparation(
        &self,
        position: &str,
        experience: ExperienceLevel,
        advice: SkillsAdvice,
    ) -> Result<SkillsPreparation, AppError> {
        let preparation = SkillsPreparation {
            id: Uuid::new_v4(),
            position: position.to_string(),
            experience,
            essential_skills: advice.essential_skills,
            bonus_skills: advice.bonus_skills,
            recommendations: advice.recommendations,
            created_at: Utc::now(),
        };
        self.inner
            .lock()
            .unwrap()
            .skills_preparations
            .push(preparation.clone());
        Ok(preparation)
    }

    async fn insert_scratch_item(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ScratchItem, AppError> {
        let item = ScratchItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
        };
        self.inner.lock().unwrap().scratch_items.push(item.clone());
        Ok(item)
    }

    async fn get_scratch_item(&self, id: Uuid) -> Result<Option<ScratchItem>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.scratch_items.iter().find(|i| i.id == id).cloned())
    }

    async fn find_scratch_item_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ScratchItem>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.scratch_items.iter().find(|i| i.name == name).cloned())
    }

    async fn list_scratch_items(&self) -> Result<Vec<ScratchItem>, AppError> {
        Ok(self.inner.lock().unwrap().scratch_items.clone())
    }

    async fn update_scratch_item(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.scratch_items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = name.to_string();
                item.description = description.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_scratch_item(&self, id: Uuid) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.scratch_items.len();
        inner.scratch_items.retain(|i| i.id != id);
        Ok((before - inner.scratch_items.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(store: &MemoryStore, position: &str, experience: ExperienceLevel) {
        store
            .insert_job_posting(NewJobPosting {
                company: "회사".to_string(),
                position: position.to_string(),
                experience,
                tech_stack: vec![],
                preferred_skills: vec![],
                original_text: String::new(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_filter_lists_newest_first() {
        let store = MemoryStore::new();
        seed(&store, "백엔드 개발자", ExperienceLevel::NewGrad).await;
        seed(&store, "데이터 엔지니어", ExperienceLevel::TenPlus).await;

        let all = store
            .list_job_postings(&JobPostingFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].position, "데이터 엔지니어");
    }

    #[tokio::test]
    async fn test_filter_requires_every_given_field() {
        let store = MemoryStore::new();
        seed(&store, "백엔드 개발자", ExperienceLevel::OneToThree).await;
        seed(&store, "백엔드 개발자", ExperienceLevel::ThreeToFive).await;
        seed(&store, "데이터 엔지니어", ExperienceLevel::OneToThree).await;

        let filter = JobPostingFilter {
            position: Some("백엔드 개발자".to_string()),
            experience: Some(ExperienceLevel::OneToThree),
            limit: None,
        };
        let found = store.list_job_postings(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].experience, ExperienceLevel::OneToThree);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let store = MemoryStore::new();
        seed(&store, "백엔드 개발자", ExperienceLevel::NewGrad).await;
        let id = store.list_job_postings(&JobPostingFilter::default()).await.unwrap()[0].id;

        assert!(store.delete_job_posting(id).await.unwrap());
        assert!(!store.delete_job_posting(id).await.unwrap());
        assert!(store.get_job_posting(id).await.unwrap().is_none());
    }
}
