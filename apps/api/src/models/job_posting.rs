use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::experience::ExperienceLevel;

/// An analyzed job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub experience: ExperienceLevel,
    pub tech_stack: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub original_text: String,
    pub created_at: DateTime<Utc>,
}

/// A posting produced by analysis, not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub company: String,
    pub position: String,
    pub experience: ExperienceLevel,
    pub tech_stack: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub original_text: String,
    pub created_at: DateTime<Utc>,
}

impl NewJobPosting {
    /// Stored form of the posting; `PgStore` builds it from the inserted row instead.
    #[cfg(test)]
    pub fn into_posting(self, id: Uuid) -> JobPosting {
        JobPosting {
            id,
            company: self.company,
            position: self.position,
            experience: self.experience,
            tech_stack: self.tech_stack,
            preferred_skills: self.preferred_skills,
            original_text: self.original_text,
            created_at: self.created_at,
        }
    }
}

/// Row shape of `job_postings`. The experience column holds the bucket label.
#[derive(Debug, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub experience: String,
    pub tech_stack: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub original_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<JobPostingRow> for JobPosting {
    fn from(row: JobPostingRow) -> Self {
        JobPosting {
            id: row.id,
            company: row.company,
            position: row.position,
            experience: ExperienceLevel::from_model_output(&row.experience),
            tech_stack: row.tech_stack,
            preferred_skills: row.preferred_skills,
            original_text: row.original_text,
            created_at: row.created_at,
        }
    }
}

/// Optional filters for listing postings. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingFilter {
    pub position: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub limit: Option<i64>,
}
