use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::experience::ExperienceLevel;

/// Cached preparation advice for one (position, experience) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsPreparation {
    pub id: Uuid,
    pub position: String,
    pub experience: ExperienceLevel,
    pub essential_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The advice part of a preparation result, before it is keyed and stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsAdvice {
    pub essential_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, FromRow)]
pub struct SkillsPreparationRow {
    pub id: Uuid,
    pub position: String,
    pub experience: String,
    pub essential_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SkillsPreparationRow> for SkillsPreparation {
    fn from(row: SkillsPreparationRow) -> Self {
        SkillsPreparation {
            id: row.id,
            position: row.position,
            experience: ExperienceLevel::from_model_output(&row.experience),
            essential_skills: row.essential_skills,
            bonus_skills: row.bonus_skills,
            recommendations: row.recommendations,
            created_at: row.created_at,
        }
    }
}
