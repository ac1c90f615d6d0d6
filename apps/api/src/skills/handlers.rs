use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::SkillsPreparation;
use crate::routes::params::{non_blank, parse_experience};
use crate::skills::preparation::prepare_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PrepareSkillsRequest {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// POST /api/prepare-skills
///
/// Returns cached advice for the pair, computing it from stored postings on the first request.
pub async fn handle_prepare_skills(
    State(state): State<AppState>,
    payload: Result<Json<PrepareSkillsRequest>, JsonRejection>,
) -> Result<Json<SkillsPreparation>, AppError> {
    let Json(request) = payload?;
    let (Some(position), Some(experience)) = (
        non_blank(request.position.as_deref()),
        non_blank(request.experience.as_deref()),
    ) else {
        return Err(AppError::Validation("직무와 년차가 모두 필요합니다.".to_string()));
    };
    let experience = parse_experience(experience)?;

    let preparation = prepare_skills(
        state.store.as_ref(),
        state.llm.as_ref(),
        position,
        experience,
    )
    .await
    .map_err(|e| e.during("준비사항 분석에 실패했습니다."))?;

    Ok(Json(preparation))
}
