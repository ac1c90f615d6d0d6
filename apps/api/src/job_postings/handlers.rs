//! Axum route handlers for the job posting API.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::job_postings::analyzer::analyze_job_posting;
use crate::models::{JobPosting, JobPostingFilter};
use crate::routes::params::{non_blank, parse_experience, parse_id};
use crate::state::AppState;

const ANALYZE_FAILED: &str = "채용공고 처리에 실패했습니다.";
const LOOKUP_FAILED: &str = "채용공고 조회에 실패했습니다.";
const DELETE_FAILED: &str = "채용공고 삭제에 실패했습니다.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_posting_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub message: &'static str,
    pub data: JobPosting,
    pub inserted_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct JobPostingQuery {
    pub id: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
}

/// `GET /api/job-posting` answers with one posting when `id` is given, else a list.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JobPostingLookup {
    One(JobPosting),
    Many(Vec<JobPosting>),
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/job-posting
///
/// Analyzes pasted posting text with the model and stores the structured result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let text = request
        .job_posting_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation("채용공고 텍스트가 필요합니다.".to_string()))?;

    let new_posting = analyze_job_posting(state.llm.as_ref(), text)
        .await
        .map_err(|e| e.during(ANALYZE_FAILED))?;

    let posting = state
        .store
        .insert_job_posting(new_posting)
        .await
        .map_err(|e| e.during(ANALYZE_FAILED))?;

    Ok(Json(AnalyzeResponse {
        message: "채용공고가 분석되어 저장되었습니다.",
        inserted_id: posting.id,
        data: posting,
    }))
}

/// GET /api/job-posting?id= | ?position=&experience=
pub async fn handle_lookup(
    State(state): State<AppState>,
    Query(query): Query<JobPostingQuery>,
) -> Result<Json<JobPostingLookup>, AppError> {
    if let Some(raw_id) = non_blank(query.id.as_deref()) {
        let posting = fetch_posting(&state, parse_id(raw_id)?).await?;
        return Ok(Json(JobPostingLookup::One(posting)));
    }

    let filter = JobPostingFilter {
        position: non_blank(query.position.as_deref()).map(str::to_string),
        experience: non_blank(query.experience.as_deref())
            .map(parse_experience)
            .transpose()?,
        limit: None,
    };

    let postings = state
        .store
        .list_job_postings(&filter)
        .await
        .map_err(|e| e.during(LOOKUP_FAILED))?;

    Ok(Json(JobPostingLookup::Many(postings)))
}

/// GET /api/job-posting/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<JobPosting>, AppError> {
    let posting = fetch_posting(&state, parse_id(&raw_id)?).await?;
    Ok(Json(posting))
}

/// DELETE /api/job-posting with body `{ "id": ... }`
pub async fn handle_delete(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Json(request) = payload?;
    let raw_id = non_blank(request.id.as_deref())
        .ok_or_else(|| AppError::Validation("삭제할 채용공고 ID가 필요합니다.".to_string()))?;
    delete_posting(&state, parse_id(raw_id)?).await.map(Json)
}

/// DELETE /api/job-posting/:id
pub async fn handle_delete_by_path(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    delete_posting(&state, parse_id(&raw_id)?).await.map(Json)
}

async fn fetch_posting(state: &AppState, id: Uuid) -> Result<JobPosting, AppError> {
    state
        .store
        .get_job_posting(id)
        .await
        .map_err(|e| e.during(LOOKUP_FAILED))?
        .ok_or_else(|| AppError::NotFound("해당 ID의 채용공고를 찾을 수 없습니다.".to_string()))
}

async fn delete_posting(state: &AppState, id: Uuid) -> Result<DeleteResponse, AppError> {
    let deleted = state
        .store
        .delete_job_posting(id)
        .await
        .map_err(|e| e.during(DELETE_FAILED))?;

    if !deleted {
        return Err(AppError::NotFound(
            "해당 ID의 채용공고가 존재하지 않습니다.".to_string(),
        ));
    }

    Ok(DeleteResponse {
        message: "채용공고가 삭제되었습니다.",
        deleted_id: id,
    })
}
