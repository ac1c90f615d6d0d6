//! Distinct positions across stored job postings.

use std::collections::BTreeSet;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::NOT_SPECIFIED;
use crate::state::AppState;

/// Sorted, deduplicated positions with the sentinel and blanks removed.
pub fn distinct_positions<'a>(positions: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    positions
        .into_iter()
        .filter(|p| *p != NOT_SPECIFIED && !p.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// GET /api/positions
pub async fn handle_list_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let positions = state
        .store
        .list_positions()
        .await
        .map_err(|e| e.during("직무 목록 조회에 실패했습니다."))?;
    Ok(Json(positions))
}
