//! Demo CRUD resource (`/api/test`) with no business meaning.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ScratchItem;
use crate::routes::params::{non_blank, parse_id};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemResponse {
    pub message: &'static str,
    pub inserted_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ItemLookup {
    One(ScratchItem),
    Many(Vec<ScratchItem>),
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemResponse {
    pub message: &'static str,
    pub modified_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteItemRequest {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemResponse {
    pub message: &'static str,
    pub deleted_count: u64,
}

/// POST /api/test
pub async fn handle_create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<CreateItemResponse>, AppError> {
    let Json(request) = payload?;
    let (Some(name), Some(description)) = (
        non_blank(request.name.as_deref()),
        non_blank(request.description.as_deref()),
    ) else {
        return Err(AppError::Validation("이름과 설명이 필요".to_string()));
    };

    let item = state
        .store
        .insert_scratch_item(name, description)
        .await
        .map_err(|e| e.during("삽입 실패"))?;

    Ok(Json(CreateItemResponse {
        message: "삽입됨",
        inserted_id: item.id,
    }))
}

/// GET /api/test | ?id= | ?name=
pub async fn handle_lookup(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<ItemLookup>, AppError> {
    let not_found = || AppError::NotFound("항목을 찾을 수 없음".to_string());

    if let Some(raw_id) = non_blank(query.id.as_deref()) {
        let id = parse_id(raw_id)?;
        let item = state
            .store
            .get_scratch_item(id)
            .await
            .map_err(|e| e.during("조회 실패"))?
            .ok_or_else(not_found)?;
        return Ok(Json(ItemLookup::One(item)));
    }

    if let Some(name) = non_blank(query.name.as_deref()) {
        let item = state
            .store
            .find_scratch_item_by_name(name)
            .await
            .map_err(|e| e.during("조회 실패"))?
            .ok_or_else(not_found)?;
        return Ok(Json(ItemLookup::One(item)));
    }

    let items = state
        .store
        .list_scratch_items()
        .await
        .map_err(|e| e.during("조회 실패"))?;
    Ok(Json(ItemLookup::Many(items)))
}

/// PUT /api/test
pub async fn handle_update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<UpdateItemResponse>, AppError> {
    let Json(request) = payload?;
    let (Some(raw_id), Some(name), Some(description)) = (
        non_blank(request.id.as_deref()),
        non_blank(request.name.as_deref()),
        non_blank(request.description.as_deref()),
    ) else {
        return Err(AppError::Validation("id, name, description 필요".to_string()));
    };
    let id = parse_id(raw_id)?;

    let modified_count = state
        .store
        .update_scratch_item(id, name, description)
        .await
        .map_err(|e| e.during("수정 실패"))?;

    Ok(Json(UpdateItemResponse {
        message: "수정됨",
        modified_count,
    }))
}

/// DELETE /api/test
pub async fn handle_delete(
    State(state): State<AppState>,
    payload: Result<Json<DeleteItemRequest>, JsonRejection>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    let Json(request) = payload?;
    let raw_id = non_blank(request.id.as_deref())
        .ok_or_else(|| AppError::Validation("id 필요".to_string()))?;
    let id = parse_id(raw_id)?;

    let deleted_count = state
        .store
        .delete_scratch_item(id)
        .await
        .map_err(|e| e.during("삭제 실패"))?;

    Ok(Json(DeleteItemResponse {
        message: "삭제됨",
        deleted_count,
    }))
}
