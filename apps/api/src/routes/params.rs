//! Helpers for reading request parameters.

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ExperienceLevel;

/// Treats missing, empty and whitespace-only values alike.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("유효하지 않은 ID입니다: {raw}")))
}

pub fn parse_experience(raw: &str) -> Result<ExperienceLevel, AppError> {
    ExperienceLevel::parse_label(raw)
        .ok_or_else(|| AppError::Validation(format!("알 수 없는 년차입니다: {raw}")))
}
