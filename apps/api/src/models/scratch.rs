use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Free-form item of the demo CRUD resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ScratchItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
