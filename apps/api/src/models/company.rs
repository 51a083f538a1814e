use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyRow {
    pub id: i64,
    pub name: String,
}

/// Embedded company reference in a job creation payload: `{"name": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRef {
    pub name: String,
}
