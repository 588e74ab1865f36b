//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lowest seat count a table may have
pub const MIN_SLOTS: i32 = 1;
/// Highest seat count a table may have
pub const MAX_SLOTS: i32 = 10;
/// Longest status or type token, in characters
pub const MAX_TABLE_TEXT_LEN: u64 = 100;

/// Dining table entity
///
/// `del_flg` marks a retired table. Retired tables are invisible to reads but
/// remain addressable by id for [`DiningTableDelete`], which can clear the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub table_type: String,
    pub slots: i32,
    pub del_flg: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(length(min = 1, max = MAX_TABLE_TEXT_LEN))]
    pub status: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = MAX_TABLE_TEXT_LEN))]
    pub table_type: String,
    #[validate(range(min = MIN_SLOTS, max = MAX_SLOTS))]
    pub slots: i32,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableStatusUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = 1, max = MAX_TABLE_TEXT_LEN))]
    pub status: String,
}

/// Soft-delete payload (`del_flg = false` restores the table)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableDelete {
    #[serde(rename = "_id")]
    pub id: String,
    pub del_flg: bool,
}
