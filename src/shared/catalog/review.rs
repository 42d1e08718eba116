//! Review wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A review in the ledger.
///
/// `user_name` is denormalized at creation time, like `Book::added_by_name`.
/// Reviews are never updated or individually deleted; they disappear only
/// when their book is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub book_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /reviews/{bookId}`. Rating bounds are enforced by the
/// database schema, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NewReview {
    pub rating: i32,
    pub review_text: String,
}
