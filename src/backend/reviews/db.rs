//! Database operations for the review ledger.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::catalog::{NewReview, Review};

/// All reviews for a book, in insertion order. An unknown book id simply
/// yields an empty list; existence checks belong to the write path.
pub async fn list_reviews_for_book(
    pool: &PgPool,
    book_id: Uuid,
) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        SELECT id, book_id, user_id, user_name, rating, review_text, created_at
        FROM reviews
        WHERE book_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(book_id)
    .fetch_all(pool)
    .await
}

/// Insert a review with a server-assigned timestamp and the denormalized
/// author name. The rating bounds are the schema's job (CHECK constraint).
pub async fn create_review(
    pool: &PgPool,
    book_id: Uuid,
    new_review: &NewReview,
    user_id: Uuid,
    user_name: &str,
) -> Result<Review, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (id, book_id, user_id, user_name, rating, review_text, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, book_id, user_id, user_name, rating, review_text, created_at
        "#,
    )
    .bind(id)
    .bind(book_id)
    .bind(user_id)
    .bind(user_name)
    .bind(new_review.rating)
    .bind(&new_review.review_text)
    .bind(now)
    .fetch_one(pool)
    .await
}
