/**
 * Review Ledger HTTP Handlers
 *
 * - `GET /reviews/{bookId}` (public) - all reviews for a book
 * - `POST /reviews/{bookId}` (bearer) - add a review to an existing book
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use super::db;
use crate::backend::auth::handlers::require_fields;
use crate::backend::catalog::db::get_book_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::catalog::{NewReview, Review};

/// List all reviews for a book.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = db::list_reviews_for_book(&state.db_pool, book_id).await?;
    Ok(Json(reviews))
}

/// Add a review to an existing book.
///
/// The existence check keeps the invariant that every review points at a
/// live book; the foreign key in the schema backs it up.
pub async fn add_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(book_id): Path<Uuid>,
    Json(request): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    require_fields(&[("reviewText", &request.review_text)])?;

    let book = get_book_by_id(&state.db_pool, book_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book not found"))?;

    let review = db::create_review(&state.db_pool, book.id, &request, user.id, &user.name).await?;

    tracing::info!(
        "Review added for book {} by user {} (rating {})",
        book.id,
        user.id,
        review.rating
    );
    Ok((StatusCode::CREATED, Json(review)))
}
