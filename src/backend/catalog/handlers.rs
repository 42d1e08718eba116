/**
 * Book Catalog HTTP Handlers
 *
 * - `GET /books` (public) - full catalog, unfiltered
 * - `POST /books` (bearer) - add a book owned by the caller
 * - `DELETE /books/{id}` (bearer) - owner-only delete with review cascade
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use super::db;
use crate::backend::auth::handlers::require_fields;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::catalog::{Book, MessageResponse, NewBook};

/// List all books.
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = db::list_books(&state.db_pool).await?;
    Ok(Json(books))
}

/// Add a book for the authenticated user.
pub async fn add_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    require_fields(&[
        ("title", &request.title),
        ("author", &request.author),
        ("description", &request.description),
        ("genre", &request.genre),
    ])?;

    let book = db::create_book(&state.db_pool, &request, user.id, &user.name).await?;

    tracing::info!("Book added: {} by user {}", book.title, user.id);
    Ok((StatusCode::CREATED, Json(book)))
}

/// Delete a book the authenticated user owns, cascading to its reviews.
pub async fn delete_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book = db::get_book_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book not found"))?;

    if book.added_by != user.id {
        tracing::warn!(
            "User {} attempted to delete book {} owned by {}",
            user.id,
            book.id,
            book.added_by
        );
        return Err(ApiError::unauthorized("User not authorized"));
    }

    db::delete_book_with_reviews(&state.db_pool, book.id).await?;

    tracing::info!("Book removed: {} ({})", book.title, book.id);
    Ok(Json(MessageResponse {
        message: "Book removed".to_string(),
    }))
}
