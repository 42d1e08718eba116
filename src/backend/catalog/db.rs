//! Database operations for the book catalog.

use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::catalog::{Book, NewBook};

/// Fetch the full catalog. Filtering, sorting and pagination are client
/// concerns; this endpoint always serves everything.
pub async fn list_books(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, description, genre, year, added_by, added_by_name
        FROM books
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a single book, `None` if it does not exist.
pub async fn get_book_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, author, description, genre, year, added_by, added_by_name
        FROM books
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new book with its owner reference and denormalized owner name.
pub async fn create_book(
    pool: &PgPool,
    new_book: &NewBook,
    added_by: Uuid,
    added_by_name: &str,
) -> Result<Book, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (id, title, author, description, genre, year, added_by, added_by_name)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, author, description, genre, year, added_by, added_by_name
        "#,
    )
    .bind(id)
    .bind(&new_book.title)
    .bind(&new_book.author)
    .bind(&new_book.description)
    .bind(&new_book.genre)
    .bind(new_book.year)
    .bind(added_by)
    .bind(added_by_name)
    .fetch_one(pool)
    .await
}

/// Delete a book and all of its reviews in one transaction.
///
/// The reviews go first so the foreign key never complains; committing
/// both together means a crash can never leave orphaned reviews behind.
pub async fn delete_book_with_reviews(pool: &PgPool, book_id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM reviews WHERE book_id = $1")
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
