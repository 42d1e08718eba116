/**
 * Catalog API Client
 *
 * HTTP client functions for the book and review endpoints. Each function
 * is blocking and meant to be called from a worker thread; results travel
 * back to the UI over an mpsc channel.
 *
 * Every non-2xx response is reduced to a plain `String`: the server's
 * `{"message": ...}` body when present, a generic fallback otherwise. The
 * UI shows these verbatim as transient notifications.
 */
use reqwest::Client;
use tokio::runtime::Runtime;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::shared::catalog::{Book, MessageResponse, NewBook, NewReview, Review};

/// Pull the failure message out of an error response body, falling back to
/// a generic string when the body is not the expected `{message}` JSON.
pub(crate) fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| format!("Request failed: {}", status))
}

/// Fetch the full book list.
pub fn fetch_books(config: &Config) -> Result<Vec<Book>, String> {
    let client = Client::new();
    let url = config.api_url("/books");

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<Vec<Book>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

/// Add a book. Requires an authenticated session.
pub fn add_book(config: &Config, book: &NewBook) -> Result<Book, String> {
    let client = Client::new();
    let url = config.api_url("/books");
    let token = config.get_token().ok_or("Not authenticated")?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(book)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<Book>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

/// Delete a book the current user owns.
pub fn delete_book(config: &Config, book_id: Uuid) -> Result<MessageResponse, String> {
    let client = Client::new();
    let url = config.api_url(&format!("/books/{}", book_id));
    let token = config.get_token().ok_or("Not authenticated")?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

/// Fetch all reviews for a book.
pub fn fetch_reviews(config: &Config, book_id: Uuid) -> Result<Vec<Review>, String> {
    let client = Client::new();
    let url = config.api_url(&format!("/reviews/{}", book_id));

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<Vec<Review>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

/// Add a review to a book. Requires an authenticated session.
pub fn add_review(config: &Config, book_id: Uuid, review: &NewReview) -> Result<Review, String> {
    let client = Client::new();
    let url = config.api_url(&format!("/reviews/{}", book_id));
    let token = config.get_token().ok_or("Not authenticated")?;

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(review)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        response
            .json::<Review>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn config_for(url: &str) -> Config {
        let mut config =
            Config::with_builder(AppConfig::builder().server_url(url.to_string())).unwrap();
        config.set_token(Some("test-token".to_string()));
        config
    }

    #[test]
    fn error_message_prefers_server_body() {
        let msg = error_message(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"message":"Book not found"}"#,
        );
        assert_eq!(msg, "Book not found");
    }

    #[test]
    fn error_message_falls_back_on_non_json() {
        let msg = error_message(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(msg.contains("502"));
    }

    #[test]
    fn fetch_books_parses_list() {
        let mut server = mockito::Server::new();
        let book_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let body = serde_json::json!([{
            "_id": book_id,
            "title": "Dune",
            "author": "Frank Herbert",
            "description": "Desert planet",
            "genre": "Science Fiction",
            "year": 1965,
            "addedBy": owner_id,
            "addedByName": "Ana",
        }]);
        let _m = server
            .mock("GET", "/books")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create();

        let books = fetch_books(&config_for(&server.url())).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].added_by, owner_id);
    }

    #[test]
    fn delete_book_surfaces_ownership_error() {
        let mut server = mockito::Server::new();
        let book_id = Uuid::new_v4();
        let _m = server
            .mock("DELETE", format!("/books/{}", book_id).as_str())
            .with_status(401)
            .with_body(r#"{"message":"User not authorized"}"#)
            .create();

        let err = delete_book(&config_for(&server.url()), book_id).unwrap_err();
        assert_eq!(err, "User not authorized");
    }

    #[test]
    fn add_book_requires_token() {
        let config =
            Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:9".to_string()))
                .unwrap();
        let err = add_book(&config, &NewBook::default()).unwrap_err();
        assert_eq!(err, "Not authenticated");
    }
}
