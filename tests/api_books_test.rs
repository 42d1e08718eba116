//! Book catalog API integration tests
//!
//! Covers the list/add/delete flow, the ownership guard on delete, and the
//! review cascade. Requires a running PostgreSQL (see `tests/common`).

mod common;

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serial_test::serial;

    use bookshelf::backend::server::create_app;

    use crate::common::auth_helpers::{create_test_user, TestUser};
    use crate::common::database::TestDatabase;

    async fn create_test_server(db: &TestDatabase) -> TestServer {
        TestServer::new(create_app(db.pool().clone())).unwrap()
    }

    async fn add_book(server: &TestServer, owner: &TestUser, title: &str) -> serde_json::Value {
        let response = server
            .post("/books")
            .add_header("Authorization", owner.bearer())
            .json(&serde_json::json!({
                "title": title,
                "author": "Frank Herbert",
                "description": "Desert planet",
                "genre": "Science Fiction",
                "year": 1965
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn created_book_appears_in_list_with_owner_attached() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;

        let created = add_book(&server, &ana, "Dune").await;
        assert_eq!(created["addedBy"], ana.id().to_string());
        assert_eq!(created["addedByName"], "Ana");

        let response = server.get("/books").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let books: Vec<serde_json::Value> = response.json();
        assert_eq!(books.len(), 1);
        // identical field values round-trip
        assert_eq!(books[0], created);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn book_list_is_public() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;

        let response = server.get("/books").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let books: Vec<serde_json::Value> = response.json();
        assert!(books.is_empty());
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn adding_a_book_requires_a_token() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;

        let response = server
            .post("/books")
            .json(&serde_json::json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "description": "Desert planet",
                "genre": "Science Fiction",
                "year": 1965
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn non_owner_delete_is_rejected_and_changes_nothing() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;
        let bob = create_test_user(db.pool(), "Bob", "b@x.com", "pw123456").await;

        let book = add_book(&server, &ana, "Dune").await;
        let book_id = book["_id"].as_str().unwrap();

        // Bob reviews Ana's book, then tries to delete it
        let review = server
            .post(&format!("/reviews/{}", book_id))
            .add_header("Authorization", bob.bearer())
            .json(&serde_json::json!({ "rating": 4, "reviewText": "Great" }))
            .await;
        assert_eq!(review.status_code(), StatusCode::CREATED);

        let response = server
            .delete(&format!("/books/{}", book_id))
            .add_header("Authorization", bob.bearer())
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "User not authorized");

        // book and its review are intact
        let books: Vec<serde_json::Value> = server.get("/books").await.json();
        assert_eq!(books.len(), 1);
        let reviews: Vec<serde_json::Value> =
            server.get(&format!("/reviews/{}", book_id)).await.json();
        assert_eq!(reviews.len(), 1);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn owner_delete_cascades_to_reviews() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;
        let bob = create_test_user(db.pool(), "Bob", "b@x.com", "pw123456").await;

        let book = add_book(&server, &ana, "Dune").await;
        let book_id = book["_id"].as_str().unwrap();

        for rating in [3, 5] {
            let response = server
                .post(&format!("/reviews/{}", book_id))
                .add_header("Authorization", bob.bearer())
                .json(&serde_json::json!({ "rating": rating, "reviewText": "Review" }))
                .await;
            assert_eq!(response.status_code(), StatusCode::CREATED);
        }

        let response = server
            .delete(&format!("/books/{}", book_id))
            .add_header("Authorization", ana.bearer())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Book removed");

        // the book is gone and so are its reviews
        let books: Vec<serde_json::Value> = server.get("/books").await.json();
        assert!(books.is_empty());
        let reviews: Vec<serde_json::Value> =
            server.get(&format!("/reviews/{}", book_id)).await.json();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn deleting_a_missing_book_is_not_found() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;

        let response = server
            .delete(&format!("/books/{}", uuid::Uuid::new_v4()))
            .add_header("Authorization", ana.bearer())
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Book not found");
    }
}
