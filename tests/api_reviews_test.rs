//! Review ledger API integration tests
//!
//! Covers listing, creation with denormalized author data, and the
//! missing-book guard. Requires a running PostgreSQL (see `tests/common`).

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

    async fn add_book(server: &TestServer, owner: &TestUser) -> String {
        let response = server
            .post("/books")
            .add_header("Authorization", owner.bearer())
            .json(&serde_json::json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "description": "Desert planet",
                "genre": "Science Fiction",
                "year": 1965
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        let book: serde_json::Value = response.json();
        book["_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn review_carries_denormalized_author_and_timestamp() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;
        let bob = create_test_user(db.pool(), "Bob", "b@x.com", "pw123456").await;

        let book_id = add_book(&server, &ana).await;

        let response = server
            .post(&format!("/reviews/{}", book_id))
            .add_header("Authorization", bob.bearer())
            .json(&serde_json::json!({ "rating": 4, "reviewText": "Epic scope" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let review: serde_json::Value = response.json();
        assert_eq!(review["bookId"], book_id);
        assert_eq!(review["userId"], bob.id().to_string());
        assert_eq!(review["userName"], "Bob");
        assert_eq!(review["rating"], 4);
        assert!(review.get("createdAt").is_some());

        let listed: Vec<serde_json::Value> =
            server.get(&format!("/reviews/{}", book_id)).await.json();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["reviewText"], "Epic scope");
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn review_on_missing_book_is_not_found_and_persists_nothing() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let bob = create_test_user(db.pool(), "Bob", "b@x.com", "pw123456").await;

        let phantom = uuid::Uuid::new_v4();
        let response = server
            .post(&format!("/reviews/{}", phantom))
            .add_header("Authorization", bob.bearer())
            .json(&serde_json::json!({ "rating": 4, "reviewText": "Ghost" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Book not found");

        let listed: Vec<serde_json::Value> =
            server.get(&format!("/reviews/{}", phantom)).await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn listing_reviews_is_public_and_empty_for_unknown_ids() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;

        let response = server
            .get(&format!("/reviews/{}", uuid::Uuid::new_v4()))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let reviews: Vec<serde_json::Value> = response.json();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn adding_a_review_requires_a_token() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;
        let book_id = add_book(&server, &ana).await;

        let response = server
            .post(&format!("/reviews/{}", book_id))
            .json(&serde_json::json!({ "rating": 4, "reviewText": "Anonymous" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
    async fn reviews_list_in_insertion_order() {
        let db = TestDatabase::new().await;
        let server = create_test_server(&db).await;
        let ana = create_test_user(db.pool(), "Ana", "a@x.com", "pw123456").await;
        let book_id = add_book(&server, &ana).await;

        for text in ["first", "second", "third"] {
            let response = server
                .post(&format!("/reviews/{}", book_id))
                .add_header("Authorization", ana.bearer())
                .json(&serde_json::json!({ "rating": 5, "reviewText": text }))
                .await;
            assert_eq!(response.status_code(), StatusCode::CREATED);
        }

        let listed: Vec<serde_json::Value> =
            server.get(&format!("/reviews/{}", book_id)).await.json();
        let texts: Vec<&str> = listed
            .iter()
            .map(|r| r["reviewText"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
