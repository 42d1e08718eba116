//! Authentication test helpers

use sqlx::PgPool;
use uuid::Uuid;

use bookshelf::backend::auth::sessions::create_token;
use bookshelf::backend::auth::users::{create_user, User};

/// A user created directly in the database plus a valid session token.
pub struct TestUser {
    pub user: User,
    pub token: String,
}

impl TestUser {
    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Create a user with a bcrypt-hashed password and issue a token for it.
pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, 10).expect("hash password");
    let user = create_user(pool, name.to_string(), email.to_string(), password_hash)
        .await
        .expect("create user");
    let token = create_token(user.id).expect("create token");
    TestUser { user, token }
}
