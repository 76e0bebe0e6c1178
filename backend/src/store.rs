//! Local user store.
//!
//! Pass-through CRUD against a single SQLite table. The schema is created
//! at startup; there is no business logic here.

use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use common::errors::{AppError, AppResult};
use common::models::user::{CreateUserRequest, User};
use common::utils::IdGenerator;

/// SQLite-backed user store.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Opens the store and ensures the `users` table exists.
    pub async fn connect(url: &str, max_connections: u32) -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        let store = Self { pool };
        store.ensure_table().await?;
        Ok(store)
    }

    /// Creates the users table if it does not exist.
    async fn ensure_table(&self) -> AppResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id         TEXT PRIMARY KEY,
                name       TEXT NOT NULL,
                email      TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseQuery(format!("Failed to create users table: {}", e)))?;

        tracing::info!("Users table ensured");
        Ok(())
    }

    /// Returns all stored users.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Inserts a new user and returns the stored record.
    pub async fn create(&self, req: CreateUserRequest) -> AppResult<User> {
        let user = User {
            id: IdGenerator::user_id(),
            name: req.name,
            email: req.email,
            created_at: Utc::now().to_rfc3339(),
        };

        sqlx::query("INSERT INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.created_at)
            .execute(&self.pool)
            .await?;

        tracing::info!(id = %user.id, "User created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> UserStore {
        UserStore::connect("sqlite::memory:", 1).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let store = memory_store().await;

        let created = store
            .create(CreateUserRequest {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        let users = store.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_list_is_empty_on_fresh_store() {
        let store = memory_store().await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let store = memory_store().await;
        let a = store
            .create(CreateUserRequest {
                name: "A".into(),
                email: "a@example.com".into(),
            })
            .await
            .unwrap();
        let b = store
            .create(CreateUserRequest {
                name: "B".into(),
                email: "b@example.com".into(),
            })
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
