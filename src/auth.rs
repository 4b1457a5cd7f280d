use bcrypt::{hash, verify, DEFAULT_COST};
use log::error;
use sqlx::SqlitePool;
use std::fmt;

use crate::models::user::User;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL
)";

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The username is already taken.
    Duplicate,
    /// The database could not be reached or the insert failed for another reason.
    Unavailable,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Duplicate => write!(f, "username already exists"),
            RegisterError::Unavailable => write!(f, "registration unavailable"),
        }
    }
}

// Insert a new user row with a bcrypt hash of the password.
pub async fn register_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<(), RegisterError> {
    let password_hash = hash(password, DEFAULT_COST).map_err(|e| {
        error!("Failed to hash password for {}: {}", username, e);
        RegisterError::Unavailable
    })?;

    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind(&password_hash)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(RegisterError::Duplicate),
        Err(e) => {
            error!("Failed to insert user {}: {}", username, e);
            Err(RegisterError::Unavailable)
        }
    }
}

// Fetch the row for the username and check the password against the stored hash.
// A missing user and a wrong password are both None.
pub async fn login_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        "SELECT username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let user = match user {
        Some(user) => user,
        None => return Ok(None),
    };

    match verify(password, &user.password_hash) {
        Ok(true) => Ok(Some(user)),
        Ok(false) => Ok(None),
        Err(e) => {
            error!("Error when checking password for user {}: {}", username, e);
            Ok(None)
        }
    }
}

pub async fn username_taken(pool: &SqlitePool, username: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // One connection, otherwise each checkout gets its own :memory: database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn register_twice_reports_duplicate() {
        let pool = test_pool().await;
        assert_eq!(register_user(&pool, "ramesh", "gat123").await, Ok(()));
        assert_eq!(
            register_user(&pool, "ramesh", "other").await,
            Err(RegisterError::Duplicate)
        );
    }

    #[tokio::test]
    async fn login_unknown_username_is_none() {
        let pool = test_pool().await;
        let user = login_user(&pool, "nobody", "whatever").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn login_checks_the_password() {
        let pool = test_pool().await;
        register_user(&pool, "savita", "mala25").await.unwrap();

        let user = login_user(&pool, "savita", "mala25").await.unwrap();
        assert_eq!(user.unwrap().username, "savita");

        let user = login_user(&pool, "savita", "wrong").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn username_taken_after_register() {
        let pool = test_pool().await;
        assert!(!username_taken(&pool, "ramesh").await.unwrap());
        register_user(&pool, "ramesh", "gat123").await.unwrap();
        assert!(username_taken(&pool, "ramesh").await.unwrap());
    }
}
