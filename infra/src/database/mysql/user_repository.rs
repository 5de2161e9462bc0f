//! MySQL implementation of the UserRepository trait.
//!
//! Registration writes the user row and the free-tier signup transaction
//! inside one database transaction; a duplicate-key violation on the user
//! insert surfaces as a field error on the column's unique index.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wn_core::domain::entities::{Transaction, User};
use wn_core::errors::{DomainError, DomainResult, FieldErrors};
use wn_core::forms::messages;
use wn_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, username, email, mobile_phone, password, created_at";

/// MySQL implementation of `UserRepository`
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::database(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            mobile_phone: row
                .try_get("mobile_phone")
                .map_err(|e| DomainError::database(format!("Failed to get mobile_phone: {}", e)))?,
            password: row
                .try_get("password")
                .map_err(|e| DomainError::database(format!("Failed to get password: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
        })
    }

    async fn exists_where(&self, column: &str, value: &str) -> DomainResult<bool> {
        // column comes from the fixed call sites below, never from input
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM users WHERE {} = ?) AS user_exists",
            column
        );
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to check user existence: {}", e)))?;
        let exists: i8 = row
            .try_get("user_exists")
            .map_err(|e| DomainError::database(format!("Failed to get existence result: {}", e)))?;
        Ok(exists == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_mobile(&self, mobile_phone: &str) -> DomainResult<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE mobile_phone = ? LIMIT 1",
            USER_COLUMNS
        );
        let result = sqlx::query(&query)
            .bind(mobile_phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_identifier_and_digest(
        &self,
        identifier: &str,
        digest: &str,
    ) -> DomainResult<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE (email = ? OR mobile_phone = ?) AND password = ? LIMIT 1",
            USER_COLUMNS
        );
        let result = sqlx::query(&query)
            .bind(identifier)
            .bind(identifier)
            .bind(digest)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        self.exists_where("username", username).await
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        self.exists_where("email", email).await
    }

    async fn exists_by_mobile(&self, mobile_phone: &str) -> DomainResult<bool> {
        self.exists_where("mobile_phone", mobile_phone).await
    }

    async fn create_with_subscription(
        &self,
        user: User,
        subscription: Transaction,
    ) -> DomainResult<User> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, mobile_phone, password, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.mobile_phone)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_user_insert_error)?;

        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, order_number, user_id, plan, status,
                seat_count, price, start_at, end_at, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(subscription.id.to_string())
        .bind(&subscription.order_number)
        .bind(subscription.user_id.to_string())
        .bind(subscription.plan.as_str())
        .bind(subscription.status.as_db_code())
        .bind(subscription.seat_count)
        .bind(subscription.price)
        .bind(subscription.start_at)
        .bind(subscription.end_at)
        .bind(subscription.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to create signup transaction: {}", e))
        })?;

        // Dropping an uncommitted tx rolls it back, so an error on either
        // insert leaves neither row behind.
        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit registration: {}", e)))?;

        Ok(user)
    }
}

/// Map a user-insert failure, turning unique-key violations into the same
/// field errors the form validation produces.
fn map_user_insert_error(e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(field) = duplicate_key_field(db_err.message()) {
                let message = match field {
                    "username" => messages::USERNAME_TAKEN,
                    "email" => messages::EMAIL_TAKEN,
                    _ => messages::PHONE_TAKEN,
                };
                return DomainError::Form(FieldErrors::single(field, message));
            }
        }
    }
    DomainError::database(format!("Failed to create user: {}", e))
}

/// Pick the offending column out of a MySQL 1062 message, which ends with
/// `for key 'users.<index name>'`.
fn duplicate_key_field(message: &str) -> Option<&'static str> {
    let (_, key) = message.rsplit_once("for key ")?;
    if key.contains("username") {
        Some("username")
    } else if key.contains("email") {
        Some("email")
    } else if key.contains("mobile_phone") {
        Some("mobile_phone")
    } else {
        None
    }
}
