//! In-memory mock user repository for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use super::trait_::UserRepository;
use crate::domain::entities::{Transaction, User};
use crate::errors::{DomainError, DomainResult, FieldErrors};
use crate::forms::messages;

/// Mock implementation of `UserRepository` backed by vectors.
///
/// `create_with_subscription` re-checks uniqueness on insert and maps
/// duplicates to field errors the way the MySQL implementation maps
/// duplicate-key violations.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    transactions: Arc<Mutex<Vec<Transaction>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the repository with existing users.
    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        *repo.users.lock().unwrap() = users;
        repo
    }

    /// Add one user to the store.
    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// Snapshot of all stored users.
    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    /// Snapshot of all stored transactions.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with a database error.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    fn check_failure(&self) -> DomainResult<()> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(DomainError::database(message));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_mobile(&self, mobile_phone: &str) -> DomainResult<Option<User>> {
        self.check_failure()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.mobile_phone == mobile_phone)
            .cloned())
    }

    async fn find_by_identifier_and_digest(
        &self,
        identifier: &str,
        digest: &str,
    ) -> DomainResult<Option<User>> {
        self.check_failure()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| (u.email == identifier || u.mobile_phone == identifier) && u.password == digest)
            .cloned())
    }

    async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().iter().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }

    async fn exists_by_mobile(&self, mobile_phone: &str) -> DomainResult<bool> {
        self.check_failure()?;
        Ok(self.users.lock().unwrap().iter().any(|u| u.mobile_phone == mobile_phone))
    }

    async fn create_with_subscription(
        &self,
        user: User,
        subscription: Transaction,
    ) -> DomainResult<User> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();

        let mut errors = FieldErrors::new();
        if users.iter().any(|u| u.username == user.username) {
            errors.add("username", messages::USERNAME_TAKEN);
        }
        if users.iter().any(|u| u.email == user.email) {
            errors.add("email", messages::EMAIL_TAKEN);
        }
        if users.iter().any(|u| u.mobile_phone == user.mobile_phone) {
            errors.add("mobile_phone", messages::PHONE_TAKEN);
        }
        if !errors.is_empty() {
            return Err(DomainError::Form(errors));
        }

        users.push(user.clone());
        self.transactions.lock().unwrap().push(subscription);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wn_shared::utils::digest::password_digest;

    fn user(username: &str, email: &str, phone: &str) -> User {
        User::new(
            username.to_string(),
            email.to_string(),
            phone.to_string(),
            password_digest("secret1"),
        )
    }

    #[tokio::test]
    async fn create_writes_user_and_subscription() {
        let repo = MockUserRepository::new();
        let new_user = user("alice", "a@x.com", "13800000000");
        let subscription = Transaction::free_signup(new_user.id);

        let created = repo
            .create_with_subscription(new_user, subscription)
            .await
            .unwrap();

        assert!(repo.exists_by_username("alice").await.unwrap());
        let transactions = repo.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].user_id, created.id);
    }

    #[tokio::test]
    async fn duplicate_insert_maps_to_field_error() {
        let repo = MockUserRepository::with_users(vec![user("alice", "a@x.com", "13800000000")]);
        let dup = user("alice", "other@x.com", "13900000000");
        let subscription = Transaction::free_signup(dup.id);

        let err = repo.create_with_subscription(dup, subscription).await.unwrap_err();
        let fields = err.as_form().expect("expected a form error");
        assert!(fields.contains("username"));
        assert!(!fields.contains("email"));
        assert!(repo.transactions().is_empty());
    }

    #[tokio::test]
    async fn identifier_lookup_accepts_email_or_phone() {
        let stored = user("alice", "a@x.com", "13800000000");
        let digest = stored.password.clone();
        let repo = MockUserRepository::with_users(vec![stored]);

        let by_email = repo
            .find_by_identifier_and_digest("a@x.com", &digest)
            .await
            .unwrap();
        let by_phone = repo
            .find_by_identifier_and_digest("13800000000", &digest)
            .await
            .unwrap();
        let wrong_digest = repo
            .find_by_identifier_and_digest("a@x.com", "0000")
            .await
            .unwrap();

        assert!(by_email.is_some());
        assert!(by_phone.is_some());
        assert!(wrong_digest.is_none());
    }

    #[tokio::test]
    async fn forced_failure_propagates() {
        let repo = MockUserRepository::new();
        repo.fail_with("connection reset");
        let err = repo.exists_by_email("a@x.com").await.unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
