//! User repository interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Transaction, User};
use crate::errors::DomainResult;

/// Data access for user accounts.
///
/// `username`, `email` and `mobile_phone` are unique columns; implementations
/// must enforce that at the store level, not only via the `exists_*`
/// pre-checks (two concurrent registrations may both pass the pre-check).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by mobile phone number.
    async fn find_by_mobile(&self, mobile_phone: &str) -> DomainResult<Option<User>>;

    /// Find the user whose email **or** mobile phone equals `identifier` and
    /// whose stored credential digest equals `digest`. Backs password login;
    /// the caller cannot tell which of the two was wrong.
    async fn find_by_identifier_and_digest(
        &self,
        identifier: &str,
        digest: &str,
    ) -> DomainResult<Option<User>>;

    /// Whether a user with this username exists.
    async fn exists_by_username(&self, username: &str) -> DomainResult<bool>;

    /// Whether a user with this email exists.
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Whether a user with this mobile phone exists.
    async fn exists_by_mobile(&self, mobile_phone: &str) -> DomainResult<bool>;

    /// Persist a new user together with their signup subscription record as
    /// one atomic unit: either both rows are written or neither is.
    ///
    /// A unique-constraint violation (lost pre-check race) must surface as
    /// `DomainError::Form` carrying the duplicate field's message, so the
    /// caller can report it like any other validation failure.
    async fn create_with_subscription(
        &self,
        user: User,
        subscription: Transaction,
    ) -> DomainResult<User>;
}
