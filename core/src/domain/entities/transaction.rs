//! Subscription transaction entity.
//!
//! Every new account starts on the free tier: registration writes one
//! zero-price, already-paid transaction alongside the user row. The table is
//! append-only in this subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting payment
    Unpaid,
    /// Settled (free-tier records are created in this state)
    Paid,
}

impl TransactionStatus {
    /// Database representation (1 = unpaid, 2 = paid).
    pub fn as_db_code(&self) -> i8 {
        match self {
            TransactionStatus::Unpaid => 1,
            TransactionStatus::Paid => 2,
        }
    }

    pub fn from_db_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(TransactionStatus::Unpaid),
            2 => Some(TransactionStatus::Paid),
            _ => None,
        }
    }
}

/// Price plan a transaction subscribes the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePlan {
    /// Personal free tier
    Free,
}

impl PricePlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricePlan::Free => "free",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "free" => Some(PricePlan::Free),
            _ => None,
        }
    }
}

/// Subscription transaction record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: Uuid,

    /// Human-facing order number
    pub order_number: String,

    /// Owning user
    pub user_id: Uuid,

    /// Subscribed plan
    pub plan: PricePlan,

    /// Payment state
    pub status: TransactionStatus,

    /// Number of purchased seats (0 on the free tier)
    pub seat_count: u32,

    /// Price paid in cents (0 on the free tier)
    pub price: u32,

    /// When the subscription starts
    pub start_at: DateTime<Utc>,

    /// When the subscription ends (open-ended for the free tier)
    pub end_at: Option<DateTime<Utc>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Builds the free-tier transaction created alongside a new user:
    /// paid status, fresh UUID order number, zero seats, zero price,
    /// starting now.
    pub fn free_signup(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            order_number: Uuid::new_v4().to_string(),
            user_id,
            plan: PricePlan::Free,
            status: TransactionStatus::Paid,
            seat_count: 0,
            price: 0,
            start_at: now,
            end_at: None,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_signup_is_zero_price_and_paid() {
        let user_id = Uuid::new_v4();
        let transaction = Transaction::free_signup(user_id);
        assert_eq!(transaction.user_id, user_id);
        assert_eq!(transaction.plan, PricePlan::Free);
        assert_eq!(transaction.status, TransactionStatus::Paid);
        assert_eq!(transaction.price, 0);
        assert_eq!(transaction.seat_count, 0);
        assert!(transaction.end_at.is_none());
    }

    #[test]
    fn order_numbers_are_unique() {
        let user_id = Uuid::new_v4();
        let a = Transaction::free_signup(user_id);
        let b = Transaction::free_signup(user_id);
        assert_ne!(a.order_number, b.order_number);
    }

    #[test]
    fn status_db_codes_round_trip() {
        assert_eq!(TransactionStatus::from_db_code(2), Some(TransactionStatus::Paid));
        assert_eq!(TransactionStatus::from_db_code(1), Some(TransactionStatus::Unpaid));
        assert_eq!(TransactionStatus::from_db_code(9), None);
        assert_eq!(TransactionStatus::Paid.as_db_code(), 2);
    }
}
