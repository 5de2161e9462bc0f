//! Domain entities representing core business objects.

pub mod session;
pub mod transaction;
pub mod user;
pub mod verification_code;

// Re-export commonly used types
pub use session::{Session, IMAGE_CODE_TTL_SECS, LOGIN_SESSION_TTL_SECS};
pub use transaction::{PricePlan, Transaction, TransactionStatus};
pub use user::User;
pub use verification_code::{
    generate_sms_code, image_code_matches, sms_code_matches, CODE_LENGTH, SMS_CODE_TTL_SECS,
};
