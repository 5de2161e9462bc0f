//! Business services containing domain logic and use cases.

pub mod account;
pub mod session;
pub mod verification;

// Re-export commonly used types
pub use account::{AccountConfig, AccountService};
pub use session::{new_session_id, SessionStore};
pub use verification::{code_key, CaptchaGenerator, CaptchaImage, CodeStore, SmsGateway};
