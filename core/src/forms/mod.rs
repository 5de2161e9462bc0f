//! Account form definitions.
//!
//! Each form names its fields in declaration order (the clean-phase order),
//! carries the raw submitted strings, and can describe itself as an explicit
//! field schema for the GET endpoints. Validation itself lives in
//! `services::account`, which needs the user repository and the code store.

pub mod login;
pub mod login_sms;
pub mod messages;
pub mod register;
pub mod schema;
pub mod send_sms;

pub use login::PasswordLoginForm;
pub use login_sms::SmsLoginForm;
pub use register::RegisterForm;
pub use schema::{FieldKind, FieldSchema, FormSchema};
pub use send_sms::{SendSmsForm, SmsScene};
