//! Account service implementing registration, login and SMS issuance.

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use wn_shared::utils::digest::password_digest;
use wn_shared::utils::phone::{is_valid_mobile, mask_phone};
use wn_shared::utils::validation::{is_valid_email, is_valid_username};

use super::config::AccountConfig;
use crate::domain::entities::{
    generate_sms_code, image_code_matches, sms_code_matches, Transaction, User,
    SMS_CODE_TTL_SECS,
};
use crate::errors::{DomainError, DomainResult, FieldErrors};
use crate::forms::{
    messages, PasswordLoginForm, RegisterForm, SendSmsForm, SmsLoginForm, SmsScene,
};
use crate::repositories::UserRepository;
use crate::services::verification::{code_key, CodeStore, SmsGateway};

/// Account flows over a user repository, an SMS gateway and a code store.
pub struct AccountService<U, S, C>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
{
    users: Arc<U>,
    sms: Arc<S>,
    codes: Arc<C>,
    config: AccountConfig,
}

impl<U, S, C> AccountService<U, S, C>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
{
    pub fn new(users: Arc<U>, sms: Arc<S>, codes: Arc<C>, config: AccountConfig) -> Self {
        Self {
            users,
            sms,
            codes,
            config,
        }
    }

    /// Register a new account.
    ///
    /// Runs the full two-phase validation, then persists the user together
    /// with the free-tier signup transaction as one atomic unit.
    ///
    /// # Errors
    ///
    /// `DomainError::Form` with all accumulated field errors when validation
    /// fails; store errors pass through unchanged.
    pub async fn register(&self, form: RegisterForm) -> DomainResult<User> {
        let form = form.normalized();
        let mut errors = FieldErrors::new();

        // Field phase: every field is checked independently.
        let username_ok = self.field_username(&form.username, &mut errors);
        let email_ok = self.field_email(&form.email, &mut errors);
        let password_ok = self.field_password(
            &form.password,
            "password",
            messages::PASSWORD_TOO_SHORT,
            messages::PASSWORD_TOO_LONG,
            &mut errors,
        );
        let confirm_ok = self.field_password(
            &form.confirm_password,
            "confirm_password",
            messages::CONFIRM_TOO_SHORT,
            messages::CONFIRM_TOO_LONG,
            &mut errors,
        );
        let phone_ok = self.field_mobile(&form.mobile_phone, &mut errors);
        let code_ok = self.field_required(&form.code, "code", &mut errors);

        // Clean phase, in field declaration order. A hook that fails removes
        // its field from the cleaned data for the hooks after it.
        if username_ok && self.users.exists_by_username(&form.username).await? {
            errors.add("username", messages::USERNAME_TAKEN);
        }
        if email_ok && self.users.exists_by_email(&form.email).await? {
            errors.add("email", messages::EMAIL_TAKEN);
        }
        if confirm_ok {
            // Compares digests. An absent password digest (failed field
            // phase) counts as a mismatch, as the original form did.
            let confirm_digest = password_digest(&form.confirm_password);
            let matches = password_ok
                && digests_match(&password_digest(&form.password), &confirm_digest);
            if !matches {
                errors.add("confirm_password", messages::PASSWORD_MISMATCH);
            }
        }
        let mut phone_clean = phone_ok;
        if phone_ok && self.users.exists_by_mobile(&form.mobile_phone).await? {
            errors.add("mobile_phone", messages::PHONE_TAKEN);
            phone_clean = false;
        }
        if code_ok && phone_clean {
            // Without a cleaned phone the code passes through unchecked.
            match self.stored_code(&form.mobile_phone).await? {
                None => errors.add("code", messages::SMS_CODE_EXPIRED),
                Some(stored) if !sms_code_matches(&form.code, &stored) => {
                    errors.add("code", messages::SMS_CODE_MISMATCH);
                }
                Some(_) => {}
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::Form(errors));
        }

        let user = User::new(
            form.username,
            form.email,
            form.mobile_phone,
            password_digest(&form.password),
        );
        let subscription = Transaction::free_signup(user.id);
        let user = self.users.create_with_subscription(user, subscription).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            phone = %user.masked_phone(),
            "account registered on free tier"
        );
        Ok(user)
    }

    /// Issue an SMS code for a scene.
    ///
    /// Checks run in order: phone format, scene-dependent existence,
    /// template lookup, gateway dispatch, store write. The first failure
    /// aborts with an error on the `mobile_phone` field; only a store
    /// failure after a successful send is not a validation error.
    pub async fn send_sms(
        &self,
        form: SendSmsForm,
        scene: Option<SmsScene>,
    ) -> DomainResult<()> {
        let form = form.normalized();
        let mut errors = FieldErrors::new();
        if !self.field_mobile(&form.mobile_phone, &mut errors) {
            return Err(DomainError::Form(errors));
        }

        let exists = self.users.exists_by_mobile(&form.mobile_phone).await?;
        match scene {
            Some(SmsScene::Register) if exists => {
                return Err(FieldErrors::single("mobile_phone", messages::PHONE_TAKEN).into());
            }
            Some(SmsScene::Login) if !exists => {
                return Err(FieldErrors::single("mobile_phone", messages::PHONE_NOT_FOUND).into());
            }
            // An unknown scene skips the existence rules and fails on the
            // template lookup below.
            _ => {}
        }

        let template_id = match scene.and_then(|s| self.config.template_for(s)) {
            Some(id) => id.to_string(),
            None => {
                return Err(
                    FieldErrors::single("mobile_phone", messages::SMS_TEMPLATE_ERROR).into(),
                );
            }
        };

        let code = generate_sms_code();
        match self.sms.send_code(&form.mobile_phone, &template_id, &code).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone(&form.mobile_phone),
                    template_id = %template_id,
                    message_id = %message_id,
                    "sms verification code sent"
                );
            }
            Err(errmsg) => {
                tracing::warn!(
                    phone = %mask_phone(&form.mobile_phone),
                    template_id = %template_id,
                    "sms gateway rejected send: {}",
                    errmsg
                );
                return Err(
                    FieldErrors::single("mobile_phone", messages::sms_send_failed(&errmsg)).into(),
                );
            }
        }

        self.codes
            .set(&code_key(&form.mobile_phone), &code, SMS_CODE_TTL_SECS)
            .await
            .map_err(DomainError::cache)?;
        Ok(())
    }

    /// Log in with phone number and SMS code.
    ///
    /// An unresolved phone records its field error but keeps processing, so
    /// a submission with a bad phone still gets its other fields validated.
    pub async fn login_sms(&self, form: SmsLoginForm) -> DomainResult<User> {
        let form = form.normalized();
        let mut errors = FieldErrors::new();
        let phone_ok = self.field_mobile(&form.mobile_phone, &mut errors);
        let code_ok = self.field_required(&form.code, "code", &mut errors);

        // Clean phase. The phone hook resolves the user; its soft failure
        // leaves the user unresolved and the code hook skips.
        let mut user = None;
        if phone_ok {
            match self.users.find_by_mobile(&form.mobile_phone).await? {
                Some(found) => user = Some(found),
                None => errors.add("mobile_phone", messages::PHONE_NOT_FOUND),
            }
        }
        if code_ok {
            if let Some(user) = &user {
                match self.stored_code(&user.mobile_phone).await? {
                    None => errors.add("code", messages::SMS_CODE_EXPIRED),
                    Some(stored) if !sms_code_matches(&form.code, &stored) => {
                        errors.add("code", messages::SMS_CODE_MISMATCH);
                    }
                    Some(_) => {}
                }
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::Form(errors));
        }
        let user = user.ok_or_else(|| {
            DomainError::internal("sms login passed validation without a resolved user")
        })?;
        tracing::info!(user_id = %user.id, phone = %user.masked_phone(), "sms login succeeded");
        Ok(user)
    }

    /// Log in with an email-or-phone identifier and password.
    ///
    /// `session_image_code` is the code currently cached in the caller's
    /// session (`None` when expired or never fetched). The store lookup
    /// happens only after the form itself validates; a miss produces the
    /// generic username error without revealing which part was wrong.
    pub async fn login_password(
        &self,
        form: PasswordLoginForm,
        session_image_code: Option<&str>,
    ) -> DomainResult<User> {
        let form = form.normalized();
        let mut errors = FieldErrors::new();
        self.field_required(&form.username, "username", &mut errors);
        let password_ok = self.field_required(&form.password, "password", &mut errors);
        let code_ok = self.field_required(&form.code, "code", &mut errors);

        if code_ok {
            match session_image_code {
                None => errors.add("code", messages::IMAGE_CODE_EXPIRED),
                Some(stored) if !image_code_matches(&form.code, stored) => {
                    errors.add("code", messages::IMAGE_CODE_MISMATCH);
                }
                Some(_) => {}
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::Form(errors));
        }

        // password_ok holds here; recomputing the digest is deterministic.
        debug_assert!(password_ok);
        let digest = password_digest(&form.password);
        match self
            .users
            .find_by_identifier_and_digest(&form.username, &digest)
            .await?
        {
            Some(user) => {
                tracing::info!(user_id = %user.id, "password login succeeded");
                Ok(user)
            }
            None => Err(FieldErrors::single("username", messages::LOGIN_FAILED).into()),
        }
    }

    // Field-phase checks. Each returns whether the field passed.

    fn field_required(&self, value: &str, field: &'static str, errors: &mut FieldErrors) -> bool {
        if value.is_empty() {
            errors.add(field, messages::REQUIRED);
            return false;
        }
        true
    }

    fn field_username(&self, value: &str, errors: &mut FieldErrors) -> bool {
        if !self.field_required(value, "username", errors) {
            return false;
        }
        if !is_valid_username(value) {
            errors.add("username", messages::USERNAME_FORMAT);
            return false;
        }
        true
    }

    fn field_email(&self, value: &str, errors: &mut FieldErrors) -> bool {
        if !self.field_required(value, "email", errors) {
            return false;
        }
        if !is_valid_email(value) {
            errors.add("email", messages::EMAIL_FORMAT);
            return false;
        }
        true
    }

    fn field_password(
        &self,
        value: &str,
        field: &'static str,
        too_short: &'static str,
        too_long: &'static str,
        errors: &mut FieldErrors,
    ) -> bool {
        if !self.field_required(value, field, errors) {
            return false;
        }
        let length = value.chars().count();
        if length < self.config.password_min_len {
            errors.add(field, too_short);
            return false;
        }
        if length > self.config.password_max_len {
            errors.add(field, too_long);
            return false;
        }
        true
    }

    fn field_mobile(&self, value: &str, errors: &mut FieldErrors) -> bool {
        if !self.field_required(value, "mobile_phone", errors) {
            return false;
        }
        if !is_valid_mobile(value) {
            errors.add("mobile_phone", messages::PHONE_FORMAT);
            return false;
        }
        true
    }

    async fn stored_code(&self, mobile_phone: &str) -> DomainResult<Option<String>> {
        self.codes
            .get(&code_key(mobile_phone))
            .await
            .map_err(DomainError::cache)
    }
}

fn digests_match(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
