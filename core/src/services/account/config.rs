//! Configuration for the account service

use std::collections::HashMap;

use wn_shared::config::SmsConfig;

use crate::forms::SmsScene;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Gateway template id per SMS scene. A scene missing here makes the
    /// send-SMS validation fail with the template error before any gateway
    /// call.
    pub sms_templates: HashMap<SmsScene, String>,

    /// Minimum password length (characters)
    pub password_min_len: usize,

    /// Maximum password length (characters)
    pub password_max_len: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            sms_templates: HashMap::new(),
            password_min_len: 6,
            password_max_len: 16,
        }
    }
}

impl AccountConfig {
    /// Register a template id for a scene.
    pub fn with_template(mut self, scene: SmsScene, template_id: impl Into<String>) -> Self {
        self.sms_templates.insert(scene, template_id.into());
        self
    }

    /// Template id configured for `scene`, if any.
    pub fn template_for(&self, scene: SmsScene) -> Option<&str> {
        self.sms_templates.get(&scene).map(|s| s.as_str())
    }

    /// Build from the environment SMS section; empty template ids count as
    /// unconfigured.
    pub fn from_sms_config(sms: &SmsConfig) -> Self {
        let mut config = Self::default();
        if !sms.register_template_id.is_empty() {
            config = config.with_template(SmsScene::Register, sms.register_template_id.clone());
        }
        if !sms.login_template_id.is_empty() {
            config = config.with_template(SmsScene::Login, sms.login_template_id.clone());
        }
        config
    }
}
