//! Send-SMS form and scene selection.

use serde::{Deserialize, Serialize};

/// Raw send-SMS submission (query parameters).
#[derive(Debug, Clone, Default)]
pub struct SendSmsForm {
    pub mobile_phone: String,
}

impl SendSmsForm {
    pub fn normalized(self) -> Self {
        Self {
            mobile_phone: self.mobile_phone.trim().to_string(),
        }
    }
}

/// Scene an SMS code is requested for, carried in the `tpl` query parameter.
///
/// The scene decides the uniqueness rule (`register` wants an unregistered
/// phone, `login` a registered one) and selects the gateway template id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsScene {
    Register,
    Login,
}

impl SmsScene {
    /// Parse the `tpl` query value. Unknown values yield `None`: the
    /// existence checks are skipped and the template lookup fails instead.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "register" => Some(SmsScene::Register),
            "login" => Some(SmsScene::Login),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SmsScene::Register => "register",
            SmsScene::Login => "login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_scenes() {
        assert_eq!(SmsScene::parse("register"), Some(SmsScene::Register));
        assert_eq!(SmsScene::parse("login"), Some(SmsScene::Login));
    }

    #[test]
    fn unknown_scene_is_none() {
        assert_eq!(SmsScene::parse("reset"), None);
        assert_eq!(SmsScene::parse(""), None);
        assert_eq!(SmsScene::parse("Register"), None);
    }
}
