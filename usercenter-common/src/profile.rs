//! Profile form data: field identities, form snapshots, error maps and the
//! update payload sent back to the account service.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseFieldError;

/// Every input of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Email,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
    SecurityQuestion1,
    SecurityAnswer1,
    SecurityQuestion2,
    SecurityAnswer2,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Email,
        ProfileField::CurrentPassword,
        ProfileField::NewPassword,
        ProfileField::ConfirmPassword,
        ProfileField::SecurityQuestion1,
        ProfileField::SecurityAnswer1,
        ProfileField::SecurityQuestion2,
        ProfileField::SecurityAnswer2,
    ];

    /// Name used in error maps and DOM ids
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::CurrentPassword => "currentPassword",
            Self::NewPassword => "newPassword",
            Self::ConfirmPassword => "confirmPassword",
            Self::SecurityQuestion1 => "securityQuestion1",
            Self::SecurityAnswer1 => "securityAnswer1",
            Self::SecurityQuestion2 => "securityQuestion2",
            Self::SecurityAnswer2 => "securityAnswer2",
        }
    }

    /// The question an answer field belongs to
    pub fn question_for(&self) -> Option<ProfileField> {
        match self {
            Self::SecurityAnswer1 => Some(Self::SecurityQuestion1),
            Self::SecurityAnswer2 => Some(Self::SecurityQuestion2),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Profile as returned by the account service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub security_question_1: Option<String>,
    #[serde(default)]
    pub security_answer_1: Option<String>,
    #[serde(default)]
    pub security_question_2: Option<String>,
    #[serde(default)]
    pub security_answer_2: Option<String>,
}

/// Current values of every profile form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub security_question_1: String,
    pub security_answer_1: String,
    pub security_question_2: String,
    pub security_answer_2: String,
}

impl ProfileFormData {
    /// Seed the form from a stored profile. Password inputs start empty.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            email: profile.email.clone(),
            security_question_1: text(&profile.security_question_1),
            security_answer_1: text(&profile.security_answer_1),
            security_question_2: text(&profile.security_question_2),
            security_answer_2: text(&profile.security_answer_2),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::CurrentPassword => &self.current_password,
            ProfileField::NewPassword => &self.new_password,
            ProfileField::ConfirmPassword => &self.confirm_password,
            ProfileField::SecurityQuestion1 => &self.security_question_1,
            ProfileField::SecurityAnswer1 => &self.security_answer_1,
            ProfileField::SecurityQuestion2 => &self.security_question_2,
            ProfileField::SecurityAnswer2 => &self.security_answer_2,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Email => &mut self.email,
            ProfileField::CurrentPassword => &mut self.current_password,
            ProfileField::NewPassword => &mut self.new_password,
            ProfileField::ConfirmPassword => &mut self.confirm_password,
            ProfileField::SecurityQuestion1 => &mut self.security_question_1,
            ProfileField::SecurityAnswer1 => &mut self.security_answer_1,
            ProfileField::SecurityQuestion2 => &mut self.security_question_2,
            ProfileField::SecurityAnswer2 => &mut self.security_answer_2,
        };
        *slot = value;
    }

    pub fn is_set(&self, field: ProfileField) -> bool {
        !self.get(field).is_empty()
    }

    /// An answer cannot be typed until its question is chosen
    pub fn is_answer_locked(&self, answer: ProfileField) -> bool {
        answer
            .question_for()
            .is_some_and(|question| !self.is_set(question))
    }
}

/// Validation messages keyed by field.
///
/// A missing key and an empty message both mean "no error". When read from
/// JSON, keys that name no profile field and non-string messages are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawErrorMap")]
pub struct ErrorMap {
    #[serde(flatten)]
    fields: BTreeMap<ProfileField, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    general: Option<String>,
}

/// Error object as the account service sends it
#[derive(Deserialize)]
struct RawErrorMap {
    #[serde(default)]
    general: Option<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

impl From<RawErrorMap> for ErrorMap {
    fn from(raw: RawErrorMap) -> Self {
        let mut errors = ErrorMap {
            general: raw.general,
            ..Default::default()
        };

        for (key, value) in raw.rest {
            match (key.parse::<ProfileField>(), value) {
                (Ok(field), serde_json::Value::String(message)) => errors.insert(field, message),
                (_, value) => tracing::debug!(%key, %value, "skipping error entry"),
            }
        }

        errors
    }
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: ProfileField, message: impl Into<String>) -> Self {
        self.insert(field, message);
        self
    }

    pub fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.fields
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has(&self, field: ProfileField) -> bool {
        self.get(field).is_some()
    }

    /// Drop the message for one field, leaving the others untouched
    pub fn clear(&mut self, field: ProfileField) {
        self.fields.remove(&field);
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    pub fn clear_general(&mut self) {
        self.general = None;
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref().filter(|message| !message.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.general().is_none() && self.fields.values().all(String::is_empty)
    }
}

/// Per-field show/hide state for masked inputs. Every field starts hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: BTreeMap<ProfileField, bool>,
}

impl RevealState {
    pub fn is_revealed(&self, field: ProfileField) -> bool {
        self.revealed.get(&field).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, field: ProfileField) {
        let entry = self.revealed.entry(field).or_insert(false);
        *entry = !*entry;
    }

    /// `type` attribute for the field's `<input>`
    pub fn input_type(&self, field: ProfileField) -> &'static str {
        if self.is_revealed(field) {
            "text"
        } else {
            "password"
        }
    }
}

/// Which part of the profile a save applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSection {
    Basic,
    Password,
    Security,
    #[default]
    All,
}

impl FormSection {
    pub fn includes_basic(&self) -> bool {
        matches!(self, Self::Basic | Self::All)
    }

    pub fn includes_password(&self) -> bool {
        matches!(self, Self::Password | Self::All)
    }

    pub fn includes_security(&self) -> bool {
        matches!(self, Self::Security | Self::All)
    }
}

/// Body of a profile update request. Absent keys are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answer_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_question_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_answer_2: Option<String>,
}

impl ProfileUpdate {
    pub fn from_form(form: &ProfileFormData, section: FormSection) -> Self {
        let mut update = Self::default();

        if section.includes_basic() {
            update.email = Some(form.email.clone());
        }

        if section.includes_password() && !form.new_password.is_empty() {
            update.current_password = Some(form.current_password.clone());
            update.new_password = Some(form.new_password.clone());
        }

        if section.includes_security() {
            if let Some(answer) = normalized_answer(&form.security_question_1, &form.security_answer_1) {
                update.security_question_1 = Some(form.security_question_1.clone());
                update.security_answer_1 = Some(answer);
            }
            if let Some(answer) = normalized_answer(&form.security_question_2, &form.security_answer_2) {
                update.security_question_2 = Some(form.security_question_2.clone());
                update.security_answer_2 = Some(answer);
            }
        }

        update
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Answers are compared case-insensitively, so they are stored trimmed and lower-cased
fn normalized_answer(question: &str, answer: &str) -> Option<String> {
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some(answer.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in ProfileField::ALL {
            assert_eq!(field.as_str().parse::<ProfileField>(), Ok(field));
        }
        assert_eq!(
            "nickname".parse::<ProfileField>(),
            Err(ParseFieldError("nickname".to_string()))
        );
    }

    #[test]
    fn test_field_serde_matches_as_str() {
        let json = serde_json::to_string(&ProfileField::SecurityAnswer1).unwrap();
        assert_eq!(json, "\"securityAnswer1\"");
    }

    #[test]
    fn test_form_seeded_from_profile() {
        let json = r#"{
            "email": "somchai@example.com",
            "security_question_1": "What is your favourite colour?",
            "security_answer_1": "blue"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let form = ProfileFormData::from_profile(&profile);

        assert_eq!(form.email, "somchai@example.com");
        assert_eq!(form.get(ProfileField::SecurityQuestion1), "What is your favourite colour?");
        assert_eq!(form.get(ProfileField::SecurityAnswer1), "blue");
        assert!(!form.is_set(ProfileField::SecurityQuestion2));
        assert!(!form.is_set(ProfileField::CurrentPassword));
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut form = ProfileFormData::default();
        form.set(ProfileField::NewPassword, "hunter22".to_string());

        for field in ProfileField::ALL {
            let expected = if field == ProfileField::NewPassword { "hunter22" } else { "" };
            assert_eq!(form.get(field), expected, "{field}");
        }
    }

    #[test]
    fn test_error_map_empty_message_is_absent() {
        let mut errors = ErrorMap::new()
            .with(ProfileField::NewPassword, "Too short")
            .with(ProfileField::ConfirmPassword, "");

        assert_eq!(errors.get(ProfileField::NewPassword), Some("Too short"));
        assert!(!errors.has(ProfileField::ConfirmPassword));
        assert!(!errors.has(ProfileField::Email));

        errors.clear(ProfileField::NewPassword);
        assert!(errors.is_empty());

        errors.set_general("Update failed");
        assert!(!errors.is_empty());
        errors.clear_general();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_map_json_shape() {
        let errors: ErrorMap =
            serde_json::from_str(r#"{"currentPassword": "Wrong password", "general": "Update failed"}"#)
                .unwrap();
        assert_eq!(errors.get(ProfileField::CurrentPassword), Some("Wrong password"));
        assert_eq!(errors.general(), Some("Update failed"));
    }

    #[test]
    fn test_error_map_skips_unknown_keys() {
        let json = r#"{
            "email": "Email already in use",
            "detail": "Validation failed",
            "non_field_errors": ["Try again"],
            "newPassword": ["Too short"],
            "general": "Update failed"
        }"#;
        let errors: ErrorMap = serde_json::from_str(json).unwrap();

        assert_eq!(errors.get(ProfileField::Email), Some("Email already in use"));
        assert!(!errors.has(ProfileField::NewPassword));
        assert_eq!(errors.general(), Some("Update failed"));

        let mut expected = ErrorMap::new().with(ProfileField::Email, "Email already in use");
        expected.set_general("Update failed");
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_answer_locked_until_question_chosen() {
        let mut form = ProfileFormData::default();
        assert!(form.is_answer_locked(ProfileField::SecurityAnswer1));
        assert!(form.is_answer_locked(ProfileField::SecurityAnswer2));

        form.set(ProfileField::SecurityQuestion1, "Favourite food?".to_string());
        assert!(!form.is_answer_locked(ProfileField::SecurityAnswer1));
        assert!(form.is_answer_locked(ProfileField::SecurityAnswer2));

        // only answers are ever locked
        assert!(!form.is_answer_locked(ProfileField::NewPassword));
        assert!(!form.is_answer_locked(ProfileField::SecurityQuestion2));
    }

    #[test]
    fn test_reveal_toggles_are_independent() {
        let mut reveal = RevealState::default();
        reveal.toggle(ProfileField::SecurityAnswer1);

        assert_eq!(reveal.input_type(ProfileField::SecurityAnswer1), "text");
        for field in [
            ProfileField::SecurityAnswer2,
            ProfileField::CurrentPassword,
            ProfileField::NewPassword,
            ProfileField::ConfirmPassword,
        ] {
            assert_eq!(reveal.input_type(field), "password");
        }

        reveal.toggle(ProfileField::SecurityAnswer1);
        assert!(!reveal.is_revealed(ProfileField::SecurityAnswer1));
    }

    #[test]
    fn test_update_skips_password_when_unchanged() {
        let form = ProfileFormData {
            email: "a@b.co".to_string(),
            current_password: "old".to_string(),
            ..Default::default()
        };
        let update = ProfileUpdate::from_form(&form, FormSection::Password);
        assert!(update.is_empty());

        let update = ProfileUpdate::from_form(&form, FormSection::All);
        assert_eq!(update.email.as_deref(), Some("a@b.co"));
        assert_eq!(update.new_password, None);
    }

    #[test]
    fn test_update_normalizes_answers() {
        let form = ProfileFormData {
            security_question_1: "Favourite food?".to_string(),
            security_answer_1: "  Som Tam ".to_string(),
            security_question_2: "Favourite game?".to_string(),
            ..Default::default()
        };
        let update = ProfileUpdate::from_form(&form, FormSection::Security);

        assert_eq!(update.security_answer_1.as_deref(), Some("som tam"));
        assert_eq!(update.security_question_2, None);
        assert_eq!(update.email, None);

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "security_question_1": "Favourite food?",
                "security_answer_1": "som tam"
            })
        );
    }
}
