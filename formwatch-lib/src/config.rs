//! Page and form configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::Field;

/// Default delay before a successful submit clears the form.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Default delay before the click feedback line reverts.
pub const DEFAULT_CLICK_REVERT_DELAY: Duration = Duration::from_millis(2000);

/// Element identifiers the form validator reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormIds {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name_error: String,
    pub email_error: String,
    pub password_error: String,
    pub confirm_password_error: String,
    /// Form-level success indicator.
    pub success: String,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            name: "name".into(),
            email: "email".into(),
            password: "password".into(),
            confirm_password: "confirmPassword".into(),
            name_error: "nameError".into(),
            email_error: "emailError".into(),
            password_error: "passwordError".into(),
            confirm_password_error: "confirmPasswordError".into(),
            success: "formSuccess".into(),
        }
    }
}

impl FormIds {
    /// Returns the input element id for a field.
    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Returns the error indicator id for a field.
    pub fn error(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_error,
            Field::Email => &self.email_error,
            Field::Password => &self.password_error,
            Field::ConfirmPassword => &self.confirm_password_error,
        }
    }
}

/// Configuration for the form validator.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use formwatch_lib::config::FormConfig;
///
/// let config = FormConfig::default().with_reset_delay(Duration::from_millis(500));
/// assert_eq!(config.reset_delay, Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay between a valid submit and the form reset.
    ///
    /// Default: 2 seconds
    #[serde(rename = "reset_delay_ms", with = "millis")]
    pub reset_delay: Duration,

    /// Element identifiers.
    pub ids: FormIds,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            ids: FormIds::default(),
        }
    }
}

impl FormConfig {
    /// Creates a new form config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reset delay.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Sets the element identifiers.
    pub fn with_ids(mut self, ids: FormIds) -> Self {
        self.ids = ids;
        self
    }
}

/// One tab: the link that selects it and the panel it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabIds {
    pub link: String,
    /// Panel id, which is also the tab's name.
    pub content: String,
}

impl TabIds {
    pub fn new(link: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            content: content.into(),
        }
    }
}

/// One FAQ entry: the answer panel and the +/- icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqIds {
    pub answer: String,
    pub icon: String,
}

impl FaqIds {
    pub fn new(answer: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            icon: icon.into(),
        }
    }
}

/// Configuration for the whole demo page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub form: FormConfig,

    /// Delay before the click feedback line reverts.
    ///
    /// Default: 2 seconds
    #[serde(rename = "click_revert_delay_ms", with = "millis")]
    pub click_revert_delay: Duration,

    /// Tabs in display order. The first one is selected on load.
    pub tabs: Vec<TabIds>,

    /// FAQ entries in display order.
    pub faq: Vec<FaqIds>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form: FormConfig::default(),
            click_revert_delay: DEFAULT_CLICK_REVERT_DELAY,
            tabs: (1..=3)
                .map(|n| TabIds::new(format!("tab{n}-link"), format!("tab{n}")))
                .collect(),
            faq: (1..=3)
                .map(|n| FaqIds::new(format!("faq{n}-answer"), format!("faq{n}-icon")))
                .collect(),
        }
    }
}

impl PageConfig {
    /// Creates a new page config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the form config.
    pub fn with_form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    /// Sets the click feedback revert delay.
    pub fn with_click_revert_delay(mut self, delay: Duration) -> Self {
        self.click_revert_delay = delay;
        self
    }

    /// Sets the tabs.
    pub fn with_tabs(mut self, tabs: Vec<TabIds>) -> Self {
        self.tabs = tabs;
        self
    }

    /// Sets the FAQ entries.
    pub fn with_faq(mut self, faq: Vec<FaqIds>) -> Self {
        self.faq = faq;
        self
    }

    /// Parses a config from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Serializes the config as pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serde adapter storing a `Duration` as whole milliseconds.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_page_ids() {
        let config = PageConfig::default();
        assert_eq!(config.form.reset_delay, Duration::from_millis(2000));
        assert_eq!(config.form.ids.input(Field::ConfirmPassword), "confirmPassword");
        assert_eq!(config.form.ids.error(Field::Email), "emailError");
        assert_eq!(config.tabs[0].content, "tab1");
        assert_eq!(config.faq.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PageConfig::from_json_str(r#"{"form": {"reset_delay_ms": 750}}"#).unwrap();
        assert_eq!(config.form.reset_delay, Duration::from_millis(750));
        assert_eq!(config.form.ids, FormIds::default());
        assert_eq!(config.click_revert_delay, DEFAULT_CLICK_REVERT_DELAY);
    }

    #[test]
    fn test_custom_ids() {
        let config = PageConfig::from_json_str(
            r#"{"form": {"ids": {"name": "fullName"}}, "tabs": [{"link": "a", "content": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(config.form.ids.name, "fullName");
        assert_eq!(config.form.ids.email, "email");
        assert_eq!(config.tabs, vec![TabIds::new("a", "b")]);
    }

    #[test]
    fn test_invalid_json() {
        let err = PageConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"click_revert_delay_ms": 10}}"#).unwrap();

        let config = PageConfig::load(file.path()).unwrap();
        assert_eq!(config.click_revert_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PageConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_json_round_trip_uses_millis() {
        let json = PageConfig::default().to_json_string().unwrap();
        assert!(json.contains(r#""reset_delay_ms": 2000"#));
        assert_eq!(PageConfig::from_json_str(&json).unwrap(), PageConfig::default());
    }
}
