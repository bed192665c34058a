//! Front-end settings for `numtool` and other callers that want a
//! configurable table and parse mode.
//!
//! The conversion functions never read these: a caller resolves
//! `settings().table()` and `settings().parse_options()` and passes them in.
//! A custom TOML may be installed once, before the first `settings()` call.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::TableSection;
use crate::convert::ParseOptions;
use crate::table::NumeralTable;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Install custom settings. Fails if the TOML is invalid or `settings()`
/// has already been resolved.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Custom settings if installed, the embedded defaults otherwise.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("embedded or pre-validated settings")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML: {0}")]
    Parse(String),
    #[error("settings field {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings were already installed or read")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    table: TableSection,
    pub parse: ParseSettings,
    /// Validated form of `table.symbols`.
    #[serde(skip)]
    table_parsed: NumeralTable,
}

impl Settings {
    /// Table a front end should pass when the user names none.
    pub fn table(&self) -> &NumeralTable {
        &self.table_parsed
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            ignore_case: self.parse.ignore_case,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseSettings {
    #[serde(default)]
    pub ignore_case: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.table_parsed = s
        .table
        .to_table()
        .map_err(|e| SettingsError::InvalidValue {
            field: "table.symbols".to_string(),
            reason: e.to_string(),
        })?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DEFAULT_TABLE;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.table(), &DEFAULT_TABLE);
        assert!(!s.parse.ignore_case);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[table]
symbols = ["m", "d", "c", "l", "x", "v", "i"]

[parse]
ignore_case = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.table().to_string(), "mdclxvi");
        assert!(s.parse.ignore_case);
        assert_eq!(s.parse_options(), ParseOptions { ignore_case: true });
    }

    #[test]
    fn ignore_case_defaults_to_false() {
        let toml = r#"
[table]
symbols = ["X", "V", "I"]

[parse]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.parse.ignore_case);
    }

    #[test]
    fn error_invalid_table() {
        let toml = r#"
[table]
symbols = ["X", "V", "X"]

[parse]
ignore_case = false
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("table.symbols"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[table]
symbols = ["I"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn init_custom_rejects_invalid() {
        let err = init_custom("[table]\nsymbols = []\n".to_string()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
