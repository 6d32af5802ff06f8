//! Notice severity tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual category of a notice.
///
/// Pages pass a free-form token; anything unknown is kept verbatim in
/// [`Severity::Other`] and simply renders with the unstyled `alert-<token>`
/// class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Other(token) => token,
        }
    }

    /// Class attribute for a notice of this severity, e.g. `alert alert-error`.
    pub fn class_name(&self, base: &str) -> String {
        format!("{base} {base}-{}", self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(token: &str) -> Self {
        match token {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(token: String) -> Self {
        Severity::from(token.as_str())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(Severity::from("error"), Severity::Error);
        assert_eq!(Severity::from("info"), Severity::Info);
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn test_unknown_token_is_preserved() {
        let severity = Severity::from("Danger");
        assert_eq!(severity, Severity::Other("Danger".to_string()));
        assert_eq!(severity.class_name("alert"), "alert alert-Danger");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(Severity::Success.class_name("alert"), "alert alert-success");
        assert_eq!(Severity::Warning.class_name("notice"), "notice notice-warning");
    }

    #[test]
    fn test_serde_uses_page_tokens() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
        let parsed: Severity = serde_json::from_str(r#""custom""#).unwrap();
        assert_eq!(parsed, Severity::Other("custom".to_string()));
    }
}
