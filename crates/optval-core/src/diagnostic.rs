//! Construction failure messages
//!
//! Messages name the rejected category and point at the factory that would
//! have admitted it. Nothing branches on the text.

use crate::SentinelKind;

/// Diagnostic formatter configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticConfig {
    /// Path prefix used when naming factories, e.g. `Optional::empty()`
    pub namespace: String,
    /// Append remediation hints after the failure sentence
    pub include_hints: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            namespace: "Optional".to_string(),
            include_hints: true,
        }
    }
}

impl DiagnosticConfig {
    /// Failure sentence only
    pub fn terse() -> Self {
        DiagnosticConfig {
            include_hints: false,
            ..DiagnosticConfig::default()
        }
    }

    fn factory(&self, name: &str) -> String {
        format!("{}::{}()", self.namespace, name)
    }
}

/// Message for access on an empty optional
pub const NOT_PRESENT: &str = "Value is not present";

/// Build the message for a rejected construction
pub fn creation_message(kind: SentinelKind, config: &DiagnosticConfig) -> String {
    let article = match kind {
        SentinelKind::Undefined => "an",
        SentinelKind::Nullish | SentinelKind::Null => "a",
    };
    let mut msg = format!(
        "Cannot create an optional value from {} {} value.",
        article, kind
    );
    if !config.include_hints {
        return msg;
    }

    match kind {
        SentinelKind::Nullish => {
            msg.push_str(&format!(
                " If you want to do this on purpose use {}.",
                config.factory("of_nullish")
            ));
        }
        SentinelKind::Null => {
            msg.push_str(&format!(
                " To admit null use {} or {}.",
                config.factory("of_nullable"),
                config.factory("of_nullish")
            ));
        }
        SentinelKind::Undefined => {
            msg.push_str(&format!(
                " To admit undefined use {} or {}.",
                config.factory("of_undefinable"),
                config.factory("of_nullish")
            ));
        }
    }
    msg.push_str(&format!(
        " If you want to create an empty optional, use {} instead.",
        config.factory("empty")
    ));
    msg
}
