use std::fmt;

use serde::{Deserialize, Serialize};

/// String-encoded boolean (`featured`, `published`).
///
/// The raw token is what travels on the wire and is never rewritten.
/// Any string is accepted; [`StringFlag::as_bool`] interprets the usual tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringFlag(String);

impl StringFlag {
    pub fn new(raw: impl Into<String>) -> Self {
        StringFlag(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Some(true)` for `true`/`1`/`yes`, `Some(false)` for `false`/`0`/`no`
    /// (trimmed, ASCII case-insensitive), `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        let token = self.0.trim();
        if ["true", "1", "yes"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
            Some(true)
        } else if ["false", "0", "no"].iter().any(|t| token.eq_ignore_ascii_case(t)) {
            Some(false)
        } else {
            None
        }
    }

    pub fn is_true(&self) -> bool {
        self.as_bool() == Some(true)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for StringFlag {
    fn from(raw: &str) -> Self {
        StringFlag(raw.to_owned())
    }
}

impl From<String> for StringFlag {
    fn from(raw: String) -> Self {
        StringFlag(raw)
    }
}

impl From<bool> for StringFlag {
    fn from(value: bool) -> Self {
        StringFlag(value.to_string())
    }
}

impl fmt::Display for StringFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
