//! Greeting line printed before the calculation.

use serde::Serialize;
use std::fmt;

/// Environment variable the CLI reads the user's name from.
pub const NAME_VAR: &str = "MY_NAME";

/// Greeting outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Greeting {
    /// A name was supplied.
    Hello {
        /// The user's name.
        name: String,
    },
    /// No name was supplied.
    NotSet {
        /// Variable the name would have come from.
        variable: String,
    },
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hello { name } => write!(f, "Hello, {name}"),
            Self::NotSet { variable } => write!(f, "Environment variable {variable} is not set!"),
        }
    }
}

/// Builds the greeting for an optional name. An empty name counts as unset.
#[must_use]
pub fn greet(name: Option<&str>) -> Greeting {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => Greeting::Hello {
            name: name.to_string(),
        },
        None => {
            tracing::debug!(variable = NAME_VAR, "name not set");
            Greeting::NotSet {
                variable: NAME_VAR.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_name() {
        assert_eq!(greet(Some("Ankitha")).to_string(), "Hello, Ankitha");
    }

    #[test]
    fn test_greet_without_name() {
        assert_eq!(
            greet(None).to_string(),
            "Environment variable MY_NAME is not set!"
        );
    }

    #[test]
    fn test_greet_empty_name_is_unset() {
        assert!(matches!(greet(Some("")), Greeting::NotSet { .. }));
    }

    #[test]
    fn test_greeting_json_shape() {
        let json = serde_json::to_string(&greet(Some("Ada"))).unwrap();
        assert_eq!(json, r#"{"kind":"hello","name":"Ada"}"#);
    }
}
