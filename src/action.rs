//! The action directive: the decoded, validated form of the raw
//! `action` input, and its mapping to the wire.

use reqwest::Method;

/// What the run was asked to do to the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Read the current value.
    Get,
    /// Add the send value.
    Increment,
    /// Subtract the send value.
    Decrement,
    /// Overwrite with the send value.
    Set,
    /// Anything else, carrying the raw input for error messaging.
    Invalid(String),
}

impl Action {
    /// Decode the raw input. Matching is exact and case-sensitive:
    /// `"Get"` is invalid.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "get" => Action::Get,
            "increment" => Action::Increment,
            "decrement" => Action::Decrement,
            "set" => Action::Set,
            other => Action::Invalid(other.to_string()),
        }
    }

    /// The one mapping table: HTTP method and URL path suffix for each
    /// valid directive. `Invalid` routes to nothing.
    pub fn route(&self) -> Option<(Method, &'static str)> {
        match self {
            Action::Get => Some((Method::GET, "")),
            Action::Increment => Some((Method::POST, "/increment")),
            Action::Decrement => Some((Method::POST, "/decrement")),
            Action::Set => Some((Method::POST, "/set")),
            Action::Invalid(_) => None,
        }
    }
}
