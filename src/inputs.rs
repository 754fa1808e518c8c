//! The five inputs a run reads, and how raw workflow values become them.

use crate::error::RunError;

/// Resolved configuration for one run. Built once by the caller and
/// never mutated; the library has no environment access of its own.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub apikey: String,
    pub workspace: String,
    pub counter: String,
    /// Raw action string, matched case-sensitively later and echoed
    /// back as an output on success.
    pub action: String,
    /// Optional payload for mutating actions, still unparsed.
    pub value: Option<String>,
}

impl Inputs {
    /// Resolve the five inputs through a lookup function (input name to
    /// raw value). Every value is trimmed; a required input that is
    /// absent or trims to empty fails with the first offending name.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RunError> {
        Ok(Self {
            apikey: required("apikey", &lookup)?,
            workspace: required("workspace", &lookup)?,
            counter: required("counter", &lookup)?,
            action: required("action", &lookup)?,
            value: optional("value", &lookup),
        })
    }
}

fn required(
    name: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<String, RunError> {
    match optional(name, lookup) {
        Some(value) => Ok(value),
        None => Err(RunError::MissingInput(name)),
    }
}

fn optional(name: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(name)
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Parse the optional `value` input into the integer payload.
/// `None` means the caller should fall back to the default of 1.
pub fn send_value(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn full_lookup() -> impl Fn(&str) -> Option<String> {
        lookup_from(&[
            ("apikey", "k123"),
            ("workspace", "acme"),
            ("counter", "deploys"),
            ("action", "increment"),
            ("value", "5"),
        ])
    }

    #[test]
    fn resolve_reads_all_five_inputs() {
        let inputs = Inputs::resolve(full_lookup()).unwrap();
        assert_eq!(inputs.apikey, "k123");
        assert_eq!(inputs.workspace, "acme");
        assert_eq!(inputs.counter, "deploys");
        assert_eq!(inputs.action, "increment");
        assert_eq!(inputs.value.as_deref(), Some("5"));
    }

    #[test]
    fn resolve_trims_surrounding_whitespace() {
        let inputs = Inputs::resolve(lookup_from(&[
            ("apikey", "  k123\n"),
            ("workspace", "\tacme "),
            ("counter", " deploys"),
            ("action", "get "),
        ]))
        .unwrap();
        assert_eq!(inputs.apikey, "k123");
        assert_eq!(inputs.workspace, "acme");
        assert_eq!(inputs.counter, "deploys");
        assert_eq!(inputs.action, "get");
    }

    #[test]
    fn missing_apikey_names_the_input() {
        let err = Inputs::resolve(lookup_from(&[
            ("workspace", "acme"),
            ("counter", "deploys"),
            ("action", "get"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Input required and not supplied: apikey");
    }

    #[test]
    fn empty_required_input_counts_as_missing() {
        let err = Inputs::resolve(lookup_from(&[
            ("apikey", "k123"),
            ("workspace", ""),
            ("counter", "deploys"),
            ("action", "get"),
        ]))
        .unwrap_err();
        assert!(matches!(err, RunError::MissingInput("workspace")));
    }

    #[test]
    fn whitespace_only_required_input_counts_as_missing() {
        let err = Inputs::resolve(lookup_from(&[
            ("apikey", "k123"),
            ("workspace", "acme"),
            ("counter", "   "),
            ("action", "get"),
        ]))
        .unwrap_err();
        assert!(matches!(err, RunError::MissingInput("counter")));
    }

    #[test]
    fn value_is_optional() {
        let inputs = Inputs::resolve(lookup_from(&[
            ("apikey", "k123"),
            ("workspace", "acme"),
            ("counter", "deploys"),
            ("action", "get"),
        ]))
        .unwrap();
        assert!(inputs.value.is_none());
    }

    #[test]
    fn empty_value_resolves_to_none() {
        let inputs = Inputs::resolve(lookup_from(&[
            ("apikey", "k123"),
            ("workspace", "acme"),
            ("counter", "deploys"),
            ("action", "get"),
            ("value", "  "),
        ]))
        .unwrap();
        assert!(inputs.value.is_none());
    }

    #[test]
    fn send_value_parses_integers() {
        assert_eq!(send_value(Some("5")), Some(5));
        assert_eq!(send_value(Some("-12")), Some(-12));
        assert_eq!(send_value(Some("0")), Some(0));
    }

    #[test]
    fn send_value_trims_before_parsing() {
        assert_eq!(send_value(Some(" 42 ")), Some(42));
    }

    #[test]
    fn send_value_rejects_non_numeric() {
        assert_eq!(send_value(Some("abc")), None);
        assert_eq!(send_value(Some("1.5")), None);
        assert_eq!(send_value(Some("")), None);
    }

    #[test]
    fn send_value_absent_is_none() {
        assert_eq!(send_value(None), None);
    }
}
