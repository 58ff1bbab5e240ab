//! Module argument normalization
//!
//! Turns the JSON arguments handed over by the automation host into
//! [`ModuleParams`]. Aliases and loose value forms are resolved here so the
//! reconciler only ever sees a plain identifier list.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::reconcile::State;

/// Accepted spellings of the `name` parameter.
pub const NAME_ALIASES: &[&str] = &["name", "exts", "ext", "extension", "extensions"];

const CHECK_MODE_KEYS: &[&str] = &["check_mode", "_ansible_check_mode"];
const WRAPPER_KEY: &str = "ANSIBLE_MODULE_ARGS";
const INTERNAL_PREFIX: &str = "_ansible_";

/// Normalized module arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParams {
    pub name: Vec<String>,
    pub state: State,
    pub check_mode: bool,
}

impl ModuleParams {
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Accepts either the bare argument object or one wrapped in
    /// `ANSIBLE_MODULE_ARGS`.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut args = into_object(value)?;
        if let Some(inner) = args.remove(WRAPPER_KEY) {
            args = into_object(inner)?;
        }

        let mut name: Option<(String, Vec<String>)> = None;
        let mut state = State::default();
        let mut check_mode = false;
        let mut unsupported = Vec::new();

        for (key, value) in args {
            match key.as_str() {
                k if NAME_ALIASES.contains(&k) => {
                    if let Some((first, _)) = &name {
                        return Err(Error::InvalidParams(format!(
                            "parameters are mutually exclusive: {}|{}",
                            first, k
                        )));
                    }
                    let names = parse_names(k, value)?;
                    name = Some((k.to_string(), names));
                }
                "state" => {
                    if let Some(s) = parse_optional_str("state", value)? {
                        state = s.parse()?;
                    }
                }
                k if CHECK_MODE_KEYS.contains(&k) => {
                    check_mode |= parse_bool(k, value)?;
                }
                k if k.starts_with(INTERNAL_PREFIX) => {}
                other => unsupported.push(other.to_string()),
            }
        }

        if !unsupported.is_empty() {
            return Err(Error::InvalidParams(format!(
                "Unsupported parameters: {}. Supported parameters include: {}, state",
                unsupported.join(", "),
                NAME_ALIASES.join(", ")
            )));
        }

        let (_, name) =
            name.ok_or_else(|| Error::InvalidParams("missing required arguments: name".into()))?;

        Ok(Self {
            name,
            state,
            check_mode,
        })
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidParams(format!(
            "module arguments must be a JSON object, got: {}",
            other
        ))),
    }
}

/// Split a comma separated string into trimmed, non-empty identifiers.
pub fn split_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_names(key: &str, value: Value) -> Result<Vec<String>> {
    match value {
        Value::String(s) => Ok(split_names(&s)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(Error::InvalidParams(format!(
                    "elements of {} must be strings, got: {}",
                    key, other
                ))),
            })
            .collect(),
        Value::Null => Err(Error::InvalidParams("missing required arguments: name".into())),
        other => Err(Error::InvalidParams(format!(
            "{} must be a list of strings, got: {}",
            key, other
        ))),
    }
}

fn parse_optional_str(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => Err(Error::InvalidParams(format!(
            "{} must be a string, got: {}",
            key, other
        ))),
    }
}

fn parse_bool(key: &str, value: Value) -> Result<bool> {
    let invalid = |shown: &dyn std::fmt::Display| {
        Error::InvalidParams(format!("{} must be a boolean, got: {}", key, shown))
    };
    match value {
        Value::Bool(b) => Ok(b),
        Value::Null => Ok(false),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "1" | "y" => Ok(true),
            "no" | "false" | "off" | "0" | "n" => Ok(false),
            _ => Err(invalid(&s)),
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(invalid(&n)),
        },
        other => Err(invalid(&other)),
    }
}
