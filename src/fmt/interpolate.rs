//! `{key}` placeholder substitution shared by record messages and translations.

use crate::context::Context;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_.]+)\}").expect("Invalid placeholder regex"));

/// Replaces `{key}` with the scalar value of `key` in `values`.
///
/// Strings go in verbatim, numbers and booleans in their JSON form, null as the empty
/// string. Missing keys and array/object values leave the placeholder untouched.
#[must_use]
pub fn interpolate(message: &str, values: &Context) -> String {
    if values.is_empty() || !message.contains('{') {
        return message.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(message, |caps: &Captures<'_>| {
            match values.get(&caps[1]) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) => String::new(),
                Some(v @ (Value::Bool(_) | Value::Number(_))) => v.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}
