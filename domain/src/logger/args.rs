//! Log call arguments
//!
//! A severity method receives a message plus [`LogArgs`]: positional
//! arguments that fill `{}` placeholders in the message, and keyword fields
//! that travel alongside it as structured data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keyword reserved for selecting the severity inside mixin dispatch.
///
/// It is stripped before arguments are forwarded to a logger handle.
pub const RESERVED_SEVERITY_FIELD: &str = "_severity";

/// Positional and keyword arguments of a single log call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogArgs {
    /// Values substituted for `{}` placeholders, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    /// Structured key/value fields
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Value>,
}

impl LogArgs {
    /// Arguments of a call that passes nothing beyond the message.
    pub const NONE: LogArgs = LogArgs {
        args: Vec::new(),
        fields: BTreeMap::new(),
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Add a keyword field, replacing any previous value under `key`.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.fields.is_empty()
    }

    /// Copy of these arguments without the reserved severity keyword.
    pub fn without_reserved(&self) -> LogArgs {
        let mut forwarded = self.clone();
        forwarded.fields.remove(RESERVED_SEVERITY_FIELD);
        forwarded
    }

    /// Fill the `{}` placeholders of `message` with the positional arguments.
    ///
    /// Placeholders without a matching argument are left as-is; arguments
    /// without a placeholder are appended, separated by spaces.
    pub fn render(&self, message: &str) -> String {
        let mut rendered = String::with_capacity(message.len());
        let mut args = self.args.iter();
        let mut rest = message;

        while let Some(pos) = rest.find("{}") {
            rendered.push_str(&rest[..pos]);
            match args.next() {
                Some(value) => rendered.push_str(&display_value(value)),
                None => rendered.push_str("{}"),
            }
            rest = &rest[pos + 2..];
        }
        rendered.push_str(rest);

        for value in args {
            rendered.push(' ');
            rendered.push_str(&display_value(value));
        }
        rendered
    }

    /// Keyword fields as `key=value` pairs, or `None` when there are none.
    pub fn render_fields(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, display_value(value)))
            .collect();
        Some(pairs.join(" "))
    }
}

/// Strings are shown without quotes; everything else in its JSON form.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_without_args() {
        assert_eq!(LogArgs::NONE.render("Hello"), "Hello");
    }

    #[test]
    fn test_render_fills_placeholders_in_order() {
        let args = LogArgs::new().arg("alice").arg(3);
        assert_eq!(
            args.render("user {} retried {} times"),
            "user alice retried 3 times"
        );
    }

    #[test]
    fn test_render_keeps_unfilled_placeholders() {
        let args = LogArgs::new().arg(1);
        assert_eq!(args.render("{} of {}"), "1 of {}");
    }

    #[test]
    fn test_render_appends_surplus_args() {
        let args = LogArgs::new().arg("a").arg(json!([1, 2])).arg(true);
        assert_eq!(args.render("got {}"), "got a [1,2] true");
    }

    #[test]
    fn test_render_fields_sorted_by_key() {
        let args = LogArgs::new().field("b", 2).field("a", "x");
        assert_eq!(args.render_fields().as_deref(), Some("a=x b=2"));
        assert_eq!(LogArgs::NONE.render_fields(), None);
    }

    #[test]
    fn test_without_reserved_strips_severity_keyword() {
        let args = LogArgs::new()
            .arg(1)
            .field(RESERVED_SEVERITY_FIELD, "error")
            .field("user", "bob");
        let forwarded = args.without_reserved();
        assert!(!forwarded.fields.contains_key(RESERVED_SEVERITY_FIELD));
        assert_eq!(forwarded.fields["user"], "bob");
        assert_eq!(forwarded.args, vec![json!(1)]);
    }

    #[test]
    fn test_field_replaces_existing_key() {
        let args = LogArgs::new().field("k", 1).field("k", 2);
        assert_eq!(args.fields.len(), 1);
        assert_eq!(args.fields["k"], 2);
    }
}
