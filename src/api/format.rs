use serde_json::Value;

/// Turns a structured reply into displayable text.
pub trait ReplyFormatter: Send + Sync {
    fn format(&self, value: &Value) -> String;
}

/// Two-space indented JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson;

impl ReplyFormatter for PrettyJson {
    fn format(&self, value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_values_use_two_space_indent() {
        let value = json!({"reply": {"lines": ["a", "b"], "subject": "Re: Lunch"}});
        let expected = "{\n  \"reply\": {\n    \"lines\": [\n      \"a\",\n      \"b\"\n    ],\n    \"subject\": \"Re: Lunch\"\n  }\n}";
        assert_eq!(PrettyJson.format(&value), expected);
    }

    #[test]
    fn scalars_render_bare() {
        assert_eq!(PrettyJson.format(&json!(42)), "42");
        assert_eq!(PrettyJson.format(&json!(null)), "null");
    }
}
