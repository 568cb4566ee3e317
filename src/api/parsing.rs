use serde_json::Value;

use crate::errors::NumenoError;
use crate::slack::article_blocks::strip_tags;
use crate::slack::command_parser::{SlackCommandEvent, parse_form_data, parse_form_fields};

pub fn is_interactive_body(body: &str) -> bool {
    body.starts_with("payload=") || body.contains("&payload=")
}

/// Extracts and decodes the JSON carried in the `payload` form field.
pub fn parse_interactive_payload(form_body: &str) -> Result<Value, NumenoError> {
    let fields = parse_form_fields(form_body)
        .map_err(|e| NumenoError::ParseError(format!("Failed to decode payload: {}", e)))?;
    let raw = fields
        .get("payload")
        .ok_or_else(|| NumenoError::ParseError("Missing payload field".to_string()))?;
    serde_json::from_str(raw)
        .map_err(|e| NumenoError::ParseError(format!("Invalid JSON payload: {}", e)))
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn v_array<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    v_path(root, path).and_then(|v| v.as_array())
}

pub fn parse_slack_event(payload: &str) -> Result<SlackCommandEvent, NumenoError> {
    parse_form_data(payload)
        .map_err(|e| NumenoError::ParseError(format!("Failed to parse form data: {}", e)))
}

/// Cleans free text typed after a slash command: tags removed, whitespace
/// runs collapsed, ends trimmed.
#[must_use]
pub fn sanitize_text_field(text: &str) -> String {
    strip_tags(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
