use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structure representing a Slack slash command event.
/// This contains the fields Slack sends when a user invokes `/articles`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SlackCommandEvent {
    pub team_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
}

/// Decodes URL encoded string using `percent_encoding` crate
///
/// # Examples
///
/// ```
/// use artrec::slack::command_parser::decode_url_component;
///
/// let decoded = decode_url_component("hello%20world").unwrap();
/// assert_eq!(decoded, "hello world");
///
/// let decoded_plus = decode_url_component("hello+world").unwrap();
/// assert_eq!(decoded_plus, "hello world");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    // `+` means space in form bodies; it must be swapped before percent
    // decoding so an encoded `%2B` survives as a literal plus.
    percent_decode_str(&input.replace('+', " "))
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Splits a URL-encoded form body into decoded key/value pairs.
pub fn parse_form_fields(form_data: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for pair in form_data.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));

        let key = decode_url_component(raw_key)
            .map_err(|e| format!("Failed to decode key: {}", e))?;
        let value = decode_url_component(raw_value)
            .map_err(|e| format!("Failed to decode value: {}", e))?;

        map.insert(key, value);
    }

    Ok(map)
}

/// Parses URL-encoded form data into a `SlackCommandEvent` structure.
///
/// Missing fields default to empty strings.
///
/// ```
/// use artrec::slack::command_parser::parse_form_data;
///
/// let form_data = "team_id=T123&channel_id=C123&user_id=U123&\
///                  command=%2Farticles&text=feed-42&\
///                  response_url=https%3A%2F%2Fhooks.slack.com%2F&trigger_id=123.456";
///
/// let event = parse_form_data(form_data).unwrap();
/// assert_eq!(event.command, "/articles");
/// assert_eq!(event.text, "feed-42");
/// ```
pub fn parse_form_data(form_data: &str) -> Result<SlackCommandEvent, String> {
    let map = parse_form_fields(form_data)?;
    let field = |name: &str| map.get(name).cloned().unwrap_or_default();

    Ok(SlackCommandEvent {
        team_id: field("team_id"),
        channel_id: field("channel_id"),
        user_id: field("user_id"),
        command: field("command"),
        text: field("text"),
        response_url: field("response_url"),
        trigger_id: field("trigger_id"),
    })
}
