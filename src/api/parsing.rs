use std::collections::HashMap;

use serde_json::Value;

use crate::errors::BotError;

/// Slash command payload, decoded from its form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommandEvent {
    pub command: String,
    pub text: String,
    pub user_id: String,
    pub channel_id: String,
    pub response_url: String,
}

/// Case-insensitive header lookup on a Lambda proxy `headers` object.
#[must_use]
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Decode an `application/x-www-form-urlencoded` body into a field map.
#[must_use]
pub fn parse_form_data(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for pair in body.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(&value.replace('+', " "))
            .map(|v| v.into_owned())
            .unwrap_or_default();
        fields.insert(key.to_string(), decoded);
    }
    fields
}

/// Parse a slash command body into its event shape.
///
/// # Errors
///
/// Returns `ParseError` when a required field is missing.
pub fn parse_slash_command(body: &str) -> Result<SlashCommandEvent, BotError> {
    let mut fields = parse_form_data(body);
    let text = fields.remove("text").unwrap_or_default();
    let mut required = |name: &str| {
        fields
            .remove(name)
            .ok_or_else(|| BotError::ParseError(format!("missing {name} in command payload")))
    };

    Ok(SlashCommandEvent {
        command: required("command")?,
        user_id: required("user_id")?,
        channel_id: required("channel_id")?,
        response_url: required("response_url")?,
        text,
    })
}
