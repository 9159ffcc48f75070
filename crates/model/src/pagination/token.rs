//! Continuation-token codec.
//!
//! A token is the padded URL-safe base64 form of
//! `resource_type|resource_id|<unix seconds>`. Sub-second precision is not
//! carried; decoding restores a zero sub-second component.

use crate::pagination::cursor::CursorPosition;
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use chrono::{DateTime, Utc};
use thiserror::Error;

const DELIMITER: char = '|';
const FIELD_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not valid URL-safe base64 or does not decode to UTF-8.
    #[error("invalid continuation token encoding: {0}")]
    InvalidTokenEncoding(String),

    /// The decoded payload does not have exactly three fields.
    #[error("invalid continuation token format: expected 3 fields, found {0}")]
    InvalidTokenFormat(usize),

    /// The timestamp field is not an integer number of seconds.
    #[error("invalid timestamp in continuation token: {0}")]
    InvalidTokenTimestamp(String),
}

pub fn encode(position: &CursorPosition) -> String {
    let payload = format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        escape_field(&position.resource_type),
        escape_field(&position.resource_id),
        position.created_at.timestamp()
    );
    URL_SAFE.encode(payload.as_bytes())
}

pub fn decode(token: &str) -> Result<CursorPosition, TokenError> {
    let bytes = URL_SAFE
        .decode(token.as_bytes())
        .map_err(|err| TokenError::InvalidTokenEncoding(err.to_string()))?;
    let payload =
        String::from_utf8(bytes).map_err(|err| TokenError::InvalidTokenEncoding(err.to_string()))?;

    let parts: Vec<&str> = payload.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return Err(TokenError::InvalidTokenFormat(parts.len()));
    }

    let secs = parts[2]
        .parse::<i64>()
        .map_err(|err| TokenError::InvalidTokenTimestamp(format!("'{}': {err}", parts[2])))?;
    let created_at: DateTime<Utc> = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        TokenError::InvalidTokenTimestamp(format!("{secs} is out of range"))
    })?;

    Ok(CursorPosition {
        created_at,
        resource_type: unescape_field(parts[0]),
        resource_id: unescape_field(parts[1]),
    })
}

fn escape_field(field: &str) -> String {
    if !field.contains(['%', DELIMITER]) {
        return field.to_string();
    }

    let mut out = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        match ch {
            '%' => out.push_str("%25"),
            DELIMITER => out.push_str("%7C"),
            other => out.push(other),
        }
    }
    out
}

// Unknown `%` sequences are kept as-is.
fn unescape_field(field: &str) -> String {
    if !field.contains('%') {
        return field.to_string();
    }

    let mut out = String::with_capacity(field.len());
    let mut rest = field;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if tail.starts_with("%25") {
            out.push('%');
            rest = &tail[3..];
        } else if tail.starts_with("%7C") || tail.starts_with("%7c") {
            out.push(DELIMITER);
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
