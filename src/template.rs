//! Path template rendering
//!
//! Handles `{name}` placeholders in REST path templates such as
//! `/lego/parts/{part_num}/colors/{color_id}/`. Rendering yields raw
//! (not yet percent-encoded) path segments; the transport encodes them
//! when it appends them to the base URL.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching path placeholders: {name}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}").unwrap());

/// Path parameter values, looked up by placeholder name
pub type PathParams = [(&'static str, String)];

/// Render a path template into its segments
///
/// A trailing `/` in the template yields a final empty segment so the
/// rendered URL keeps it. Every placeholder must have a non-blank value.
pub fn render_segments(
    operation: &str,
    template: &str,
    params: &PathParams,
) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    let mut segments = Vec::new();

    let trimmed = template.strip_prefix('/').unwrap_or(template);
    for raw in trimmed.split('/') {
        let mut segment = String::with_capacity(raw.len());
        let mut last = 0;
        for cap in PLACEHOLDER_REGEX.captures_iter(raw) {
            let (Some(full), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            let name = name.as_str();
            segment.push_str(&raw[last..full.start()]);
            match lookup(params, name) {
                Some(value) if !value.trim().is_empty() => segment.push_str(value),
                Some(_) => {
                    return Err(Error::validation(operation, name, "must not be empty"));
                }
                None => missing.push(name.to_string()),
            }
            last = full.end();
        }
        segment.push_str(&raw[last..]);
        segments.push(segment);
    }

    if missing.is_empty() {
        Ok(segments)
    } else {
        Err(Error::validation(
            operation,
            missing.join(", "),
            "required path parameter is missing",
        ))
    }
}

fn lookup<'a>(params: &'a PathParams, name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}
