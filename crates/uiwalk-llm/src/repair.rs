//! Best-effort repair of JSON-shaped backend replies
//!
//! Backends occasionally emit raw control characters inside JSON strings or
//! wrap the object in a Markdown code fence. The contract here is "one
//! bounded repair attempt, then the caller's deterministic fallback" - a
//! parse failure never propagates past the calling operation.

use serde_json::Value;
use tracing::warn;

/// Parse a reply that is supposed to encode a JSON value
///
/// Strict parse first; on failure, escape literal newline/carriage-return/tab
/// characters and retry exactly once. Callers fall back to template data (or
/// a default classification) when this returns an error.
pub fn repair_parse(raw: &str) -> Result<Value, serde_json::Error> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(first_error) => {
            warn!("Strict JSON parse failed, attempting repair: {}", first_error);
            let repaired = raw
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t");
            serde_json::from_str(&repaired)
        }
    }
}

/// Strip a wrapping triple-backtick code fence, if present
///
/// Handles an optional language tag on the opening fence. Anything that is
/// not fence-wrapped passes through trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the language tag line (```json) or the bare fence
    let body = match rest.split_once('\n') {
        Some((_tag, body)) => body,
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}
