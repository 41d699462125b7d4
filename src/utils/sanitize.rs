//! Request validation and sanitization for the command-line surface
//!
//! The transformer itself accepts any string. These checks only guard what
//! the CLI is willing to turn into a prompt.

use log::warn;
use regex::Regex;
use std::sync::LazyLock;

use crate::config::LimitsConfig;
use crate::utils::error::{AppError, AppResult};

static DANGEROUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<script\b.*?</script>",
        r"(?i)javascript:",
        r"(?i)on\w+\s*=",
        r"(?is)<iframe\b.*?</iframe>",
        r"(?i)eval\s*\(",
        r"(?i)document\.write",
        r"(?i)window\.location",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static SCRIPT_PROTOCOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").unwrap());

/// Check length bounds (in characters) and reject script-like content
pub fn validate_request(request: &str, limits: &LimitsConfig) -> AppResult<()> {
    let length = request.chars().count();

    if length > limits.max_chars {
        warn!("rejected request of {} characters", length);
        return Err(AppError::Validation(format!(
            "Request too long (max {} characters)",
            limits.max_chars
        )));
    }

    if length < limits.min_chars {
        warn!("rejected request of {} characters", length);
        return Err(AppError::Validation(format!(
            "Request too short (min {} characters)",
            limits.min_chars
        )));
    }

    if DANGEROUS_PATTERNS.iter().any(|re| re.is_match(request)) {
        warn!("rejected request with script-like content");
        return Err(AppError::Validation("Invalid content detected".to_string()));
    }

    Ok(())
}

/// Strip script protocols and inline event handlers, then trim
pub fn sanitize_request(request: &str) -> String {
    let without_protocol = SCRIPT_PROTOCOL.replace_all(request, "");
    let without_handlers = EVENT_HANDLER.replace_all(&without_protocol, "");
    without_handlers.trim().to_string()
}
