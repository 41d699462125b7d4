//! Enhanced prompt template

use crate::core::data::DomainRule;

pub const CONTEXT_HEADER: &str = "IMPORTANT CONTEXT:";
pub const QUESTIONS_HEADER: &str = "QUESTIONS FOR YOU TO ASK FIRST:";
pub const PREFERENCE_HEADER: &str = "IMPLEMENTATION PREFERENCE:";
pub const PREFERENCE_LINE: &str =
    "I prefer building on existing functionality rather than introducing complexity";

/// Trim the request and make sure it ends with exactly the period it needs
pub fn normalize_request(request: &str) -> String {
    let trimmed = request.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

/// Render the full prompt. No trailing newline follows the last preference.
pub fn render_prompt(request: &str, complexity: &str, domain: &DomainRule) -> String {
    let capacity = 12 + domain.questions.len() + domain.preferences.len();
    let mut lines: Vec<String> = Vec::with_capacity(capacity);

    lines.push(normalize_request(request));
    lines.push(String::new());

    lines.push(CONTEXT_HEADER.to_string());
    lines.push(format!("- {}", complexity));
    lines.push(format!("- {}", domain.context));
    lines.push(format!("- {}", PREFERENCE_LINE));
    lines.push(String::new());

    lines.push(QUESTIONS_HEADER.to_string());
    for (i, question) in domain.questions.iter().enumerate() {
        lines.push(format!("{}. \"{}\"", i + 1, question));
    }
    lines.push(String::new());

    lines.push(PREFERENCE_HEADER.to_string());
    for preference in &domain.preferences {
        lines.push(format!("- {}", preference));
    }

    lines.join("\n")
}
