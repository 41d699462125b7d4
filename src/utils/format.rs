/// Rule line between demo runs
pub fn heavy_rule() -> String {
    "=".repeat(60)
}

/// Rule line under each demo request
pub fn light_rule() -> String {
    "-".repeat(40)
}

pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

/// Truncate to `max_len` characters, marking the cut with "..."
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}
