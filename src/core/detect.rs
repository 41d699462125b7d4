//! Keyword detectors
//!
//! Matching is plain substring search over the lower-cased request, so
//! "user" also fires inside "username". Both detectors are total.

use log::debug;

use crate::core::data::{DomainRule, RuleSet};

/// Guidance sentence of the first complexity keyword found, or the default
pub fn detect_complexity<'r>(rules: &'r RuleSet, text: &str) -> &'r str {
    let lowered = text.to_lowercase();

    match rules
        .complexity_rules()
        .iter()
        .find(|rule| lowered.contains(rule.keyword.as_str()))
    {
        Some(rule) => {
            debug!("complexity keyword '{}' matched", rule.keyword);
            rule.guidance.as_str()
        }
        None => rules.default_complexity(),
    }
}

/// First domain (in declaration order) with any matching keyword, or the fallback
pub fn detect_domain<'r>(rules: &'r RuleSet, text: &str) -> &'r DomainRule {
    let lowered = text.to_lowercase();

    for domain in rules.domains() {
        if let Some(keyword) = domain.matching_keyword(&lowered) {
            debug!("domain '{}' matched on keyword '{}'", domain.name, keyword);
            return domain;
        }
    }

    rules.fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::DEFAULT_COMPLEXITY;

    fn rules() -> &'static RuleSet {
        RuleSet::builtin()
    }

    #[test]
    fn test_complexity_first_keyword_in_table_order_wins() {
        // "easy" appears first in the text but "quick" is declared earlier
        let guidance = detect_complexity(rules(), "an easy and quick fix");
        assert_eq!(guidance, "Keep it quick - use existing patterns where possible");
    }

    #[test]
    fn test_complexity_defaults_when_nothing_matches() {
        assert_eq!(detect_complexity(rules(), "Add authentication to my app"), DEFAULT_COMPLEXITY);
        assert_eq!(detect_complexity(rules(), ""), DEFAULT_COMPLEXITY);
    }

    #[test]
    fn test_complexity_is_case_insensitive_substring() {
        assert_eq!(
            detect_complexity(rules(), "Keep it BASICALLY the same"),
            "Keep it basic - avoid unnecessary complexity"
        );
    }

    #[test]
    fn test_domain_declaration_order_breaks_ties() {
        assert_eq!(detect_domain(rules(), "drag the login button").name, "drag_move");
        assert_eq!(detect_domain(rules(), "login page for the api").name, "auth");
    }

    #[test]
    fn test_domain_is_case_insensitive() {
        assert_eq!(
            detect_domain(rules(), "DRAG the panel").name,
            detect_domain(rules(), "drag the panel").name
        );
    }

    #[test]
    fn test_domain_matches_inside_words() {
        assert_eq!(detect_domain(rules(), "rename the username field").name, "auth");
        let tooltip = detect_domain(rules(), "Need to position the tooltip correctly");
        assert_eq!(tooltip.name, "drag_move");
    }

    #[test]
    fn test_domain_falls_back_to_generic() {
        let domain = detect_domain(rules(), "I want a simple way to upload files");
        assert_eq!(domain.name, "generic");
        assert_eq!(
            domain.context,
            "Explore current codebase patterns first before adding anything new"
        );

        assert_eq!(detect_domain(rules(), "").name, "generic");
    }
}
