use colored::*;
use crate::core::data::{DomainRule, Enhancement, RuleSet};
use crate::utils::format::{join_keywords, truncate_string};

pub struct OutputStyle;

impl OutputStyle {
    // Primary colors for different field types
    pub fn domain(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn keyword(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Turn coloring on or off for the rest of the process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    // Formatting helpers
    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn field_colored(
        label: &str,
        value: &str,
        color_fn: impl Fn(&str) -> ColoredString,
    ) -> String {
        format!("{:>12}: {}", Self::label(label), color_fn(value))
    }

    /// One line per domain: name, keywords and a shortened context
    pub fn format_domain_line(domain: &DomainRule) -> String {
        let keywords = if domain.is_fallback() {
            Self::muted("(fallback)").to_string()
        } else {
            Self::keyword(&join_keywords(&domain.keywords)).to_string()
        };

        format!(
            "{:<14} {} {}",
            Self::domain(&domain.name),
            keywords,
            Self::muted(&truncate_string(&domain.context, 60))
        )
    }

    /// Full block for a single domain rule
    pub fn format_domain_detailed(domain: &DomainRule) -> String {
        let mut lines = vec![format!("{}", Self::title(&domain.name))];

        let keywords = if domain.is_fallback() {
            "(fallback)".to_string()
        } else {
            join_keywords(&domain.keywords)
        };
        lines.push(Self::field_colored("Keywords", &keywords, Self::keyword));
        lines.push(Self::field_colored("Context", &domain.context, Self::content));

        lines.push(format!("   {}:", Self::label("Questions")));
        for (i, question) in domain.questions.iter().enumerate() {
            lines.push(format!("     {}. {}", i + 1, Self::content(question)));
        }

        lines.push(format!("   {}:", Self::label("Preferences")));
        for preference in &domain.preferences {
            lines.push(format!("     - {}", Self::content(preference)));
        }

        lines.join("\n")
    }

    /// Complexity keywords and their guidance, default last
    pub fn format_complexity_table(rules: &RuleSet) -> String {
        let mut lines = vec![format!("{}", Self::title("⚖️  Complexity Keywords"))];
        for rule in rules.complexity_rules() {
            lines.push(Self::field_colored(&rule.keyword, &rule.guidance, Self::content));
        }
        lines.push(Self::field_colored("(default)", rules.default_complexity(), Self::muted));
        lines.join("\n")
    }

    /// What the enhancer picked, for `--explain`
    pub fn print_explanation(enhancement: &Enhancement) {
        eprintln!("{}", Self::field_colored("Domain", &enhancement.domain, Self::domain));
        eprintln!("{}", Self::field_colored("Complexity", &enhancement.complexity, Self::content));
        eprintln!();
    }
}
