//! Built-in complexity and domain tables

use std::sync::LazyLock;

use crate::core::data::{ComplexityRule, DomainRule, RuleSet, FALLBACK_DOMAIN};

pub const DEFAULT_COMPLEXITY: &str =
    "Keep it simple - prefer existing solutions over external dependencies";

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(complexity_rules(), DEFAULT_COMPLEXITY, domain_rules(), fallback_rule())
        .unwrap_or_else(|e| panic!("built-in rule table is malformed: {}", e))
});

impl RuleSet {
    /// The shared built-in rule set, validated on first use
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }
}

fn complexity_rules() -> Vec<ComplexityRule> {
    vec![
        ComplexityRule::new(
            "simple",
            "Keep it simple - prefer existing solutions over external dependencies",
        ),
        ComplexityRule::new("basic", "Keep it basic - avoid unnecessary complexity"),
        ComplexityRule::new(
            "straightforward",
            "Keep it straightforward - use direct approaches",
        ),
        ComplexityRule::new("quick", "Keep it quick - use existing patterns where possible"),
        ComplexityRule::new("easy", "Keep it easy - build on what already works"),
    ]
}

fn domain_rules() -> Vec<DomainRule> {
    vec![
        DomainRule::new(
            "drag_move",
            &["drag", "move", "position", "moveable", "draggable"],
            "We likely have existing positioning and mouse tracking systems in place",
            &[
                "Should I explore your existing positioning/drag functionality before implementing?",
                "Do you have existing mouse event systems I should build on?",
                "What's your preference: simple CSS positioning or external drag libraries?",
            ],
            &[
                "Build incrementally on existing mouse/positioning systems",
                "Avoid external drag libraries unless absolutely necessary",
                "Test simple solutions before considering complex ones",
            ],
        ),
        DomainRule::new(
            "auth",
            &["auth", "login", "user", "authentication", "session"],
            "We likely have existing user management and session patterns",
            &[
                "Do you have existing user management or auth patterns I should build on?",
                "What's your preference: simple session-based auth or external OAuth libraries?",
                "Should I explore your current backend structure before implementing?",
            ],
            &[
                "Build incrementally on existing user/session systems",
                "Avoid external auth libraries unless absolutely necessary",
                "Test simple authentication before adding complexity",
            ],
        ),
        DomainRule::new(
            "ui_component",
            &["component", "ui", "interface", "modal", "panel", "button"],
            "We likely have existing component patterns and design systems",
            &[
                "Do you have existing component patterns I should follow?",
                "Should I check your current UI component library before creating new ones?",
                "What's your preference: extend existing components or create new ones?",
            ],
            &[
                "Build on existing component patterns and design system",
                "Avoid creating duplicate components",
                "Test component integration with existing UI first",
            ],
        ),
        DomainRule::new(
            "api_backend",
            &["api", "endpoint", "backend", "server", "route"],
            "We likely have existing API patterns and backend architecture",
            &[
                "Do you have existing API patterns I should follow?",
                "Should I explore your current backend structure before implementing?",
                "What's your preference: extend existing endpoints or create new architecture?",
            ],
            &[
                "Build on existing API patterns and middleware",
                "Avoid introducing conflicting backend patterns",
                "Test API integration with existing services first",
            ],
        ),
        DomainRule::new(
            "database",
            &["database", "db", "schema", "table", "migration", "sql"],
            "We likely have existing database patterns and schema structure",
            &[
                "Do you have existing database patterns I should follow?",
                "Should I explore your current schema before making changes?",
                "What's your preference: extend existing tables or create new schema?",
            ],
            &[
                "Build on existing database patterns and schema",
                "Avoid breaking existing relationships",
                "Test database changes incrementally",
            ],
        ),
    ]
}

fn fallback_rule() -> DomainRule {
    DomainRule::new(
        FALLBACK_DOMAIN,
        &[],
        "Explore current codebase patterns first before adding anything new",
        &[
            "Should I explore your existing patterns before implementing?",
            "Do you have existing functionality I should build on?",
            "What's your preference: simple solution or external libraries?",
        ],
        &[
            "Build incrementally on what's already working",
            "Avoid external dependencies unless absolutely necessary",
            "Test simple solutions before considering complex ones",
        ],
    )
}
