//! Rule records and the validated rule table
//!
//! Every table here is an ordered `Vec`: matching walks them front to back
//! and the first hit wins, so declaration order is part of the contract.

use serde::Serialize;

use crate::utils::error::{AppError, AppResult};

/// Name under which the fallback domain rule is reported
pub const FALLBACK_DOMAIN: &str = "generic";

/// A trigger keyword and the guidance sentence it selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityRule {
    pub keyword: String,
    pub guidance: String,
}

impl ComplexityRule {
    pub fn new(keyword: &str, guidance: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            guidance: guidance.to_string(),
        }
    }
}

/// Contextual text bundle for one topic area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRule {
    pub name: String,
    pub keywords: Vec<String>,
    pub context: String,
    pub questions: Vec<String>,
    pub preferences: Vec<String>,
}

impl DomainRule {
    pub fn new(
        name: &str,
        keywords: &[&str],
        context: &str,
        questions: &[&str],
        preferences: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            context: context.to_string(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
            preferences: preferences.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// First keyword of this rule found in already lower-cased text
    pub fn matching_keyword(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| lowered.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// The complete, validated set of complexity and domain rules
#[derive(Debug, Clone, Serialize)]
pub struct RuleSet {
    complexity: Vec<ComplexityRule>,
    default_complexity: String,
    domains: Vec<DomainRule>,
    fallback: DomainRule,
}

impl RuleSet {
    /// Build a rule set, rejecting tables that could render a malformed prompt
    pub fn new(
        complexity: Vec<ComplexityRule>,
        default_complexity: &str,
        domains: Vec<DomainRule>,
        fallback: DomainRule,
    ) -> AppResult<Self> {
        let rules = Self {
            complexity,
            default_complexity: default_complexity.to_string(),
            domains,
            fallback,
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn complexity_rules(&self) -> &[ComplexityRule] {
        &self.complexity
    }

    pub fn default_complexity(&self) -> &str {
        &self.default_complexity
    }

    pub fn domains(&self) -> &[DomainRule] {
        &self.domains
    }

    pub fn fallback(&self) -> &DomainRule {
        &self.fallback
    }

    /// Domains in matching order, followed by the fallback
    pub fn all_domains(&self) -> impl Iterator<Item = &DomainRule> {
        self.domains.iter().chain(std::iter::once(&self.fallback))
    }

    /// Look up a domain (fallback included) by name
    pub fn find_domain(&self, name: &str) -> Option<&DomainRule> {
        self.all_domains()
            .find(|domain| domain.name.eq_ignore_ascii_case(name))
    }

    fn validate(&self) -> AppResult<()> {
        if self.default_complexity.trim().is_empty() {
            return Err(AppError::InvalidRule(
                "default complexity guidance cannot be empty".to_string(),
            ));
        }

        for rule in &self.complexity {
            if rule.keyword.is_empty() {
                return Err(AppError::InvalidRule(format!(
                    "complexity guidance '{}' has an empty keyword",
                    rule.guidance
                )));
            }
        }

        if !self.fallback.is_fallback() {
            return Err(AppError::InvalidRule(format!(
                "fallback domain '{}' must not have keywords",
                self.fallback.name
            )));
        }

        let mut seen: Vec<&str> = Vec::with_capacity(self.domains.len() + 1);
        for domain in self.all_domains() {
            if seen.contains(&domain.name.as_str()) {
                return Err(AppError::InvalidRule(format!(
                    "domain '{}' is declared twice",
                    domain.name
                )));
            }
            seen.push(&domain.name);

            if domain.questions.is_empty() {
                return Err(AppError::InvalidRule(format!(
                    "domain '{}' has no questions",
                    domain.name
                )));
            }
            if domain.preferences.is_empty() {
                return Err(AppError::InvalidRule(format!(
                    "domain '{}' has no preferences",
                    domain.name
                )));
            }
        }

        for domain in &self.domains {
            if domain.keywords.is_empty() {
                return Err(AppError::InvalidRule(format!(
                    "domain '{}' has no keywords and can never match",
                    domain.name
                )));
            }
            if domain.keywords.iter().any(|k| k.is_empty()) {
                return Err(AppError::InvalidRule(format!(
                    "domain '{}' has an empty keyword",
                    domain.name
                )));
            }
        }

        Ok(())
    }
}

/// Record of a single transformation, serialized for `--format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub original_request: String,
    pub complexity: String,
    pub domain: String,
    pub transformed_prompt: String,
}
