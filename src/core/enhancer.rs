use log::debug;

use crate::core::data::{DomainRule, Enhancement, RuleSet};
use crate::core::detect::{detect_complexity, detect_domain};
use crate::core::render::render_prompt;
use crate::core::traits::{PromptTransformer, RuleSource};

/// Stateless transformer over a borrowed rule table
#[derive(Debug, Clone, Copy)]
pub struct PromptEnhancer<'r> {
    rules: &'r RuleSet,
}

impl PromptEnhancer<'static> {
    /// Enhancer over the built-in rules
    pub fn builtin() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Default for PromptEnhancer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> PromptEnhancer<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn detect_complexity(&self, request: &str) -> &'r str {
        detect_complexity(self.rules, request)
    }

    pub fn detect_domain(&self, request: &str) -> &'r DomainRule {
        detect_domain(self.rules, request)
    }
}

impl PromptTransformer for PromptEnhancer<'_> {
    fn transform(&self, request: &str) -> String {
        self.enhance(request).transformed_prompt
    }

    fn enhance(&self, request: &str) -> Enhancement {
        let complexity = self.detect_complexity(request);
        let domain = self.detect_domain(request);
        debug!("rendering prompt with domain '{}'", domain.name);

        Enhancement {
            original_request: request.to_string(),
            complexity: complexity.to_string(),
            domain: domain.name.clone(),
            transformed_prompt: render_prompt(request, complexity, domain),
        }
    }
}

impl RuleSource for PromptEnhancer<'_> {
    fn rules(&self) -> &RuleSet {
        self.rules
    }
}
