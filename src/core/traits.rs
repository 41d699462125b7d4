//! Core trait definitions for request transformation
//!
//! Command handlers take these traits rather than a concrete enhancer;
//! `Commands::execute` decides which implementation they receive.

use crate::core::data::{DomainRule, Enhancement, RuleSet};

/// Rewrite a raw request into an enhanced prompt
pub trait PromptTransformer {
    /// Render the enhanced prompt for `request`. Never fails.
    fn transform(&self, request: &str) -> String;

    /// Render the prompt together with what was detected along the way
    fn enhance(&self, request: &str) -> Enhancement;
}

/// Read-only access to the rules driving a transformer
pub trait RuleSource {
    /// The validated rule table
    fn rules(&self) -> &RuleSet;

    /// Find a domain rule by name, fallback included
    fn find_domain(&self, name: &str) -> Option<&DomainRule> {
        self.rules().find_domain(name)
    }
}
