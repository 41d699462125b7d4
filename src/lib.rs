//! Context Transformer - turn raw coding requests into context-rich prompts
//!
//! A request is matched against a fixed table of complexity keywords and
//! domain rules, and the selected guidance is rendered around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{ComplexityRule, DomainRule, Enhancement, RuleSet},
    enhancer::PromptEnhancer,
    traits::{PromptTransformer, RuleSource},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Enhance `request` with the built-in rules
pub fn transform(request: &str) -> String {
    PromptEnhancer::builtin().transform(request)
}
