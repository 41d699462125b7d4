//! Core business logic layer
//!
//! This module contains the rule tables, the keyword detectors and the
//! prompt template that together form the transformation pipeline.

pub mod data;
pub mod detect;
pub mod enhancer;
pub mod render;
pub mod rules;
pub mod traits;
