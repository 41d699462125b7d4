pub mod demo;
pub mod rules;
pub mod transform;
