pub mod error;
pub mod format;
pub mod input;
pub mod output;
pub mod pagination;
pub mod sanitize;

pub use error::*;
pub use input::*;
pub use output::OutputStyle;
pub use sanitize::*;
