//! Command implementations

mod grammar;
mod translate;

pub use grammar::grammar;
pub use translate::{TranslateArgs, translate};
