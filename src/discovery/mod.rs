mod rules;
mod source_set;

pub use rules::{ScanRules, DEFAULT_DECLARATION_KEYWORD, DEFAULT_SOURCE_EXTENSION};
pub use source_set::{ScanError, SourceSet};
