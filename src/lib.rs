//! Find source files that are never referenced by name in a set of target files.

pub mod cli;
pub mod error;
pub mod finder;
pub mod logging;

pub use cli::{render_json, render_plain, run, Args};
pub use error::{FufError, FufResult};
pub use finder::{
    classify, find_matches, find_source_files, find_unused_files, FindResult, FufOptions, Match,
    MatchKey, SourceFile,
};
