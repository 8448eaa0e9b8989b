//! Find source files whose identifying key never appears in any target file.

pub mod files;
mod find;
pub mod matcher;
mod models;
pub mod reconcile;

pub use files::{classify, find_files, find_source_files, find_target_files};
pub use find::find_unused_files;
pub use matcher::{find_matches, split_lines};
pub use models::{FindResult, FufOptions, Match, MatchKey, SourceFile};
pub use reconcile::{reconcile, Reconciler};
