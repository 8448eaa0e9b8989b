//! Top-level search: resolve both patterns, then reconcile.

use tracing::info;

use super::files::{find_source_files, find_target_files};
use super::models::{FindResult, FufOptions};
use super::reconcile::reconcile;
use crate::error::{FufError, FufResult};

/// Find source files (matched by `source`) never referenced by any target file (matched by `target`).
///
/// Inputs are validated before any I/O. Both patterns are resolved concurrently; files the
/// source pattern matches are never scanned as targets.
pub fn find_unused_files(target: &str, source: &str, options: &FufOptions) -> FufResult<FindResult> {
    if target.is_empty() {
        return Err(FufError::validation("the target path is required"));
    }
    if source.is_empty() {
        return Err(FufError::validation("the source path is required"));
    }

    let (targets, sources) = rayon::join(
        || find_target_files(target, source),
        || find_source_files(source),
    );
    let (targets, sources) = (targets?, sources?);
    let total = sources.len();
    info!(
        targets = targets.len(),
        sources = total,
        key = %options.match_key,
        "scanning"
    );

    let unused = reconcile(&targets, sources, options.match_key)?;
    info!(unused = unused.len(), used = total - unused.len(), "done");
    Ok(FindResult { unused })
}
