//! Remove matched source files from the unused set as target files are scanned.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rayon::prelude::*;
use tracing::debug;

use super::matcher::find_matches;
use super::models::{Match, MatchKey, SourceFile};
use crate::error::{FufResult, IoResultExt};

/// Owns the shrinking set of unused source files. Records are only ever removed.
/// The keys of the records still in the set are the needles still being searched for.
#[derive(Debug)]
pub struct Reconciler {
    key: MatchKey,
    unused: Vec<SourceFile>,
}

impl Reconciler {
    pub fn new(sources: Vec<SourceFile>, key: MatchKey) -> Self {
        Self {
            key,
            unused: sources,
        }
    }

    /// Distinct, non-empty keys of records not yet found, in record order.
    pub fn needles(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.unused
            .iter()
            .map(|f| self.key.key(f))
            .filter(|k| !k.is_empty() && seen.insert(*k))
            .map(str::to_string)
            .collect()
    }

    /// Remove every record whose key equals a matched needle. A key is removed at most once;
    /// later matches of the same needle are no-ops. Returns the number of records removed.
    pub fn apply(&mut self, matches: &[Match]) -> usize {
        let found: HashSet<&str> = matches.iter().map(|m| m.needle.as_str()).collect();
        let before = self.unused.len();
        let key = self.key;
        self.unused.retain(|f| !found.contains(key.key(f)));
        before - self.unused.len()
    }

    pub fn unused(&self) -> &[SourceFile] {
        &self.unused
    }

    pub fn into_unused(self) -> Vec<SourceFile> {
        self.unused
    }
}

fn lock(state: &Mutex<Reconciler>) -> MutexGuard<'_, Reconciler> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read_text(path: &Path) -> FufResult<String> {
    let bytes = std::fs::read(path).with_path(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan every target file (in parallel, in no particular order) and return the source files
/// whose key appeared in none of them. The first read failure aborts the whole scan.
pub fn reconcile(
    targets: &[PathBuf],
    sources: Vec<SourceFile>,
    key: MatchKey,
) -> FufResult<Vec<SourceFile>> {
    let state = Mutex::new(Reconciler::new(sources, key));
    targets.par_iter().try_for_each(|path| -> FufResult<()> {
        let text = read_text(path)?;
        let needles = lock(&state).needles();
        if needles.is_empty() {
            return Ok(());
        }
        let matches = find_matches(&text, &needles);
        let removed = lock(&state).apply(&matches);
        debug!(
            target = %path.display(),
            matches = matches.len(),
            removed,
            "scanned target"
        );
        Ok(())
    })?;
    Ok(state
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_unused())
}
