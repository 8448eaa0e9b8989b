//! Pattern resolution and classification of resolved paths.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use super::models::SourceFile;
use crate::error::{FufError, FufResult};

/// Wildcards never match a leading dot: hidden files and directories are only found
/// when the pattern names the dot literally (e.g. `src/.gitignore`).
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Separators must be matched literally so `*` in an exclude pattern stays within one component.
const EXCLUDE_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

fn compile(pattern: &str) -> FufResult<Pattern> {
    Pattern::new(pattern).map_err(|source| FufError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Resolve `pattern` to files (directories are dropped), skipping paths matched by `exclude`.
/// Order is whatever the traversal yields.
pub fn find_files(pattern: &str, exclude: Option<&str>) -> FufResult<Vec<PathBuf>> {
    let exclude = exclude.map(compile).transpose()?;
    let entries = glob::glob_with(pattern, GLOB_OPTIONS).map_err(|source| FufError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_dir() {
            continue;
        }
        if exclude
            .as_ref()
            .is_some_and(|p| p.matches_path_with(&path, EXCLUDE_OPTIONS))
        {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        files.push(path);
    }
    debug!(pattern, count = files.len(), "resolved pattern");
    Ok(files)
}

/// Split a base name into (name, ext). The extension starts at the last `.`;
/// a leading dot alone does not start one, so `.gitignore` has no extension.
fn split_extension(base: &str) -> (&str, &str) {
    match base.rfind('.') {
        Some(idx) if idx > 0 => base.split_at(idx),
        _ => (base, ""),
    }
}

/// Derive the identifying keys of a path. Pure; touches no filesystem.
pub fn classify(path: &Path) -> SourceFile {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (name, ext) = split_extension(&base);
    SourceFile {
        ext: ext.to_string(),
        name: name.to_string(),
        fullname: format!("{}{}", name, ext),
        path: path.to_string_lossy().into_owned(),
    }
}

/// Resolve the source pattern and classify every file found.
pub fn find_source_files(pattern: &str) -> FufResult<Vec<SourceFile>> {
    Ok(find_files(pattern, None)?
        .iter()
        .map(|p| classify(p))
        .collect())
}

/// Resolve the target pattern. Anything the source pattern matches is never a target.
pub fn find_target_files(pattern: &str, source_pattern: &str) -> FufResult<Vec<PathBuf>> {
    find_files(pattern, Some(source_pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_in(root: &Path, rest: &str) -> String {
        format!("{}/{}", Pattern::escape(&root.to_string_lossy()), rest)
    }

    #[test]
    fn classify_simple() {
        let f = classify(Path::new("assets/img/logo.png"));
        assert_eq!(f.name, "logo");
        assert_eq!(f.ext, ".png");
        assert_eq!(f.fullname, "logo.png");
        assert_eq!(f.path, "assets/img/logo.png");
    }

    #[test]
    fn classify_last_extension_only() {
        let f = classify(Path::new("lib/app.min.js"));
        assert_eq!(f.name, "app.min");
        assert_eq!(f.ext, ".js");
        assert_eq!(f.fullname, "app.min.js");
    }

    #[test]
    fn classify_no_extension() {
        let f = classify(Path::new("bin/Makefile"));
        assert_eq!(f.ext, "");
        assert_eq!(f.name, "Makefile");
        assert_eq!(f.fullname, f.name);
    }

    #[test]
    fn classify_dotfile_has_no_extension() {
        let f = classify(Path::new("repo/.gitignore"));
        assert_eq!(f.ext, "");
        assert_eq!(f.name, ".gitignore");
        assert_eq!(f.fullname, ".gitignore");
    }

    #[test]
    fn classify_dotfile_with_extension() {
        let f = classify(Path::new(".eslintrc.json"));
        assert_eq!(f.name, ".eslintrc");
        assert_eq!(f.ext, ".json");
    }

    #[test]
    fn classify_trailing_dot() {
        let f = classify(Path::new("weird."));
        assert_eq!(f.name, "weird");
        assert_eq!(f.ext, ".");
        assert_eq!(f.fullname, "weird.");
    }

    #[test]
    fn find_files_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("sub.d")).unwrap();
        std::fs::write(root.join("a.txt"), "").unwrap();
        let files = find_files(&pattern_in(root, "*"), None).unwrap();
        assert_eq!(files, vec![root.join("a.txt")]);
    }

    #[test]
    fn find_files_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::write(root.join("top.css"), "").unwrap();
        std::fs::write(root.join("a/b/deep.css"), "").unwrap();
        std::fs::write(root.join("a/b/deep.js"), "").unwrap();
        let mut files = find_files(&pattern_in(root, "**/*.css"), None).unwrap();
        files.sort();
        assert_eq!(files, vec![root.join("a/b/deep.css"), root.join("top.css")]);
    }

    #[test]
    fn find_files_exclude() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("assets")).unwrap();
        std::fs::write(root.join("main.js"), "").unwrap();
        std::fs::write(root.join("assets/logo.svg"), "").unwrap();
        let exclude = pattern_in(root, "assets/*");
        let files = find_files(&pattern_in(root, "**/*"), Some(&exclude)).unwrap();
        assert_eq!(files, vec![root.join("main.js")]);
    }

    #[test]
    fn find_files_skips_hidden_entries() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".cache")).unwrap();
        std::fs::write(root.join(".DS_Store"), "").unwrap();
        std::fs::write(root.join(".cache/blob"), "").unwrap();
        std::fs::write(root.join("main.js"), "").unwrap();
        let files = find_files(&pattern_in(root, "**/*"), None).unwrap();
        assert_eq!(files, vec![root.join("main.js")]);
    }

    #[test]
    fn find_files_literal_dot_matches_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join(".gitignore"), "").unwrap();
        let files = find_files(&pattern_in(root, ".gitignore"), None).unwrap();
        assert_eq!(files, vec![root.join(".gitignore")]);
        let files = find_files(&pattern_in(root, ".*"), None).unwrap();
        assert_eq!(files, vec![root.join(".gitignore")]);
    }

    #[test]
    fn find_files_no_match_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = find_files(&pattern_in(dir.path(), "*.nothing"), None).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn find_files_malformed_pattern() {
        let err = find_files("src/***/x", None).unwrap_err();
        assert!(matches!(err, FufError::Pattern { .. }));
    }

    #[test]
    fn find_files_malformed_exclude() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_files(&pattern_in(dir.path(), "*"), Some("a/***/b")).unwrap_err();
        assert!(matches!(err, FufError::Pattern { .. }));
    }

    #[test]
    fn find_source_files_classifies() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("icon.png"), "").unwrap();
        let files = find_source_files(&pattern_in(root, "*.png")).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].fullname, "icon.png");
        assert_eq!(files[0].path, root.join("icon.png").to_string_lossy());
    }
}
