//! Source file discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Patterns without `*` or `?` are literal paths, so `app/[slug]` stays literal.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn warn(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Paths excluded from a scan: literal directory prefixes and glob patterns.
#[derive(Default)]
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut set = Self::default();

        for ignore in ignores {
            if !is_glob_pattern(ignore) {
                set.prefixes.push(base_dir.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => set.patterns.push(pattern),
                Err(e) if verbose => warn(format!("Invalid ignore pattern '{}': {}", ignore, e)),
                Err(_) => {}
            }
        }

        if ignore_test_files {
            set.patterns
                .extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        set
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base directory, or each include resolved
/// against it (glob includes expand to the directories they match).
fn scan_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if !is_glob_pattern(include) {
            if path.exists() {
                roots.push(path);
            } else if verbose {
                warn(format!("Include path does not exist: {}", path.display()));
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) if verbose => warn(format!("Invalid glob pattern '{}': {}", include, e)),
            Err(_) => {}
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base_dir = Path::new(base_dir);
    let ignore_set = IgnoreSet::new(base_dir, ignores, ignore_test_files, verbose);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base_dir, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore_set.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        warn(format!("Cannot access path: {}", e));
                    }
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_source_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn touch(path: PathBuf) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    fn file_names(result: &ScanResult, base: &Path) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| {
                Path::new(f)
                    .strip_prefix(base)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_scan_source_files() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("Button.jsx"));
        touch(base.join("Card.tsx"));
        touch(base.join("legacy.cjs"));
        touch(base.join("style.css"));
        touch(base.join("components").join("List.js"));

        let result = scan_files(base.to_str().unwrap(), &[], &[], false, false);

        assert_eq!(
            file_names(&result, base),
            vec!["Button.jsx", "Card.tsx", "components/List.js", "legacy.cjs"]
        );
        assert_eq!(result.skipped_count, 0);
    }

    #[test]
    fn test_scan_ignores_node_modules() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("node_modules").join("react").join("index.js"));
        touch(base.join("App.jsx"));

        let result = scan_files(
            base.to_str().unwrap(),
            &[],
            &["**/node_modules/**".to_owned()],
            false,
            false,
        );

        assert_eq!(file_names(&result, base), vec!["App.jsx"]);
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("src").join("App.jsx"));
        touch(base.join("lib").join("util.js"));
        touch(base.join("packages").join("ui").join("Button.tsx"));
        touch(base.join("packages").join("core").join("index.ts"));

        let result = scan_files(
            base.to_str().unwrap(),
            &["src".to_owned(), "packages/*".to_owned(), "missing".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(
            file_names(&result, base),
            vec![
                "packages/core/index.ts",
                "packages/ui/Button.tsx",
                "src/App.jsx"
            ]
        );
    }

    #[test]
    fn test_scan_deduplicates_overlapping_includes() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("src").join("components").join("Button.tsx"));

        let result = scan_files(
            base.to_str().unwrap(),
            &["src".to_owned(), "src/components".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_ignores_test_files() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("Button.jsx"));
        touch(base.join("Button.test.jsx"));
        touch(base.join("Card.spec.tsx"));
        touch(base.join("__tests__").join("helper.js"));

        let ignored = scan_files(base.to_str().unwrap(), &[], &[], true, false);
        assert_eq!(file_names(&ignored, base), vec!["Button.jsx"]);

        let kept = scan_files(base.to_str().unwrap(), &[], &[], false, false);
        assert_eq!(kept.files.len(), 4);
    }

    #[test]
    fn test_scan_ignores_literal_and_glob_paths() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        touch(base.join("src").join("Button.jsx"));
        touch(base.join("src").join("Button.stories.jsx"));
        touch(base.join("src").join("generated").join("Icons.jsx"));
        touch(base.join("app").join("[slug]").join("Page.jsx"));

        let result = scan_files(
            base.to_str().unwrap(),
            &[],
            &[
                "src/generated".to_owned(),
                "**/*.stories.jsx".to_owned(),
                "app/[slug]".to_owned(),
            ],
            false,
            false,
        );

        assert_eq!(file_names(&result, base), vec!["src/Button.jsx"]);
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("Button.jsx")));
        assert!(is_source_file(Path::new("index.mts")));
        assert!(!is_source_file(Path::new("style.css")));
        assert!(!is_source_file(Path::new("README")));
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("src/*"));
        assert!(is_glob_pattern("file?.js"));
        assert!(!is_glob_pattern("app/[slug]"));
    }
}
