use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Recursively collect template files under `root` whose filename matches
/// `pattern`, never descending into directories named in `exclude`.
///
/// Discovery is best-effort: a missing root yields an empty collection and
/// unreadable entries are skipped. Symlinks are not followed, so directory
/// cycles cannot recurse forever. Entries are visited in filename order to
/// keep runs deterministic on an unchanged tree.
pub fn collect_template_files(
    root: &Path,
    pattern: &Pattern,
    exclude: &HashSet<String>,
    verbose: bool,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, exclude));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() && matches_file_name(entry.path(), pattern) {
            files.push(entry.into_path());
        }
    }

    files
}

/// The root itself (depth 0) is always entered, even if its basename happens
/// to be on the exclusion list.
fn is_excluded_dir(entry: &DirEntry, exclude: &HashSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.contains(name))
}

fn matches_file_name(path: &Path, pattern: &Pattern) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| pattern.matches(name))
}
