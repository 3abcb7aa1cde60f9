//! Repository file discovery.

use std::path::Path;

use ignore::WalkBuilder;

/// List files under `root` whose name ends with one of the given
/// extensions, as paths relative to `root`.
///
/// The walk honors `.gitignore` and skips hidden entries, so vendored and
/// generated trees do not get fed to the linters. Unreadable entries are
/// skipped rather than failing the walk. The result is sorted for a
/// deterministic command line.
pub fn list_files(root: &Path, extensions: &[&str]) -> Vec<String> {
    let mut files = Vec::new();

    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !extensions.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        files.push(rel.to_string_lossy().into_owned());
    }

    files.sort();
    files
}
