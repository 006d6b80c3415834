//! Destination path computation.
//! Maps a template file path onto the output tree, moving Java sources under the
//! package directory and dropping the `.binary` sentinel suffix.

use crate::config::BuildInfo;
use crate::constants::{BINARY_SENTINEL_SUFFIX, MAIN_SOURCE_MARKER, TEST_SOURCE_MARKER};
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

const SEPARATORS: [char; 2] = ['/', MAIN_SEPARATOR];

/// Translates a dotted package name into a relative directory path.
///
/// `"com.example"` becomes `com/example` (with the platform separator).
pub fn package_path(package_name: &str) -> String {
    package_name
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR)
}

/// Computes the destination of `source_path`.
///
/// # Arguments
/// * `source_path` - File inside the template root
/// * `source_root` - Template root the walk started from
/// * `dest_root` - Output root
/// * `build_info` - Supplies the package name
///
/// # Returns
/// * `PathBuf` - `source_path` with the `source_root` prefix replaced by `dest_root`,
///   the package path inserted after `src/main/java` / `src/test/java`, and a
///   trailing `.binary` removed
pub fn remap<S, R, D>(source_path: S, source_root: R, dest_root: D, build_info: &BuildInfo) -> PathBuf
where
    S: AsRef<Path>,
    R: AsRef<Path>,
    D: AsRef<Path>,
{
    let source = source_path.as_ref().to_string_lossy();
    let source_root = source_root.as_ref().to_string_lossy();
    let dest_root = dest_root.as_ref().to_string_lossy();

    // Markers are only looked up below the source root, never inside either root.
    let (root, relative) = split_root(&source, &source_root, &dest_root);

    let package_path = package_path(&build_info.package_name());
    let mut relative = relative.to_string();
    for marker in [MAIN_SOURCE_MARKER, TEST_SOURCE_MARKER] {
        relative = insert_package_path(&relative, &marker.replace('/', MAIN_SEPARATOR_STR), &package_path);
    }

    let mut target = format!("{root}{relative}");
    if let Some(stripped) = target.strip_suffix(BINARY_SENTINEL_SUFFIX) {
        target = stripped.to_string();
    }

    PathBuf::from(target)
}

// Returns the new root and the remainder of `source` below `source_root`.
// A source outside `source_root` keeps its full path and gets no new root.
fn split_root<'a>(source: &'a str, source_root: &str, dest_root: &str) -> (String, &'a str) {
    let source_root = source_root.trim_end_matches(SEPARATORS);
    let dest_root = dest_root.trim_end_matches(SEPARATORS);
    match source.strip_prefix(source_root) {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATORS) => (dest_root.to_string(), rest),
        _ => (String::new(), source),
    }
}

fn insert_package_path(path: &str, marker: &str, package_path: &str) -> String {
    if package_path.is_empty() {
        return path.to_string();
    }
    let needle = format!("{marker}{MAIN_SEPARATOR}");
    match path.find(&needle) {
        Some(index) => {
            let (head, tail) = path.split_at(index + needle.len());
            format!("{head}{package_path}{MAIN_SEPARATOR}{tail}")
        }
        None => path.to_string(),
    }
}
