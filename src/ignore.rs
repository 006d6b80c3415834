//! Skip rules for template files.
//! A path is excluded when it contains any configured skip token as a plain
//! substring. Tokens are not globs and are not matched against path segments.

use crate::config::BuildInfo;
use log::debug;
use std::path::Path;

/// Returns true if `path` contains at least one of the configured skip tokens.
///
/// # Arguments
/// * `path` - Path to check, usually relative to the template root
/// * `build_info` - Build information holding the skip tokens
///
/// # Example
/// ```
/// use msa_starter::{config::BuildInfo, ignore::should_skip};
///
/// let info = BuildInfo::default();
/// assert!(should_skip("src/.DS_Store", &info));
/// assert!(!should_skip("build.gradle", &info));
/// ```
pub fn should_skip<P: AsRef<Path>>(path: P, build_info: &BuildInfo) -> bool {
    let path = path.as_ref().to_string_lossy();
    match build_info
        .skip_tokens()
        .iter()
        .find(|token| path.contains(token.as_str()))
    {
        Some(token) => {
            debug!("Skipping {path}: matches skip token '{token}'");
            true
        }
        None => false,
    }
}
