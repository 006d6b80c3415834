//! Post-generation steps run on the materialized project.

use crate::constants::EXECUTABLE_SCRIPTS;
use crate::error::Result;
use log::{debug, warn};
use std::path::Path;

/// Adds execute permission for user, group and others to `path`.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(path, permissions)?;
    debug!("Marked {} executable", path.display());
    Ok(())
}

/// Execute bits do not exist here; only checks that `path` is there.
#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    std::fs::metadata(path.as_ref())?;
    Ok(())
}

/// Marks the known generated scripts under `output_dir` executable.
/// Scripts the chosen templates did not produce are skipped with a warning.
pub fn run_post_generation<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    for script in EXECUTABLE_SCRIPTS {
        let script_path = output_dir.as_ref().join(script);
        if script_path.is_file() {
            make_executable(&script_path)?;
        } else {
            warn!("{} was not generated, skipping chmod", script_path.display());
        }
    }
    Ok(())
}
