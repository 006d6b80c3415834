//! Project materialization.
//! Resets the output directory, walks the template root and turns every template
//! file into a file of the generated project, reporting one outcome per file.

use crate::{
    classify::is_binary,
    config::BuildInfo,
    error::{Error, Result},
    ignore::should_skip,
    remap::remap,
    renderer::{render_file, TemplateRenderer},
};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of materializing a single template file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Text template rendered into the target
    Written { source: PathBuf, target: PathBuf },
    /// Binary file copied unchanged
    Copied { source: PathBuf, target: PathBuf },
    /// The file could not be materialized; the run carried on
    Failed {
        source: PathBuf,
        target: PathBuf,
        error: Error,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Written { source, .. }
            | FileOutcome::Copied { source, .. }
            | FileOutcome::Failed { source, .. } => source,
        }
    }

    pub fn target(&self) -> &Path {
        match self {
            FileOutcome::Written { target, .. }
            | FileOutcome::Copied { target, .. }
            | FileOutcome::Failed { target, .. } => target,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, FileOutcome::Failed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source().display(), self.target().display())?;
        if let FileOutcome::Failed { error, .. } = self {
            write!(f, ": {error}")?;
        }
        Ok(())
    }
}

/// Deletes `output_dir` if present and recreates it empty.
///
/// # Errors
/// * `Error::OutputDirError` if the directory cannot be removed or created
pub fn reset_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    let to_error = |source| Error::OutputDirError {
        output_dir: output_dir.display().to_string(),
        source,
    };

    if output_dir.exists() {
        debug!("Removing existing output directory {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(to_error)?;
    }
    fs::create_dir_all(output_dir).map_err(to_error)
}

// Canonicalizes the longest existing ancestor so paths that do not exist yet compare correctly.
fn absolute(path: &Path) -> PathBuf {
    let path = if path.is_relative() {
        std::env::current_dir().unwrap_or_default().join(path)
    } else {
        path.to_path_buf()
    };

    let mut existing = path.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize().unwrap_or_else(|_| existing.to_path_buf());
    for name in missing.iter().rev() {
        resolved.push(name);
    }
    resolved
}

/// Walks a template root and materializes it into an output root.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    build_info: &'a BuildInfo,
}

impl<'a> Materializer<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        build_info: &'a BuildInfo,
    ) -> Self {
        Self { renderer, template_root, output_root, build_info }
    }

    /// Runs the whole materialization.
    ///
    /// Every produced outcome is handed to `report` as soon as the file is done,
    /// and all outcomes are returned once the walk finishes. Skipped files produce
    /// no outcome.
    ///
    /// # Errors
    /// Only setup problems are returned: a missing template root, roots nested in
    /// each other, or an output root that cannot be reset. Per-file failures are
    /// reported as [`FileOutcome::Failed`].
    pub fn run<F>(&self, mut report: F) -> Result<Vec<FileOutcome>>
    where
        F: FnMut(&FileOutcome),
    {
        self.check_roots()?;
        reset_output_dir(self.output_root)?;

        debug!("Processing template root {}", self.template_root.display());
        let mut outcomes = Vec::new();

        for dir_entry in WalkDir::new(self.template_root).sort_by_file_name() {
            let entry = match dir_entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("{}", Error::WalkError(e));
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            if let Some(outcome) = self.process(entry.path()) {
                report(&outcome);
                outcomes.push(outcome);
            }
        }

        Ok(outcomes)
    }

    /// Materializes a single template file.
    ///
    /// # Returns
    /// * `None` if the file matches a skip token
    /// * `Some(FileOutcome)` otherwise
    pub fn process(&self, source: &Path) -> Option<FileOutcome> {
        let relative = source.strip_prefix(self.template_root).unwrap_or(source);
        if should_skip(relative, self.build_info) {
            return None;
        }

        let target = remap(source, self.template_root, self.output_root, self.build_info);
        let source = source.to_path_buf();

        let outcome = match self.materialize(&source, &target) {
            Ok(true) => FileOutcome::Copied { source, target },
            Ok(false) => FileOutcome::Written { source, target },
            Err(error) => FileOutcome::Failed { source, target, error },
        };
        debug!("{outcome}");
        Some(outcome)
    }

    // Returns whether the file was copied as binary.
    fn materialize(&self, source: &Path, target: &Path) -> Result<bool> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if is_binary(source)? {
            fs::copy(source, target)?;
            Ok(true)
        } else {
            render_file(self.renderer, source, target, self.build_info)?;
            Ok(false)
        }
    }

    fn check_roots(&self) -> Result<()> {
        if !self.template_root.is_dir() {
            return Err(Error::TemplateError(format!(
                "template root '{}' is not a directory",
                self.template_root.display()
            )));
        }

        let template_root = absolute(self.template_root);
        let output_root = absolute(self.output_root);
        if template_root.starts_with(&output_root) || output_root.starts_with(&template_root) {
            return Err(Error::TemplateError(format!(
                "template root '{}' and output directory '{}' must not contain each other",
                template_root.display(),
                output_root.display()
            )));
        }
        Ok(())
    }
}
