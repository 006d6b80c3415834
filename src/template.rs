//! Template variant selection.
//! A templates directory ships two fixed template roots, one per project style.

use crate::config::BuildInfo;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The project style a template root produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateVariant {
    /// Spring WebMVC with JPA
    WebMvc,
    /// Spring WebFlux with R2DBC
    WebFlux,
}

impl std::fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateVariant::WebMvc => write!(f, "WebMVC/JPA"),
            TemplateVariant::WebFlux => write!(f, "WebFlux/R2DBC"),
        }
    }
}

impl TemplateVariant {
    /// Chooses the variant from the collected build information.
    pub fn for_build_info(build_info: &BuildInfo) -> Self {
        if build_info.is_reactive_project() {
            TemplateVariant::WebFlux
        } else {
            TemplateVariant::WebMvc
        }
    }

    /// Directory name of the variant inside the templates directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateVariant::WebMvc => "webmvc",
            TemplateVariant::WebFlux => "webflux",
        }
    }

    /// Resolves the template root of this variant under `templates_dir`.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template root is not a directory
    pub fn resolve<P: AsRef<Path>>(&self, templates_dir: P) -> Result<PathBuf> {
        let root = templates_dir.as_ref().join(self.dir_name());
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "{self} templates not found at '{}'",
                root.display()
            )));
        }
        Ok(root)
    }
}
