//! Template rendering for msa-starter.
//! Text templates reference build information with `{{ placeholder }}` syntax
//! and are rendered with MiniJinja.
use crate::config::BuildInfo;
use crate::error::Result;
use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on undefined placeholders and keeps
    /// the trailing newline of every template.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or references
    ///   a value missing from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Renders the text template at `source` against `build_info` and writes the
/// result to `target`, creating missing parent directories first.
pub fn render_file<S: AsRef<Path>, T: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    source: S,
    target: T,
    build_info: &BuildInfo,
) -> Result<()> {
    let (source, target) = (source.as_ref(), target.as_ref());
    debug!("Rendering {} into {}", source.display(), target.display());

    let content = fs::read_to_string(source)?;
    let rendered = renderer.render(&content, &build_info.render_context())?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, rendered)?;
    Ok(())
}
