//! Interactive collection of build information.
//! Each `ask_*` function collects exactly one field; [`collect_build_info`]
//! runs them in order and asks for a final confirmation.

use crate::config::{BuildInfo, JavaVersion};
use crate::error::{Error, Result};
use crate::template::TemplateVariant;
use dialoguer::{Confirm, Input, Select};

/// Source of user answers.
pub trait Prompter {
    /// Asks for free text, returning `default` when the user just presses enter.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

/// Asks which template set to generate from; WebFlux marks the project reactive.
pub fn ask_template_variant(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let variants = [TemplateVariant::WebMvc, TemplateVariant::WebFlux];
    let items: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
    let default = if build_info.is_reactive_project() { 1 } else { 0 };

    let selected = prompter.select("Which kind of project?", &items, default)?;
    let variant = variants
        .get(selected)
        .ok_or_else(|| Error::PromptError(format!("no project kind at index {selected}")))?;
    build_info.set_reactive_project(*variant == TemplateVariant::WebFlux);
    Ok(())
}

/// Asks whether this is a vroong project, applying or restoring the vroong defaults.
pub fn ask_vroong_project(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let vroong = prompter.confirm("Is vroong project?", build_info.is_vroong_project())?;
    build_info.set_vroong_project(vroong);
    Ok(())
}

/// Asks for the target java version, which also selects the docker image.
pub fn ask_java_version(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let items: Vec<String> = JavaVersion::ALL.iter().map(|v| v.to_string()).collect();
    let default = JavaVersion::ALL
        .iter()
        .position(|v| *v == build_info.java_version())
        .unwrap_or(0);

    let selected = prompter.select("Which java version will you choose?", &items, default)?;
    let java_version = JavaVersion::ALL
        .get(selected)
        .ok_or_else(|| Error::PromptError(format!("no java version at index {selected}")))?;
    build_info.set_java_version(*java_version);
    Ok(())
}

/// Asks for the project name, the last segment of the package name.
pub fn ask_project_name(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let answer = prompter.text("What is the project name?", build_info.project_name())?;
    build_info.set_project_name(answer.trim());
    Ok(())
}

/// Asks for the group name, the leading segments of the package name.
pub fn ask_group_name(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let answer = prompter.text("What is the group name?", build_info.group_name())?;
    build_info.set_group_name(answer.trim());
    Ok(())
}

/// Asks for the web server port. The answer is not validated.
pub fn ask_port_number(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let answer = prompter.text("What is the web server port?", build_info.port_number())?;
    build_info.set_port_number(answer.trim());
    Ok(())
}

/// Asks for the media type used by requests and responses.
pub fn ask_media_type(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let answer = prompter.text(
        "What is the media type for request and response?",
        build_info.media_type(),
    )?;
    build_info.set_media_type(answer.trim());
    Ok(())
}

/// Asks whether example code is generated.
pub fn ask_include_example(prompter: &dyn Prompter, build_info: &mut BuildInfo) -> Result<()> {
    let include = prompter.confirm("Include example codes?", build_info.include_example())?;
    build_info.set_include_example(include);
    Ok(())
}

/// Collects every field interactively, starting from `build_info`.
///
/// # Errors
/// * `Error::Aborted` if the user rejects the collected values
/// * `Error::PromptError` if reading input fails
pub fn collect_build_info(prompter: &dyn Prompter, mut build_info: BuildInfo) -> Result<BuildInfo> {
    ask_template_variant(prompter, &mut build_info)?;
    ask_vroong_project(prompter, &mut build_info)?;
    ask_java_version(prompter, &mut build_info)?;
    ask_project_name(prompter, &mut build_info)?;
    ask_group_name(prompter, &mut build_info)?;
    ask_port_number(prompter, &mut build_info)?;
    ask_media_type(prompter, &mut build_info)?;
    ask_include_example(prompter, &mut build_info)?;

    let summary = format!("{build_info}\nContinue?");
    if !prompter.confirm(&summary, true)? {
        return Err(Error::Aborted);
    }
    Ok(build_info)
}
