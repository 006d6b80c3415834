//! Build information handling for msa-starter.
//! [`BuildInfo`] holds every value the templates can reference plus the skip rules.
//! It is filled in once, either from defaults, an answers file or the interactive
//! collector, and shared read-only with the rest of the run afterwards.

use crate::constants::{
    DEFAULT_SKIP_TOKENS, EXAMPLE_SKIP_TOKENS, VROONG_GROUP_NAME, VROONG_MEDIA_TYPE,
};
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Target Java runtime of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JavaVersion {
    Java8,
    Java11,
    #[default]
    Java17,
}

impl JavaVersion {
    pub const ALL: [JavaVersion; 3] = [JavaVersion::Java8, JavaVersion::Java11, JavaVersion::Java17];

    /// Label used in templates and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            JavaVersion::Java8 => "1.8",
            JavaVersion::Java11 => "11",
            JavaVersion::Java17 => "17",
        }
    }

    /// Base image the generated Dockerfile builds on.
    pub fn docker_image(&self) -> &'static str {
        match self {
            JavaVersion::Java8 => "openjdk:8-jre-alpine",
            JavaVersion::Java11 => "amazoncorretto:11-alpine-jdk",
            JavaVersion::Java17 => "amazoncorretto:17-alpine-jdk",
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JavaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1.8" | "8" => Ok(JavaVersion::Java8),
            "11" => Ok(JavaVersion::Java11),
            "17" => Ok(JavaVersion::Java17),
            other => Err(Error::ConfigError(format!(
                "unsupported java version '{other}', must be one of '1.8', '11', or '17'"
            ))),
        }
    }
}

/// Everything the templates are rendered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    project_name: String,
    group_name: String,
    port_number: String,
    media_type: String,
    java_version: JavaVersion,
    docker_image: String,
    reactive_project: bool,
    vroong_project: bool,
    include_example: bool,
    skip_tokens: Vec<String>,
}

impl Default for BuildInfo {
    fn default() -> Self {
        let java_version = JavaVersion::default();
        Self {
            project_name: "example".to_string(),
            group_name: "dev.appkr".to_string(),
            port_number: "8080".to_string(),
            media_type: "application/json".to_string(),
            java_version,
            docker_image: java_version.docker_image().to_string(),
            reactive_project: false,
            vroong_project: false,
            include_example: true,
            skip_tokens: DEFAULT_SKIP_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl BuildInfo {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Dotted package name, always derived from the group and project names.
    /// Empty parts are left out, so no leading or doubled dots appear.
    pub fn package_name(&self) -> String {
        [self.group_name.as_str(), self.project_name.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn port_number(&self) -> &str {
        &self.port_number
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn java_version(&self) -> JavaVersion {
        self.java_version
    }

    pub fn docker_image(&self) -> &str {
        &self.docker_image
    }

    pub fn is_reactive_project(&self) -> bool {
        self.reactive_project
    }

    pub fn is_vroong_project(&self) -> bool {
        self.vroong_project
    }

    pub fn include_example(&self) -> bool {
        self.include_example
    }

    pub fn skip_tokens(&self) -> &[String] {
        &self.skip_tokens
    }

    pub fn set_project_name(&mut self, project_name: impl Into<String>) {
        self.project_name = project_name.into();
    }

    pub fn set_group_name(&mut self, group_name: impl Into<String>) {
        self.group_name = group_name.into();
    }

    pub fn set_port_number(&mut self, port_number: impl Into<String>) {
        self.port_number = port_number.into();
    }

    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = media_type.into();
    }

    /// Sets the java version together with its matching docker image.
    pub fn set_java_version(&mut self, java_version: JavaVersion) {
        self.java_version = java_version;
        self.docker_image = java_version.docker_image().to_string();
    }

    pub fn set_docker_image(&mut self, docker_image: impl Into<String>) {
        self.docker_image = docker_image.into();
    }

    pub fn set_reactive_project(&mut self, reactive_project: bool) {
        self.reactive_project = reactive_project;
    }

    /// Marks the project as a vroong project and applies the vroong defaults.
    ///
    /// Turning the flag off again restores the regular group name and media type,
    /// unless they were changed after the vroong defaults were applied.
    pub fn set_vroong_project(&mut self, vroong_project: bool) {
        let defaults = BuildInfo::default();
        if vroong_project {
            self.group_name = VROONG_GROUP_NAME.to_string();
            self.media_type = VROONG_MEDIA_TYPE.to_string();
        } else if self.vroong_project {
            if self.group_name == VROONG_GROUP_NAME {
                self.group_name = defaults.group_name;
            }
            if self.media_type == VROONG_MEDIA_TYPE {
                self.media_type = defaults.media_type;
            }
        }
        self.vroong_project = vroong_project;
    }

    /// Only records the choice; [`BuildInfo::finalize`] turns it into skip tokens.
    pub fn set_include_example(&mut self, include_example: bool) {
        self.include_example = include_example;
    }

    /// Appends a skip token unless it is empty or already present.
    /// An empty token would match every path.
    pub fn add_skip_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.is_empty() && !self.skip_tokens.contains(&token) {
            self.skip_tokens.push(token);
        }
    }

    /// Merges the example-marking tokens into the skip list. Idempotent.
    pub fn merge_example_skip_tokens(&mut self) {
        for token in EXAMPLE_SKIP_TOKENS {
            self.add_skip_token(token);
        }
    }

    /// Ends collection: merges the example tokens when examples are excluded.
    ///
    /// Called once after every collector ran, so the skip list always agrees with
    /// the final `includeExample` value the templates see.
    pub fn finalize(mut self) -> Self {
        if !self.include_example {
            self.merge_example_skip_tokens();
        }
        self
    }

    /// Context the templates are rendered against, keyed by camelCase field names.
    pub fn render_context(&self) -> serde_json::Value {
        serde_json::json!({
            "projectName": self.project_name,
            "groupName": self.group_name,
            "packageName": self.package_name(),
            "portNumber": self.port_number,
            "mediaType": self.media_type,
            "javaVersion": self.java_version.label(),
            "dockerImage": self.docker_image,
            "reactiveProject": self.reactive_project,
            "vroongProject": self.vroong_project,
            "includeExample": self.include_example,
        })
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  reactiveProject: {}", self.reactive_project)?;
        writeln!(f, "  vroongProject:   {}", self.vroong_project)?;
        writeln!(f, "  javaVersion:     {}", self.java_version)?;
        writeln!(f, "  dockerImage:     {}", self.docker_image)?;
        writeln!(f, "  projectName:     {}", self.project_name)?;
        writeln!(f, "  groupName:       {}", self.group_name)?;
        writeln!(f, "  packageName:     {}", self.package_name())?;
        writeln!(f, "  portNumber:      {}", self.port_number)?;
        writeln!(f, "  mediaType:       {}", self.media_type)?;
        write!(f, "  includeExample:  {}", self.include_example)
    }
}

/// Partial build information read from an answers file.
///
/// Every field is optional; present fields are applied over the current
/// [`BuildInfo`] in the same order the interactive collector asks them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Answers {
    pub reactive_project: Option<bool>,
    pub vroong_project: Option<bool>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub java_version: Option<String>,
    pub docker_image: Option<String>,
    pub project_name: Option<String>,
    pub group_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub port_number: Option<String>,
    pub media_type: Option<String>,
    pub include_example: Option<bool>,
    #[serde(default)]
    pub skip_tokens: Vec<String>,
}

// YAML happily reads `17` or `8080` as numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    }))
}

impl Answers {
    /// Parses answers as JSON, falling back to YAML.
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(answers) => Ok(answers),
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid answers format: {e}"))),
        }
    }

    /// Loads answers from a JSON or YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading answers from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read answers file '{}': {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Applies the answers over `build_info`.
    pub fn apply(self, build_info: &mut BuildInfo) -> Result<()> {
        if let Some(reactive) = self.reactive_project {
            build_info.set_reactive_project(reactive);
        }
        if let Some(vroong) = self.vroong_project {
            build_info.set_vroong_project(vroong);
        }
        if let Some(java_version) = self.java_version {
            build_info.set_java_version(java_version.parse()?);
        }
        if let Some(docker_image) = self.docker_image {
            build_info.set_docker_image(docker_image);
        }
        if let Some(project_name) = self.project_name {
            build_info.set_project_name(project_name);
        }
        if let Some(group_name) = self.group_name {
            build_info.set_group_name(group_name);
        }
        if let Some(port_number) = self.port_number {
            build_info.set_port_number(port_number);
        }
        if let Some(media_type) = self.media_type {
            build_info.set_media_type(media_type);
        }
        for token in self.skip_tokens {
            build_info.add_skip_token(token);
        }
        if let Some(include_example) = self.include_example {
            build_info.set_include_example(include_example);
        }
        Ok(())
    }
}
