//! Common constants used throughout msa-starter.

/// Source root for application code, relative to a template root
pub const MAIN_SOURCE_MARKER: &str = "src/main/java";

/// Source root for test code, relative to a template root
pub const TEST_SOURCE_MARKER: &str = "src/test/java";

/// Suffix appended to payloads (e.g. `gradle-wrapper.jar`) so that shadow-jar packaging
/// does not merge them as dependencies. Stripped from destination paths.
pub const BINARY_SENTINEL_SUFFIX: &str = ".binary";

/// Tokens merged into the skip list when example code is excluded
pub const EXAMPLE_SKIP_TOKENS: [&str; 2] = ["Example", "example"];

/// Group name applied to vroong projects
pub const VROONG_GROUP_NAME: &str = "com.vroong";

/// Media type applied to vroong projects
pub const VROONG_MEDIA_TYPE: &str = "application/vnd.vroong.private.v1+json";

/// Skip tokens every run starts with
pub const DEFAULT_SKIP_TOKENS: [&str; 1] = [".DS_Store"];

/// Generated scripts that must be executable after materialization
pub const EXECUTABLE_SCRIPTS: [&str; 1] = ["gradlew"];

/// Name of the destination directory created under the user's home directory
pub const OUTPUT_DIR_NAME: &str = ".msa-starter";

/// Default directory holding the template variants
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
