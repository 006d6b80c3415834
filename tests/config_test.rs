use msa_starter::config::{Answers, BuildInfo, JavaVersion};
use msa_starter::ignore::should_skip;

#[test]
fn test_defaults() {
    let info = BuildInfo::default();
    assert_eq!(info.project_name(), "example");
    assert_eq!(info.group_name(), "dev.appkr");
    assert_eq!(info.package_name(), "dev.appkr.example");
    assert_eq!(info.port_number(), "8080");
    assert_eq!(info.media_type(), "application/json");
    assert_eq!(info.java_version(), JavaVersion::Java17);
    assert_eq!(info.docker_image(), "amazoncorretto:17-alpine-jdk");
    assert!(!info.is_reactive_project());
    assert!(!info.is_vroong_project());
    assert!(info.include_example());
    assert_eq!(info.skip_tokens(), &[".DS_Store".to_string()]);
}

#[test]
fn test_merge_example_skip_tokens_is_idempotent() {
    let mut once = BuildInfo::default();
    once.merge_example_skip_tokens();

    let mut twice = BuildInfo::default();
    twice.merge_example_skip_tokens();
    twice.merge_example_skip_tokens();

    assert_eq!(once.skip_tokens(), twice.skip_tokens());
    assert_eq!(once.skip_tokens(), &[".DS_Store", "Example", "example"]);
}

#[test]
fn test_excluding_examples_merges_tokens_on_finalize() {
    let mut info = BuildInfo::default();
    info.set_include_example(false);
    assert!(!info.include_example());
    assert_eq!(info.skip_tokens(), &[".DS_Store".to_string()]);

    let info = info.finalize();
    assert!(info.skip_tokens().iter().any(|t| t == "Example"));
    assert_eq!(info.clone().finalize(), info);
}

#[test]
fn test_later_include_example_answer_wins() {
    let answers = Answers::parse(r#"{"includeExample": false}"#).unwrap();
    let mut info = BuildInfo::default();
    answers.apply(&mut info).unwrap();

    info.set_include_example(true);
    let info = info.finalize();

    assert!(info.include_example());
    assert_eq!(info.render_context()["includeExample"], true);
    assert!(!info.skip_tokens().iter().any(|t| t == "Example" || t == "example"));
    assert!(!should_skip("src/main/java/example/ExampleController.java", &info));
}

#[test]
fn test_java_version_sets_docker_image() {
    let mut info = BuildInfo::default();
    info.set_java_version(JavaVersion::Java8);
    assert_eq!(info.docker_image(), "openjdk:8-jre-alpine");
    info.set_java_version(JavaVersion::Java11);
    assert_eq!(info.docker_image(), "amazoncorretto:11-alpine-jdk");
}

#[test]
fn test_vroong_defaults() {
    let mut info = BuildInfo::default();
    info.set_vroong_project(true);
    assert_eq!(info.group_name(), "com.vroong");
    assert_eq!(info.media_type(), "application/vnd.vroong.private.v1+json");
    assert_eq!(info.package_name(), "com.vroong.example");
}

#[test]
fn test_vroong_turned_off_restores_defaults() {
    let answers = Answers::parse("vroongProject: true\n").unwrap();
    let mut info = BuildInfo::default();
    answers.apply(&mut info).unwrap();

    info.set_vroong_project(false);
    assert!(!info.is_vroong_project());
    assert_eq!(info.group_name(), "dev.appkr");
    assert_eq!(info.media_type(), "application/json");
}

#[test]
fn test_vroong_turned_off_keeps_custom_values() {
    let mut info = BuildInfo::default();
    info.set_vroong_project(true);
    info.set_group_name("com.vroong.delivery");
    info.set_vroong_project(false);
    assert_eq!(info.group_name(), "com.vroong.delivery");
    assert_eq!(info.media_type(), "application/json");
}

#[test]
fn test_render_context() {
    let mut info = BuildInfo::default();
    info.set_project_name("demo");
    let context = info.render_context();
    assert_eq!(context["projectName"], "demo");
    assert_eq!(context["packageName"], "dev.appkr.demo");
    assert_eq!(context["javaVersion"], "17");
    assert_eq!(context["reactiveProject"], false);
    assert_eq!(context["includeExample"], true);
}

#[test]
fn test_answers_from_json() {
    let answers = Answers::parse(
        r#"{
            "reactiveProject": true,
            "javaVersion": "11",
            "projectName": "orders",
            "groupName": "com.shop",
            "portNumber": 9090,
            "includeExample": false
        }"#,
    )
    .unwrap();

    let mut info = BuildInfo::default();
    answers.apply(&mut info).unwrap();
    assert!(info.is_reactive_project());
    assert_eq!(info.java_version(), JavaVersion::Java11);
    assert_eq!(info.docker_image(), "amazoncorretto:11-alpine-jdk");
    assert_eq!(info.package_name(), "com.shop.orders");
    assert_eq!(info.port_number(), "9090");
    assert!(!info.include_example());
    assert!(info.finalize().skip_tokens().iter().any(|t| t == "example"));
}

#[test]
fn test_answers_from_yaml() {
    let answers = Answers::parse(
        "vroongProject: true\njavaVersion: 1.8\ndockerImage: eclipse-temurin:8-jre\nportNumber: 8081\n",
    )
    .unwrap();

    let mut info = BuildInfo::default();
    answers.apply(&mut info).unwrap();
    assert!(info.is_vroong_project());
    assert_eq!(info.group_name(), "com.vroong");
    assert_eq!(info.java_version(), JavaVersion::Java8);
    assert_eq!(info.docker_image(), "eclipse-temurin:8-jre");
    assert_eq!(info.port_number(), "8081");
}

#[test]
fn test_answers_reject_unknown_java_version() {
    let answers = Answers::parse(r#"{"javaVersion": "21"}"#).unwrap();
    let mut info = BuildInfo::default();
    assert!(answers.apply(&mut info).is_err());
}

#[test]
fn test_answers_reject_unknown_fields() {
    assert!(Answers::parse(r#"{"packageName": "com.example"}"#).is_err());
}

#[test]
fn test_answers_load_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    assert!(Answers::load(temp_dir.path().join("answers.yml")).is_err());
}
