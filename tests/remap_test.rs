use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use msa_starter::config::BuildInfo;
use msa_starter::remap::{package_path, remap};

fn build_info(group: &str, project: &str) -> BuildInfo {
    let mut info = BuildInfo::default();
    info.set_group_name(group);
    info.set_project_name(project);
    info
}

#[test]
fn test_package_path() {
    assert_eq!(package_path("com.example"), ["com", "example"].join(MAIN_SEPARATOR_STR));
    assert_eq!(package_path("dev.appkr.demo"), ["dev", "appkr", "demo"].join(MAIN_SEPARATOR_STR));
    assert_eq!(package_path(""), "");
}

#[cfg(unix)]
#[test]
fn test_plain_file_keeps_relative_path() {
    let info = build_info("dev.appkr", "demo");
    let target = remap("/tpl/webmvc/clients/build.gradle", "/tpl/webmvc", "/home/me/.msa-starter", &info);
    assert_eq!(target, PathBuf::from("/home/me/.msa-starter/clients/build.gradle"));
}

#[cfg(unix)]
#[test]
fn test_main_sources_move_under_package() {
    let info = build_info("dev.appkr", "demo");
    let target = remap("/tpl/webmvc/src/main/java/Application.java", "/tpl/webmvc", "/out", &info);
    assert_eq!(target, PathBuf::from("/out/src/main/java/dev/appkr/demo/Application.java"));

    let target = remap("/tpl/webmvc/src/main/java/rest/Controller.java", "/tpl/webmvc", "/out", &info);
    assert_eq!(target, PathBuf::from("/out/src/main/java/dev/appkr/demo/rest/Controller.java"));
}

#[cfg(unix)]
#[test]
fn test_test_sources_move_under_package() {
    let info = build_info("com", "example");
    let target = remap("/tpl/webflux/src/test/java/AppTest.java", "/tpl/webflux", "/out", &info);
    assert_eq!(target, PathBuf::from("/out/src/test/java/com/example/AppTest.java"));
}

#[cfg(unix)]
#[test]
fn test_resources_are_not_moved() {
    let info = build_info("dev.appkr", "demo");
    let target = remap(
        "/tpl/webmvc/src/main/resources/application.yml",
        "/tpl/webmvc",
        "/out",
        &info,
    );
    assert_eq!(target, PathBuf::from("/out/src/main/resources/application.yml"));
}

#[cfg(unix)]
#[test]
fn test_sentinel_suffix_is_stripped_exactly() {
    let info = build_info("dev.appkr", "demo");
    assert_eq!(
        remap("/tpl/webmvc/Foo.jar.binary", "/tpl/webmvc", "/out", &info),
        PathBuf::from("/out/Foo.jar")
    );
    assert_eq!(
        remap("/tpl/webmvc/binary-notes.md", "/tpl/webmvc", "/out", &info),
        PathBuf::from("/out/binary-notes.md")
    );
    assert_eq!(
        remap("/tpl/webmvc/Foo.binary.txt", "/tpl/webmvc", "/out", &info),
        PathBuf::from("/out/Foo.binary.txt")
    );
}

#[cfg(unix)]
#[test]
fn test_empty_package_leaves_marker() {
    let info = build_info("", "");
    let target = remap("/tpl/webmvc/src/main/java/App.java", "/tpl/webmvc", "/out", &info);
    assert_eq!(target, PathBuf::from("/out/src/main/java/App.java"));
}

#[test]
fn test_remap_is_prefix_stable() {
    let info = build_info("dev.appkr", "demo");
    let source_root = Path::new("template");
    let dest_root = Path::new("output");
    for relative in ["a.txt", "src/main/java/App.java", "x/y/z.binary", "src/test/java/T.java"] {
        let target = remap(source_root.join(relative), source_root, dest_root, &info);
        assert!(target.starts_with(dest_root), "{} does not start with output", target.display());
    }
}

#[cfg(unix)]
#[test]
fn test_markers_inside_output_root_are_left_alone() {
    let info = build_info("dev.appkr", "demo");
    let dest_root = "/work/src/main/java/out";

    let target = remap("/tpl/webmvc/src/main/java/App.java", "/tpl/webmvc", dest_root, &info);
    assert_eq!(target, PathBuf::from("/work/src/main/java/out/src/main/java/dev/appkr/demo/App.java"));

    let target = remap("/tpl/webmvc/build.gradle", "/tpl/webmvc", dest_root, &info);
    assert_eq!(target, PathBuf::from("/work/src/main/java/out/build.gradle"));
}

#[cfg(unix)]
#[test]
fn test_markers_inside_template_root_are_left_alone() {
    let info = build_info("dev.appkr", "demo");
    let source_root = "/repo/src/test/java/fixtures/webmvc";

    let target = remap(format!("{source_root}/settings.gradle"), source_root, "/out", &info);
    assert_eq!(target, PathBuf::from("/out/settings.gradle"));

    let target = remap(format!("{source_root}/src/test/java/AppTest.java"), source_root, "/out", &info);
    assert_eq!(target, PathBuf::from("/out/src/test/java/dev/appkr/demo/AppTest.java"));
}

#[test]
fn test_remap_is_prefix_stable_with_marker_like_roots() {
    let info = build_info("dev.appkr", "demo");
    let roots = [
        (Path::new("src/main/java/template"), Path::new("output")),
        (Path::new("template"), Path::new("src/main/java/output")),
        (Path::new("src/test/java/template"), Path::new("build/src/test/java/output")),
    ];
    for (source_root, dest_root) in roots {
        for relative in ["a.txt", "src/main/java/App.java", "x/y/z.binary", "src/test/java/T.java"] {
            let target = remap(source_root.join(relative), source_root, dest_root, &info);
            assert!(
                target.starts_with(dest_root),
                "{} does not start with {}",
                target.display(),
                dest_root.display()
            );
        }
    }
}
