//! Tests for source discovery

use rewrex::sources::{SourceFilter, collect_sources};

use crate::common::TestProject;

fn layout() -> TestProject {
    let project = TestProject::new();
    project.write("src/game/Player.as", "");
    project.write("src/game/Enemy.as", "");
    project.write("src/ui/Main.mxml", "");
    project.write("src/README.md", "");
    project.write("src/.hidden/Secret.as", "");
    project
}

#[test]
fn test_directory_walk_filters_by_extension() {
    let project = layout();
    let files = collect_sources(
        &[project.path().join("src")],
        &SourceFilter::from_extensions(["as"]),
    )
    .unwrap();

    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["Enemy.as", "Player.as"]);
}

#[test]
fn test_include_glob() {
    let project = layout();
    let filter = SourceFilter::from_extensions(["as"]).with_include("ui/*.mxml").unwrap();
    let files = collect_sources(&[project.path().join("src")], &filter).unwrap();
    assert_eq!(files, [project.path().join("src/ui/Main.mxml")]);
}

#[test]
fn test_explicit_files_bypass_filter() {
    let project = layout();
    let readme = project.path().join("src/README.md");
    let files = collect_sources(&[readme.clone(), readme.clone()], &SourceFilter::default())
        .unwrap();
    assert_eq!(files, [readme]);
}
