//! Tests for config loading

use rewrex::config::Config;
use rewrex::translate::{Production, Translator};

use crate::common::TestProject;

const CONFIG: &str = r#"
[translate]
productions = ["variables"]
extensions = ["as", "mxml"]

[types]
Number = "float"
Point = "Vector2"

[limits]
max_matches = 50
"#;

#[test]
fn test_explicit_config() {
    let project = TestProject::new();
    let path = project.write("custom.toml", CONFIG);

    let config = Config::load(Some(&path), project.path()).unwrap();
    assert_eq!(config.translate.productions, [Production::Variables]);
    assert_eq!(config.translate.extensions, ["as", "mxml"]);
    assert_eq!(config.limits().max_matches, Some(50));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let project = TestProject::new();
    let missing = project.path().join("nope.toml");
    let err = Config::load(Some(&missing), project.path()).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_project_config_is_discovered() {
    let project = TestProject::new();
    let path = project.write("rewrex.toml", CONFIG);

    assert_eq!(Config::discover(project.path()), Some(path));
    let config = Config::load(None, project.path()).unwrap();
    assert_eq!(config.types.get("Point").map(String::as_str), Some("Vector2"));
}

#[test]
fn test_invalid_toml_names_the_file() {
    let project = TestProject::new();
    let path = project.write("rewrex.toml", "[limits\nmax_matches = ");
    let err = Config::load(None, project.path()).unwrap_err();
    assert!(format!("{err:#}").contains(&path.display().to_string()));
}

#[test]
fn test_translator_from_config() {
    let config = Config::parse(CONFIG).unwrap();
    let translator = config.translator().unwrap();
    let (out, report) = translator
        .translate_str("public var at:Point;\npublic var speed:Number;\npublic function f():void;")
        .unwrap();

    assert_eq!(out, "public Vector2 at;\npublic float speed;\npublic function f():void;");
    assert_eq!(report.passes.len(), 1);
}
