#![allow(non_snake_case)]

use std::fs;
use std::path::PathBuf;
use swagger_class_generator::config::{load_config, merge_with_cli_args, ClassKind, Config};
use swagger_class_generator::SupportedLanguage;
use tempfile::TempDir;

const CONFIG: &str = r#"
version: "1.0"
input:
  source: ./petstore.yaml
output: ./out
languages:
  - language: kotlin
    model:
      package: com.example.model
      module: "app/{tag}/model"
      implementsInterfaces: [java.io.Serializable]
  - language: ts
    enabled: false
hooks:
  afterGenerate:
    - echo done
"#;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generator.yaml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn load_config___custom_file___reads_languages_and_hooks() {
    let (_dir, path) = write_config(CONFIG);

    let config = load_config(Some(path.as_path())).unwrap();

    assert_eq!(config.input.unwrap().source, PathBuf::from("./petstore.yaml"));
    assert_eq!(config.output, Some(PathBuf::from("./out")));
    assert_eq!(config.hooks.after_generate, ["echo done"]);
    assert!(config.hooks.before_generate.is_empty());

    let kotlin = &config.languages[0];
    assert_eq!(kotlin.language, SupportedLanguage::Kotlin);
    assert!(kotlin.enabled);
    let model = kotlin.kind(ClassKind::Model);
    assert_eq!(model.package, "com.example.model");
    assert_eq!(model.implements_interfaces, ["java.io.Serializable"]);
    assert_eq!(model.directory(Some("pet")), PathBuf::from("app/pet/model"));
    assert_eq!(kotlin.kind(ClassKind::Api).module, "kotlin/api");

    let typescript = &config.languages[1];
    assert_eq!(typescript.language, SupportedLanguage::TypeScript);
    assert!(!typescript.enabled);
}

#[test]
fn load_config___missing_custom_file___fails() {
    let dir = TempDir::new().unwrap();

    let result = load_config(Some(dir.path().join("absent.yaml").as_path()));

    assert!(result.is_err());
}

#[test]
fn load_config___malformed_yaml___fails_with_path() {
    let (_dir, path) = write_config("version: [unclosed");

    let err = load_config(Some(path.as_path())).unwrap_err();

    assert!(format!("{err:#}").contains("generator.yaml"));
}

#[test]
fn merge_with_cli_args___cli_values_take_precedence() {
    let (_dir, path) = write_config(CONFIG);
    let config = load_config(Some(path.as_path())).unwrap();

    let merged = merge_with_cli_args(
        config,
        Some(PathBuf::from("other.yaml")),
        Some(PathBuf::from("build")),
        &[SupportedLanguage::TypeScript, SupportedLanguage::Python],
    );

    assert_eq!(merged.input.unwrap().source, PathBuf::from("other.yaml"));
    assert_eq!(merged.output, Some(PathBuf::from("build")));
    let languages: Vec<SupportedLanguage> = merged.languages.iter().map(|l| l.language).collect();
    assert_eq!(languages, [SupportedLanguage::TypeScript, SupportedLanguage::Python]);
    assert!(merged.languages.iter().all(|l| l.enabled));
}

#[test]
fn merge_with_cli_args___no_languages_anywhere___selects_all() {
    let merged = merge_with_cli_args(Config::default(), None, None, &[]);

    assert_eq!(merged.languages.len(), SupportedLanguage::ALL.len());
    assert_eq!(merged.output, Some(PathBuf::from("generated")));
    assert!(merged.input.is_none());
}
