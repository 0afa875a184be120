use crate::conf::{
    AnalyzerConfig, BUILTIN_MODULES, ConfigError, EntrypointConfig, ModuleConfig, load_config,
    load_or_builtin,
};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("logscope.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_modules_in_file_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[[module]]
name = "poke-api"
path = "../poke-api/logs/app.log"

[[module]]
name = "search-api"
path = "../search-api/logs/*.log"
"#,
    );

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        config,
        AnalyzerConfig {
            root: dir.path().to_path_buf(),
            modules: vec![
                ModuleConfig {
                    name: "poke-api".to_string(),
                    path: "../poke-api/logs/app.log".to_string(),
                },
                ModuleConfig {
                    name: "search-api".to_string(),
                    path: "../search-api/logs/*.log".to_string(),
                },
            ],
        }
    );
}

#[test]
fn empty_file_has_no_modules() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "");

    let config = load_config(&path).unwrap();

    assert!(config.modules.is_empty());
}

#[test]
fn duplicate_module_names_are_rejected() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[[module]]
name = "poke-api"
path = "a.log"

[[module]]
name = "poke-api"
path = "b.log"
"#,
    );

    let err = load_config(&path).unwrap_err();

    assert!(
        matches!(err, ConfigError::DuplicateModule { ref name } if name == "poke-api"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn blank_module_fields_are_rejected() {
    let dir = tempdir().unwrap();

    let path = write_config(
        dir.path(),
        "[[module]]\nname = \"  \"\npath = \"a.log\"\n",
    );
    assert!(matches!(
        load_config(&path).unwrap_err(),
        ConfigError::EmptyModuleName
    ));

    let path = write_config(dir.path(), "[[module]]\nname = \"poke-api\"\npath = \"\"\n");
    assert!(matches!(
        load_config(&path).unwrap_err(),
        ConfigError::EmptyModulePath { ref name } if name == "poke-api"
    ));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "[[module]]\nname = \"poke-api\"\n");

    let err = load_config(&path).unwrap_err();

    match err {
        ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn builtin_table_is_used_without_a_config_path() {
    // Act
    let config = load_or_builtin(None).unwrap();

    // Assert
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(
        config
            .modules
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>(),
        BUILTIN_MODULES.to_vec()
    );
    assert_eq!(config.modules[0].path, "../search-api/logs/app.log");
}

#[test]
fn serialized_entrypoint_loads_back() {
    // Arrange
    let dir = tempdir().unwrap();
    let modules = vec![
        ModuleConfig {
            name: "poke-stats".to_string(),
            path: "../poke-stats/logs/*.log".to_string(),
        },
        ModuleConfig {
            name: "poke-images".to_string(),
            path: "../poke-images/logs/app.log".to_string(),
        },
    ];
    let content = toml::to_string(&EntrypointConfig {
        modules: modules.clone(),
    })
    .unwrap();
    let path = write_config(dir.path(), &content);

    // Act
    let config = load_config(&path).unwrap();

    // Assert
    assert!(content.contains("[[module]]"), "{content}");
    assert_eq!(config.modules, modules);

    let empty = write_config(dir.path(), &toml::to_string(&EntrypointConfig::default()).unwrap());
    assert!(load_config(&empty).unwrap().modules.is_empty());
}
