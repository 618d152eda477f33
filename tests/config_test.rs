//! Layered settings: global file, project file and their merge rules

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use nxbind::application::services::ValidationOptions;
use nxbind::config::{local_config_path, Settings, LOCAL_CONFIG_FILE};
use nxbind::domain::LabelOptions;

fn write_global(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("nxbind.toml");
    fs::write(&path, content).unwrap();
    path
}

fn write_local(project: &Path, content: &str) {
    fs::write(project.join(LOCAL_CONFIG_FILE), content).unwrap();
}

fn dirs(settings: &Settings) -> Vec<String> {
    settings
        .nxdl_dirs
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn given_no_files_when_loading_then_defaults() {
    let temp = TempDir::new().unwrap();

    let settings =
        Settings::load_layers(Some(&temp.path().join("absent.toml")), Some(temp.path())).unwrap();

    assert_eq!(settings, Settings::default());
    assert!(settings.nxdl_dirs.is_empty());
}

#[test]
fn given_global_only_when_loading_then_global_values_apply() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let global = write_global(
        temp.path(),
        r#"
nxdl_dirs = ["/defs/base", "/defs/contrib"]

[validation]
require_units = false

[output]
show_oids = true
"#,
    );

    // Act
    let settings = Settings::load_layers(Some(&global), None).unwrap();

    // Assert
    assert_eq!(dirs(&settings), ["/defs/base", "/defs/contrib"]);
    assert!(!settings.validation.require_units);
    assert!(settings.validation.check_names, "unset keys keep defaults");
    assert!(settings.output.show_oids);
    assert!(settings.output.show_values);
}

#[test]
fn given_global_and_local_when_loading_then_arrays_union_and_scalars_override() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write_global(
        temp.path(),
        r#"
nxdl_dirs = ["/defs/base", "/defs/contrib"]

[validation]
require_units = false
"#,
    );
    write_local(
        project.path(),
        r#"
nxdl_dirs = ["/project/defs", "/defs/base"]

[validation]
require_units = true
report_undeclared = true
"#,
    );

    // Act
    let settings = Settings::load_layers(Some(&global), Some(project.path())).unwrap();

    // Assert
    assert_eq!(
        dirs(&settings),
        ["/defs/base", "/defs/contrib", "/project/defs"]
    );
    assert!(settings.validation.require_units);
    assert!(settings.validation.report_undeclared);
}

#[test]
fn given_negation_in_local_when_loading_then_inherited_dir_removed() {
    let temp = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write_global(temp.path(), r#"nxdl_dirs = ["/defs/base", "/defs/contrib"]"#);
    write_local(
        project.path(),
        r#"nxdl_dirs = ["!/defs/contrib", "/project/defs"]"#,
    );

    let settings = Settings::load_layers(Some(&global), Some(project.path())).unwrap();

    assert_eq!(dirs(&settings), ["/defs/base", "/project/defs"]);
}

#[test]
fn given_explicit_empty_local_array_when_loading_then_inherits_global() {
    let temp = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let global = write_global(temp.path(), r#"nxdl_dirs = ["/defs/base"]"#);
    write_local(project.path(), "nxdl_dirs = []\n");

    let settings = Settings::load_layers(Some(&global), Some(project.path())).unwrap();

    assert_eq!(dirs(&settings), ["/defs/base"]);
}

#[test]
fn given_tilde_in_local_dir_when_loading_then_expanded() {
    let project = TempDir::new().unwrap();
    write_local(project.path(), r#"nxdl_dirs = ["~/nexus/defs"]"#);

    let settings = Settings::load_layers(None, Some(project.path())).unwrap();

    let home = std::env::var("HOME").unwrap();
    assert_eq!(settings.nxdl_dirs, vec![Path::new(&home).join("nexus/defs")]);
}

#[test]
fn given_malformed_local_file_when_loading_then_config_error() {
    let project = TempDir::new().unwrap();
    write_local(project.path(), "nxdl_dirs = [unterminated");

    let err = Settings::load_layers(None, Some(project.path())).unwrap_err();

    let message = err.to_string();
    assert!(message.contains(LOCAL_CONFIG_FILE), "{message}");
}

#[test]
fn given_wrong_value_type_when_loading_then_config_error() {
    let project = TempDir::new().unwrap();
    write_local(project.path(), "[output]\nshow_oids = \"yes\"\n");

    assert!(Settings::load_layers(None, Some(project.path())).is_err());
}

#[test]
fn given_settings_when_converted_then_options_follow_sections() {
    let project = TempDir::new().unwrap();
    write_local(
        project.path(),
        "[validation]\ncheck_names = false\n\n[output]\nshow_values = false\nshow_oids = true\n",
    );

    let settings = Settings::load_layers(None, Some(project.path())).unwrap();
    let options = ValidationOptions::from(&settings.validation);
    let labels = LabelOptions::from(&settings.output);

    assert!(!options.check_names);
    assert!(options.require_units);
    assert!(labels.show_oids);
    assert!(!labels.show_values);
}

#[test]
fn given_settings_when_rendered_as_toml_then_parse_back() {
    let settings = Settings {
        nxdl_dirs: vec![PathBuf::from("/defs/base")],
        ..Settings::default()
    };

    let text = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();

    assert_eq!(parsed, settings);
}

#[test]
fn given_project_dir_when_resolving_local_path_then_uses_dotfile() {
    let path = local_config_path(Path::new("/work/scan"));

    assert_eq!(path, PathBuf::from("/work/scan/.nxbind.toml"));
}
