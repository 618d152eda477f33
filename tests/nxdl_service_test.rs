//! Loading NXDL definitions from disk into the schema registry

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use nxbind::application::services::NxdlService;
use nxbind::application::ApplicationError;
use nxbind::config::Settings;
use nxbind::domain::{ClassCategory, NexusType, SchemaRegistry};
use nxbind::infrastructure::traits::RealFileSystem;
use nxbind::infrastructure::ServiceContainer;
use nxbind::util::testing;

fn nxdl(name: &str, fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<definition name="{name}" extends="NXobject" type="group" category="contributed">
    <doc>Test definition {name}.</doc>
    {fields}
</definition>
"#
    )
}

fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn service() -> NxdlService {
    NxdlService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_nxdl_file_when_loading_then_returns_definition() {
    testing::init_test_setup();
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        "NXwidget.nxdl.xml",
        &nxdl("NXwidget", r#"<field name="count" type="NX_POSINT"/>"#),
    );

    // Act
    let def = service().load_file(&path).unwrap();

    // Assert
    assert_eq!(def.name, "NXwidget");
    assert_eq!(def.category, ClassCategory::Contributed);
    assert_eq!(def.field("count").unwrap().nx_type, NexusType::PosInt);
}

#[test]
fn given_missing_file_when_loading_then_operation_failed_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("NXnone.nxdl.xml");

    let err = service().load_file(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }), "{err:?}");
    assert!(err.to_string().contains("NXnone.nxdl.xml"));
}

#[test]
fn given_broken_xml_when_loading_then_nxdl_error_names_file() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "NXbroken.nxdl.xml", "<definition name=\"NXbroken\">");

    let err = service().load_file(&path).unwrap_err();

    match err {
        ApplicationError::Nxdl { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected NXDL error, got {other:?}"),
    }
}

#[test]
fn given_nested_directory_when_finding_files_then_only_nxdl_sorted() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write(temp.path(), "b/NXb.nxdl.xml", &nxdl("NXb", ""));
    write(temp.path(), "a/NXa.nxdl.xml", &nxdl("NXa", ""));
    write(temp.path(), "README.md", "not a definition");
    write(temp.path(), "a/NXa.xml", "not a definition either");

    // Act
    let files = service().find_files(temp.path()).unwrap();

    // Assert
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![PathBuf::from("a/NXa.nxdl.xml"), PathBuf::from("b/NXb.nxdl.xml")]
    );
}

#[test]
fn given_missing_directory_when_finding_files_then_config_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = service().find_files(&missing).unwrap_err();

    match err {
        ApplicationError::Config { message } => {
            assert!(message.starts_with("NXDL directory not found"), "{message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_directory_with_broken_file_when_loading_dir_then_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "NXa.nxdl.xml", &nxdl("NXa", ""));
    write(temp.path(), "NXz.nxdl.xml", "<oops>");

    let err = service().load_dir(temp.path()).unwrap_err();

    assert!(matches!(err, ApplicationError::Nxdl { .. }), "{err:?}");
}

#[test]
fn given_directories_when_loading_into_registry_then_later_overrides_and_broken_skipped() {
    // Arrange
    let base = TempDir::new().unwrap();
    let overlay = TempDir::new().unwrap();
    write(
        base.path(),
        "NXwidget.nxdl.xml",
        &nxdl("NXwidget", r#"<field name="count" type="NX_INT"/>"#),
    );
    write(
        base.path(),
        "NXbroken.nxdl.xml",
        r#"<definition name="NXbroken"><field name="x"></definition>"#,
    );
    write(
        overlay.path(),
        "NXwidget.nxdl.xml",
        &nxdl("NXwidget", r#"<field name="count" type="NX_UINT"/>"#),
    );
    write(
        overlay.path(),
        "NXsample.nxdl.xml",
        &nxdl("NXsample", r#"<field name="colour"/>"#),
    );
    let mut registry = SchemaRegistry::builtin();
    let builtin = registry.len();

    // Act
    let report = service()
        .load_into(
            &mut registry,
            &[base.path().to_path_buf(), overlay.path().to_path_buf()],
        )
        .unwrap();

    // Assert
    assert_eq!(report.loaded, vec!["NXwidget", "NXsample", "NXwidget"]);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].0.ends_with("NXbroken.nxdl.xml"));
    assert!(!report.is_clean());
    assert_eq!(registry.len(), builtin + 1);
    let widget = registry.get("NXwidget").unwrap();
    assert_eq!(widget.field("count").unwrap().nx_type, NexusType::UInt);
    let sample = registry.get("NXsample").unwrap();
    assert!(sample.field("colour").is_some());
    assert!(sample.field("temperature").is_none(), "loaded NXDL replaces the builtin");
}

#[test]
fn given_missing_directory_when_loading_into_registry_then_error() {
    let temp = TempDir::new().unwrap();
    let mut registry = SchemaRegistry::empty();

    let err = service()
        .load_into(&mut registry, &[temp.path().join("missing")])
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(registry.is_empty());
}

#[test]
fn given_settings_with_nxdl_dirs_when_building_container_then_registry_extended() {
    // Arrange
    let defs = TempDir::new().unwrap();
    write(
        defs.path(),
        "NXwidget.nxdl.xml",
        &nxdl("NXwidget", r#"<field name="count" type="NX_INT"/>"#),
    );
    let settings = Settings {
        nxdl_dirs: vec![defs.path().to_path_buf(), defs.path().join("absent")],
        ..Settings::default()
    };

    // Act
    let container = ServiceContainer::new(settings).unwrap();

    // Assert
    assert!(container.registry.contains("NXwidget"));
    assert!(container.registry.contains("NXentry"));
    assert!(container.load_report.is_clean());
    let tree = container
        .tree_service()
        .build_from_strs(None, &["/entry:NXentry/w:NXwidget/count=3"])
        .unwrap();
    let report = container.validation_service().validate(&tree);
    assert!(!report.has_errors(), "{:?}", report.issues());
}
