//! Validation of trees against base class definitions

use std::sync::Arc;

use rstest::rstest;

use nxbind::application::services::{
    Severity, TreeService, ValidationOptions, ValidationReport, ValidationService,
};
use nxbind::domain::{
    parse_nxdl, Dataset, NexusNodeFactory, NexusObject, NexusPath, SchemaRegistry, Tree,
};

const NXCOUNTER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definition name="NXcounter" extends="NXobject" type="group" category="contributed">
    <doc>Event counter.</doc>
    <field name="total" type="NX_UINT" units="NX_UNITLESS"/>
</definition>
"#;

fn registry() -> Arc<SchemaRegistry> {
    let mut registry = SchemaRegistry::builtin();
    registry.register(parse_nxdl(NXCOUNTER).unwrap());
    Arc::new(registry)
}

fn build(specs: &[&str]) -> Tree {
    TreeService::new(registry()).build_from_strs(None, specs).unwrap()
}

fn validate_with(tree: &Tree, options: ValidationOptions) -> ValidationReport {
    ValidationService::new(registry(), options).validate(tree)
}

fn validate(tree: &Tree) -> ValidationReport {
    validate_with(tree, ValidationOptions::default())
}

fn messages(report: &ValidationReport, path: &str) -> Vec<(Severity, String)> {
    report
        .at(path)
        .map(|i| (i.severity, i.message.clone()))
        .collect()
}

/// A tree whose groups are created by name and whose datasets bypass typing.
fn raw_tree(groups: &str, field: &str, dataset: Dataset) -> Tree {
    let factory = NexusNodeFactory::global();
    let mut tree = factory.create_tree(None).unwrap();
    let path: NexusPath = groups.parse().unwrap();
    let group = tree
        .ensure_group_with(&path, |class| factory.create_by_name(class))
        .unwrap();
    group.group_mut().set_dataset(field, dataset).unwrap();
    tree
}

#[test]
fn given_well_formed_tree_when_validating_then_clean() {
    // Arrange
    let tree = build(&[
        "/entry:NXentry/title=powder",
        "/entry/sample:NXsample/temperature=300@K",
        "/entry/instrument:NXinstrument/crystal:NXcrystal/usage=Bragg",
        "/entry/plot->/entry/sample",
    ]);

    // Act
    let report = validate(&tree);

    // Assert
    assert!(report.is_clean(), "{:?}", report.issues());
    assert!(!report.has_errors());
}

#[test]
fn given_missing_units_when_validating_then_warning() {
    let tree = build(&["/entry:NXentry/sample:NXsample/temperature=300"]);

    let report = validate(&tree);

    let found = messages(&report, "/entry/sample/temperature");
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].0, Severity::Warning);
    assert!(found[0].1.starts_with("missing units (NX_TEMPERATURE"), "{}", found[0].1);
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
}

#[test]
fn given_units_not_required_when_validating_then_no_units_warning() {
    let tree = build(&["/entry:NXentry/sample:NXsample/temperature=300"]);
    let options = ValidationOptions {
        require_units: false,
        ..ValidationOptions::default()
    };

    let report = validate_with(&tree, options);

    assert!(report.is_clean(), "{:?}", report.issues());
}

#[test]
fn given_unitless_category_when_validating_then_units_not_expected() {
    let tree = build(&["/entry:NXentry/sample:NXsample/changer_position=3"]);

    assert!(validate(&tree).is_clean());
}

#[test]
fn given_unknown_class_when_validating_then_error() {
    // Arrange
    let factory = NexusNodeFactory::global();
    let mut tree = factory.create_tree(None).unwrap();
    let widget = factory.create_group_node(Some("NXwidget")).unwrap();
    tree.root_mut()
        .group_mut()
        .add_group_node("widget", Box::new(widget))
        .unwrap();

    // Act
    let report = validate(&tree);

    // Assert
    let found = messages(&report, "/widget");
    assert!(found.contains(&(Severity::Error, "unknown base class NXwidget".to_string())));
    assert!(found.contains(&(
        Severity::Warning,
        "NXwidget is not a declared child of NXroot".to_string()
    )));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn given_group_without_class_when_validating_then_warning() {
    let factory = NexusNodeFactory::global();
    let mut tree = factory.create_tree(None).unwrap();
    let bare = factory.create_group_node(None).unwrap();
    tree.root_mut()
        .group_mut()
        .add_group_node("loose", Box::new(bare))
        .unwrap();

    let report = validate(&tree);

    assert_eq!(
        messages(&report, "/loose"),
        vec![(Severity::Warning, "group has no NX_class attribute".to_string())]
    );
}

#[rstest]
#[case(Dataset::scalar("hot".to_string()), "NX_FLOAT field holds string values")]
#[case(Dataset::scalar(true), "NX_FLOAT field holds bool values")]
fn given_wrong_kind_when_validating_then_error(#[case] dataset: Dataset, #[case] message: &str) {
    let tree = raw_tree("/entry:NXentry/sample:NXsample", "temperature", dataset);

    let report = validate_with(
        &tree,
        ValidationOptions {
            require_units: false,
            ..ValidationOptions::default()
        },
    );

    assert_eq!(
        messages(&report, "/entry/sample/temperature"),
        vec![(Severity::Error, message.to_string())]
    );
}

#[test]
fn given_value_outside_enumeration_when_validating_then_error() {
    let tree = build(&["/entry:NXentry/instrument:NXinstrument/crystal:NXcrystal/usage=Neither"]);

    let report = validate(&tree);

    assert_eq!(
        messages(&report, "/entry/instrument/crystal/usage"),
        vec![(
            Severity::Error,
            "'Neither' is not one of Bragg, Laue".to_string()
        )]
    );
}

#[rstest]
#[case("0", true)]
#[case("-4", true)]
#[case("1, 2, 0", true)]
#[case("3", false)]
fn given_posint_field_when_validating_then_non_positive_is_error(
    #[case] raw: &str,
    #[case] rejected: bool,
) {
    let tree = build(&[&format!("/entry:NXentry/notes:NXnote/sequence_index={raw}")]);

    let report = validate(&tree);

    let found = messages(&report, "/entry/notes/sequence_index");
    if rejected {
        assert_eq!(
            found,
            vec![(Severity::Error, "NX_POSINT values must be positive".to_string())]
        );
    } else {
        assert!(found.is_empty(), "{found:?}");
    }
}

#[test]
fn given_negative_value_in_uint_field_when_validating_then_error() {
    // Arrange
    let registry = registry();
    let factory = NexusNodeFactory::global();
    let mut tree = factory.create_tree(None).unwrap();
    let path: NexusPath = "/entry:NXentry/counter:NXcounter".parse().unwrap();
    let counter = tree
        .ensure_group_with(&path, |class| match factory.create_by_name(class) {
            Ok(group) => Ok(group),
            Err(_) => Ok(Box::new(factory.create_group_node(Some(class))?) as Box<dyn NexusObject>),
        })
        .unwrap();
    counter
        .group_mut()
        .set_dataset("total", Dataset::from_vec(vec![5_i64, -1]))
        .unwrap();

    // Act
    let report = ValidationService::new(registry, ValidationOptions::default()).validate(&tree);

    // Assert
    assert_eq!(
        messages(&report, "/entry/counter/total"),
        vec![(Severity::Error, "NX_UINT values must not be negative".to_string())]
    );
    assert!(report
        .at("/entry/counter")
        .any(|i| i.message == "NXcounter is not a declared child of NXentry"));
}

#[test]
fn given_uint_field_built_from_specs_when_validating_then_clean() {
    let tree = build(&["/entry:NXentry/counter:NXcounter/total=7"]);

    let report = validate(&tree);

    assert!(messages(&report, "/entry/counter/total").is_empty());
}

#[test]
fn given_deprecated_field_when_validating_then_warning() {
    let tree = build(&["/entry:NXentry/definition_local=NXmx"]);

    let report = validate(&tree);

    assert_eq!(
        messages(&report, "/entry/definition_local"),
        vec![(
            Severity::Warning,
            "deprecated: see same entry in NXentry/definition".to_string()
        )]
    );
}

#[test]
fn given_deprecated_slot_when_validating_then_warning() {
    let tree = build(&["/entry:NXentry/sample:NXsample/geometry:NXgeometry"]);

    let report = validate(&tree);

    let found = messages(&report, "/entry/sample/geometry");
    assert_eq!(found.len(), 1, "{found:?}");
    assert_eq!(found[0].0, Severity::Warning);
    assert!(found[0].1.starts_with("deprecated: "));
}

#[test]
fn given_undeclared_field_when_reporting_undeclared_then_info() {
    let tree = build(&["/entry:NXentry/operator=jane"]);
    let options = ValidationOptions {
        report_undeclared: true,
        ..ValidationOptions::default()
    };

    let quiet = validate(&tree);
    let verbose = validate_with(&tree, options);

    assert!(quiet.is_clean());
    assert_eq!(
        messages(&verbose, "/entry/operator"),
        vec![(Severity::Info, "not declared by NXentry".to_string())]
    );
    assert!(!verbose.has_errors());
    assert_eq!(verbose.warning_count(), 0);
}

#[test]
fn given_discouraged_name_when_validating_then_warning_unless_disabled() {
    let tree = build(&["/entry:NXentry/my-note:NXnote"]);

    let checked = validate(&tree);
    let unchecked = validate_with(
        &tree,
        ValidationOptions {
            check_names: false,
            ..ValidationOptions::default()
        },
    );

    assert_eq!(
        messages(&checked, "/entry/my-note"),
        vec![(
            Severity::Warning,
            "name 'my-note' does not follow the NeXus naming rules".to_string()
        )]
    );
    assert!(unchecked.is_clean());
}

#[test]
fn given_free_form_parent_when_validating_then_any_child_class_allowed() {
    let tree = build(&[
        "/entry:NXentry/collection:NXcollection/crystal:NXcrystal",
        "/entry/sample:NXsample/crystal:NXcrystal",
    ]);

    let report = validate(&tree);

    assert!(messages(&report, "/entry/collection/crystal").is_empty());
    assert_eq!(
        messages(&report, "/entry/sample/crystal"),
        vec![(
            Severity::Warning,
            "NXcrystal is not a declared child of NXsample".to_string()
        )]
    );
}

#[test]
fn given_dangling_link_when_validating_then_error() {
    let tree = build(&["/entry:NXentry", "/entry/plot->/entry/missing"]);

    let report = validate(&tree);

    assert_eq!(
        messages(&report, "/entry/plot"),
        vec![(
            Severity::Error,
            "link target /entry/missing does not exist".to_string()
        )]
    );
}

#[test]
fn given_link_cycle_when_validating_then_error_on_each_link() {
    let tree = build(&["/entry:NXentry", "/entry/a->/entry/b", "/entry/b->/entry/a"]);

    let report = validate(&tree);

    assert_eq!(report.error_count(), 2, "{:?}", report.issues());
    assert_eq!(
        messages(&report, "/entry/a"),
        vec![(Severity::Error, "link cycle at /entry/a".to_string())]
    );
    assert_eq!(
        messages(&report, "/entry/b"),
        vec![(Severity::Error, "link cycle at /entry/b".to_string())]
    );
}

#[test]
fn given_external_link_when_validating_then_not_resolved() {
    let tree = build(&["/entry:NXentry", "/entry/remote->other.nxs#/entry/missing"]);

    assert!(validate(&tree).is_clean());
}

#[test]
fn given_issue_when_displayed_then_shows_severity_path_and_message() {
    let tree = build(&["/entry:NXentry/sample:NXsample/temperature=300"]);

    let report = validate(&tree);

    let text = report.issues()[0].to_string();
    assert!(
        text.starts_with("warning: /entry/sample/temperature: missing units"),
        "{text}"
    );
}
