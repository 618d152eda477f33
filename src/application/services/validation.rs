//! Tree validation service
//!
//! Checks a tree against the definitions in the schema registry and
//! collects findings instead of failing on the first one.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::path::is_recommended_name;
use crate::domain::{
    BaseClassDef, DataNode, Dataset, DomainError, FieldDef, IndexedKind, NexusObject, NexusPath,
    NexusType, Node, SchemaRegistry, Tree, TreeIndex,
};

/// Children of these classes are free-form.
const FREE_FORM_CLASSES: &[&str] = &["NXcollection", "NXparameters"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// One finding, addressed by plain tree path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, path: &str, severity: Severity, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            path: path.to_string(),
            severity,
            message: message.into(),
        });
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Findings at `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.path == path)
    }
}

/// Which optional checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Warn on fields whose unit category needs units but carry none
    pub require_units: bool,
    /// Report fields the parent class does not declare
    pub report_undeclared: bool,
    /// Warn on names outside the NXDL naming recommendation
    pub check_names: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_units: true,
            report_undeclared: false,
            check_names: true,
        }
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

/// Service for checking trees against base class definitions.
pub struct ValidationService {
    registry: Arc<SchemaRegistry>,
    options: ValidationOptions,
}

impl ValidationService {
    pub fn new(registry: Arc<SchemaRegistry>, options: ValidationOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    #[instrument(level = "debug", skip(self, tree), fields(tree = %tree.oid()))]
    pub fn validate(&self, tree: &Tree) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_group("/", tree.root(), &mut report);
        self.check_links(tree, &mut report);
        debug!(
            "validate: {} errors, {} warnings",
            report.error_count(),
            report.warning_count()
        );
        report
    }

    fn check_group(&self, path: &str, group: &dyn NexusObject, report: &mut ValidationReport) {
        let def = match group.class_name() {
            None => {
                report.push(path, Severity::Warning, "group has no NX_class attribute");
                None
            }
            Some(class) => {
                let def = self.registry.get(class);
                if def.is_none() {
                    report.push(path, Severity::Error, format!("unknown base class {class}"));
                }
                def.map(Arc::as_ref)
            }
        };

        for (name, node) in group.group().nodes() {
            let path = child_path(path, name);
            if self.options.check_names && !is_recommended_name(name) {
                report.push(
                    &path,
                    Severity::Warning,
                    format!("name '{name}' does not follow the NeXus naming rules"),
                );
            }
            match node {
                Node::Data(data) => {
                    if let Some(def) = def {
                        self.check_field(&path, def, name, data, report);
                    }
                }
                Node::Group(child) => {
                    if let Some(def) = def {
                        check_slot(&path, def, name, child.as_ref(), report);
                    }
                    self.check_group(&path, child.as_ref(), report);
                }
                Node::Symbolic(_) => {}
            }
        }
    }

    fn check_field(
        &self,
        path: &str,
        def: &BaseClassDef,
        name: &str,
        data: &DataNode,
        report: &mut ValidationReport,
    ) {
        let Some(field) = def.field(name) else {
            if self.options.report_undeclared {
                report.push(path, Severity::Info, format!("not declared by {}", def.name));
            }
            return;
        };
        if let Some(note) = &field.deprecated {
            report.push(path, Severity::Warning, format!("deprecated: {note}"));
        }
        if let Some(units) = field.units {
            if self.options.require_units && units.requires_units() && data.units().is_none() {
                report.push(
                    path,
                    Severity::Warning,
                    format!("missing units ({units}, e.g. {})", units.example()),
                );
            }
        }
        if let Some(dataset) = data.dataset() {
            check_values(path, field, dataset, report);
        }
    }

    fn check_links(&self, tree: &Tree, report: &mut ValidationReport) {
        let index = TreeIndex::build(tree);
        for (_, node) in index.iter() {
            if !matches!(node.data.kind, IndexedKind::Link { uri: None, .. }) {
                continue;
            }
            let Ok(path) = node.data.path.parse::<NexusPath>() else {
                continue;
            };
            match index.resolve(&path) {
                Ok(_) => {}
                Err(DomainError::LinkCycle(at)) => {
                    report.push(&node.data.path, Severity::Error, format!("link cycle at {at}"))
                }
                Err(DomainError::DanglingLink(target)) => report.push(
                    &node.data.path,
                    Severity::Error,
                    format!("link target {target} does not exist"),
                ),
                Err(e) => report.push(&node.data.path, Severity::Error, e.to_string()),
            }
        }
    }
}

fn check_slot(
    path: &str,
    def: &BaseClassDef,
    name: &str,
    child: &dyn NexusObject,
    report: &mut ValidationReport,
) {
    if let Some(slot) = def.group(name) {
        if let Some(note) = &slot.deprecated {
            report.push(path, Severity::Warning, format!("deprecated: {note}"));
        }
    }
    let Some(class) = child.class_name() else {
        return;
    };
    if !def.allows_group_class(class) && !FREE_FORM_CLASSES.contains(&def.name.as_str()) {
        report.push(
            path,
            Severity::Warning,
            format!("{class} is not a declared child of {}", def.name),
        );
    }
}

fn check_values(
    path: &str,
    field: &FieldDef,
    dataset: &Dataset,
    report: &mut ValidationReport,
) {
    let kind = dataset.kind();
    if !field.nx_type.accepts(kind) {
        report.push(
            path,
            Severity::Error,
            format!("{} field holds {} values", field.nx_type, kind),
        );
        return;
    }
    if !field.enumeration.is_empty() {
        if let Some(values) = dataset.as_slice::<String>() {
            for value in values.iter().filter(|v| !field.enumeration.contains(*v)) {
                report.push(
                    path,
                    Severity::Error,
                    format!(
                        "'{value}' is not one of {}",
                        field.enumeration.join(", ")
                    ),
                );
            }
        }
    }
    let ints = dataset.as_slice::<i64>().unwrap_or_default();
    match field.nx_type {
        NexusType::PosInt if ints.iter().any(|v| *v <= 0) => {
            report.push(path, Severity::Error, "NX_POSINT values must be positive")
        }
        NexusType::UInt if ints.iter().any(|v| *v < 0) => {
            report.push(path, Severity::Error, "NX_UINT values must not be negative")
        }
        _ => {}
    }
}
