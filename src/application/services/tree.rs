//! Tree building service
//!
//! Builds in-memory NeXus trees from textual node specs such as
//! `/entry:NXentry/sample:NXsample/temperature=300@K`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    DataNode, Dataset, DomainResult, LabelOptions, NexusBaseClass, NexusNodeFactory, NexusObject,
    NexusPath, NexusType, Node, Oid, SchemaRegistry, Tree, TreeIndex,
};

/// One node of a tree to build.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeSpec {
    /// `PATH` whose last segment names a class: an (empty) group
    Group(NexusPath),
    /// `PATH=VALUE[@UNITS]`: a field
    Value {
        path: NexusPath,
        raw: String,
        units: Option<String>,
    },
    /// `PATH->TARGET` or `PATH->FILE#TARGET`: a link
    Link {
        path: NexusPath,
        target: NexusPath,
        uri: Option<String>,
    },
}

impl NodeSpec {
    pub fn path(&self) -> &NexusPath {
        match self {
            NodeSpec::Group(path) => path,
            NodeSpec::Value { path, .. } => path,
            NodeSpec::Link { path, .. } => path,
        }
    }
}

fn looks_numeric(raw: &str) -> bool {
    raw.split(',').all(|item| item.trim().parse::<f64>().is_ok())
}

/// Split `VALUE@UNITS`. Units are only split off numeric values, so text
/// such as e-mail addresses stays intact.
fn split_units(raw: &str) -> (&str, Option<&str>) {
    match raw.rsplit_once('@') {
        Some((value, units))
            if !units.is_empty() && !units.contains(char::is_whitespace) && looks_numeric(value) =>
        {
            (value, Some(units))
        }
        _ => (raw, None),
    }
}

impl FromStr for NodeSpec {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ApplicationError::InvalidSpec {
            spec: s.to_string(),
            reason,
        };
        let parse_path = |raw: &str| raw.trim().parse::<NexusPath>().map_err(|e| invalid(e.to_string()));

        // The first of `=` and `->` separates the path, so values may
        // contain either.
        let link = s
            .split_once("->")
            .filter(|(path, _)| !path.contains('='));

        if let Some((path, target)) = link {
            let (uri, target) = match target.split_once('#') {
                Some((uri, target)) => (Some(uri.trim().to_string()), target),
                None => (None, target),
            };
            return Ok(NodeSpec::Link {
                path: parse_path(path)?,
                target: parse_path(target)?,
                uri,
            });
        }
        if let Some((path, raw)) = s.split_once('=') {
            let (value, units) = split_units(raw);
            return Ok(NodeSpec::Value {
                path: parse_path(path)?,
                raw: value.to_string(),
                units: units.map(str::to_string),
            });
        }
        let path = parse_path(s)?;
        match path.last() {
            Some(last) if last.class.is_some() => Ok(NodeSpec::Group(path)),
            _ => Err(invalid(
                "a group needs a class, e.g. /entry:NXentry".to_string(),
            )),
        }
    }
}

impl fmt::Display for NodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeSpec::Group(path) => write!(f, "{path}"),
            NodeSpec::Value { path, raw, units } => {
                write!(f, "{path}={raw}")?;
                if let Some(units) = units {
                    write!(f, "@{units}")?;
                }
                Ok(())
            }
            NodeSpec::Link { path, target, uri } => match uri {
                Some(uri) => write!(f, "{path}->{uri}#{target}"),
                None => write!(f, "{path}->{target}"),
            },
        }
    }
}

/// Service for assembling trees from node specs.
pub struct TreeService {
    registry: Arc<SchemaRegistry>,
    factory: NexusNodeFactory<'static>,
}

impl TreeService {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self::with_factory(registry, NexusNodeFactory::global())
    }

    pub fn with_factory(registry: Arc<SchemaRegistry>, factory: NexusNodeFactory<'static>) -> Self {
        Self { registry, factory }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Parse and apply `specs` to a fresh tree.
    #[instrument(level = "debug", skip(self, specs))]
    pub fn build_from_strs<S: AsRef<str>>(
        &self,
        uri: Option<&str>,
        specs: &[S],
    ) -> ApplicationResult<Tree> {
        let specs = specs
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<ApplicationResult<Vec<NodeSpec>>>()?;
        self.build(uri, &specs)
    }

    /// Apply `specs` in order to a fresh tree rooted at `NXroot`.
    pub fn build(&self, uri: Option<&str>, specs: &[NodeSpec]) -> ApplicationResult<Tree> {
        let mut tree = self.factory.create_tree(uri)?;
        for spec in specs {
            self.apply(&mut tree, spec)?;
        }
        debug!("build: applied {} specs to tree {}", specs.len(), tree.oid());
        Ok(tree)
    }

    /// Add the node described by `spec`, creating missing parent groups.
    ///
    /// A value or link replaces whatever node had the same path.
    pub fn apply(&self, tree: &mut Tree, spec: &NodeSpec) -> ApplicationResult<()> {
        debug!("apply: {}", spec);
        match spec {
            NodeSpec::Group(path) => {
                tree.ensure_group_with(path, |class| self.create_group(class))?;
            }
            NodeSpec::Value { path, raw, units } => {
                let node = self.data_node(tree, path, raw, units.as_deref())?;
                tree.set_node_with(path, Node::Data(node), |class| self.create_group(class))?;
            }
            NodeSpec::Link { path, target, uri } => {
                let link = self
                    .factory
                    .create_symbolic_node(target.clone(), uri.as_deref())?;
                tree.set_node_with(path, Node::Symbolic(link), |class| self.create_group(class))?;
            }
        }
        Ok(())
    }

    /// A group of `class`: typed when compiled in, a tagged `GroupNode` when
    /// only known from loaded NXDL.
    pub fn create_group(&self, class: &str) -> DomainResult<Box<dyn NexusObject>> {
        self.create_group_from(class, || self.factory.next_oid())
    }

    /// As [`TreeService::create_group`], carrying exactly `oid`.
    pub fn create_group_with_oid(
        &self,
        class: &str,
        oid: Oid,
    ) -> DomainResult<Box<dyn NexusObject>> {
        self.create_group_from(class, || Ok(oid))
    }

    fn create_group_from<F>(&self, class: &str, oid: F) -> DomainResult<Box<dyn NexusObject>>
    where
        F: FnOnce() -> DomainResult<Oid>,
    {
        match class.parse::<NexusBaseClass>() {
            Ok(class) => Ok(self.factory.create_with_oid(class, oid()?)),
            Err(_) if self.registry.contains(class) => Ok(Box::new(
                self.factory.create_group_node_with_oid(Some(class), oid()?),
            )),
            Err(e) => Err(e),
        }
    }

    fn data_node(
        &self,
        tree: &Tree,
        path: &NexusPath,
        raw: &str,
        units: Option<&str>,
    ) -> ApplicationResult<DataNode> {
        let dataset = match self.declared_field_type(tree, path) {
            Some(nx_type) => Dataset::parse(nx_type, raw)?,
            None => Dataset::infer(raw),
        };
        let mut node = self.factory.create_data_node()?;
        node.set_dataset(dataset);
        if let Some(units) = units {
            node.set_units(units);
        }
        Ok(node)
    }

    /// Type of the field at `path` as declared by its parent's class.
    fn declared_field_type(&self, tree: &Tree, path: &NexusPath) -> Option<NexusType> {
        let parent = path.parent()?;
        let name = &path.last()?.name;
        let class = match parent.last() {
            Some(segment) if segment.class.is_some() => segment.class.clone(),
            _ => tree
                .group_at(&parent)
                .and_then(|g| g.class_name().map(str::to_string)),
        }?;
        let def = self.registry.get(&class)?;
        def.field(name).map(|f| f.nx_type)
    }

    /// Text rendering of `tree`, one line per node.
    pub fn render(&self, tree: &Tree, options: LabelOptions) -> String {
        TreeIndex::build(tree).to_termtree(options).to_string()
    }
}
