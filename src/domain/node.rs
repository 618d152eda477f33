//! Tree primitives: groups, data nodes, links and trees.
//!
//! Groups own their children by name. Typed base classes wrap a [`GroupNode`]
//! and are stored behind [`NexusObject`], so typed lookups downcast.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::domain::base_class::NexusBaseClass;
use crate::domain::dataset::Dataset;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::oid::{next_oid, Oid};
use crate::domain::path::{validate_name, NexusPath};
use crate::domain::types::NexusValue;

/// Attribute carrying the class name of a group.
pub const NX_CLASS: &str = "NX_class";
/// Attribute carrying the unit string of a field.
pub const UNITS: &str = "units";

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    value: Dataset,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Dataset) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn scalar<T: NexusValue>(name: impl Into<String>, value: T) -> Self {
        Self::new(name, Dataset::scalar(value))
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::scalar(name, value.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Dataset {
        &self.value
    }

    pub fn first<T: NexusValue>(&self) -> Option<T> {
        self.value.first()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// A leaf holding a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DataNode {
    oid: Oid,
    dataset: Option<Dataset>,
    attributes: BTreeMap<String, Attribute>,
}

impl DataNode {
    pub fn new() -> DomainResult<Self> {
        Ok(Self::with_oid(next_oid()?))
    }

    pub fn with_oid(oid: Oid) -> Self {
        Self {
            oid,
            dataset: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_dataset(oid: Oid, dataset: Dataset) -> Self {
        Self {
            dataset: Some(dataset),
            ..Self::with_oid(oid)
        }
    }

    pub fn oid(&self) -> Oid {
        self.oid
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn set_dataset(&mut self, dataset: Dataset) -> Option<Dataset> {
        self.dataset.replace(dataset)
    }

    pub fn take_dataset(&mut self) -> Option<Dataset> {
        self.dataset.take()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.name.clone(), attribute)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn units(&self) -> Option<&str> {
        self.attribute(UNITS).and_then(Attribute::as_str)
    }

    pub fn set_units(&mut self, units: impl Into<String>) {
        self.set_attribute(Attribute::text(UNITS, units));
    }
}

/// A link to another node, possibly in an external file.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolicNode {
    oid: Oid,
    target: NexusPath,
    uri: Option<String>,
}

impl SymbolicNode {
    pub fn new(oid: Oid, target: NexusPath, uri: Option<String>) -> Self {
        Self { oid, target, uri }
    }

    pub fn oid(&self) -> Oid {
        self.oid
    }

    pub fn target(&self) -> &NexusPath {
        &self.target
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn is_external(&self) -> bool {
        self.uri.is_some()
    }
}

/// Any node stored in a group.
#[derive(Debug)]
pub enum Node {
    Data(DataNode),
    Group(Box<dyn NexusObject>),
    Symbolic(SymbolicNode),
}

impl Node {
    pub fn oid(&self) -> Oid {
        match self {
            Node::Data(d) => d.oid(),
            Node::Group(g) => g.oid(),
            Node::Symbolic(s) => s.oid(),
        }
    }

    pub fn as_data(&self) -> Option<&DataNode> {
        match self {
            Node::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&dyn NexusObject> {
        match self {
            Node::Group(g) => Some(g.as_ref()),
            _ => None,
        }
    }

    pub fn as_symbolic(&self) -> Option<&SymbolicNode> {
        match self {
            Node::Symbolic(s) => Some(s),
            _ => None,
        }
    }
}

/// Borrowed view of a node found in a tree, including the root group.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Group(&'a dyn NexusObject),
    Data(&'a DataNode),
    Symbolic(&'a SymbolicNode),
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Data(d) => NodeRef::Data(d),
            Node::Group(g) => NodeRef::Group(g.as_ref()),
            Node::Symbolic(s) => NodeRef::Symbolic(s),
        }
    }
}

impl<'a> NodeRef<'a> {
    pub fn oid(&self) -> Oid {
        match self {
            NodeRef::Group(g) => g.oid(),
            NodeRef::Data(d) => d.oid(),
            NodeRef::Symbolic(s) => s.oid(),
        }
    }
}

/// A group in the tree, typed or not.
///
/// Implemented by [`GroupNode`] and every generated base class.
pub trait NexusObject: Any + Send + Sync + fmt::Debug {
    /// The compiled base class of this object, if any.
    fn nexus_class(&self) -> Option<NexusBaseClass>;

    fn group(&self) -> &GroupNode;

    fn group_mut(&mut self) -> &mut GroupNode;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<'a> dyn NexusObject + 'a {
    pub fn oid(&self) -> Oid {
        self.group().oid()
    }

    /// Value of the `NX_class` attribute.
    pub fn class_name(&self) -> Option<&str> {
        self.group().nx_class()
    }

    pub fn is<T: NexusObject>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: NexusObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: NexusObject>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// An untyped group: attributes plus named children.
#[derive(Debug)]
pub struct GroupNode {
    oid: Oid,
    attributes: BTreeMap<String, Attribute>,
    nodes: BTreeMap<String, Node>,
}

impl GroupNode {
    pub fn new() -> DomainResult<Self> {
        Ok(Self::with_oid(next_oid()?))
    }

    pub fn with_oid(oid: Oid) -> Self {
        Self {
            oid,
            attributes: BTreeMap::new(),
            nodes: BTreeMap::new(),
        }
    }

    /// An untyped group tagged with `class` in its `NX_class` attribute.
    pub fn with_class(oid: Oid, class: &str) -> Self {
        let mut group = Self::with_oid(oid);
        group.set_nx_class(class);
        group
    }

    pub fn oid(&self) -> Oid {
        self.oid
    }

    pub fn nx_class(&self) -> Option<&str> {
        self.attribute(NX_CLASS).and_then(Attribute::as_str)
    }

    pub fn set_nx_class(&mut self, class: &str) {
        self.set_attribute(Attribute::text(NX_CLASS, class));
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.name.clone(), attribute)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }

    /// Store `node` under `name`, returning the node it replaces.
    #[instrument(level = "trace", skip(self, node))]
    pub fn add_node(&mut self, name: &str, node: Node) -> DomainResult<Option<Node>> {
        validate_name(name)?;
        Ok(self.nodes.insert(name.to_string(), node))
    }

    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.nodes.remove(name)
    }

    pub fn data_node(&self, name: &str) -> Option<&DataNode> {
        self.node(name).and_then(Node::as_data)
    }

    pub fn data_node_mut(&mut self, name: &str) -> Option<&mut DataNode> {
        match self.nodes.get_mut(name) {
            Some(Node::Data(d)) => Some(d),
            _ => None,
        }
    }

    pub fn add_data_node(&mut self, name: &str, node: DataNode) -> DomainResult<Option<Node>> {
        self.add_node(name, Node::Data(node))
    }

    pub fn data_nodes(&self) -> impl Iterator<Item = (&str, &DataNode)> {
        self.nodes()
            .filter_map(|(name, node)| node.as_data().map(|d| (name, d)))
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.data_node(name).and_then(DataNode::dataset)
    }

    /// Replace the dataset of field `name`, creating the data node if needed.
    ///
    /// Attributes of an existing data node are kept. A new data node draws
    /// its oid from the global generator; use [`GroupNode::set_dataset_with`]
    /// for trees built by a factory with a private generator.
    pub fn set_dataset(&mut self, name: &str, dataset: Dataset) -> DomainResult<&mut DataNode> {
        self.set_dataset_with(name, dataset, next_oid)
    }

    /// As [`GroupNode::set_dataset`], drawing the oid of a new data node from
    /// `oid`. Nothing is drawn when the field already exists.
    pub fn set_dataset_with<F>(
        &mut self,
        name: &str,
        dataset: Dataset,
        oid: F,
    ) -> DomainResult<&mut DataNode>
    where
        F: FnOnce() -> DomainResult<Oid>,
    {
        if self.data_node(name).is_none() {
            self.add_data_node(name, DataNode::with_oid(oid()?))?;
        }
        let node = self
            .data_node_mut(name)
            .ok_or_else(|| DomainError::NodeNotFound(name.to_string()))?;
        node.set_dataset(dataset);
        Ok(node)
    }

    pub fn group_node(&self, name: &str) -> Option<&dyn NexusObject> {
        self.node(name).and_then(Node::as_group)
    }

    pub fn group_node_mut(&mut self, name: &str) -> Option<&mut dyn NexusObject> {
        match self.nodes.get_mut(name) {
            Some(Node::Group(g)) => Some(g.as_mut()),
            _ => None,
        }
    }

    pub fn add_group_node(
        &mut self,
        name: &str,
        group: Box<dyn NexusObject>,
    ) -> DomainResult<Option<Node>> {
        self.add_node(name, Node::Group(group))
    }

    pub fn group_nodes(&self) -> impl Iterator<Item = (&str, &dyn NexusObject)> {
        self.nodes()
            .filter_map(|(name, node)| node.as_group().map(|g| (name, g)))
    }

    pub fn symbolic_node(&self, name: &str) -> Option<&SymbolicNode> {
        self.node(name).and_then(Node::as_symbolic)
    }

    pub fn add_symbolic_node(
        &mut self,
        name: &str,
        link: SymbolicNode,
    ) -> DomainResult<Option<Node>> {
        self.add_node(name, Node::Symbolic(link))
    }

    /// Child group `name`, if it is a `T`.
    pub fn child<T: NexusObject>(&self, name: &str) -> Option<&T> {
        self.group_node(name).and_then(|g| g.downcast_ref::<T>())
    }

    pub fn child_mut<T: NexusObject>(&mut self, name: &str) -> Option<&mut T> {
        self.group_node_mut(name).and_then(|g| g.downcast_mut::<T>())
    }

    /// Every child group that is a `T`, with its name.
    pub fn children_of<T: NexusObject>(&self) -> impl Iterator<Item = (&str, &T)> {
        self.group_nodes()
            .filter_map(|(name, g)| g.downcast_ref::<T>().map(|t| (name, t)))
    }
}

impl NexusObject for GroupNode {
    fn nexus_class(&self) -> Option<NexusBaseClass> {
        self.nx_class().and_then(|name| name.parse().ok())
    }

    fn group(&self) -> &GroupNode {
        self
    }

    fn group_mut(&mut self) -> &mut GroupNode {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An in-memory NeXus tree rooted at a group.
#[derive(Debug)]
pub struct Tree {
    oid: Oid,
    root: Box<dyn NexusObject>,
    source: Option<String>,
}

impl Tree {
    pub fn new(oid: Oid, root: Box<dyn NexusObject>, source: Option<String>) -> Self {
        Self { oid, root, source }
    }

    pub fn oid(&self) -> Oid {
        self.oid
    }

    /// URI the tree was created for, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn root(&self) -> &dyn NexusObject {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> &mut dyn NexusObject {
        self.root.as_mut()
    }

    pub fn into_root(self) -> Box<dyn NexusObject> {
        self.root
    }

    /// The node at `path`, without following links.
    pub fn find(&self, path: &NexusPath) -> Option<NodeRef<'_>> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Some(NodeRef::Group(self.root()));
        };
        let mut current = self.root();
        for segment in parents {
            current = current.group().group_node(&segment.name)?;
        }
        current.group().node(&last.name).map(NodeRef::from)
    }

    pub fn group_at(&self, path: &NexusPath) -> Option<&dyn NexusObject> {
        match self.find(path)? {
            NodeRef::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn group_at_mut(&mut self, path: &NexusPath) -> Option<&mut dyn NexusObject> {
        let mut current: &mut dyn NexusObject = self.root.as_mut();
        for segment in path.segments() {
            current = current.group_mut().group_node_mut(&segment.name)?;
        }
        Some(current)
    }

    /// Walk `path`, creating missing groups from the classes on the path.
    #[instrument(level = "debug", skip(self, path, create), fields(path = %path))]
    pub fn ensure_group_with<F>(
        &mut self,
        path: &NexusPath,
        mut create: F,
    ) -> DomainResult<&mut dyn NexusObject>
    where
        F: FnMut(&str) -> DomainResult<Box<dyn NexusObject>>,
    {
        let mut current: &mut dyn NexusObject = self.root.as_mut();
        let mut walked = NexusPath::root();
        for segment in path.segments() {
            walked = walked.join(segment.clone());
            let group = current.group_mut();
            if !group.contains(&segment.name) {
                let class = segment
                    .class
                    .as_deref()
                    .ok_or_else(|| DomainError::MissingClass(walked.to_string()))?;
                debug!("creating {} at {}", class, walked);
                group.add_group_node(&segment.name, create(class)?)?;
            }
            current = match group.node_mut(&segment.name) {
                Some(Node::Group(child)) => {
                    if let Some(expected) = &segment.class {
                        let found = child.class_name().unwrap_or_default();
                        if found != expected {
                            return Err(DomainError::ClassMismatch {
                                path: walked.to_plain_string(),
                                expected: expected.clone(),
                                found: found.to_string(),
                            });
                        }
                    }
                    child.as_mut()
                }
                Some(_) => return Err(DomainError::NotAGroup(walked.to_plain_string())),
                None => return Err(DomainError::NodeNotFound(walked.to_plain_string())),
            };
        }
        Ok(current)
    }

    /// Store `node` at `path`, creating parent groups as needed.
    pub fn set_node_with<F>(
        &mut self,
        path: &NexusPath,
        node: Node,
        create: F,
    ) -> DomainResult<Option<Node>>
    where
        F: FnMut(&str) -> DomainResult<Box<dyn NexusObject>>,
    {
        let (parent, last) = match (path.parent(), path.last()) {
            (Some(parent), Some(last)) => (parent, last),
            _ => {
                return Err(DomainError::InvalidPath {
                    path: path.to_string(),
                    reason: "path has no node name".to_string(),
                })
            }
        };
        let group = self.ensure_group_with(&parent, create)?;
        group.group_mut().add_node(&last.name, node)
    }
}

/// A tree associated with a file name.
#[derive(Debug)]
pub struct TreeFile {
    tree: Tree,
    filename: PathBuf,
}

impl TreeFile {
    pub fn new(tree: Tree, filename: impl Into<PathBuf>) -> Self {
        Self {
            tree,
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }
}

impl Deref for TreeFile {
    type Target = Tree;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl DerefMut for TreeFile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oid::OidGenerator;

    fn group(oid: u64) -> GroupNode {
        GroupNode::with_oid(Oid::new(oid))
    }

    #[test]
    fn given_existing_name_when_adding_node_then_replaces_and_returns_old() {
        let mut g = group(1);
        g.add_data_node("x", DataNode::with_oid(Oid::new(2))).unwrap();

        let old = g.add_data_node("x", DataNode::with_oid(Oid::new(3))).unwrap();

        assert_eq!(old.unwrap().oid(), Oid::new(2));
        assert_eq!(g.data_node("x").unwrap().oid(), Oid::new(3));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn given_invalid_name_when_adding_node_then_fails() {
        let mut g = group(1);
        let err = g
            .add_data_node("a/b", DataNode::with_oid(Oid::new(2)))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn given_field_with_units_when_replacing_dataset_then_keeps_attributes() {
        let mut g = group(1);
        g.set_dataset("distance", Dataset::scalar(1.0)).unwrap().set_units("mm");

        g.set_dataset("distance", Dataset::scalar(2.0)).unwrap();

        let node = g.data_node("distance").unwrap();
        assert_eq!(node.units(), Some("mm"));
        assert_eq!(node.dataset().unwrap().first::<f64>(), Some(2.0));
    }

    #[test]
    fn given_private_generator_when_setting_dataset_then_new_field_draws_from_it() {
        // Arrange
        let oids = OidGenerator::starting_at(100);
        let mut g = group(1);

        // Act
        g.set_dataset_with("x", Dataset::scalar(1.0), || oids.next_oid())
            .unwrap();
        g.set_dataset_with("x", Dataset::scalar(2.0), || oids.next_oid())
            .unwrap();

        // Assert
        assert_eq!(g.data_node("x").unwrap().oid(), Oid::new(100));
        assert_eq!(oids.peek(), 101, "replacing an existing field draws nothing");
    }

    #[test]
    fn given_group_with_class_attribute_when_asking_class_then_parses_it() {
        let g = GroupNode::with_class(Oid::new(1), "NXsample");
        assert_eq!(g.nexus_class(), Some(NexusBaseClass::NXsample));
        let custom = GroupNode::with_class(Oid::new(2), "NXsomething_new");
        assert_eq!(custom.nexus_class(), None);
        assert_eq!(custom.nx_class(), Some("NXsomething_new"));
    }

    #[test]
    fn given_nested_groups_when_finding_path_then_returns_node() {
        let mut inner = group(2);
        inner
            .add_data_node("value", DataNode::with_dataset(Oid::new(3), Dataset::scalar(7_i64)))
            .unwrap();
        let mut root = group(1);
        root.add_group_node("inner", Box::new(inner)).unwrap();
        let tree = Tree::new(Oid::new(10), Box::new(root), None);

        let found = tree.find(&"/inner/value".parse().unwrap()).unwrap();
        assert!(matches!(found, NodeRef::Data(d) if d.oid() == Oid::new(3)));
        assert!(tree.find(&"/inner/missing".parse().unwrap()).is_none());
        assert!(tree.group_at(&"/inner".parse().unwrap()).is_some());
        assert!(tree.group_at(&"/inner/value".parse().unwrap()).is_none());
    }

    #[test]
    fn given_path_without_class_when_ensuring_missing_group_then_fails() {
        let mut tree = Tree::new(Oid::new(1), Box::new(group(2)), None);
        let err = tree
            .ensure_group_with(&"/entry".parse().unwrap(), |_| unreachable!())
            .unwrap_err();
        assert_eq!(err, DomainError::MissingClass("/entry".into()));
    }

    #[test]
    fn given_data_node_on_path_when_ensuring_group_then_reports_not_a_group() {
        let mut root = group(1);
        root.add_data_node("entry", DataNode::with_oid(Oid::new(2))).unwrap();
        let mut tree = Tree::new(Oid::new(3), Box::new(root), None);

        let err = tree
            .ensure_group_with(&"/entry:NXentry".parse().unwrap(), |_| unreachable!())
            .unwrap_err();

        assert_eq!(err, DomainError::NotAGroup("/entry".into()));
    }
}
