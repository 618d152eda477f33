//! Creation of empty nodes and trees with fresh oids.

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::domain::base_class::NexusBaseClass;
use crate::domain::classes::{BaseClass, NXroot};
use crate::domain::error::DomainResult;
use crate::domain::node::{DataNode, GroupNode, NexusObject, SymbolicNode, Tree, TreeFile};
use crate::domain::oid::{global_oids, Oid, OidGenerator};
use crate::domain::path::NexusPath;

/// Creates typed base class instances and tree primitives.
///
/// Every `create*` call without an explicit oid draws the next one from the
/// factory's generator. [`NexusNodeFactory::global`] shares the process-wide
/// generator, so oids stay unique across factories built that way.
#[derive(Debug, Clone, Copy)]
pub struct NexusNodeFactory<'a> {
    oids: &'a OidGenerator,
}

impl Default for NexusNodeFactory<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl NexusNodeFactory<'static> {
    pub fn global() -> Self {
        Self {
            oids: global_oids(),
        }
    }
}

impl<'a> NexusNodeFactory<'a> {
    pub fn with_generator(oids: &'a OidGenerator) -> Self {
        Self { oids }
    }

    pub fn next_oid(&self) -> DomainResult<Oid> {
        self.oids.next_oid()
    }

    /// A new empty instance of `class`.
    #[instrument(level = "trace", skip(self))]
    pub fn create(&self, class: NexusBaseClass) -> DomainResult<Box<dyn NexusObject>> {
        let oid = self.next_oid()?;
        Ok(self.create_with_oid(class, oid))
    }

    pub fn create_with_oid(&self, class: NexusBaseClass, oid: Oid) -> Box<dyn NexusObject> {
        debug!("creating {} with oid {}", class, oid);
        class.instantiate(oid)
    }

    /// Like [`create`](Self::create), resolving the class from its name.
    ///
    /// Fails with `UnknownBaseClass` before any oid is drawn.
    pub fn create_by_name(&self, name: &str) -> DomainResult<Box<dyn NexusObject>> {
        let class = name.parse::<NexusBaseClass>()?;
        self.create(class)
    }

    pub fn create_by_name_with_oid(
        &self,
        name: &str,
        oid: Oid,
    ) -> DomainResult<Box<dyn NexusObject>> {
        let class = name.parse::<NexusBaseClass>()?;
        Ok(self.create_with_oid(class, oid))
    }

    /// A new instance of `T` without boxing.
    pub fn create_typed<T: BaseClass>(&self) -> DomainResult<T> {
        Ok(T::with_oid(self.next_oid()?))
    }

    /// A tree for `uri` with an empty `NXroot` as its root group.
    pub fn create_tree(&self, uri: Option<&str>) -> DomainResult<Tree> {
        let oid = self.next_oid()?;
        let root = self.create_typed::<NXroot>()?;
        Ok(self.create_tree_with_oid(oid, Box::new(root), uri))
    }

    pub fn create_tree_with_oid(
        &self,
        oid: Oid,
        root: Box<dyn NexusObject>,
        uri: Option<&str>,
    ) -> Tree {
        Tree::new(oid, root, uri.map(str::to_string))
    }

    pub fn create_tree_file(&self, filename: impl Into<PathBuf>) -> DomainResult<TreeFile> {
        let filename = filename.into();
        let tree = self.create_tree(filename.to_str())?;
        Ok(TreeFile::new(tree, filename))
    }

    pub fn create_tree_file_with_oid(
        &self,
        oid: Oid,
        root: Box<dyn NexusObject>,
        filename: impl Into<PathBuf>,
    ) -> TreeFile {
        let filename = filename.into();
        let tree = self.create_tree_with_oid(oid, root, filename.to_str());
        TreeFile::new(tree, filename)
    }

    pub fn create_data_node(&self) -> DomainResult<DataNode> {
        Ok(DataNode::with_oid(self.next_oid()?))
    }

    pub fn create_data_node_with_oid(&self, oid: Oid) -> DataNode {
        DataNode::with_oid(oid)
    }

    /// An untyped group, optionally tagged with an `NX_class`.
    pub fn create_group_node(&self, class: Option<&str>) -> DomainResult<GroupNode> {
        let oid = self.next_oid()?;
        Ok(self.create_group_node_with_oid(class, oid))
    }

    pub fn create_group_node_with_oid(&self, class: Option<&str>, oid: Oid) -> GroupNode {
        match class {
            Some(class) => GroupNode::with_class(oid, class),
            None => GroupNode::with_oid(oid),
        }
    }

    pub fn create_symbolic_node(
        &self,
        target: NexusPath,
        uri: Option<&str>,
    ) -> DomainResult<SymbolicNode> {
        let oid = self.next_oid()?;
        Ok(self.create_symbolic_node_with_oid(target, uri, oid))
    }

    pub fn create_symbolic_node_with_oid(
        &self,
        target: NexusPath,
        uri: Option<&str>,
        oid: Oid,
    ) -> SymbolicNode {
        SymbolicNode::new(oid, target, uri.map(str::to_string))
    }
}
