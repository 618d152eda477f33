//! Flattened, path-addressable snapshot of a [`Tree`] for traversal and reporting.

use std::collections::{HashMap, HashSet};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{NexusObject, Node, Tree};
use crate::domain::oid::Oid;
use crate::domain::path::NexusPath;
use crate::domain::types::ValueKind;

/// What an indexed node is, with the details reports need.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexedKind {
    Group {
        class: Option<String>,
    },
    Data {
        kind: Option<ValueKind>,
        shape: Vec<usize>,
        summary: Option<String>,
        units: Option<String>,
    },
    Link {
        target: NexusPath,
        uri: Option<String>,
    },
}

/// Payload of one tree node in the index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedNode {
    pub name: String,
    /// Plain absolute path, `/` for the root group.
    pub path: String,
    pub oid: Oid,
    pub kind: IndexedKind,
}

impl IndexedNode {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, IndexedKind::Group { .. })
    }

    pub fn class(&self) -> Option<&str> {
        match &self.kind {
            IndexedKind::Group { class } => class.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for IndexedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.path == "/" { "/" } else { &self.name };
        match &self.kind {
            IndexedKind::Group { class: Some(class) } => write!(f, "{name}:{class}"),
            IndexedKind::Group { class: None } => f.write_str(name),
            IndexedKind::Data { .. } => f.write_str(name),
            IndexedKind::Link { target, uri: None } => write!(f, "{name} -> {target}"),
            IndexedKind::Link {
                target,
                uri: Some(uri),
            } => write!(f, "{name} -> {uri}#{target}"),
        }
    }
}

/// Controls the labels produced by [`TreeIndex::to_termtree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelOptions {
    pub show_oids: bool,
    pub show_values: bool,
}

#[derive(Debug)]
pub struct IndexTreeNode {
    pub data: IndexedNode,
    pub parent: Option<Index>,
    pub children: Vec<Index>,
}

/// Arena of every node of a tree, addressable by plain path.
#[derive(Debug, Default)]
pub struct TreeIndex {
    arena: Arena<IndexTreeNode>,
    root: Option<Index>,
    by_path: HashMap<String, Index>,
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{name}")
    } else {
        format!("{parent}/{name}")
    }
}

fn group_entry(name: &str, path: String, group: &dyn NexusObject) -> IndexedNode {
    IndexedNode {
        name: name.to_string(),
        path,
        oid: group.oid(),
        kind: IndexedKind::Group {
            class: group.class_name().map(str::to_string),
        },
    }
}

impl TreeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every node reachable from the root of `tree`.
    #[instrument(level = "debug", skip(tree), fields(tree = %tree.oid()))]
    pub fn build(tree: &Tree) -> Self {
        let mut index = Self::new();
        let root = index.insert_node(group_entry("", "/".to_string(), tree.root()), None);
        let mut stack: Vec<(Index, &dyn NexusObject)> = vec![(root, tree.root())];

        while let Some((parent_idx, group)) = stack.pop() {
            let parent_path = match index.get_node(parent_idx) {
                Some(parent) => parent.data.path.clone(),
                None => continue,
            };
            for (name, node) in group.group().nodes() {
                let path = child_path(&parent_path, name);
                match node {
                    Node::Group(child) => {
                        let idx =
                            index.insert_node(group_entry(name, path, child.as_ref()), Some(parent_idx));
                        stack.push((idx, child.as_ref()));
                    }
                    Node::Data(data) => {
                        let dataset = data.dataset();
                        let entry = IndexedNode {
                            name: name.to_string(),
                            path,
                            oid: data.oid(),
                            kind: IndexedKind::Data {
                                kind: dataset.map(|d| d.kind()),
                                shape: dataset.map(|d| d.shape().to_vec()).unwrap_or_default(),
                                summary: dataset.map(|d| d.summary()),
                                units: data.units().map(str::to_string),
                            },
                        };
                        index.insert_node(entry, Some(parent_idx));
                    }
                    Node::Symbolic(link) => {
                        let entry = IndexedNode {
                            name: name.to_string(),
                            path,
                            oid: link.oid(),
                            kind: IndexedKind::Link {
                                target: link.target().clone(),
                                uri: link.uri().map(str::to_string),
                            },
                        };
                        index.insert_node(entry, Some(parent_idx));
                    }
                }
            }
        }
        index
    }

    #[instrument(level = "trace", skip(self, data), fields(path = %data.path))]
    pub fn insert_node(&mut self, data: IndexedNode, parent: Option<Index>) -> Index {
        let path = data.path.clone();
        let node = IndexTreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }
        self.by_path.insert(path, node_idx);

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&IndexTreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The node at a plain absolute path, without following links.
    pub fn find(&self, path: &str) -> Option<&IndexedNode> {
        self.by_path
            .get(path)
            .and_then(|&idx| self.get_node(idx))
            .map(|node| &node.data)
    }

    /// Pre-order, children in name order.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Number of levels, 1 for a lone root group.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Paths of all nodes without children.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.path.clone())
            .collect()
    }

    /// Every root-to-leaf chain of node paths, in pre-order of the leaves.
    #[instrument(level = "debug", skip(self))]
    pub fn branches(&self) -> Vec<Vec<String>> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(idx, _)| {
                let mut branch = Vec::new();
                let mut current = Some(idx);
                while let Some(node) = current.and_then(|i| self.get_node(i)) {
                    branch.push(node.data.path.clone());
                    current = node.parent;
                }
                branch.reverse();
                branch
            })
            .collect()
    }

    /// Follow internal links on every segment of `path`.
    ///
    /// External links are returned unresolved. A link chain that returns to
    /// itself is a [`DomainError::LinkCycle`]; a link to a missing node is a
    /// [`DomainError::DanglingLink`].
    pub fn resolve(&self, path: &NexusPath) -> DomainResult<&IndexedNode> {
        let mut visiting = HashSet::new();
        self.resolve_plain(&path.to_plain_string(), &mut visiting)
    }

    fn resolve_plain(
        &self,
        path: &str,
        visiting: &mut HashSet<String>,
    ) -> DomainResult<&IndexedNode> {
        let missing = |p: &str, visiting: &HashSet<String>| {
            if visiting.is_empty() {
                DomainError::NodeNotFound(p.to_string())
            } else {
                DomainError::DanglingLink(p.to_string())
            }
        };
        let mut node = self.find("/").ok_or_else(|| missing("/", visiting))?;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let current = child_path(&node.path, segment);
            node = self
                .find(&current)
                .ok_or_else(|| missing(&current, visiting))?;
            if let IndexedKind::Link { target, uri: None } = &node.kind {
                if !visiting.insert(current.clone()) {
                    return Err(DomainError::LinkCycle(current));
                }
                let resolved = self.resolve_plain(&target.to_plain_string(), visiting);
                visiting.remove(&current);
                node = resolved?;
            }
        }
        Ok(node)
    }

    /// Render as a `termtree` for display.
    pub fn to_termtree(&self, options: LabelOptions) -> termtree::Tree<String> {
        fn label(node: &IndexedNode, options: LabelOptions) -> String {
            let mut text = node.to_string();
            if let IndexedKind::Data { summary, units, .. } = &node.kind {
                if options.show_values {
                    if let Some(summary) = summary {
                        text = format!("{text} = {summary}");
                    }
                }
                if let Some(units) = units {
                    text = format!("{text} ({units})");
                }
            }
            if options.show_oids {
                text = format!("{text} #{}", node.oid);
            }
            text
        }

        fn build_tree(
            index: &TreeIndex,
            node_idx: Index,
            parent_tree: &mut termtree::Tree<String>,
            options: LabelOptions,
        ) {
            if let Some(node) = index.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = index.get_node(child_idx) {
                        let mut child_tree = termtree::Tree::new(label(&child.data, options));
                        build_tree(index, child_idx, &mut child_tree, options);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root.and_then(|idx| self.get_node(idx).map(|n| (idx, n))) {
            Some((root_idx, root)) => {
                let mut tree = termtree::Tree::new(label(&root.data, options));
                build_tree(self, root_idx, &mut tree, options);
                tree
            }
            None => termtree::Tree::new("Empty tree".to_string()),
        }
    }
}

pub struct TreeIterator<'a> {
    index: &'a TreeIndex,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(index: &'a TreeIndex) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = index.root() {
            stack.push(root);
        }
        Self { index, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a IndexTreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.index.get_node(current_idx) {
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    index: &'a TreeIndex,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(index: &'a TreeIndex) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = index.root() {
            stack.push((root, false));
        }
        Self { index, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a IndexTreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.index.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Dataset;
    use crate::domain::node::{DataNode, GroupNode, SymbolicNode};

    fn sample_tree() -> Tree {
        let mut data = GroupNode::with_class(Oid::new(3), "NXdata");
        data.add_data_node(
            "counts",
            DataNode::with_dataset(Oid::new(4), Dataset::from_vec(vec![1_i64, 2, 3])),
        )
        .unwrap();
        let mut entry = GroupNode::with_class(Oid::new(2), "NXentry");
        entry.add_group_node("data", Box::new(data)).unwrap();
        entry
            .add_symbolic_node(
                "alias",
                SymbolicNode::new(Oid::new(5), "/entry/data/counts".parse().unwrap(), None),
            )
            .unwrap();
        let mut root = GroupNode::with_class(Oid::new(1), "NXroot");
        root.add_group_node("entry", Box::new(entry)).unwrap();
        Tree::new(Oid::new(0), Box::new(root), None)
    }

    #[test]
    fn given_tree_when_indexing_then_iterates_in_preorder() {
        let index = TreeIndex::build(&sample_tree());

        let paths: Vec<_> = index.iter().map(|(_, n)| n.data.path.clone()).collect();

        assert_eq!(
            paths,
            vec!["/", "/entry", "/entry/alias", "/entry/data", "/entry/data/counts"]
        );
        assert_eq!(index.depth(), 4);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn given_tree_when_iterating_postorder_then_children_come_first() {
        let index = TreeIndex::build(&sample_tree());

        let paths: Vec<_> = index
            .iter_postorder()
            .map(|(_, n)| n.data.path.clone())
            .collect();

        assert_eq!(paths.first().map(String::as_str), Some("/entry/alias"));
        assert_eq!(paths.last().map(String::as_str), Some("/"));
    }

    #[test]
    fn given_tree_when_collecting_leaves_then_returns_childless_paths() {
        let index = TreeIndex::build(&sample_tree());
        assert_eq!(
            index.leaf_nodes(),
            vec!["/entry/alias".to_string(), "/entry/data/counts".to_string()]
        );
    }

    #[test]
    fn given_tree_when_collecting_branches_then_each_runs_root_to_leaf() {
        let index = TreeIndex::build(&sample_tree());

        let branches = index.branches();

        assert_eq!(
            branches,
            vec![
                vec!["/", "/entry", "/entry/alias"],
                vec!["/", "/entry", "/entry/data", "/entry/data/counts"],
            ]
        );
    }

    #[test]
    fn given_internal_link_when_resolving_then_returns_target() {
        let index = TreeIndex::build(&sample_tree());

        let node = index.resolve(&"/entry/alias".parse().unwrap()).unwrap();

        assert_eq!(node.path, "/entry/data/counts");
        assert_eq!(node.oid, Oid::new(4));
    }

    #[test]
    fn given_links_pointing_at_each_other_when_resolving_then_reports_cycle() {
        let mut root = GroupNode::with_oid(Oid::new(1));
        root.add_symbolic_node("a", SymbolicNode::new(Oid::new(2), "/b".parse().unwrap(), None))
            .unwrap();
        root.add_symbolic_node("b", SymbolicNode::new(Oid::new(3), "/a".parse().unwrap(), None))
            .unwrap();
        let index = TreeIndex::build(&Tree::new(Oid::new(0), Box::new(root), None));

        let err = index.resolve(&"/a".parse().unwrap()).unwrap_err();

        assert!(matches!(err, DomainError::LinkCycle(_)));
    }

    #[test]
    fn given_link_to_missing_node_when_resolving_then_reports_dangling() {
        let mut root = GroupNode::with_oid(Oid::new(1));
        root.add_symbolic_node(
            "broken",
            SymbolicNode::new(Oid::new(2), "/nowhere".parse().unwrap(), None),
        )
        .unwrap();
        let index = TreeIndex::build(&Tree::new(Oid::new(0), Box::new(root), None));

        assert_eq!(
            index.resolve(&"/broken".parse().unwrap()).unwrap_err(),
            DomainError::DanglingLink("/nowhere".into())
        );
        assert_eq!(
            index.resolve(&"/missing".parse().unwrap()).unwrap_err(),
            DomainError::NodeNotFound("/missing".into())
        );
    }

    #[test]
    fn given_external_link_when_resolving_then_returns_link_itself() {
        let mut root = GroupNode::with_oid(Oid::new(1));
        root.add_symbolic_node(
            "ext",
            SymbolicNode::new(
                Oid::new(2),
                "/entry/data".parse().unwrap(),
                Some("other.nxs".into()),
            ),
        )
        .unwrap();
        let index = TreeIndex::build(&Tree::new(Oid::new(0), Box::new(root), None));

        let node = index.resolve(&"/ext".parse().unwrap()).unwrap();

        assert!(matches!(node.kind, IndexedKind::Link { uri: Some(_), .. }));
    }

    #[test]
    fn given_index_when_rendering_then_labels_classes_and_values() {
        let index = TreeIndex::build(&sample_tree());

        let rendered = index
            .to_termtree(LabelOptions {
                show_oids: false,
                show_values: true,
            })
            .to_string();

        assert!(rendered.contains("entry:NXentry"));
        assert!(rendered.contains("counts = [1, 2, 3]"));
        assert!(rendered.contains("alias -> /entry/data/counts"));
    }
}
