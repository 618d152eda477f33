//! Domain layer: the NeXus data model and typed base classes
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod base_class;
pub mod classes;
pub mod dataset;
pub mod error;
pub mod factory;
pub mod node;
pub mod nxdl;
pub mod oid;
pub mod path;
pub mod schema;
pub mod types;

pub use arena::{IndexedKind, IndexedNode, LabelOptions, TreeIndex};
pub use base_class::NexusBaseClass;
pub use classes::BaseClass;
pub use dataset::{Dataset, DatasetValues};
pub use error::{DomainError, DomainResult};
pub use factory::NexusNodeFactory;
pub use node::{Attribute, DataNode, GroupNode, NexusObject, Node, NodeRef, SymbolicNode, Tree, TreeFile};
pub use nxdl::parse_nxdl;
pub use oid::{global_oids, next_oid, Oid, OidGenerator};
pub use path::{NexusPath, PathSegment};
pub use schema::{BaseClassDef, ClassCategory, FieldDef, GroupDef, SchemaRegistry};
pub use types::{NexusType, NexusUnit, NexusValue, ValueKind};
