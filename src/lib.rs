//! Schema-typed NeXus base classes.
//!
//! Every NeXus base class is a Rust type with typed field, slot and
//! attribute keys (see [`domain::classes`]). [`domain::NexusNodeFactory`]
//! creates instances by class or name and hands out process-unique oids.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    BaseClass, DomainError, DomainResult, NexusBaseClass, NexusNodeFactory, NexusObject, Oid,
};
