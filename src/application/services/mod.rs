//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem)
//! but are themselves concrete structs, not traits.

mod nxdl;
mod tree;
mod validation;

pub use nxdl::{LoadReport, NxdlService, NXDL_SUFFIX};
pub use tree::{NodeSpec, TreeService};
pub use validation::{
    Severity, ValidationIssue, ValidationOptions, ValidationReport, ValidationService,
};
