//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::services::{
    LoadReport, NxdlService, TreeService, ValidationOptions, ValidationService,
};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{LabelOptions, SchemaRegistry};
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding settings, I/O boundaries and the schema registry.
///
/// The registry holds the compiled base classes overlaid with every
/// definition found in the configured NXDL directories.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Known base class definitions
    pub registry: Arc<SchemaRegistry>,

    /// Outcome of loading the configured NXDL directories
    pub load_report: LoadReport,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> ApplicationResult<Self> {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> ApplicationResult<Self> {
        let mut registry = SchemaRegistry::builtin();
        let dirs: Vec<_> = settings
            .nxdl_dirs
            .iter()
            .filter(|dir| {
                let present = fs.is_dir(dir);
                if !present {
                    warn!("NXDL directory not found, skipping: {}", dir.display());
                }
                present
            })
            .cloned()
            .collect();
        let load_report = NxdlService::new(fs.clone()).load_into(&mut registry, &dirs)?;
        debug!("registry holds {} definitions", registry.len());

        Ok(Self {
            settings: Arc::new(settings),
            fs,
            registry: Arc::new(registry),
            load_report,
        })
    }

    pub fn nxdl_service(&self) -> NxdlService {
        NxdlService::new(self.fs.clone())
    }

    pub fn tree_service(&self) -> TreeService {
        TreeService::new(self.registry.clone())
    }

    pub fn validation_service(&self) -> ValidationService {
        ValidationService::new(
            self.registry.clone(),
            ValidationOptions::from(&self.settings.validation),
        )
    }

    pub fn label_options(&self) -> LabelOptions {
        LabelOptions::from(&self.settings.output)
    }
}
