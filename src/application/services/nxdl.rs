//! NXDL definition loading service
//!
//! Reads `*.nxdl.xml` files into the schema registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{parse_nxdl, BaseClassDef, SchemaRegistry};
use crate::infrastructure::traits::FileSystem;

/// File name suffix of NXDL definition files.
pub const NXDL_SUFFIX: &str = ".nxdl.xml";

/// Outcome of loading a set of definition directories.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Class names registered, in load order
    pub loaded: Vec<String>,
    /// Files that could not be read or parsed
    pub failed: Vec<(PathBuf, ApplicationError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Service for reading NXDL definitions from disk.
pub struct NxdlService {
    fs: Arc<dyn FileSystem>,
}

impl NxdlService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse a single NXDL file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&self, path: &Path) -> ApplicationResult<BaseClassDef> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read NXDL file", path)?;
        parse_nxdl(&content).map_err(|e| ApplicationError::Nxdl {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Every NXDL file below `dir`, sorted by path.
    pub fn find_files(&self, dir: &Path) -> ApplicationResult<Vec<PathBuf>> {
        if !self.fs.is_dir(dir) {
            return Err(ApplicationError::Config {
                message: format!("NXDL directory not found: {}", dir.display()),
            });
        }
        let mut files: Vec<PathBuf> = self
            .fs
            .walk_files(dir)
            .with_path_context("scan NXDL directory", dir)?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(NXDL_SUFFIX))
            })
            .collect();
        files.sort();
        debug!("find_files: {} NXDL files in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Parse every NXDL file below `dir`. Stops at the first broken file.
    pub fn load_dir(&self, dir: &Path) -> ApplicationResult<Vec<BaseClassDef>> {
        self.find_files(dir)?
            .iter()
            .map(|path| self.load_file(path))
            .collect()
    }

    /// Register the definitions found in `dirs`, later files overriding earlier ones.
    ///
    /// Broken files are reported and skipped; a missing directory is an error.
    #[instrument(level = "debug", skip(self, registry))]
    pub fn load_into(
        &self,
        registry: &mut SchemaRegistry,
        dirs: &[PathBuf],
    ) -> ApplicationResult<LoadReport> {
        let mut report = LoadReport::default();
        for dir in dirs {
            for path in self.find_files(dir)? {
                match self.load_file(&path) {
                    Ok(def) => {
                        report.loaded.push(def.name.clone());
                        registry.register(def);
                    }
                    Err(e) => {
                        warn!("skipping {}: {}", path.display(), e);
                        report.failed.push((path, e));
                    }
                }
            }
        }
        info!(
            "loaded {} NXDL definitions ({} failed)",
            report.loaded.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
