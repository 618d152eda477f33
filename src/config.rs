//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nxbind/nxbind.toml`
//! 3. Local config: `<project_dir>/.nxbind.toml`
//! 4. Environment variables: `NXBIND__*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::ValidationOptions;
use crate::application::ApplicationError;
use crate::domain::LabelOptions;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".nxbind.toml";

/// Which optional validation checks run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Warn when a field whose unit category needs units has none
    pub require_units: bool,
    /// Report fields not declared by their parent class
    pub report_undeclared: bool,
    /// Warn on names outside the NXDL naming recommendation
    pub check_names: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let options = ValidationOptions::default();
        Self {
            require_units: options.require_units,
            report_undeclared: options.report_undeclared,
            check_names: options.check_names,
        }
    }
}

impl From<&ValidationConfig> for ValidationOptions {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            require_units: config.require_units,
            report_undeclared: config.report_undeclared,
            check_names: config.check_names,
        }
    }
}

/// Tree rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub show_oids: bool,
    pub show_values: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_oids: false,
            show_values: true,
        }
    }
}

impl From<&OutputConfig> for LabelOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            show_oids: config.show_oids,
            show_values: config.show_values,
        }
    }
}

/// Raw config sections for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawValidationConfig {
    pub require_units: Option<bool>,
    pub report_undeclared: Option<bool>,
    pub check_names: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub show_oids: Option<bool>,
    pub show_values: Option<bool>,
}

/// Raw settings for intermediate parsing.
///
/// Used during layered config merging to distinguish between:
/// - `None` → field not specified, inherit from base
/// - `Some([])` → explicit empty array
/// - `Some([...])` → explicit values to merge
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub nxdl_dirs: Option<Vec<String>>,
    pub validation: RawValidationConfig,
    pub output: RawOutputConfig,
}

/// Merge arrays with union semantics and negation support.
///
/// - Items from overlay are appended to base
/// - Items prefixed with `!` remove the corresponding item from the result
/// - Duplicates are dropped, first occurrence wins
///
/// Order is kept: definition directories loaded later override earlier ones.
///
/// # Examples
/// ```ignore
/// merge_array(&["a", "b"], &["c"])       // → ["a", "b", "c"]
/// merge_array(&["a", "b"], &["!a", "c"]) // → ["b", "c"]
/// ```
pub fn merge_array(base: &[String], overlay: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(base.len() + overlay.len());
    for item in base {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    for item in overlay {
        if let Some(negated) = item.strip_prefix('!') {
            result.retain(|existing| existing != negated);
        } else if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

impl ValidationConfig {
    fn merge(&self, overlay: &RawValidationConfig) -> Self {
        Self {
            require_units: overlay.require_units.unwrap_or(self.require_units),
            report_undeclared: overlay.report_undeclared.unwrap_or(self.report_undeclared),
            check_names: overlay.check_names.unwrap_or(self.check_names),
        }
    }
}

impl OutputConfig {
    fn merge(&self, overlay: &RawOutputConfig) -> Self {
        Self {
            show_oids: overlay.show_oids.unwrap_or(self.show_oids),
            show_values: overlay.show_values.unwrap_or(self.show_values),
        }
    }
}

/// Unified configuration for nxbind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Directories searched for `*.nxdl.xml` definitions
    pub nxdl_dirs: Vec<PathBuf>,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for nxbind.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nxbind").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nxbind.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(LOCAL_CONFIG_FILE)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn path_strings(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in definition directories.
    ///
    /// Unset variables leave the path unchanged.
    fn expand_paths(&mut self) {
        for dir in &mut self.nxdl_dirs {
            let raw = dir.to_string_lossy().into_owned();
            if let Ok(expanded) = shellexpand::full(&raw) {
                *dir = PathBuf::from(expanded.as_ref());
            }
        }
    }

    /// Merge overlay config onto self (base) with union semantics for arrays.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            nxdl_dirs: overlay
                .nxdl_dirs
                .as_ref()
                .map(|o| {
                    merge_array(&path_strings(&self.nxdl_dirs), o)
                        .into_iter()
                        .map(PathBuf::from)
                        .collect()
                })
                .unwrap_or_else(|| self.nxdl_dirs.clone()),
            validation: self.validation.merge(&overlay.validation),
            output: self.output.merge(&overlay.output),
        }
    }

    /// Apply global config onto defaults with REPLACE semantics for arrays.
    fn apply_global(&self, global: &RawSettings) -> Self {
        Self {
            nxdl_dirs: global
                .nxdl_dirs
                .as_ref()
                .map(|dirs| dirs.iter().map(PathBuf::from).collect())
                .unwrap_or_else(|| self.nxdl_dirs.clone()),
            validation: self.validation.merge(&global.validation),
            output: self.output.merge(&global.output),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/nxbind/nxbind.toml` (arrays REPLACE defaults)
    /// 3. Local config: `<project_dir>/.nxbind.toml` (arrays UNION with global)
    /// 4. Environment variables: `NXBIND__*` prefix (REPLACES - explicit override)
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_layers(global.as_deref(), project_dir)
    }

    /// Like [`load`](Self::load) with an explicit global config file.
    pub fn load_layers(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.apply_global(&raw);
            }
        }

        if let Some(project) = project_dir {
            let local_path = local_config_path(project);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply NXBIND__* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("NXBIND")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("nxdl_dirs"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get::<Vec<String>>("nxdl_dirs") {
            settings.nxdl_dirs = val.into_iter().map(PathBuf::from).collect();
        }
        if let Ok(val) = config.get_bool("validation.require_units") {
            settings.validation.require_units = val;
        }
        if let Ok(val) = config.get_bool("validation.report_undeclared") {
            settings.validation.report_undeclared = val;
        }
        if let Ok(val) = config.get_bool("validation.check_names") {
            settings.validation.check_names = val;
        }
        if let Ok(val) = config.get_bool("output.show_oids") {
            settings.output.show_oids = val;
        }
        if let Ok(val) = config.get_bool("output.show_values") {
            settings.output.show_values = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nxbind configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nxbind/nxbind.toml  (defines your baseline)
#   Local:  <project_dir>/.nxbind.toml    (project-specific additions)
#   Env:    NXBIND__* environment variables (explicit overrides),
#           e.g. NXBIND__VALIDATION__REQUIRE_UNITS=false
#
# Array Merge Semantics:
#   Global config REPLACES compiled defaults.
#   Local config UNIONS with global.
#   Use "!item" in local config to REMOVE an inherited item:
#     nxdl_dirs = ["./defs", "!~/nexus/contributed_definitions"]

# Directories with *.nxdl.xml definitions; later directories override earlier ones
# nxdl_dirs = ["~/nexus/definitions/base_classes"]

[validation]
# Warn when a field with a physical unit category carries no units
# require_units = true

# Report fields the parent class does not declare
# report_undeclared = false

# Warn on names outside the NeXus naming recommendation
# check_names = true

[output]
# Show object ids in rendered trees
# show_oids = false

# Show value summaries in rendered trees
# show_values = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, None).expect("load defaults");
        assert!(settings.validation.require_units);
        assert!(settings.output.show_values);
        assert!(!settings.output.show_oids);
    }

    #[test]
    fn given_tilde_in_nxdl_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            nxdl_dirs: vec![PathBuf::from("~/nexus/base_classes")],
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let dir = settings.nxdl_dirs[0].to_string_lossy();
        assert!(dir.starts_with(&home), "should start with home dir: {}", dir);
        assert!(!dir.contains('~'), "should not contain tilde: {}", dir);
    }

    #[test]
    fn given_env_var_in_path_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            nxdl_dirs: vec![PathBuf::from("${HOME}/defs")],
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(settings.nxdl_dirs[0].starts_with(&home));
    }

    #[test]
    fn test_merge_array_union_keeps_order() {
        let result = merge_array(&strings(&["b", "a"]), &strings(&["c", "a"]));
        assert_eq!(result, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_merge_array_negation() {
        let result = merge_array(&strings(&["a", "b"]), &strings(&["!a", "c"]));
        assert_eq!(result, strings(&["b", "c"]));
    }

    #[test]
    fn test_merge_array_negation_nonexistent() {
        let result = merge_array(&strings(&["a", "b"]), &strings(&["!x"]));
        assert_eq!(result, strings(&["a", "b"]));
    }

    #[test]
    fn test_apply_global_replaces_arrays() {
        let base = Settings {
            nxdl_dirs: vec![PathBuf::from("/base")],
            ..Settings::default()
        };
        let global = RawSettings {
            nxdl_dirs: Some(strings(&["/global"])),
            validation: RawValidationConfig {
                check_names: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = base.apply_global(&global);

        assert_eq!(result.nxdl_dirs, vec![PathBuf::from("/global")]);
        assert!(!result.validation.check_names);
        assert!(result.validation.require_units, "unspecified keeps base");
    }

    #[test]
    fn test_merge_with_unions_arrays() {
        let base = Settings {
            nxdl_dirs: vec![PathBuf::from("/global"), PathBuf::from("/old")],
            ..Settings::default()
        };
        let local = RawSettings {
            nxdl_dirs: Some(strings(&["!/old", "/project"])),
            output: RawOutputConfig {
                show_oids: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };

        let result = base.merge_with(&local);

        assert_eq!(
            result.nxdl_dirs,
            vec![PathBuf::from("/global"), PathBuf::from("/project")]
        );
        assert!(result.output.show_oids);
        assert!(result.output.show_values);
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.nxdl_dirs.is_none());
    }
}
