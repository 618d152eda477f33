//! Base class definitions and the registry holding them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::base_class::NexusBaseClass;
use crate::domain::types::{NexusType, NexusUnit};

/// Where a definition comes from in the NeXus definitions tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassCategory {
    Base,
    Contributed,
    Application,
}

impl fmt::Display for ClassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassCategory::Base => "base",
            ClassCategory::Contributed => "contributed",
            ClassCategory::Application => "application",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub nx_type: NexusType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<NexusUnit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, nx_type: NexusType) -> Self {
        Self {
            name: name.into(),
            nx_type,
            units: None,
            enumeration: Vec::new(),
            attributes: Vec::new(),
            deprecated: None,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// A child group slot. `name` is the default instance name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDef {
    pub name: String,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDef {
    pub name: String,
    pub nx_type: NexusType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseClassDef {
    pub name: String,
    pub category: ClassCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub groups: Vec<GroupDef>,
}

impl BaseClassDef {
    pub fn new(name: impl Into<String>, category: ClassCategory) -> Self {
        Self {
            name: name.into(),
            category,
            extends: None,
            doc: None,
            attributes: Vec::new(),
            fields: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// First slot accepting groups of `class`.
    pub fn group_for_class(&self, class: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.class == class)
    }

    pub fn allows_group_class(&self, class: &str) -> bool {
        self.group_for_class(class).is_some()
    }
}

/// Default instance name of a slot holding `class`: `NXsample` → `sample`.
pub fn default_group_name(class: &str) -> String {
    class.strip_prefix("NX").unwrap_or(class).to_string()
}

fn builtin_definitions() -> &'static BTreeMap<String, Arc<BaseClassDef>> {
    static BUILTIN: OnceLock<BTreeMap<String, Arc<BaseClassDef>>> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        let defs: BTreeMap<_, _> = NexusBaseClass::ALL
            .iter()
            .map(|class| (class.name().to_string(), Arc::new(class.definition())))
            .collect();
        debug!("compiled {} builtin base class definitions", defs.len());
        defs
    })
}

/// Runtime view of every known definition.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    definitions: BTreeMap<String, Arc<BaseClassDef>>,
}

impl SchemaRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All compiled-in definitions.
    pub fn builtin() -> Self {
        Self {
            definitions: builtin_definitions().clone(),
        }
    }

    /// Add a definition, replacing any previous one of the same name.
    ///
    /// Returns the replaced definition.
    pub fn register(&mut self, def: BaseClassDef) -> Option<Arc<BaseClassDef>> {
        let name = def.name.clone();
        let previous = self.definitions.insert(name.clone(), Arc::new(def));
        if previous.is_some() {
            info!("definition of {} replaced", name);
        } else {
            debug!("definition of {} registered", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Arc<BaseClassDef>> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &Arc<BaseClassDef>> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
