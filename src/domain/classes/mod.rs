//! Typed accessor types for the compiled NeXus base classes.
//!
//! Every class is a thin wrapper around a [`GroupNode`] generated by
//! `nexus_base_class!`. A class exposes one associated key constant per
//! field, child slot and group attribute; the [`BaseClass`] trait turns those
//! keys into typed getters and setters:
//!
//! ```
//! use nxbind::domain::classes::{BaseClass, NXcrystal};
//!
//! let mut crystal = NXcrystal::new().unwrap();
//! crystal.set_field_value(NXcrystal::CUT_ANGLE, 1.25).unwrap();
//! assert_eq!(crystal.field_value(NXcrystal::CUT_ANGLE), Some(1.25));
//! ```

#![allow(non_camel_case_types)]

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::domain::base_class::NexusBaseClass;
use crate::domain::dataset::Dataset;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Attribute, DataNode, GroupNode, NexusObject, Node};
use crate::domain::oid::{next_oid, Oid};
use crate::domain::schema::BaseClassDef;
use crate::domain::types::{NexusType, NexusValue};

/// Rust type backing an NX type in generated accessors.
macro_rules! nx_rust_type {
    (NX_CHAR) => { String };
    (NX_CHAR_OR_NUMBER) => { String };
    (NX_FLOAT) => { f64 };
    (NX_NUMBER) => { f64 };
    (NX_INT) => { i64 };
    (NX_POSINT) => { i64 };
    (NX_UINT) => { u64 };
    (NX_BOOLEAN) => { bool };
    (NX_DATE_TIME) => { chrono::DateTime<chrono::Utc> };
    (NX_BINARY) => { u8 };
}

macro_rules! nx_type {
    (NX_CHAR) => { $crate::domain::types::NexusType::Char };
    (NX_CHAR_OR_NUMBER) => { $crate::domain::types::NexusType::CharOrNumber };
    (NX_FLOAT) => { $crate::domain::types::NexusType::Float };
    (NX_NUMBER) => { $crate::domain::types::NexusType::Number };
    (NX_INT) => { $crate::domain::types::NexusType::Int };
    (NX_POSINT) => { $crate::domain::types::NexusType::PosInt };
    (NX_UINT) => { $crate::domain::types::NexusType::UInt };
    (NX_BOOLEAN) => { $crate::domain::types::NexusType::Boolean };
    (NX_DATE_TIME) => { $crate::domain::types::NexusType::DateTime };
    (NX_BINARY) => { $crate::domain::types::NexusType::Binary };
}

macro_rules! nx_unit {
    (NX_ANGLE) => { $crate::domain::types::NexusUnit::Angle };
    (NX_ANY) => { $crate::domain::types::NexusUnit::Any };
    (NX_AREA) => { $crate::domain::types::NexusUnit::Area };
    (NX_CHARGE) => { $crate::domain::types::NexusUnit::Charge };
    (NX_COUNT) => { $crate::domain::types::NexusUnit::Count };
    (NX_CROSS_SECTION) => { $crate::domain::types::NexusUnit::CrossSection };
    (NX_CURRENT) => { $crate::domain::types::NexusUnit::Current };
    (NX_DIMENSIONLESS) => { $crate::domain::types::NexusUnit::Dimensionless };
    (NX_EMITTANCE) => { $crate::domain::types::NexusUnit::Emittance };
    (NX_ENERGY) => { $crate::domain::types::NexusUnit::Energy };
    (NX_FLUX) => { $crate::domain::types::NexusUnit::Flux };
    (NX_FREQUENCY) => { $crate::domain::types::NexusUnit::Frequency };
    (NX_LENGTH) => { $crate::domain::types::NexusUnit::Length };
    (NX_MASS) => { $crate::domain::types::NexusUnit::Mass };
    (NX_MASS_DENSITY) => { $crate::domain::types::NexusUnit::MassDensity };
    (NX_MOLECULAR_WEIGHT) => { $crate::domain::types::NexusUnit::MolecularWeight };
    (NX_PERIOD) => { $crate::domain::types::NexusUnit::Period };
    (NX_PER_AREA) => { $crate::domain::types::NexusUnit::PerArea };
    (NX_PER_LENGTH) => { $crate::domain::types::NexusUnit::PerLength };
    (NX_POWER) => { $crate::domain::types::NexusUnit::Power };
    (NX_PRESSURE) => { $crate::domain::types::NexusUnit::Pressure };
    (NX_PULSES) => { $crate::domain::types::NexusUnit::Pulses };
    (NX_SCATTERING_LENGTH_DENSITY) => { $crate::domain::types::NexusUnit::ScatteringLengthDensity };
    (NX_SOLID_ANGLE) => { $crate::domain::types::NexusUnit::SolidAngle };
    (NX_TEMPERATURE) => { $crate::domain::types::NexusUnit::Temperature };
    (NX_TIME) => { $crate::domain::types::NexusUnit::Time };
    (NX_TIME_OF_FLIGHT) => { $crate::domain::types::NexusUnit::TimeOfFlight };
    (NX_TRANSFORMATION) => { $crate::domain::types::NexusUnit::Transformation };
    (NX_UNITLESS) => { $crate::domain::types::NexusUnit::Unitless };
    (NX_VOLTAGE) => { $crate::domain::types::NexusUnit::Voltage };
    (NX_VOLUME) => { $crate::domain::types::NexusUnit::Volume };
    (NX_WAVELENGTH) => { $crate::domain::types::NexusUnit::Wavelength };
    (NX_WAVENUMBER) => { $crate::domain::types::NexusUnit::Wavenumber };
}

/// Declares a base class: its struct, key constants, definition and trait impls.
///
/// ```text
/// NXexample {
///     field NAME = "name": NX_CHAR;
///     field DISTANCE = "distance": NX_FLOAT [NX_LENGTH] attrs ["depends_on"];
///     field MODE = "mode": NX_CHAR enum ["a", "b"] deprecated "use x";
///     group DATA = "data": NXdata;
///     attr DEFAULT = "default": NX_CHAR;
/// }
/// ```
macro_rules! nexus_base_class {
    (
        $(#[doc = $doc:literal])*
        $class:ident {
            $(
                field $fconst:ident = $fname:literal : $ftype:ident
                $( [$funit:ident] )?
                $( enum [ $($fenum:literal),* $(,)? ] )?
                $( attrs [ $($fattr:literal),* $(,)? ] )?
                $( deprecated $fdep:literal )?
                ;
            )*
            $(
                group $gconst:ident = $gname:literal : $gclass:ident
                $( deprecated $gdep:literal )?
                ;
            )*
            $(
                attr $aconst:ident = $aname:literal : $atype:ident ;
            )*
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug)]
        pub struct $class {
            group: $crate::domain::node::GroupNode,
        }

        impl $class {
            $(
                $( #[deprecated(note = $fdep)] )?
                pub const $fconst: $crate::domain::classes::FieldKey<$class, nx_rust_type!($ftype)> =
                    $crate::domain::classes::FieldKey::new($fname, nx_type!($ftype));
            )*
            $(
                $( #[deprecated(note = $gdep)] )?
                pub const $gconst: $crate::domain::classes::GroupKey<$class, $crate::domain::classes::$gclass> =
                    $crate::domain::classes::GroupKey::new($gname);
            )*
            $(
                pub const $aconst: $crate::domain::classes::AttrKey<$class, nx_rust_type!($atype)> =
                    $crate::domain::classes::AttrKey::new($aname);
            )*
        }

        impl $crate::domain::classes::BaseClass for $class {
            const CLASS: $crate::domain::base_class::NexusBaseClass =
                $crate::domain::base_class::NexusBaseClass::$class;

            fn from_group(group: $crate::domain::node::GroupNode) -> Self {
                Self { group }
            }

            fn into_group(self) -> $crate::domain::node::GroupNode {
                self.group
            }

            fn definition() -> $crate::domain::schema::BaseClassDef {
                use $crate::domain::schema::{AttributeDef, BaseClassDef, FieldDef, GroupDef};

                let doc: &[&str] = &[$($doc),*];
                let name = stringify!($class);
                BaseClassDef {
                    name: name.to_string(),
                    category: <Self as $crate::domain::classes::BaseClass>::CLASS.category(),
                    extends: (name != "NXobject").then(|| "NXobject".to_string()),
                    doc: $crate::domain::classes::join_doc(doc),
                    attributes: vec![
                        $( AttributeDef { name: $aname.to_string(), nx_type: nx_type!($atype) } ),*
                    ],
                    fields: vec![
                        $(
                            FieldDef {
                                name: $fname.to_string(),
                                nx_type: nx_type!($ftype),
                                units: None $( .or(Some(nx_unit!($funit))) )?,
                                enumeration: vec![ $( $( $fenum.to_string() ),* )? ],
                                attributes: vec![ $( $( $fattr.to_string() ),* )? ],
                                deprecated: None $( .or(Some($fdep.to_string())) )?,
                            }
                        ),*
                    ],
                    groups: vec![
                        $(
                            GroupDef {
                                name: $gname.to_string(),
                                class: stringify!($gclass).to_string(),
                                deprecated: None $( .or(Some($gdep.to_string())) )?,
                            }
                        ),*
                    ],
                }
            }
        }

        impl $crate::domain::node::NexusObject for $class {
            fn nexus_class(&self) -> Option<$crate::domain::base_class::NexusBaseClass> {
                Some($crate::domain::base_class::NexusBaseClass::$class)
            }

            fn group(&self) -> &$crate::domain::node::GroupNode {
                &self.group
            }

            fn group_mut(&mut self) -> &mut $crate::domain::node::GroupNode {
                &mut self.group
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }

        impl std::ops::Deref for $class {
            type Target = $crate::domain::node::GroupNode;

            fn deref(&self) -> &Self::Target {
                &self.group
            }
        }

        impl std::ops::DerefMut for $class {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.group
            }
        }
    };
}

mod beamline;
mod detector;
mod general;
mod geometry;
mod magnet;
mod microscopy;

pub use beamline::*;
pub use detector::*;
pub use general::*;
pub use geometry::*;
pub use magnet::*;
pub use microscopy::*;

fn join_doc(lines: &[&str]) -> Option<String> {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

/// A field of class `C` holding values of `T`.
pub struct FieldKey<C, T> {
    name: &'static str,
    nx_type: NexusType,
    _marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> FieldKey<C, T> {
    pub const fn new(name: &'static str, nx_type: NexusType) -> Self {
        Self {
            name,
            nx_type,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared NX type, which may be narrower than `T` (e.g. `NX_POSINT`).
    pub const fn nx_type(&self) -> NexusType {
        self.nx_type
    }
}

/// A child group slot of class `C` holding groups of class `G`.
pub struct GroupKey<C, G> {
    name: &'static str,
    _marker: PhantomData<fn() -> (C, G)>,
}

impl<C, G> GroupKey<C, G> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Default instance name of the slot.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// A group-level attribute of class `C` holding values of `T`.
pub struct AttrKey<C, T> {
    name: &'static str,
    _marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> AttrKey<C, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

macro_rules! impl_key_traits {
    ($($key:ident),*) => {
        $(
            impl<C, T> Clone for $key<C, T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<C, T> Copy for $key<C, T> {}

            impl<C, T> fmt::Debug for $key<C, T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({})", stringify!($key), self.name)
                }
            }
        )*
    };
}

impl_key_traits!(FieldKey, GroupKey, AttrKey);

/// Typed access to a compiled base class.
///
/// Fields come in three forms: the full dataset, the scalar view (first
/// element) and per-field attributes. Child slots can be read and written
/// by their default name, by instance name, or all at once.
pub trait BaseClass: NexusObject + Sized {
    const CLASS: NexusBaseClass;

    /// Wrap `group` without touching its attributes.
    fn from_group(group: GroupNode) -> Self;

    fn into_group(self) -> GroupNode;

    fn definition() -> BaseClassDef;

    fn with_oid(oid: Oid) -> Self {
        Self::from_group(GroupNode::with_class(oid, Self::CLASS.name()))
    }

    fn new() -> DomainResult<Self> {
        Ok(Self::with_oid(next_oid()?))
    }

    fn field_dataset<T: NexusValue>(&self, field: FieldKey<Self, T>) -> Option<&Dataset> {
        self.group().dataset(field.name())
    }

    fn set_field_dataset<T: NexusValue>(
        &mut self,
        field: FieldKey<Self, T>,
        dataset: Dataset,
    ) -> DomainResult<&mut DataNode> {
        if !field.nx_type().accepts(dataset.kind()) {
            return Err(DomainError::TypeMismatch {
                field: field.name().to_string(),
                expected: field.nx_type(),
                found: dataset.kind(),
            });
        }
        self.group_mut().set_dataset(field.name(), dataset)
    }

    /// The first element of the field.
    fn field_value<T: NexusValue>(&self, field: FieldKey<Self, T>) -> Option<T> {
        self.field_dataset(field)?.first()
    }

    fn set_field_value<T: NexusValue>(
        &mut self,
        field: FieldKey<Self, T>,
        value: T,
    ) -> DomainResult<&mut DataNode> {
        self.group_mut()
            .set_dataset(field.name(), Dataset::scalar(value))
    }

    fn field_attribute<T: NexusValue>(
        &self,
        field: FieldKey<Self, T>,
        name: &str,
    ) -> Option<&Attribute> {
        self.group().data_node(field.name())?.attribute(name)
    }

    /// Attach an attribute to a field that has already been set.
    fn set_field_attribute<T: NexusValue>(
        &mut self,
        field: FieldKey<Self, T>,
        attribute: Attribute,
    ) -> DomainResult<Option<Attribute>> {
        let node = self
            .group_mut()
            .data_node_mut(field.name())
            .ok_or_else(|| DomainError::NodeNotFound(field.name().to_string()))?;
        Ok(node.set_attribute(attribute))
    }

    fn class_attribute<T: NexusValue>(&self, key: AttrKey<Self, T>) -> Option<T> {
        self.group().attribute(key.name())?.first()
    }

    fn set_class_attribute<T: NexusValue>(
        &mut self,
        key: AttrKey<Self, T>,
        value: T,
    ) -> Option<Attribute> {
        self.group_mut()
            .set_attribute(Attribute::scalar(key.name(), value))
    }

    /// The child stored under the slot's default name.
    fn slot<G: BaseClass>(&self, slot: GroupKey<Self, G>) -> Option<&G> {
        self.group().child::<G>(slot.name())
    }

    fn slot_mut<G: BaseClass>(&mut self, slot: GroupKey<Self, G>) -> Option<&mut G> {
        self.group_mut().child_mut::<G>(slot.name())
    }

    fn set_slot<G: BaseClass>(
        &mut self,
        slot: GroupKey<Self, G>,
        child: G,
    ) -> DomainResult<Option<Node>> {
        self.group_mut()
            .add_group_node(slot.name(), Box::new(child))
    }

    fn named_slot<G: BaseClass>(&self, _slot: GroupKey<Self, G>, name: &str) -> Option<&G> {
        self.group().child::<G>(name)
    }

    fn named_slot_mut<G: BaseClass>(
        &mut self,
        _slot: GroupKey<Self, G>,
        name: &str,
    ) -> Option<&mut G> {
        self.group_mut().child_mut::<G>(name)
    }

    fn set_named_slot<G: BaseClass>(
        &mut self,
        _slot: GroupKey<Self, G>,
        name: &str,
        child: G,
    ) -> DomainResult<Option<Node>> {
        self.group_mut().add_group_node(name, Box::new(child))
    }

    /// Every child of the slot's class, keyed by instance name.
    fn slot_all<G: BaseClass>(&self, _slot: GroupKey<Self, G>) -> BTreeMap<&str, &G> {
        self.group().children_of::<G>().collect()
    }

    fn set_slot_all<G, I>(&mut self, _slot: GroupKey<Self, G>, children: I) -> DomainResult<()>
    where
        G: BaseClass,
        I: IntoIterator<Item = (String, G)>,
    {
        for (name, child) in children {
            self.group_mut().add_group_node(&name, Box::new(child))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_class_when_created_then_tags_nx_class() {
        let crystal = NXcrystal::with_oid(Oid::new(5));
        assert_eq!(crystal.nx_class(), Some("NXcrystal"));
        assert_eq!(crystal.oid(), Oid::new(5));
        assert_eq!(crystal.nexus_class(), Some(NexusBaseClass::NXcrystal));
    }

    #[test]
    fn given_scalar_when_set_then_reads_back() {
        let mut crystal = NXcrystal::with_oid(Oid::new(1));
        crystal
            .set_field_value(NXcrystal::USAGE, "Bragg".to_string())
            .unwrap();
        crystal.set_field_value(NXcrystal::ORDER_NO, 3).unwrap();

        assert_eq!(crystal.field_value(NXcrystal::USAGE), Some("Bragg".to_string()));
        assert_eq!(crystal.field_value(NXcrystal::ORDER_NO), Some(3));
    }

    #[test]
    fn given_string_dataset_when_setting_float_field_then_type_mismatch() {
        let mut crystal = NXcrystal::with_oid(Oid::new(1));
        let err = crystal
            .set_field_dataset(NXcrystal::CUT_ANGLE, Dataset::scalar("x".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TypeMismatch {
                field: "cut_angle".into(),
                expected: NexusType::Float,
                found: crate::domain::types::ValueKind::Str,
            }
        );
    }

    #[test]
    fn given_unset_field_when_setting_attribute_then_not_found() {
        let mut crystal = NXcrystal::with_oid(Oid::new(1));
        let err = crystal
            .set_field_attribute(NXcrystal::CUT_ANGLE, Attribute::text("units", "deg"))
            .unwrap_err();
        assert_eq!(err, DomainError::NodeNotFound("cut_angle".into()));
    }

    #[test]
    fn given_definition_when_built_then_lists_fields_units_and_deprecations() {
        let def = NXcrystal::definition();
        let cut = def.field("cut_angle").unwrap();
        assert_eq!(cut.units, Some(crate::domain::types::NexusUnit::Angle));
        let usage = def.field("usage").unwrap();
        assert_eq!(usage.enumeration, vec!["Bragg", "Laue"]);
        assert!(def.group("geometry").unwrap().deprecated.is_some());
        assert_eq!(def.extends.as_deref(), Some("NXobject"));
        assert!(def.doc.is_some());
    }

    #[test]
    fn given_key_when_debug_printed_then_shows_name() {
        assert_eq!(format!("{:?}", NXentry::TITLE), "FieldKey(title)");
        assert_eq!(format!("{:?}", NXentry::SAMPLE), "GroupKey(sample)");
    }
}
