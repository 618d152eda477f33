//! Identifiers of every compiled base class.

use std::fmt;
use std::str::FromStr;

use crate::domain::classes::{self, BaseClass};
use crate::domain::error::DomainError;
use crate::domain::node::NexusObject;
use crate::domain::oid::Oid;
use crate::domain::schema::{BaseClassDef, ClassCategory};

macro_rules! nexus_class_table {
    ( $( $class:ident => $category:ident, )* ) => {
        /// A compiled NeXus base class.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NexusBaseClass {
            $( $class, )*
        }

        impl NexusBaseClass {
            pub const ALL: &'static [NexusBaseClass] = &[ $( NexusBaseClass::$class, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( NexusBaseClass::$class => stringify!($class), )*
                }
            }

            pub fn category(self) -> ClassCategory {
                match self {
                    $( NexusBaseClass::$class => ClassCategory::$category, )*
                }
            }

            pub fn definition(self) -> BaseClassDef {
                match self {
                    $( NexusBaseClass::$class => <classes::$class as BaseClass>::definition(), )*
                }
            }

            /// A new empty instance of the class carrying `oid`.
            pub(crate) fn instantiate(self, oid: Oid) -> Box<dyn NexusObject> {
                match self {
                    $( NexusBaseClass::$class => Box::new(<classes::$class as BaseClass>::with_oid(oid)), )*
                }
            }
        }

        impl FromStr for NexusBaseClass {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($class) => Ok(NexusBaseClass::$class), )*
                    _ => Err(DomainError::UnknownBaseClass(s.to_string())),
                }
            }
        }
    };
}

nexus_class_table! {
    NXobject => Base,
    NXroot => Base,
    NXentry => Base,
    NXsubentry => Base,
    NXinstrument => Base,
    NXsample => Base,
    NXsample_component => Base,
    NXuser => Base,
    NXdata => Base,
    NXmonitor => Base,
    NXnote => Base,
    NXprocess => Base,
    NXparameters => Base,
    NXcollection => Base,
    NXlog => Base,
    NXenvironment => Base,
    NXsensor => Base,
    NXcite => Base,
    NXcontainer => Contributed,
    NXpdb => Base,
    NXsource => Base,
    NXbeam => Base,
    NXaperture => Base,
    NXslit => Base,
    NXpinhole => Base,
    NXattenuator => Base,
    NXfilter => Base,
    NXmirror => Base,
    NXmonochromator => Base,
    NXcrystal => Base,
    NXgrating => Base,
    NXcollimator => Base,
    NXcapillary => Base,
    NXguide => Base,
    NXinsertion_device => Base,
    NXbending_magnet => Base,
    NXbeam_stop => Base,
    NXmoderator => Base,
    NXfermi_chopper => Base,
    NXdisk_chopper => Base,
    NXvelocity_selector => Base,
    NXpolarizer => Base,
    NXflipper => Base,
    NXxraylens => Base,
    NXfresnel_zone_plate => Base,
    NXquadrupole_magnet => Contributed,
    NXsolenoid_magnet => Contributed,
    NXspin_rotator => Contributed,
    NXseparator => Contributed,
    NXelectrostatic_kicker => Contributed,
    NXmagnetic_kicker => Contributed,
    NXbeam_transfer_matrix_table => Contributed,
    NXdetector => Base,
    NXdetector_module => Base,
    NXdetector_group => Base,
    NXevent_data => Base,
    NXreflections => Base,
    NXtransformations => Base,
    NXgeometry => Base,
    NXshape => Base,
    NXtranslation => Base,
    NXorientation => Base,
    NXoff_geometry => Base,
    NXcylindrical_geometry => Base,
    NXpositioner => Base,
    NXlens_em => Contributed,
    NXaberration => Contributed,
    NXcorrector_cs => Contributed,
    NXebeam_column => Contributed,
    NXibeam_column => Contributed,
    NXstage_lab => Contributed,
    NXscanbox_em => Contributed,
    NXfabrication => Contributed,
    NXelectronanalyser => Contributed,
    NXcollectioncolumn => Contributed,
    NXenergydispersion => Contributed,
    NXspindispersion => Contributed,
    NXmanipulator => Contributed,
    NXdeflector => Contributed,
}

impl fmt::Display for NexusBaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
