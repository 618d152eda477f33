//! NeXus value types, unit categories and the Rust types backing them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dataset::DatasetValues;
use crate::domain::error::{DomainError, DomainResult};

/// Storage kind of the elements of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Float,
    Int,
    UInt,
    Bool,
    DateTime,
    Binary,
}

impl ValueKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Float | ValueKind::Int | ValueKind::UInt)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Bool => "bool",
            ValueKind::DateTime => "date-time",
            ValueKind::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// NXDL field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NexusType {
    #[serde(rename = "NX_CHAR")]
    Char,
    #[serde(rename = "NX_FLOAT")]
    Float,
    #[serde(rename = "NX_NUMBER")]
    Number,
    #[serde(rename = "NX_INT")]
    Int,
    #[serde(rename = "NX_POSINT")]
    PosInt,
    #[serde(rename = "NX_UINT")]
    UInt,
    #[serde(rename = "NX_BOOLEAN")]
    Boolean,
    #[serde(rename = "NX_DATE_TIME")]
    DateTime,
    #[serde(rename = "NX_BINARY")]
    Binary,
    #[serde(rename = "NX_CHAR_OR_NUMBER")]
    CharOrNumber,
}

impl NexusType {
    pub const ALL: [NexusType; 10] = [
        NexusType::Char,
        NexusType::Float,
        NexusType::Number,
        NexusType::Int,
        NexusType::PosInt,
        NexusType::UInt,
        NexusType::Boolean,
        NexusType::DateTime,
        NexusType::Binary,
        NexusType::CharOrNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NexusType::Char => "NX_CHAR",
            NexusType::Float => "NX_FLOAT",
            NexusType::Number => "NX_NUMBER",
            NexusType::Int => "NX_INT",
            NexusType::PosInt => "NX_POSINT",
            NexusType::UInt => "NX_UINT",
            NexusType::Boolean => "NX_BOOLEAN",
            NexusType::DateTime => "NX_DATE_TIME",
            NexusType::Binary => "NX_BINARY",
            NexusType::CharOrNumber => "NX_CHAR_OR_NUMBER",
        }
    }

    /// Whether values stored as `kind` are acceptable for this type.
    pub fn accepts(self, kind: ValueKind) -> bool {
        match self {
            NexusType::Char => kind == ValueKind::Str,
            NexusType::Float | NexusType::Number => kind.is_numeric(),
            NexusType::Int | NexusType::PosInt | NexusType::UInt => {
                matches!(kind, ValueKind::Int | ValueKind::UInt)
            }
            NexusType::Boolean => matches!(kind, ValueKind::Bool | ValueKind::Int | ValueKind::UInt),
            NexusType::DateTime => matches!(kind, ValueKind::DateTime | ValueKind::Str),
            NexusType::Binary => matches!(kind, ValueKind::Binary | ValueKind::Int | ValueKind::UInt),
            NexusType::CharOrNumber => kind == ValueKind::Str || kind.is_numeric(),
        }
    }
}

impl fmt::Display for NexusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NexusType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NexusType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DomainError::InvalidNxdl(format!("unknown NeXus type: {s}")))
    }
}

macro_rules! nexus_units {
    ( $( $variant:ident => $name:literal, $example:literal; )* ) => {
        /// NXDL unit categories.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum NexusUnit {
            $( #[serde(rename = $name)] $variant, )*
        }

        impl NexusUnit {
            pub const ALL: &'static [NexusUnit] = &[ $( NexusUnit::$variant ),* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( NexusUnit::$variant => $name, )*
                }
            }

            /// A representative unit string of this category.
            pub fn example(self) -> &'static str {
                match self {
                    $( NexusUnit::$variant => $example, )*
                }
            }
        }
    };
}

nexus_units! {
    Angle => "NX_ANGLE", "degrees";
    Any => "NX_ANY", "";
    Area => "NX_AREA", "m2";
    Charge => "NX_CHARGE", "C";
    Count => "NX_COUNT", "";
    CrossSection => "NX_CROSS_SECTION", "barns";
    Current => "NX_CURRENT", "A";
    Dimensionless => "NX_DIMENSIONLESS", "";
    Emittance => "NX_EMITTANCE", "nm rad";
    Energy => "NX_ENERGY", "eV";
    Flux => "NX_FLUX", "1/s/cm2";
    Frequency => "NX_FREQUENCY", "Hz";
    Length => "NX_LENGTH", "m";
    Mass => "NX_MASS", "g";
    MassDensity => "NX_MASS_DENSITY", "g/cm3";
    MolecularWeight => "NX_MOLECULAR_WEIGHT", "g/mol";
    Period => "NX_PERIOD", "us";
    PerArea => "NX_PER_AREA", "1/m2";
    PerLength => "NX_PER_LENGTH", "1/m";
    Power => "NX_POWER", "W";
    Pressure => "NX_PRESSURE", "Pa";
    Pulses => "NX_PULSES", "";
    ScatteringLengthDensity => "NX_SCATTERING_LENGTH_DENSITY", "m/m3";
    SolidAngle => "NX_SOLID_ANGLE", "sr";
    Temperature => "NX_TEMPERATURE", "K";
    Time => "NX_TIME", "s";
    TimeOfFlight => "NX_TIME_OF_FLIGHT", "s";
    Transformation => "NX_TRANSFORMATION", "";
    Unitless => "NX_UNITLESS", "";
    Voltage => "NX_VOLTAGE", "V";
    Volume => "NX_VOLUME", "m3";
    Wavelength => "NX_WAVELENGTH", "nm";
    Wavenumber => "NX_WAVENUMBER", "1/nm";
}

impl NexusUnit {
    /// Physical categories expect a `units` attribute on the field.
    pub fn requires_units(self) -> bool {
        !matches!(
            self,
            NexusUnit::Any
                | NexusUnit::Unitless
                | NexusUnit::Dimensionless
                | NexusUnit::Count
                | NexusUnit::Pulses
                | NexusUnit::Transformation
        )
    }
}

impl fmt::Display for NexusUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NexusUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NexusUnit::ALL
            .iter()
            .copied()
            .find(|u| u.name() == s)
            .ok_or_else(|| DomainError::InvalidNxdl(format!("unknown unit category: {s}")))
    }
}

/// A Rust type that can be stored as the elements of a NeXus dataset.
///
/// Reading coerces between compatible storage kinds, so an integer dataset
/// can be read as `f64` and a non-negative one as `u64`.
pub trait NexusValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// The NX type this Rust type stands for.
    const NX_TYPE: NexusType;
    /// Storage kind produced by [`NexusValue::wrap`].
    const KIND: ValueKind;

    fn wrap(items: Vec<Self>) -> DatasetValues;

    fn slice(values: &DatasetValues) -> Option<&[Self]>;

    fn extract(values: &DatasetValues, index: usize) -> Option<Self>;

    /// Whether a dataset of `kind` can be stored in a field of this type.
    fn accepts(kind: ValueKind) -> bool {
        Self::NX_TYPE.accepts(kind)
    }
}

impl NexusValue for String {
    const NX_TYPE: NexusType = NexusType::Char;
    const KIND: ValueKind = ValueKind::Str;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::Str(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::Str(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::Str(v) => v.get(index).cloned(),
            _ => None,
        }
    }
}

impl NexusValue for f64 {
    const NX_TYPE: NexusType = NexusType::Float;
    const KIND: ValueKind = ValueKind::Float;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::Float(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::Float(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::Float(v) => v.get(index).copied(),
            DatasetValues::Int(v) => v.get(index).map(|&x| x as f64),
            DatasetValues::UInt(v) => v.get(index).map(|&x| x as f64),
            _ => None,
        }
    }
}

impl NexusValue for i64 {
    const NX_TYPE: NexusType = NexusType::Int;
    const KIND: ValueKind = ValueKind::Int;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::Int(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::Int(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::Int(v) => v.get(index).copied(),
            DatasetValues::UInt(v) => v.get(index).and_then(|&x| i64::try_from(x).ok()),
            _ => None,
        }
    }
}

impl NexusValue for u64 {
    const NX_TYPE: NexusType = NexusType::UInt;
    const KIND: ValueKind = ValueKind::UInt;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::UInt(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::UInt(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::UInt(v) => v.get(index).copied(),
            DatasetValues::Int(v) => v.get(index).and_then(|&x| u64::try_from(x).ok()),
            _ => None,
        }
    }
}

impl NexusValue for bool {
    const NX_TYPE: NexusType = NexusType::Boolean;
    const KIND: ValueKind = ValueKind::Bool;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::Bool(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::Bool(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::Bool(v) => v.get(index).copied(),
            DatasetValues::Int(v) => v.get(index).map(|&x| x != 0),
            DatasetValues::UInt(v) => v.get(index).map(|&x| x != 0),
            _ => None,
        }
    }
}

impl NexusValue for DateTime<Utc> {
    const NX_TYPE: NexusType = NexusType::DateTime;
    const KIND: ValueKind = ValueKind::DateTime;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::DateTime(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::DateTime(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::DateTime(v) => v.get(index).copied(),
            DatasetValues::Str(v) => v.get(index).and_then(|s| parse_date_time(s).ok()),
            _ => None,
        }
    }
}

impl NexusValue for u8 {
    const NX_TYPE: NexusType = NexusType::Binary;
    const KIND: ValueKind = ValueKind::Binary;

    fn wrap(items: Vec<Self>) -> DatasetValues {
        DatasetValues::Binary(items)
    }

    fn slice(values: &DatasetValues) -> Option<&[Self]> {
        match values {
            DatasetValues::Binary(v) => Some(v),
            _ => None,
        }
    }

    fn extract(values: &DatasetValues, index: usize) -> Option<Self> {
        match values {
            DatasetValues::Binary(v) => v.get(index).copied(),
            DatasetValues::UInt(v) => v.get(index).and_then(|&x| u8::try_from(x).ok()),
            DatasetValues::Int(v) => v.get(index).and_then(|&x| u8::try_from(x).ok()),
            _ => None,
        }
    }
}

/// Parse an ISO 8601 / RFC 3339 timestamp into UTC.
pub fn parse_date_time(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidValue {
            nx_type: NexusType::DateTime,
            value: raw.to_string(),
        })
}
