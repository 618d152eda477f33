//! Homogeneous N-dimensional values held by data nodes and attributes.

use std::fmt;

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::types::{parse_date_time, NexusType, NexusValue, ValueKind};

/// Flat element storage of a [`Dataset`], row-major.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetValues {
    Str(Vec<String>),
    Float(Vec<f64>),
    Int(Vec<i64>),
    UInt(Vec<u64>),
    Bool(Vec<bool>),
    DateTime(Vec<DateTime<Utc>>),
    Binary(Vec<u8>),
}

impl DatasetValues {
    pub fn kind(&self) -> ValueKind {
        match self {
            DatasetValues::Str(_) => ValueKind::Str,
            DatasetValues::Float(_) => ValueKind::Float,
            DatasetValues::Int(_) => ValueKind::Int,
            DatasetValues::UInt(_) => ValueKind::UInt,
            DatasetValues::Bool(_) => ValueKind::Bool,
            DatasetValues::DateTime(_) => ValueKind::DateTime,
            DatasetValues::Binary(_) => ValueKind::Binary,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DatasetValues::Str(v) => v.len(),
            DatasetValues::Float(v) => v.len(),
            DatasetValues::Int(v) => v.len(),
            DatasetValues::UInt(v) => v.len(),
            DatasetValues::Bool(v) => v.len(),
            DatasetValues::DateTime(v) => v.len(),
            DatasetValues::Binary(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn display_items(&self) -> Vec<String> {
        match self {
            DatasetValues::Str(v) => v.iter().map(|s| format!("{s:?}")).collect(),
            DatasetValues::Float(v) => v.iter().map(|x| x.to_string()).collect(),
            DatasetValues::Int(v) => v.iter().map(|x| x.to_string()).collect(),
            DatasetValues::UInt(v) => v.iter().map(|x| x.to_string()).collect(),
            DatasetValues::Bool(v) => v.iter().map(|x| x.to_string()).collect(),
            DatasetValues::DateTime(v) => v.iter().map(|x| x.to_rfc3339()).collect(),
            DatasetValues::Binary(v) => v.iter().map(|x| format!("0x{x:02x}")).collect(),
        }
    }
}

/// An N-dimensional array of one element kind. Rank 0 is a scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    shape: Vec<usize>,
    values: DatasetValues,
}

/// Element count shown by [`Dataset::summary`] before eliding.
const SUMMARY_ITEMS: usize = 4;

impl Dataset {
    pub fn scalar<T: NexusValue>(value: T) -> Self {
        Self {
            shape: Vec::new(),
            values: T::wrap(vec![value]),
        }
    }

    pub fn from_vec<T: NexusValue>(items: Vec<T>) -> Self {
        Self {
            shape: vec![items.len()],
            values: T::wrap(items),
        }
    }

    pub fn with_shape<T: NexusValue>(items: Vec<T>, shape: Vec<usize>) -> DomainResult<Self> {
        Self::from_values(T::wrap(items), shape)
    }

    /// Shapes whose element count overflows `usize` report `expected` as
    /// `usize::MAX`.
    pub fn from_values(values: DatasetValues, shape: Vec<usize>) -> DomainResult<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(*d))
            .unwrap_or(usize::MAX);
        if expected != values.len() {
            return Err(DomainError::ShapeMismatch {
                shape,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    pub fn reshape(self, shape: Vec<usize>) -> DomainResult<Self> {
        Self::from_values(self.values, shape)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn kind(&self) -> ValueKind {
        self.values.kind()
    }

    pub fn values(&self) -> &DatasetValues {
        &self.values
    }

    /// Elements as a slice, when stored exactly as `T`.
    pub fn as_slice<T: NexusValue>(&self) -> Option<&[T]> {
        T::slice(&self.values)
    }

    /// Element at flat index `index`, coerced to `T`.
    pub fn get<T: NexusValue>(&self, index: usize) -> Option<T> {
        T::extract(&self.values, index)
    }

    /// The scalar view of a dataset: its first element.
    pub fn first<T: NexusValue>(&self) -> Option<T> {
        self.get(0)
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.values {
            DatasetValues::Str(v) => v.first().map(String::as_str),
            _ => None,
        }
    }

    /// Parse a comma separated literal list as values of `nx_type`.
    ///
    /// A single element yields a scalar. `NX_CHAR` text is never split.
    pub fn parse(nx_type: NexusType, raw: &str) -> DomainResult<Self> {
        if nx_type == NexusType::Char {
            return Ok(Self::scalar(raw.to_string()));
        }
        let items: Vec<&str> = raw.split(',').map(str::trim).collect();
        let invalid = |item: &str| DomainError::InvalidValue {
            nx_type,
            value: item.to_string(),
        };
        let values = match nx_type {
            NexusType::Float => DatasetValues::Float(parse_all(&items, invalid)?),
            NexusType::Int | NexusType::PosInt => DatasetValues::Int(parse_all(&items, invalid)?),
            NexusType::UInt => DatasetValues::UInt(parse_all(&items, invalid)?),
            NexusType::Binary => DatasetValues::Binary(parse_all(&items, invalid)?),
            NexusType::Boolean => DatasetValues::Bool(
                items
                    .iter()
                    .map(|item| parse_bool(item).ok_or_else(|| invalid(item)))
                    .collect::<DomainResult<_>>()?,
            ),
            NexusType::DateTime => DatasetValues::DateTime(
                items
                    .iter()
                    .map(|item| parse_date_time(item))
                    .collect::<DomainResult<_>>()?,
            ),
            NexusType::Number => match parse_all::<i64>(&items, invalid) {
                Ok(ints) => DatasetValues::Int(ints),
                Err(_) => DatasetValues::Float(parse_all(&items, invalid)?),
            },
            NexusType::CharOrNumber => match Self::parse(NexusType::Number, raw) {
                Ok(numbers) => return Ok(numbers),
                Err(_) => return Ok(Self::scalar(raw.to_string())),
            },
            NexusType::Char => DatasetValues::Str(vec![raw.to_string()]),
        };
        Ok(Self::from_raw_items(values))
    }

    /// Parse a literal whose type is not declared anywhere.
    ///
    /// Tries numbers, booleans and timestamps before falling back to text.
    pub fn infer(raw: &str) -> Self {
        [NexusType::Number, NexusType::Boolean, NexusType::DateTime]
            .into_iter()
            .find_map(|t| Self::parse(t, raw).ok())
            .unwrap_or_else(|| Self::scalar(raw.to_string()))
    }

    fn from_raw_items(values: DatasetValues) -> Self {
        let shape = if values.len() == 1 {
            Vec::new()
        } else {
            vec![values.len()]
        };
        Self { shape, values }
    }

    /// Short human readable rendering of the values.
    pub fn summary(&self) -> String {
        let items = self.values.display_items();
        if self.is_scalar() {
            return items.into_iter().next().unwrap_or_default();
        }
        let shown = items.iter().take(SUMMARY_ITEMS).join(", ");
        if items.len() > SUMMARY_ITEMS {
            format!("[{shown}, …] {:?}", self.shape)
        } else {
            format!("[{shown}]")
        }
    }
}

impl<T: NexusValue> From<Vec<T>> for Dataset {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn parse_all<T: std::str::FromStr>(
    items: &[&str],
    invalid: impl Fn(&str) -> DomainError,
) -> DomainResult<Vec<T>> {
    items
        .iter()
        .map(|item| item.parse::<T>().map_err(|_| invalid(item)))
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
