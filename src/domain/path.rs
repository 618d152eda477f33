//! Augmented NeXus paths: `/entry:NXentry/instrument:NXinstrument/detector`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};

/// NXDL "validItemName".
const RECOMMENDED_NAME: &str = r"^[a-zA-Z0-9_]([a-zA-Z0-9_.]*[a-zA-Z0-9_])?$";
const CLASS_NAME: &str = r"^NX[A-Za-z0-9_]+$";

fn recommended_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RECOMMENDED_NAME).expect("constant name pattern"))
}

fn class_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CLASS_NAME).expect("constant class pattern"))
}

/// Whether `name` follows the NXDL naming recommendation.
pub fn is_recommended_name(name: &str) -> bool {
    recommended_name_regex().is_match(name)
}

/// Whether `name` looks like a NeXus class name (`NX...`).
pub fn is_class_name(name: &str) -> bool {
    class_name_regex().is_match(name)
}

/// Hard constraints on node names; anything else is merely discouraged.
pub fn validate_name(name: &str) -> DomainResult<()> {
    let reason = if name.is_empty() {
        "empty name"
    } else if name.contains('/') {
        "contains '/'"
    } else if name.contains(':') {
        "contains ':'"
    } else if name == "." || name == ".." {
        "reserved name"
    } else {
        return Ok(());
    };
    Err(DomainError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// One path component with its optional group class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub name: String,
    pub class: Option<String>,
}

impl PathSegment {
    pub fn new(name: impl Into<String>, class: Option<&str>) -> Self {
        Self {
            name: name.into(),
            class: class.map(str::to_string),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{}:{}", self.name, class),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for PathSegment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, class) = match s.split_once(':') {
            Some((name, class)) => (name, Some(class)),
            None => (s, None),
        };
        validate_name(name)?;
        if let Some(class) = class {
            if !is_class_name(class) {
                return Err(DomainError::InvalidName {
                    name: class.to_string(),
                    reason: "not a NeXus class name".to_string(),
                });
            }
        }
        Ok(Self::new(name, class))
    }
}

/// A path into a NeXus tree. Absolute paths start at the root group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NexusPath {
    absolute: bool,
    segments: Vec<PathSegment>,
}

impl NexusPath {
    pub fn root() -> Self {
        Self {
            absolute: true,
            segments: Vec::new(),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn is_root(&self) -> bool {
        self.absolute && self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn parent(&self) -> Option<NexusPath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            absolute: self.absolute,
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn join(&self, segment: PathSegment) -> NexusPath {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            absolute: self.absolute,
            segments,
        }
    }

    /// The path without class annotations, e.g. `/entry/data`.
    pub fn to_plain_string(&self) -> String {
        let body = self.segments.iter().map(|s| s.name.as_str()).join("/");
        if self.absolute {
            format!("/{body}")
        } else {
            body
        }
    }
}

impl fmt::Display for NexusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        write!(f, "{}", self.segments.iter().join("/"))
    }
}

impl FromStr for NexusPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidPath {
            path: s.to_string(),
            reason: reason.to_string(),
        };
        if s.is_empty() {
            return Err(invalid("empty path"));
        }
        let absolute = s.starts_with('/');
        let body = s.trim_start_matches('/');
        let body = body.strip_suffix('/').unwrap_or(body);
        if body.is_empty() {
            return if absolute { Ok(Self::root()) } else { Err(invalid("empty path")) };
        }
        let segments = body
            .split('/')
            .map(|part| {
                if part.is_empty() {
                    Err(invalid("empty segment"))
                } else {
                    part.parse::<PathSegment>()
                        .map_err(|e| invalid(&e.to_string()))
                }
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { absolute, segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_augmented_path_when_parsing_then_keeps_classes() {
        let path: NexusPath = "/entry:NXentry/sample:NXsample/temperature".parse().unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.segments()[0], PathSegment::new("entry", Some("NXentry")));
        assert_eq!(path.last().unwrap().class, None);
        assert_eq!(path.to_string(), "/entry:NXentry/sample:NXsample/temperature");
        assert_eq!(path.to_plain_string(), "/entry/sample/temperature");
    }

    #[test]
    fn given_root_when_parsing_then_has_no_segments() {
        let path: NexusPath = "/".parse().unwrap();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "/");
        assert_eq!(path.parent(), None);
    }

    #[rstest]
    #[case("")]
    #[case("/entry//data")]
    #[case("/entry:nxentry")]
    #[case("/entry/..")]
    #[case("/entry:NX")]
    fn given_malformed_path_when_parsing_then_fails(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<NexusPath>(),
            Err(DomainError::InvalidPath { .. })
        ));
    }

    #[rstest]
    #[case("data", true)]
    #[case("x_pixel_offset", true)]
    #[case("file.name", true)]
    #[case(".hidden", false)]
    #[case("two words", false)]
    fn given_name_when_checking_recommendation_then_matches_nxdl_rule(
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_recommended_name(name), expected);
    }

    #[test]
    fn given_path_when_taking_parent_and_joining_then_round_trips() {
        let path: NexusPath = "/entry:NXentry/data".parse().unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "/entry:NXentry");
        assert_eq!(parent.join(PathSegment::new("data", None)), path);
    }
}
