//! Inputs accepted by normalization.
//!
//! Callers hand over plain name tokens as often as algorithm objects produced
//! by other crypto interfaces (a subtle-crypto `{ "name": "SHA-256" }`, a
//! parsed JWK member). [`AlgorithmRef`] borrows either form.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithm::HashAlgorithm;

/// An algorithm identifier object.
pub trait AlgorithmDescriptor: fmt::Debug {
    /// Returns the `name` member, if present.
    fn name(&self) -> Option<&str>;

    /// Returns the string conversion of the object, if it has one.
    fn string_form(&self) -> Option<String> {
        None
    }
}

/// Browser-style algorithm identifier, as in `{ "name": "SHA-384" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtleAlgorithm {
    /// Algorithm name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SubtleAlgorithm {
    /// Creates an identifier with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl AlgorithmDescriptor for SubtleAlgorithm {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl AlgorithmDescriptor for Value {
    fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    fn string_form(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// A borrowed algorithm input: absent, a name token, or a descriptor object.
#[derive(Debug, Clone, Copy)]
pub enum AlgorithmRef<'a> {
    /// No algorithm was supplied.
    Absent,
    /// A plain name token.
    Name(&'a str),
    /// An algorithm identifier object.
    Descriptor(&'a dyn AlgorithmDescriptor),
}

impl<'a> AlgorithmRef<'a> {
    /// Returns the name to resolve, or `None` when the input is absent.
    ///
    /// Descriptors yield their non-empty `name`, else their non-empty string
    /// form, else the empty string.
    #[must_use]
    pub fn display_name(&self) -> Option<Cow<'a, str>> {
        match *self {
            Self::Absent => None,
            Self::Name(name) => Some(Cow::Borrowed(name)),
            Self::Descriptor(descriptor) => Some(
                descriptor
                    .name()
                    .filter(|name| !name.is_empty())
                    .map(Cow::Borrowed)
                    .or_else(|| {
                        descriptor
                            .string_form()
                            .filter(|form| !form.is_empty())
                            .map(Cow::Owned)
                    })
                    .unwrap_or_default(),
            ),
        }
    }

    /// Returns whether no algorithm was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Renders the input as the caller supplied it, for diagnostics.
impl fmt::Display for AlgorithmRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Absent => f.write_str("undefined"),
            Self::Name(name) => f.write_str(name),
            Self::Descriptor(descriptor) => match descriptor.string_form() {
                Some(form) => f.write_str(&form),
                None => match descriptor.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{descriptor:?}"),
                },
            },
        }
    }
}

impl<'a> From<&'a str> for AlgorithmRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for AlgorithmRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<Option<&'a str>> for AlgorithmRef<'a> {
    fn from(name: Option<&'a str>) -> Self {
        name.map_or(Self::Absent, Self::Name)
    }
}

impl From<HashAlgorithm> for AlgorithmRef<'_> {
    fn from(algorithm: HashAlgorithm) -> Self {
        Self::Name(algorithm.canonical_name())
    }
}

impl<'a> From<&'a SubtleAlgorithm> for AlgorithmRef<'a> {
    fn from(algorithm: &'a SubtleAlgorithm) -> Self {
        Self::Descriptor(algorithm)
    }
}

impl<'a> From<&'a dyn AlgorithmDescriptor> for AlgorithmRef<'a> {
    fn from(descriptor: &'a dyn AlgorithmDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl<'a> From<&'a Value> for AlgorithmRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(name) => Self::Name(name),
            other => Self::Descriptor(other),
        }
    }
}
