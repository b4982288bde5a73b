//! Qualified C++ names and the stripping rules applied when rendering them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a scoped name out of its textual form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScopedNameError {
    #[error("scoped name is empty")]
    Empty,
    #[error("scoped name {0:?} has an empty segment")]
    EmptySegment(String),
}

/// How much leading qualification to drop when spelling a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameStrip {
    /// Keep the full qualification.
    #[default]
    None,
    /// Drop up to this many leading scopes, always keeping the base name.
    Leading(usize),
    /// Base name only.
    All,
}

/// A `::`-qualified C++ name, e.g. `Qt::Widget::Flags`.
///
/// Always has at least one segment and no empty segments; the invariant is
/// enforced on construction and on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ScopedName(Vec<String>);

impl ScopedName {
    /// A single unqualified name.
    pub fn simple(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn parse(text: &str) -> Result<Self, ScopedNameError> {
        if text.is_empty() {
            return Err(ScopedNameError::Empty);
        }

        let segments: Vec<String> = text.split("::").map(str::to_string).collect();

        if segments.iter().any(String::is_empty) {
            return Err(ScopedNameError::EmptySegment(text.to_string()));
        }

        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The unqualified base name.
    pub fn base(&self) -> &str {
        self.0.last().expect("scoped name is never empty")
    }

    /// Elide the leading segments covered by an enclosing scope.
    ///
    /// Only a strict prefix is elided: a name equal to the scope keeps its
    /// full spelling.
    pub fn relative_to(&self, scope: &ScopedName) -> ScopedName {
        if self.0.len() > scope.0.len() && self.0.starts_with(&scope.0) {
            ScopedName(self.0[scope.0.len()..].to_vec())
        } else {
            self.clone()
        }
    }

    /// The C++ spelling after applying a strip rule.
    pub fn cpp_name(&self, strip: NameStrip) -> String {
        let segments = match strip {
            NameStrip::None => &self.0[..],
            NameStrip::All => &self.0[self.0.len() - 1..],
            NameStrip::Leading(count) => {
                let dropped = count.min(self.0.len() - 1);
                &self.0[dropped..]
            }
        };

        segments.join("::")
    }

    /// The dotted spelling used on the dynamic surface.
    pub fn python_name(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("::"))
    }
}

impl FromStr for ScopedName {
    type Err = ScopedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<String>> for ScopedName {
    type Error = ScopedNameError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err(ScopedNameError::Empty);
        }

        if segments.iter().any(String::is_empty) {
            return Err(ScopedNameError::EmptySegment(segments.join("::")));
        }

        Ok(Self(segments))
    }
}

impl From<ScopedName> for Vec<String> {
    fn from(name: ScopedName) -> Self {
        name.0
    }
}
