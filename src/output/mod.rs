//! Textual output surfaces for a signature: the static C++ form and the
//! dynamic Python type-hint form.

pub mod argument;
pub mod signature;

use serde::{Deserialize, Serialize};

use crate::model::scoped_name::{NameStrip, ScopedName};

/// Which dynamic-surface dialect a hint is rendered for.
///
/// The choice only selects token spellings; the rendering logic is shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintStyle {
    /// Doc-comment style: bare tuple parentheses, absent returns implicit.
    #[default]
    Docstring,
    /// Fully-qualified annotation style: `typing.Tuple[...]` wrapping and an
    /// explicit `None` return.
    Annotation,
}

impl HintStyle {
    pub(crate) fn tuple_tokens(&self) -> (&'static str, &'static str) {
        match self {
            Self::Docstring => ("(", ")"),
            Self::Annotation => ("typing.Tuple[", "]"),
        }
    }
}

/// Caller-supplied context for rendering the static C++ surface.
///
/// Transient: constructed per call, never stored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// Scope a type name is being compared against for qualification elision.
    pub scope: Option<ScopedName>,
    pub strip: NameStrip,
    /// Render otherwise-protected names as if public.
    pub make_public: bool,
    /// XML-escape the rendered type text.
    pub as_xml: bool,
}

impl RenderContext {
    pub fn in_scope(scope: ScopedName) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }
}

/// Options for rendering the dynamic-surface hint of a whole signature.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HintOptions {
    /// Synthesize a `self` receiver as the first input.
    pub need_self: bool,
    /// Render the input side only.
    pub exclude_result: bool,
    pub style: HintStyle,
}

impl HintOptions {
    pub fn annotation() -> Self {
        Self {
            style: HintStyle::Annotation,
            ..Self::default()
        }
    }
}
