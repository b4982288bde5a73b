//! Language-neutral description of a callable's signature
//!
//! These types are produced by the interface-description parser and consumed
//! read-only by the output formatters:
//! - `ValueType`: a semantic type plus its C++ decoration (derefs, const, ref)
//! - `Parameter`: a formal argument with independent input/output roles
//! - `Signature`: the ordered parameter list plus an optional result

pub mod scoped_name;

use serde::{Deserialize, Serialize};

use crate::model::scoped_name::ScopedName;

/// Semantic type of an argument or result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// The void sentinel. With zero derefs it means "no value".
    Void,
    Bool,
    Char,
    /// A C string, spelled `char` with the pointer carried by `derefs`.
    CString,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    /// An opaque Python object pointer.
    PyObject,
    Class { name: ScopedName, protected: bool },
    Enum { name: ScopedName, protected: bool },
}

impl TypeKind {
    pub fn class(name: ScopedName) -> Self {
        Self::Class {
            name,
            protected: false,
        }
    }

    pub fn enumeration(name: ScopedName) -> Self {
        Self::Enum {
            name,
            protected: false,
        }
    }
}

/// A type descriptor: semantic type plus indirection decoration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueType {
    pub kind: TypeKind,
    /// Number of levels of pointer indirection.
    pub derefs: usize,
    pub is_const: bool,
    pub is_reference: bool,
}

impl ValueType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            derefs: 0,
            is_const: false,
            is_reference: false,
        }
    }

    pub fn pointer(kind: TypeKind) -> Self {
        Self {
            derefs: 1,
            ..Self::new(kind)
        }
    }

    pub fn reference(kind: TypeKind) -> Self {
        Self {
            is_reference: true,
            ..Self::new(kind)
        }
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// True for the bare void sentinel. `void*` is a value, not void.
    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeKind::Void) && self.derefs == 0
    }
}

/// Optional per-position overrides for the dynamic-surface hint text.
///
/// "Present but empty" is distinct from absent: an empty string suppresses
/// the token for that position entirely, while `None` falls back to the
/// formatter's own resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHints {
    pub hint_in: Option<String>,
    pub hint_out: Option<String>,
}

impl TypeHints {
    pub fn input(hint: impl Into<String>) -> Self {
        Self {
            hint_in: Some(hint.into()),
            hint_out: None,
        }
    }

    pub fn output(hint: impl Into<String>) -> Self {
        Self {
            hint_in: None,
            hint_out: Some(hint.into()),
        }
    }

    /// Explicitly empty input hint: the parameter is hidden from the input
    /// list of the dynamic surface.
    pub fn suppressed_input() -> Self {
        Self {
            hint_in: Some(String::new()),
            hint_out: None,
        }
    }

    /// Explicitly empty output hint: the value is treated as no output.
    pub fn suppressed_output() -> Self {
        Self {
            hint_in: None,
            hint_out: Some(String::new()),
        }
    }
}

/// One formal argument of a callable.
///
/// The role flags are independent: an in/out reference parameter carries
/// both. A parameter with neither flag set contributes to neither rendered
/// surface. The same shape describes a signature result, whose name and
/// role flags are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: ValueType,
    pub name: Option<String>,
    pub is_in: bool,
    pub is_out: bool,
    pub hints: Option<TypeHints>,
}

impl Parameter {
    pub fn new(value: ValueType) -> Self {
        Self {
            value,
            name: None,
            is_in: false,
            is_out: false,
            hints: None,
        }
    }

    pub fn input(value: ValueType) -> Self {
        Self {
            is_in: true,
            ..Self::new(value)
        }
    }

    pub fn output(value: ValueType) -> Self {
        Self {
            is_out: true,
            ..Self::new(value)
        }
    }

    pub fn input_output(value: ValueType) -> Self {
        Self {
            is_in: true,
            is_out: true,
            ..Self::new(value)
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hints(mut self, hints: TypeHints) -> Self {
        self.hints = Some(hints);
        self
    }
}

/// An ordered parameter list plus an optional result.
///
/// Order defines positional binding and is preserved in every rendered form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub result: Option<Parameter>,
}

impl Signature {
    pub fn new(params: Vec<Parameter>) -> Self {
        Self {
            params,
            result: None,
        }
    }

    pub fn with_result(mut self, result: Parameter) -> Self {
        self.result = Some(result);
        self
    }

    /// The void rule: no result, the bare void sentinel, or an explicitly
    /// empty output hint on the result.
    pub fn returns_void(&self) -> bool {
        let Some(result) = &self.result else {
            return true;
        };

        if result.value.is_void() {
            return true;
        }

        matches!(
            result.hints.as_ref().and_then(|hints| hints.hint_out.as_deref()),
            Some("")
        )
    }
}
