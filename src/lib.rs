// Export modules for library usage
pub mod model;
pub mod output;

// Re-export commonly used types
pub use crate::model::scoped_name::{NameStrip, ScopedName, ScopedNameError};
pub use crate::model::{Parameter, Signature, TypeHints, TypeKind, ValueType};

pub use crate::output::signature::{cpp_declaration, cpp_definition, python_type_hint};
pub use crate::output::{HintOptions, HintStyle, RenderContext};
