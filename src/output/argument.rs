//! Rendering of a single argument or result
//!
//! - C++ type spelling with const/pointer/reference decoration and an
//!   optional embedded name
//! - the positional fallback naming shared by the definition and hint
//!   surfaces
//! - dynamic-surface hint tokens, honoring overrides and suppression

use crate::model::scoped_name::ScopedName;
use crate::model::{Parameter, TypeKind, ValueType};
use crate::output::{HintStyle, RenderContext};

/// Prefix of the generated proxy class that stands in for a protected name
/// when it is not promoted to public.
const PROTECTED_PROXY_PREFIX: &str = "pybProtected_";

/// The C++ spelling of a value, optionally with a name embedded.
pub fn cpp_type(value: &ValueType, ctx: &RenderContext, name: Option<&str>) -> String {
    let mut base = String::new();

    if value.is_const {
        base.push_str("const ");
    }

    base.push_str(&base_spelling(&value.kind, ctx));

    let mut decoration = "*".repeat(value.derefs);
    if value.is_reference {
        decoration.push('&');
    }

    let rendered = match name {
        None => format!("{base}{decoration}"),
        Some(name) if decoration.is_empty() => format!("{base} {name}"),
        Some(name) => format!("{base} {decoration}{name}"),
    };

    if ctx.as_xml {
        escape_xml(&rendered)
    } else {
        rendered
    }
}

/// The rendered name of a parameter: its explicit name, or the stable
/// positional fallback.
pub fn argument_name(param: &Parameter, position: usize) -> String {
    match &param.name {
        Some(name) => name.clone(),
        None => format!("arg{position}"),
    }
}

/// The dynamic-surface token for a parameter or result.
///
/// `position` is `Some` for an input token and `None` for an output token.
/// Returns `None` when an explicitly empty override suppresses the token,
/// or when nothing can be derived for an output.
pub fn type_hint(param: &Parameter, style: HintStyle, position: Option<usize>) -> Option<String> {
    match position {
        Some(position) => {
            let name = argument_name(param, position);

            match param.hints.as_ref().and_then(|hints| hints.hint_in.as_deref()) {
                Some("") => {
                    log::trace!("suppressing input token for {name}: empty hint override");
                    None
                }
                Some(hint) => Some(format!("{name}: {hint}")),
                // We don't guess annotations the parser didn't supply.
                None => Some(name),
            }
        }
        None => match param.hints.as_ref().and_then(|hints| hints.hint_out.as_deref()) {
            Some("") => {
                log::trace!("suppressing output token: empty hint override");
                None
            }
            Some(hint) => Some(hint.to_string()),
            None => derived_hint(&param.value, style),
        },
    }
}

fn base_spelling(kind: &TypeKind, ctx: &RenderContext) -> String {
    match kind {
        TypeKind::Void => "void".to_string(),
        TypeKind::Bool => "bool".to_string(),
        TypeKind::Char | TypeKind::CString => "char".to_string(),
        TypeKind::Short => "short".to_string(),
        TypeKind::UShort => "unsigned short".to_string(),
        TypeKind::Int => "int".to_string(),
        TypeKind::UInt => "unsigned int".to_string(),
        TypeKind::Long => "long".to_string(),
        TypeKind::ULong => "unsigned long".to_string(),
        TypeKind::LongLong => "long long".to_string(),
        TypeKind::ULongLong => "unsigned long long".to_string(),
        TypeKind::Float => "float".to_string(),
        TypeKind::Double => "double".to_string(),
        TypeKind::PyObject => "PyObject".to_string(),
        TypeKind::Class { name, protected } | TypeKind::Enum { name, protected } => {
            scoped_spelling(name, *protected, ctx)
        }
    }
}

fn scoped_spelling(name: &ScopedName, protected: bool, ctx: &RenderContext) -> String {
    if protected && !ctx.make_public {
        // The proxy lives at global scope in the generated code, so the
        // original qualification is dropped.
        return format!("{PROTECTED_PROXY_PREFIX}{}", name.base());
    }

    let elided = match &ctx.scope {
        Some(scope) => name.relative_to(scope),
        None => name.clone(),
    };

    elided.cpp_name(ctx.strip)
}

/// The hint derived from a semantic type when no override is supplied.
fn derived_hint(value: &ValueType, style: HintStyle) -> Option<String> {
    match &value.kind {
        TypeKind::Void => None,
        TypeKind::Bool => Some("bool".to_string()),
        TypeKind::Char | TypeKind::CString => Some("str".to_string()),
        TypeKind::Short
        | TypeKind::UShort
        | TypeKind::Int
        | TypeKind::UInt
        | TypeKind::Long
        | TypeKind::ULong
        | TypeKind::LongLong
        | TypeKind::ULongLong => Some("int".to_string()),
        TypeKind::Float | TypeKind::Double => Some("float".to_string()),
        TypeKind::PyObject => Some(
            match style {
                HintStyle::Docstring => "object",
                HintStyle::Annotation => "typing.Any",
            }
            .to_string(),
        ),
        TypeKind::Class { name, .. } | TypeKind::Enum { name, .. } => Some(match style {
            HintStyle::Docstring => name.base().to_string(),
            HintStyle::Annotation => name.python_name(),
        }),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scoped_name::NameStrip;
    use crate::model::TypeHints;

    fn class_type(name: &str) -> ValueType {
        ValueType::new(TypeKind::class(ScopedName::parse(name).unwrap()))
    }

    #[test]
    fn primitive_spellings() {
        let ctx = RenderContext::default();
        assert_eq!(cpp_type(&ValueType::new(TypeKind::Int), &ctx, None), "int");
        assert_eq!(
            cpp_type(&ValueType::new(TypeKind::ULongLong), &ctx, None),
            "unsigned long long"
        );
        assert_eq!(
            cpp_type(&ValueType::pointer(TypeKind::CString), &ctx, None),
            "char*"
        );
    }

    #[test]
    fn const_reference_spelling() {
        let ctx = RenderContext::default();
        let value = ValueType::reference(TypeKind::class(ScopedName::simple("QString"))).constant();
        assert_eq!(cpp_type(&value, &ctx, None), "const QString&");
        assert_eq!(cpp_type(&value, &ctx, Some("arg0")), "const QString &arg0");
    }

    #[test]
    fn named_spelling_places_decoration_with_name() {
        let ctx = RenderContext::default();
        let value = ValueType::pointer(TypeKind::class(ScopedName::simple("QWidget")));
        assert_eq!(cpp_type(&value, &ctx, None), "QWidget*");
        assert_eq!(cpp_type(&value, &ctx, Some("parent")), "QWidget *parent");
        assert_eq!(
            cpp_type(&ValueType::new(TypeKind::Int), &ctx, Some("arg0")),
            "int arg0"
        );
    }

    #[test]
    fn scope_elision_and_stripping() {
        let value = class_type("Qt::Widget::Flags");

        let ctx = RenderContext::in_scope(ScopedName::parse("Qt::Widget").unwrap());
        assert_eq!(cpp_type(&value, &ctx, None), "Flags");

        let ctx = RenderContext {
            strip: NameStrip::Leading(1),
            ..RenderContext::default()
        };
        assert_eq!(cpp_type(&value, &ctx, None), "Widget::Flags");
    }

    #[test]
    fn xml_escaping_covers_reference_decoration() {
        let ctx = RenderContext {
            as_xml: true,
            ..RenderContext::default()
        };
        let value = ValueType::reference(TypeKind::class(ScopedName::simple("QString"))).constant();
        assert_eq!(cpp_type(&value, &ctx, None), "const QString&amp;");
    }

    #[test]
    fn protected_names_render_as_proxy_unless_promoted() {
        let value = ValueType::new(TypeKind::Enum {
            name: ScopedName::parse("QWidget::Mode").unwrap(),
            protected: true,
        });

        let ctx = RenderContext::default();
        assert_eq!(cpp_type(&value, &ctx, None), "pybProtected_Mode");

        let ctx = RenderContext {
            make_public: true,
            ..RenderContext::default()
        };
        assert_eq!(cpp_type(&value, &ctx, None), "QWidget::Mode");
    }

    #[test]
    fn explicit_name_wins_over_positional_fallback() {
        let named = Parameter::input(ValueType::new(TypeKind::Int)).named("count");
        assert_eq!(argument_name(&named, 3), "count");

        let unnamed = Parameter::input(ValueType::new(TypeKind::Int));
        assert_eq!(argument_name(&unnamed, 3), "arg3");
    }

    #[test]
    fn input_token_is_name_only_without_override() {
        let param = Parameter::input(ValueType::new(TypeKind::Int));
        assert_eq!(
            type_hint(&param, HintStyle::Docstring, Some(0)),
            Some("arg0".to_string())
        );
    }

    #[test]
    fn input_token_includes_override_hint() {
        let param = Parameter::input(ValueType::new(TypeKind::Int))
            .named("count")
            .with_hints(TypeHints::input("int"));
        assert_eq!(
            type_hint(&param, HintStyle::Docstring, Some(0)),
            Some("count: int".to_string())
        );
    }

    #[test]
    fn empty_override_suppresses_token() {
        let param = Parameter::input(ValueType::new(TypeKind::Int))
            .with_hints(TypeHints::suppressed_input());
        assert_eq!(type_hint(&param, HintStyle::Docstring, Some(0)), None);

        let out = Parameter::output(ValueType::new(TypeKind::Int))
            .with_hints(TypeHints::suppressed_output());
        assert_eq!(type_hint(&out, HintStyle::Docstring, None), None);
    }

    #[test]
    fn output_token_derives_from_type() {
        let out = Parameter::output(ValueType::new(TypeKind::Double));
        assert_eq!(
            type_hint(&out, HintStyle::Docstring, None),
            Some("float".to_string())
        );

        let class_out = Parameter::output(class_type("Qt::Widget::Flags"));
        assert_eq!(
            type_hint(&class_out, HintStyle::Docstring, None),
            Some("Flags".to_string())
        );
        assert_eq!(
            type_hint(&class_out, HintStyle::Annotation, None),
            Some("Qt.Widget.Flags".to_string())
        );

        let enum_out = Parameter::output(ValueType::new(TypeKind::enumeration(
            ScopedName::parse("Qt::Mode").unwrap(),
        )));
        assert_eq!(
            type_hint(&enum_out, HintStyle::Annotation, None),
            Some("Qt.Mode".to_string())
        );
    }

    #[test]
    fn void_output_derives_nothing() {
        let out = Parameter::output(ValueType::new(TypeKind::Void));
        assert_eq!(type_hint(&out, HintStyle::Docstring, None), None);
    }
}
