//! Signature-level rendering
//!
//! - `cpp_declaration` / `cpp_definition`: the comma-joined parameter list
//!   for the static C++ surface
//! - `python_type_hint`: the `(inputs) -> output` hint for the dynamic
//!   surface, which separates input from output roles and aggregates the
//!   outputs into a single return type

use crate::model::Signature;
use crate::output::argument::{argument_name, cpp_type, type_hint};
use crate::output::{HintOptions, HintStyle, RenderContext};

/// The C++ parameter list of a signature as a declaration: types only.
///
/// Every parameter is included regardless of its roles; the static surface
/// has no input/output distinction. A nullary signature yields an empty
/// string.
pub fn cpp_declaration(signature: &Signature, ctx: &RenderContext) -> String {
    signature
        .params
        .iter()
        .map(|param| cpp_type(&param.value, ctx, None))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The C++ parameter list of a signature as a definition: typed and named.
pub fn cpp_definition(signature: &Signature, ctx: &RenderContext) -> String {
    signature
        .params
        .iter()
        .enumerate()
        .map(|(position, param)| {
            let name = argument_name(param, position);
            cpp_type(&param.value, ctx, Some(&name))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The dynamic-surface hint of a whole signature.
pub fn python_type_hint(signature: &Signature, opts: &HintOptions) -> String {
    let mut in_args = Vec::new();

    if opts.need_self {
        // The receiver is a fixed literal, never routed through the
        // argument formatter.
        in_args.push("self".to_string());
    }

    // Out-parameters are counted before hint resolution, so a parameter
    // whose output token is suppressed still influences tuple wrapping.
    let mut nr_out = 0;

    for (position, param) in signature.params.iter().enumerate() {
        if param.is_out {
            nr_out += 1;
        }

        if param.is_in {
            if let Some(hint) = type_hint(param, opts.style, Some(position)) {
                in_args.push(hint);
            }
        }
    }

    let args_s = format!("({})", in_args.join(", "));

    if opts.exclude_result {
        return args_s;
    }

    let has_result = !signature.returns_void();

    if has_result || nr_out > 0 {
        let mut out_args = Vec::new();

        if has_result {
            if let Some(result) = &signature.result {
                if let Some(hint) = type_hint(result, opts.style, None) {
                    out_args.push(hint);
                }
            }
        }

        for param in &signature.params {
            if param.is_out {
                if let Some(hint) = type_hint(param, opts.style, None) {
                    out_args.push(hint);
                }
            }
        }

        let needs_tuple = (has_result && nr_out > 0) || nr_out > 1;

        let joined = out_args.join(", ");
        let results_s = if needs_tuple {
            let (open, close) = opts.style.tuple_tokens();
            format!(" -> {open}{joined}{close}")
        } else {
            format!(" -> {joined}")
        };

        format!("{args_s}{results_s}")
    } else if opts.style == HintStyle::Annotation {
        format!("{args_s} -> None")
    } else {
        // Absent returns stay implicit in doc comments.
        log::debug!("omitting void return from hint {args_s}");
        args_s
    }
}
