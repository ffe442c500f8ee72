//! Argument direction classification over a method's argument list.
//!
//! All three functions are total: malformed or unrecognized usage tags drop
//! an argument from the filtered views instead of aborting generation.

use crate::model::{Arg, Method, TypeKind, Usage};

/// Input-family arguments in their original order. `skip_self` drops the
/// leading implicit receiver before filtering.
pub fn input_args(method: &Method, skip_self: bool) -> Vec<&Arg> {
    let args = if skip_self {
        method.args.get(1..).unwrap_or(&[])
    } else {
        &method.args[..]
    };
    args.iter().filter(|arg| arg.usage.is_input()).collect()
}

/// Output-family arguments in their original order. The receiver is never an
/// output, so there is no `skip_self` here.
pub fn output_args(method: &Method) -> Vec<&Arg> {
    method.args.iter().filter(|arg| arg.usage.is_output()).collect()
}

/// Effective type of an argument. An output-by-pointer writes through its
/// pointee, so report the pointee's spelling and kind when the parser
/// resolved one; otherwise the argument's own type stands.
pub fn resolve_type(arg: &Arg) -> (&str, TypeKind) {
    if arg.usage == Usage::OutputPtr {
        if let Some(child) = arg.ty.child.as_deref() {
            return (&child.c_type, child.kind);
        }
    }
    (&arg.ty.c_type, arg.ty.kind)
}

// ------------------------------- Tests ------------------------------------ //
