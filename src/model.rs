//! Data model for the parsed native API surface.
//!
//! The upstream bindings parser produces these entities; this crate consumes
//! them read-only and never constructs or mutates them outside of
//! deserialization. Field order inside argument lists is significant and is
//! preserved exactly as the parser emitted it.

use serde::{Deserialize, Serialize};

/// Coarse category of a native type declaration. The set is closed; anything
/// the parser emits outside of it lands on `Unknown` and classifies to the
/// generic `"any"` tag instead of failing generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Basic,
    Struct,
    Class,
    Pointer,
    #[serde(other)]
    Unknown,
}

/// Per-argument direction tag. `Unknown` catches tags this crate does not
/// recognize; such arguments appear in neither the input nor the output
/// subsequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    Input,
    InputPtr,
    InputDeref,
    Output,
    OutputPtr,
    #[serde(other)]
    Unknown,
}

impl Usage {
    pub fn is_input(self) -> bool {
        matches!(self, Usage::Input | Usage::InputPtr | Usage::InputDeref)
    }

    pub fn is_output(self) -> bool {
        matches!(self, Usage::Output | Usage::OutputPtr)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Native spelling, e.g. `FMOD_STUDIO_SYSTEM` or `unsigned int`.
    pub c_type: String,
    #[serde(rename = "type")]
    pub kind: TypeKind,
    /// Pointee decl, present on pointer kinds when the parser resolved one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<TypeDecl>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDecl,
    pub usage: Usage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Arg>,
    /// Set by the parser for methods it synthesized; informational only.
    #[serde(default)]
    pub generated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDecl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default)]
    pub is_class: bool,
    /// (script-visible name, method) pairs, parser order preserved.
    #[serde(default)]
    pub methods: Vec<(String, Method)>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Top-level document produced by the bindings parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSurface {
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub structs: Vec<StructDecl>,
    /// (visibility, name, method) triples for free functions.
    #[serde(default)]
    pub global_functions: Vec<(u32, String, Method)>,
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_string_maps_to_catch_all() {
        let decl: TypeDecl =
            serde_json::from_value(serde_json::json!({"c_type": "mystery", "type": "funcdef"}))
                .unwrap();
        assert_eq!(decl.kind, TypeKind::Unknown);
    }

    #[test]
    fn unknown_usage_string_maps_to_catch_all() {
        let arg: Arg = serde_json::from_value(serde_json::json!({
            "name": "x",
            "type": {"c_type": "int", "type": "basic"},
            "usage": "inout"
        }))
        .unwrap();
        assert_eq!(arg.usage, Usage::Unknown);
        assert!(!arg.usage.is_input());
        assert!(!arg.usage.is_output());
    }

    #[test]
    fn pointer_decl_round_trips_with_child() {
        let decl: TypeDecl = serde_json::from_value(serde_json::json!({
            "c_type": "float *",
            "type": "pointer",
            "child": {"c_type": "float", "type": "basic"}
        }))
        .unwrap();
        assert_eq!(decl.kind, TypeKind::Pointer);
        let child = decl.child.as_deref().unwrap();
        assert_eq!(child.c_type, "float");
        assert_eq!(child.kind, TypeKind::Basic);
    }

    #[test]
    fn method_args_and_generated_default_when_absent() {
        let method: Method =
            serde_json::from_value(serde_json::json!({"name": "release"})).unwrap();
        assert!(method.args.is_empty());
        assert!(!method.generated);
    }
}
