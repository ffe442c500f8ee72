//! Native C type → script type tag classification.
//!
//! The kind set is closed (basic, struct, class, pointer) and the recognized
//! spellings are a short fixed list, so this is direct conditional dispatch:
//! first match wins, anything unrecognized degrades to a generic placeholder
//! tag instead of aborting generation.

use crate::model::TypeKind;

/// The FMOD vector type classifies as `vector3` no matter which kind of decl
/// it appears in — value, pointer, or embedded struct.
const VECTOR_MARKER: &str = "FMOD_VECTOR";

const FLOAT_TYPES: [&str; 2] = ["float", "double"];

/// Integer-family spellings. `FMOD_BOOL` rides along here because it is an
/// `int` alias on the wire, but it surfaces as `boolean` on the script side.
const INTEGER_TYPES: [&str; 5] = ["int", "short", "long", "char", "FMOD_BOOL"];

const BOOL_ALIAS: &str = "FMOD_BOOL";

pub fn lua_type(c_type: &str, kind: TypeKind) -> String {
    match kind {
        TypeKind::Basic => basic_type(c_type),
        TypeKind::Pointer => pointer_type(c_type),
        TypeKind::Struct | TypeKind::Class => struct_type(c_type),
        TypeKind::Unknown => "any".to_string(),
    }
}

fn basic_type(c_type: &str) -> String {
    if c_type.contains(VECTOR_MARKER) {
        return "vector3".to_string();
    }
    if FLOAT_TYPES.contains(&c_type) {
        return "number".to_string();
    }
    if INTEGER_TYPES.iter().any(|base| c_type.contains(base)) {
        let tag = if c_type.contains(BOOL_ALIAS) { "boolean" } else { "number" };
        return tag.to_string();
    }
    // FMOD_ enum and flag aliases are integers on the wire, as is anything
    // else the parser filed under basic.
    "number".to_string()
}

fn pointer_type(c_type: &str) -> String {
    if c_type.contains(VECTOR_MARKER) {
        return "vector3".to_string();
    }
    if c_type.contains("char") {
        return "string".to_string();
    }
    "userdata".to_string()
}

fn struct_type(c_type: &str) -> String {
    if c_type.contains(VECTOR_MARKER) {
        return "vector3".to_string();
    }
    let lower = c_type.to_lowercase();
    if let Some(rest) = lower.strip_prefix("fmod_studio_") {
        return format!("fmod.studio.{rest}");
    }
    if let Some(rest) = lower.strip_prefix("fmod_") {
        return format!("fmod.{rest}");
    }
    "userdata".to_string()
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_point_spellings_are_numbers() {
        assert_eq!(lua_type("float", TypeKind::Basic), "number");
        assert_eq!(lua_type("double", TypeKind::Basic), "number");
    }

    #[test]
    fn integer_family_is_number_except_bool_alias() {
        assert_eq!(lua_type("int", TypeKind::Basic), "number");
        assert_eq!(lua_type("unsigned int", TypeKind::Basic), "number");
        assert_eq!(lua_type("short", TypeKind::Basic), "number");
        assert_eq!(lua_type("unsigned long long", TypeKind::Basic), "number");
        assert_eq!(lua_type("FMOD_BOOL", TypeKind::Basic), "boolean");
    }

    #[test]
    fn basic_fallbacks_are_numbers() {
        // FMOD_ enum aliases and unrecognized scalars alike
        assert_eq!(lua_type("FMOD_MODE", TypeKind::Basic), "number");
        assert_eq!(lua_type("size_t", TypeKind::Basic), "number");
    }

    #[test]
    fn vector_marker_wins_in_every_kind() {
        assert_eq!(lua_type("FMOD_VECTOR", TypeKind::Basic), "vector3");
        assert_eq!(lua_type("FMOD_VECTOR *", TypeKind::Pointer), "vector3");
        assert_eq!(lua_type("FMOD_VECTOR", TypeKind::Struct), "vector3");
        assert_eq!(lua_type("FMOD_VECTOR", TypeKind::Class), "vector3");
    }

    #[test]
    fn char_pointers_are_strings_other_pointers_userdata() {
        assert_eq!(lua_type("const char *", TypeKind::Pointer), "string");
        assert_eq!(lua_type("char*", TypeKind::Pointer), "string");
        assert_eq!(lua_type("FMOD_SYSTEM *", TypeKind::Pointer), "userdata");
        assert_eq!(lua_type("void *", TypeKind::Pointer), "userdata");
    }

    #[test]
    fn studio_prefix_rewrites_to_dotted_namespace() {
        assert_eq!(
            lua_type("FMOD_STUDIO_EVENTINSTANCE", TypeKind::Class),
            "fmod.studio.eventinstance"
        );
        // the rest of the spelling is preserved verbatim after lowering
        assert_eq!(
            lua_type("FMOD_STUDIO_PARAMETER_ID", TypeKind::Struct),
            "fmod.studio.parameter_id"
        );
    }

    #[test]
    fn top_level_prefix_rewrites_to_dotted_namespace() {
        assert_eq!(lua_type("FMOD_SOUND", TypeKind::Class), "fmod.sound");
        assert_eq!(
            lua_type("FMOD_CREATESOUNDEXINFO", TypeKind::Struct),
            "fmod.createsoundexinfo"
        );
    }

    #[test]
    fn unprefixed_struct_is_userdata() {
        assert_eq!(lua_type("SomeOther_Type", TypeKind::Struct), "userdata");
    }

    #[test]
    fn unknown_kind_is_any() {
        assert_eq!(lua_type("FMOD_VECTOR", TypeKind::Unknown), "any");
        assert_eq!(lua_type("whatever", TypeKind::Unknown), "any");
    }
}
