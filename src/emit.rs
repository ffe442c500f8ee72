//! Descriptor emission: wires the classification helpers into a Handlebars
//! registry, renders the descriptor template against the parsed API surface,
//! and writes the result out.
//!
//! The template owns all literal output formatting; this module only supplies
//! the three top-level bindings (`enums`, `structs`, `global_functions`) and
//! the callable helpers the template invokes per item.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, RenderContext, RenderError,
    RenderErrorReason, ScopedJson,
};
use serde::de::DeserializeOwned;
use serde_json::Value as Json;

use crate::model::{Arg, Method, StructDecl, TypeKind};
use crate::{args, classify, describe, idents};

/// Registry key for the descriptor template.
const TEMPLATE_NAME: &str = "script_api";

/// File looked up under the template root.
pub const TEMPLATE_FILE: &str = "fmod_script_api_template.yaml.hbs";

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the descriptor for one API surface and write it to `output_path`,
/// overwriting any previous content. Rendering happens fully in memory first:
/// a template or render failure leaves no partial file behind.
pub fn emit(
    output_path: &Path,
    template_root: &Path,
    enums: &[String],
    structs: &[StructDecl],
    global_functions: &[(u32, String, Method)],
) -> Result<(), EmitError> {
    let mut registry = Handlebars::new();
    // the descriptor is YAML-ish text, not HTML
    registry.register_escape_fn(no_escape);
    register_helpers(&mut registry);
    registry.register_template_file(TEMPLATE_NAME, template_root.join(TEMPLATE_FILE))?;

    let rendered = registry.render(
        TEMPLATE_NAME,
        &serde_json::json!({
            "enums": enums,
            "structs": structs,
            "global_functions": global_functions,
        }),
    )?;

    fs::write(output_path, &rendered).map_err(|source| EmitError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    println!("{} {}", "Generated".green(), output_path.display());
    Ok(())
}

/// Register the classification helpers the template calls per item.
pub fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper("lua_type", Box::new(LuaTypeHelper));
    registry.register_helper("snake_case", Box::new(SnakeCaseHelper));
    registry.register_helper("param_description", Box::new(ParamDescriptionHelper));
    registry.register_helper("input_args", Box::new(InputArgsHelper));
    registry.register_helper("output_args", Box::new(OutputArgsHelper));
    registry.register_helper("arg_type_info", Box::new(ArgTypeInfoHelper));
}

// ------------------------------ Helpers ----------------------------------- //

fn string_param(h: &Helper<'_>, helper: &str, index: usize) -> Result<String, RenderError> {
    h.param(index)
        .and_then(|p| p.value().as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            RenderErrorReason::Other(format!("{helper}: param {index} must be a string")).into()
        })
}

fn typed_param<T: DeserializeOwned>(
    h: &Helper<'_>,
    helper: &str,
    index: usize,
) -> Result<T, RenderError> {
    let value = h
        .param(index)
        .map(|p| p.value().clone())
        .ok_or_else(|| RenderErrorReason::Other(format!("{helper}: missing param {index}")))?;
    serde_json::from_value(value).map_err(|err| {
        RenderErrorReason::Other(format!("{helper}: param {index}: {err}")).into()
    })
}

/// `{{lua_type c_type kind}}` — classify a native spelling. An unknown or
/// missing kind yields `"any"` rather than a render error.
struct LuaTypeHelper;

impl HelperDef for LuaTypeHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let c_type = string_param(h, "lua_type", 0)?;
        let kind = h.param(1).map(|p| p.value().clone()).unwrap_or(Json::Null);
        let kind = serde_json::from_value::<TypeKind>(kind).unwrap_or(TypeKind::Unknown);
        Ok(ScopedJson::Derived(Json::String(classify::lua_type(
            &c_type, kind,
        ))))
    }
}

/// `{{snake_case identifier}}`
struct SnakeCaseHelper;

impl HelperDef for SnakeCaseHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let identifier = string_param(h, "snake_case", 0)?;
        Ok(ScopedJson::Derived(Json::String(idents::to_snake_case(
            &identifier,
        ))))
    }
}

/// `{{param_description name function_name}}` — the second param is optional.
struct ParamDescriptionHelper;

impl HelperDef for ParamDescriptionHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let name = string_param(h, "param_description", 0)?;
        let function_name = h
            .param(1)
            .and_then(|p| p.value().as_str())
            .unwrap_or_default();
        Ok(ScopedJson::Derived(Json::String(describe::param_description(
            &name,
            function_name,
        ))))
    }
}

/// `{{#each (input_args method skip_self=true)}}`
struct InputArgsHelper;

impl HelperDef for InputArgsHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let method: Method = typed_param(h, "input_args", 0)?;
        let skip_self = h
            .hash_get("skip_self")
            .and_then(|v| v.value().as_bool())
            .unwrap_or(false);
        let selected = args::input_args(&method, skip_self);
        let value = serde_json::to_value(&selected)
            .map_err(|err| RenderErrorReason::Other(format!("input_args: {err}")))?;
        Ok(ScopedJson::Derived(value))
    }
}

/// `{{#each (output_args method)}}`
struct OutputArgsHelper;

impl HelperDef for OutputArgsHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let method: Method = typed_param(h, "output_args", 0)?;
        let selected = args::output_args(&method);
        let value = serde_json::to_value(&selected)
            .map_err(|err| RenderErrorReason::Other(format!("output_args: {err}")))?;
        Ok(ScopedJson::Derived(value))
    }
}

/// `{{#with (arg_type_info arg)}}` — effective type of an argument as a
/// `{c_type, type}` object (an output-by-pointer resolves to its pointee).
struct ArgTypeInfoHelper;

impl HelperDef for ArgTypeInfoHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let arg: Arg = typed_param(h, "arg_type_info", 0)?;
        let (c_type, kind) = args::resolve_type(&arg);
        Ok(ScopedJson::Derived(serde_json::json!({
            "c_type": c_type,
            "type": kind,
        })))
    }
}

// ------------------------------- Tests ------------------------------------ //
