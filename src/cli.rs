//! Minimal CLI: parsed binding metadata in → script API descriptor out
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::model::ApiSurface;

/// render a script API descriptor from parsed FMOD binding metadata
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// parsed API metadata (JSON document produced by the bindings parser)
    #[arg(short, long)]
    input: PathBuf,

    /// directory containing the descriptor template
    #[arg(long, default_value = ".")]
    template_root: PathBuf,

    /// output descriptor file (fully overwritten each run)
    #[arg(short, long)]
    out: PathBuf,

    /// debugging: dump the parsed surface instead of rendering
    #[arg(long)]
    no_op: bool,
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read metadata file {}", self.input.display()))?;
        let surface = parse_api_surface(&source)
            .with_context(|| format!("failed to parse metadata file {}", self.input.display()))?;

        if self.no_op {
            eprintln!("{surface:#?}");
            return Ok(());
        }

        crate::emit::emit(
            &self.out,
            &self.template_root,
            &surface.enums,
            &surface.structs,
            &surface.global_functions,
        )?;
        Ok(())
    }
}

/// Deserialize with JSON-path context in error messages.
fn parse_api_surface(src: &str) -> anyhow::Result<ApiSurface> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        anyhow::anyhow!("at JSON path {path} → {}", err.into_inner())
    })
}

// ------------------------------- Tests ------------------------------------ //
