//! Generator for typed terminfo capability indices.
//!
//! Reads the `#define NAME CUR <Type>s[INDEX]` lines from the system `term.h`,
//! collects them into per-category sequences, and writes a Go source file that
//! declares `BooleanIndex`, `NumberIndex` and `StringIndex` with one constant
//! per capability. The pipeline is extract, then emit, then replace the
//! destination; the table is handed from one stage to the next by value.

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

pub mod capability;
pub mod emit;
pub mod extract;
pub mod output;

pub use capability::{CapabilityRecord, Category, CategoryTable};
pub use emit::{emit, render};
pub use extract::{camel_case, extract_from_path, extract_from_reader, extract_lines, parse_line};
pub use output::replace_file;

pub const SYSTEM_HEADER: &str = "/usr/include/term.h";
pub const OUTPUT_FILE_NAME: &str = "termh.go";

/// Where to read the header from and where to write the generated file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub header_path: PathBuf,
    pub output_path: PathBuf,
}

impl GeneratorConfig {
    pub fn new(header_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            header_path: header_path.into(),
            output_path: output_path.into(),
        }
    }

    /// The fixed locations used by the `gen-termh` binary: the system header,
    /// and `termh.go` beside the generator's own sources.
    pub fn system() -> Self {
        Self::new(SYSTEM_HEADER, source_dir().join(OUTPUT_FILE_NAME))
    }
}

/// Directory holding the generator's sources, resolved when it was built.
pub fn source_dir() -> PathBuf {
    let dir = option_env!("TERMH_GEN_SOURCE_DIR").unwrap_or(env!("CARGO_MANIFEST_DIR"));
    PathBuf::from(dir)
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// What a generation run produced.
pub struct GenerationSummary {
    pub output_path: PathBuf,
    /// `(category, slots, declared)` in emission order.
    pub categories: Vec<(Category, usize, usize)>,
}

/// Run the whole pipeline for `config`.
///
/// Any failure is fatal: nothing is written unless extraction and rendering
/// both succeed.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let table = extract_from_path(&config.header_path)?;
    write_generated(table, &config.output_path)
}

fn write_generated(table: CategoryTable, output_path: &Path) -> Result<GenerationSummary> {
    let rendered = render(&table)
        .with_context(|| format!("rendering {}", output_path.display()))?;
    replace_file(output_path, rendered.as_bytes())?;

    let categories = table
        .iter()
        .map(|(category, _)| (category, table.len(category), table.declared(category)))
        .collect::<Vec<_>>();
    for (category, slots, declared) in &categories {
        info!(
            "{}: {declared} capabilities across {slots} slots",
            category.index_type()
        );
    }
    info!("wrote {}", output_path.display());

    Ok(GenerationSummary {
        output_path: output_path.to_path_buf(),
        categories,
    })
}
