//! Renders a `CategoryTable` as Go declarations for the terminfo package.
//!
//! Each category becomes an `int` type and an `iota` const block. Placeholder
//! slots are written as empty entries, exactly where they sit in the table, and
//! `Max<Category>Index` is bound to the last name in the sequence.

use crate::capability::{Category, CategoryTable};
use anyhow::{Context, Result, bail};
use std::io::Write;

pub const BANNER: [&str; 2] = [
    "// GENERATED FILE -- DO NOT EDIT",
    "// fix the gen-termh generator instead",
];

pub const PACKAGE: &str = "terminfo";

/// Write the generated source for `table` to `out`.
pub fn emit<W: Write>(table: &CategoryTable, out: &mut W) -> Result<()> {
    for line in BANNER {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "package {PACKAGE}")?;

    for (category, names) in table.iter() {
        emit_category(category, names, out)
            .with_context(|| format!("emitting {} declarations", category.index_type()))?;
    }
    Ok(())
}

/// Render the generated source into memory.
pub fn render(table: &CategoryTable) -> Result<String> {
    let mut buf = Vec::new();
    emit(table, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn emit_category<W: Write>(category: Category, names: &[String], out: &mut W) -> Result<()> {
    let Some((first, rest)) = names.split_first() else {
        bail!("no {category} capabilities found");
    };
    // The sequence always ends on a declared slot, so `last` is never a placeholder.
    let last = names.last().unwrap_or(first);
    let index_type = category.index_type();

    writeln!(out, "type {index_type} int")?;
    writeln!(out, "const (")?;
    writeln!(out, "\t{first} {index_type} = iota")?;
    for name in rest {
        writeln!(out, "\t{name}")?;
    }
    writeln!(out, "\t{} = {last}", category.max_index_const())?;
    writeln!(out, ")")?;
    Ok(())
}
