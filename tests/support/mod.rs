use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use termh_gen::GeneratorConfig;

/// Trimmed-down `term.h`: the three defines the generator needs, surrounded by
/// the kind of noise a real ncurses header carries.
pub const SAMPLE_HEADER: &str = "\
/* term.h -- Definition of struct term */
#ifndef NCURSES_TERM_H_incl
#define NCURSES_TERM_H_incl 1

#define CUR cur_term->type.

#define auto_left_margin       CUR Booleans[0]
#define columns                CUR Numbers[0]
#define back_tab               CUR Strings[0]

#endif /* NCURSES_TERM_H_incl */
";

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate scratch dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn header_path(&self) -> PathBuf {
        self.path().join("term.h")
    }

    pub fn output_path(&self) -> PathBuf {
        self.path().join("termh.go")
    }

    pub fn write_header(&self, contents: &str) -> Result<()> {
        fs::write(self.header_path(), contents)
            .with_context(|| format!("writing {}", self.header_path().display()))
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.header_path(), self.output_path())
    }

    pub fn read_output(&self) -> Result<String> {
        fs::read_to_string(self.output_path())
            .with_context(|| format!("reading {}", self.output_path().display()))
    }
}
