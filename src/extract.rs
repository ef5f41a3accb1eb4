//! Pulls capability declarations out of `term.h`.
//!
//! Only lines shaped like `#define NAME CUR <Type>s[INDEX]` are considered;
//! everything else in the header is skipped. Note the pluralising `s`: the
//! header indexes the `Booleans`, `Numbers` and `Strings` arrays, and the
//! category is the array name without it.

use crate::capability::{CapabilityRecord, Category, CategoryTable};
use anyhow::{Context, Result};
use log::{debug, warn};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static DEFINE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#define\s+(?P<name>\S+)\s+CUR\s+(?P<type>\w+)s\[(?P<index>[0-9]+)\]\s*$")
        .expect("capability define pattern is valid")
});

/// Upper-case the first character and every character following an
/// underscore, dropping those underscores: `auto_left_margin` becomes
/// `AutoLeftMargin`.
///
/// A trailing underscore has nothing to capitalise and is kept as is.
pub fn camel_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    while let Some(ch) = chars.next() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push('_'),
        }
    }
    out
}

/// Match a single header line.
///
/// Returns `Ok(None)` for lines that are not capability defines. A line that
/// matches but names an unknown array, or an index that does not fit in
/// `usize`, is an error.
pub fn parse_line(line: &str) -> Result<Option<CapabilityRecord>> {
    let Some(caps) = DEFINE_LINE.captures(line) else {
        return Ok(None);
    };

    let category: Category = caps["type"].parse()?;
    let index = caps["index"]
        .parse::<usize>()
        .with_context(|| format!("capability index {} out of range", &caps["index"]))?;

    Ok(Some(CapabilityRecord {
        name: caps["name"].to_string(),
        category,
        index,
    }))
}

/// Build the category table from header lines in a single pass.
pub fn extract_lines<I, S>(lines: I) -> Result<CategoryTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_numbered(lines.into_iter().map(Ok))
}

/// Stream lines from `reader` into a category table.
pub fn extract_from_reader<R: BufRead>(reader: R) -> Result<CategoryTable> {
    extract_numbered(reader.lines())
}

fn extract_numbered<I, S>(lines: I) -> Result<CategoryTable>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut table = CategoryTable::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let record = parse_line(line.as_ref()).with_context(|| format!("line {line_no}"))?;
        if let Some(record) = record {
            record_capability(&mut table, record, line_no);
        }
    }
    Ok(table)
}

/// Open `path` and extract its capability table.
pub fn extract_from_path(path: &Path) -> Result<CategoryTable> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    extract_from_reader(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

fn record_capability(table: &mut CategoryTable, record: CapabilityRecord, line_no: usize) {
    let name = camel_case(&record.name);
    debug!(
        "line {line_no}: {} {}[{}] -> {name}",
        record.name, record.category, record.index
    );
    if let Some(previous) = table.insert(record.category, record.index, name.clone()) {
        warn!(
            "line {line_no}: {}[{}] redeclared; replacing {previous} with {name}",
            record.category, record.index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_examples() {
        assert_eq!(camel_case("auto_left_margin"), "AutoLeftMargin");
        assert_eq!(camel_case("input_name"), "InputName");
        assert_eq!(camel_case("foo"), "Foo");
        assert_eq!(camel_case("Foo"), "Foo");
        assert_eq!(camel_case("key_f10"), "KeyF10");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn camel_case_underscore_edges() {
        assert_eq!(camel_case("_x"), "_x");
        assert_eq!(camel_case("a__b"), "A_b");
        assert_eq!(camel_case("trailing_"), "Trailing_");
    }

    #[test]
    fn parses_matching_define() {
        let record = parse_line("#define auto_left_margin       CUR Booleans[0]")
            .unwrap()
            .unwrap();
        assert_eq!(record.name, "auto_left_margin");
        assert_eq!(record.category, Category::Boolean);
        assert_eq!(record.index, 0);

        let record = parse_line("#define\tmax_colors\tCUR Numbers[13]  \t")
            .unwrap()
            .unwrap();
        assert_eq!(record.category, Category::Number);
        assert_eq!(record.index, 13);
    }

    #[test]
    fn skips_unrelated_lines() {
        for line in [
            "",
            "/* term.h -- Definition of struct term */",
            "#define CUR cur_term->type.",
            "#define auto_left_margin CUR Boolean[0]",
            "#define auto_left_margin CUR Booleans[0] /* bw */",
            "#define auto_left_margin CUR Booleans[x]",
            "  #define auto_left_margin CUR Booleans[0]",
            "#define back_tab CUR Strings[-1]",
        ] {
            assert!(parse_line(line).unwrap().is_none(), "matched {line:?}");
        }
    }

    #[test]
    fn unknown_array_is_fatal() {
        let err = parse_line("#define shiny CUR Flags[2]").unwrap_err();
        assert!(err.to_string().contains("'Flag'"), "{err}");
    }

    #[test]
    fn oversized_index_is_fatal() {
        let err = parse_line("#define columns CUR Numbers[99999999999999999999999]").unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }

    #[test]
    fn extract_pads_and_overwrites() {
        let table = extract_lines([
            "#define columns CUR Numbers[0]",
            "#ifdef SOMETHING",
            "#define lines CUR Numbers[3]",
            "#define first_name CUR Strings[1]",
            "#define second_name CUR Strings[1]",
        ])
        .unwrap();

        assert_eq!(table.names(Category::Number), ["Columns", "", "", "Lines"]);
        assert_eq!(table.names(Category::String), ["", "SecondName"]);
        assert!(table.names(Category::Boolean).is_empty());
    }

    #[test]
    fn extract_reports_line_number() {
        let err = extract_lines(["", "#define nope CUR Widgets[0]"]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("line 2"), "{message}");
        assert!(message.contains("unrecognized capability category 'Widget'"));
    }

    #[test]
    fn reader_and_lines_agree() {
        let text = "#define auto_left_margin CUR Booleans[0]\r\n#define back_tab CUR Strings[0]\n";
        let from_reader = extract_from_reader(text.as_bytes()).unwrap();
        let from_lines = extract_lines(text.lines()).unwrap();
        assert_eq!(from_reader, from_lines);
        assert_eq!(from_reader.names(Category::String), ["BackTab"]);
    }

    #[test]
    fn reader_errors_carry_line_numbers() {
        let err = extract_from_reader(&b"\n#define nope CUR Widgets[0]\n"[..]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("line 2: unrecognized"), "{message}");

        let err = extract_from_reader(&b"#define columns CUR Numbers[0]\n\xff\xfe\n"[..]).unwrap_err();
        assert!(format!("{err:#}").starts_with("reading line 2"), "{err:#}");
    }
}
