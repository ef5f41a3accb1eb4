use anyhow::{Error, bail};
use std::fmt;
use std::str::FromStr;

/// Kind of terminfo capability declared in `term.h`.
///
/// The set is closed: `term.h` only indexes into the `Booleans`, `Numbers`
/// and `Strings` arrays. Any other array name means the header changed shape
/// upstream, so parsing it is an error rather than a silent skip.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    Boolean,
    Number,
    String,
}

impl Category {
    /// Emission order for generated declarations.
    pub const ALL: [Category; 3] = [Category::Boolean, Category::Number, Category::String];

    /// Singular name, as used in `<Category>Index`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Boolean => "Boolean",
            Category::Number => "Number",
            Category::String => "String",
        }
    }

    pub fn index_type(&self) -> String {
        format!("{}Index", self.as_str())
    }

    pub fn max_index_const(&self) -> String {
        format!("Max{}Index", self.as_str())
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Category::Boolean => 0,
            Category::Number => 1,
            Category::String => 2,
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Boolean" => Ok(Category::Boolean),
            "Number" => Ok(Category::Number),
            "String" => Ok(Category::String),
            other => bail!(
                "unrecognized capability category '{other}' (expected one of Boolean, Number, String)"
            ),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
