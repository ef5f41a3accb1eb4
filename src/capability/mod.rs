//! Capability data model.
//!
//! `Category` is the closed tag for the three `term.h` arrays; `CategoryTable`
//! collects names per category during extraction and is read back, unchanged,
//! by the emitter.

pub mod category;
pub mod table;

pub use category::Category;
pub use table::CategoryTable;

#[derive(Clone, Debug, Eq, PartialEq)]
/// One matched `#define NAME CUR <Type>s[INDEX]` line.
pub struct CapabilityRecord {
    /// Raw macro name, before camel-casing.
    pub name: String,
    pub category: Category,
    pub index: usize,
}
