//! Per-category capability name sequences.
//!
//! Position `i` of a category's sequence holds the camel-cased name whose
//! declared index is `i`. Indices nobody declared hold an empty placeholder so
//! every declared index stays a valid position; sequences only ever grow.

use crate::capability::Category;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Capability names for all three categories, filled in during extraction.
pub struct CategoryTable {
    sequences: [Vec<String>; 3],
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `name` at `index`, padding the sequence forward as needed.
    ///
    /// Returns the name previously held at `index` when a declared slot is
    /// overwritten; the later declaration wins.
    pub fn insert(&mut self, category: Category, index: usize, name: String) -> Option<String> {
        let names = &mut self.sequences[category.slot()];
        if names.len() <= index {
            names.resize(index + 1, String::new());
        }
        let previous = std::mem::replace(&mut names[index], name);
        (!previous.is_empty()).then_some(previous)
    }

    pub fn names(&self, category: Category) -> &[String] {
        &self.sequences[category.slot()]
    }

    /// Number of slots, placeholders included.
    pub fn len(&self, category: Category) -> usize {
        self.names(category).len()
    }

    /// Number of slots holding a declared name.
    pub fn declared(&self, category: Category) -> usize {
        self.names(category)
            .iter()
            .filter(|name| !name.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.iter().all(Vec::is_empty)
    }

    /// Iterates categories in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.names(category)))
    }
}
