//! Per-category selection sets.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, Category};

/// Display names selected within one category.
///
/// Uniqueness is enforced by the set; iteration order is alphabetical and
/// carries no meaning. Install order always comes from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not already selected.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Returns `true` if the name was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flip membership of `name`. Returns the new membership.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// One [`SelectionSet`] per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    cli_tools: SelectionSet,
    extensions: SelectionSet,
    special_tools: SelectionSet,
    enhancers: SelectionSet,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &SelectionSet {
        match category {
            Category::CliTool => &self.cli_tools,
            Category::Extension => &self.extensions,
            Category::SpecialTool => &self.special_tools,
            Category::Enhancer => &self.enhancers,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut SelectionSet {
        match category {
            Category::CliTool => &mut self.cli_tools,
            Category::Extension => &mut self.extensions,
            Category::SpecialTool => &mut self.special_tools,
            Category::Enhancer => &mut self.enhancers,
        }
    }

    /// Builder-style insert, mostly for tests and headless installs.
    pub fn with(mut self, category: Category, name: impl Into<String>) -> Self {
        self.get_mut(category).insert(name);
        self
    }

    /// Total number of selected items across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Whether every catalog item of `category` is selected. An empty
    /// category never counts as all selected.
    pub fn all_selected(&self, catalog: &Catalog, category: Category) -> bool {
        let set = self.get(category);
        let items = catalog.items(category);
        !items.is_empty() && items.iter().all(|item| set.contains(item.display_name()))
    }
}
