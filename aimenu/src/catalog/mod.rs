//! Registry of installable items.
//!
//! The catalog is built once at startup and never mutated. Items are kept
//! per [`Category`] in presentation order, which is also the order in which
//! they are installed and reported.
//!
//! # Example
//!
//! ```
//! use aimenu::catalog::{Catalog, Category};
//!
//! let catalog = Catalog::builtin();
//! let gemini = catalog.find(Category::CliTool, "Gemini CLI by Google").unwrap();
//! assert_eq!(gemini.package_id(), "@google/gemini-cli");
//! assert_eq!(gemini.run_alias(), "gemini");
//! ```

mod data;
mod item;

pub use item::{AliasTarget, CatalogItem, Category, InstallStrategy, Recipe};

/// All selectable items, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cli_tools: Vec<CatalogItem>,
    extensions: Vec<CatalogItem>,
    special_tools: Vec<CatalogItem>,
    enhancers: Vec<CatalogItem>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            cli_tools: data::cli_tools(),
            extensions: data::extensions(),
            special_tools: data::special_tools(),
            enhancers: data::enhancers(),
        }
    }

    /// Build a catalog from arbitrary items, bucketed by their category.
    pub fn new(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut catalog = Self::default();
        for item in items {
            catalog.bucket_mut(item.category()).push(item);
        }
        catalog
    }

    /// Items of one category in presentation order.
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::CliTool => &self.cli_tools,
            Category::Extension => &self.extensions,
            Category::SpecialTool => &self.special_tools,
            Category::Enhancer => &self.enhancers,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.items(category).len()
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.items(*c).is_empty())
    }

    pub fn get(&self, category: Category, index: usize) -> Option<&CatalogItem> {
        self.items(category).get(index)
    }

    /// Look up an item by exact display name.
    pub fn find(&self, category: Category, display_name: &str) -> Option<&CatalogItem> {
        self.items(category)
            .iter()
            .find(|item| item.display_name() == display_name)
    }

    /// Look up an item by display name, package id or alias, ignoring case.
    pub fn lookup(&self, category: Category, query: &str) -> Option<&CatalogItem> {
        self.items(category).iter().find(|item| item.matches(query))
    }

    pub fn display_names(&self, category: Category) -> Vec<&str> {
        self.items(category)
            .iter()
            .map(CatalogItem::display_name)
            .collect()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<CatalogItem> {
        match category {
            Category::CliTool => &mut self.cli_tools,
            Category::Extension => &mut self.extensions,
            Category::SpecialTool => &mut self.special_tools,
            Category::Enhancer => &mut self.enhancers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_categories_are_populated() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(catalog.len(category) > 0, "{} is empty", category);
        }
    }

    #[test]
    fn test_display_names_are_unique_per_category() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let names = catalog.display_names(category);
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(names.len(), unique.len(), "duplicate in {}", category);
        }
    }

    #[test]
    fn test_builtin_aliases() {
        let catalog = Catalog::builtin();
        let alias = |name: &str| {
            catalog
                .find(Category::CliTool, name)
                .map(|i| (i.run_alias().to_string(), i.run_command().to_string()))
        };

        assert_eq!(alias("Gemini CLI by Google"), Some(("gemini".into(), "gemini".into())));
        assert_eq!(alias("Kiro CLI"), Some(("kiro".into(), "kiro-cli".into())));
        assert_eq!(alias("Kimi CLI"), Some(("kimi".into(), "kimi".into())));
        assert_eq!(alias("Qoder CLI"), Some(("qoder".into(), "qodercli".into())));
        assert_eq!(alias("Forge Code"), Some(("forge".into(), "forge".into())));
    }

    #[test]
    fn test_dedicated_strategies() {
        let catalog = Catalog::builtin();
        let droid = catalog.lookup(Category::CliTool, "droid").unwrap();
        assert!(matches!(droid.strategy(), InstallStrategy::Dedicated(Recipe::Script(_))));

        let codex = catalog.lookup(Category::CliTool, "codex").unwrap();
        assert_eq!(codex.strategy(), &InstallStrategy::Generic);

        for tool in catalog.items(Category::SpecialTool) {
            assert!(
                matches!(tool.strategy(), InstallStrategy::Dedicated(_)),
                "{} has no recipe",
                tool.display_name()
            );
        }
    }

    #[test]
    fn test_new_buckets_by_category() {
        let catalog = Catalog::new(vec![
            CatalogItem::new(Category::Enhancer, "b"),
            CatalogItem::new(Category::CliTool, "a"),
            CatalogItem::new(Category::Enhancer, "c"),
        ]);

        assert_eq!(catalog.display_names(Category::Enhancer), vec!["b", "c"]);
        assert_eq!(catalog.display_names(Category::CliTool), vec!["a"]);
        assert_eq!(catalog.len(Category::Extension), 0);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }
}
