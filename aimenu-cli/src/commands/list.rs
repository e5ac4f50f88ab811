//! `aimenu list` - print the catalog.

use aimenu::catalog::{Catalog, CatalogItem, Category};
use clap::{Args, ValueEnum};

use super::output::{ConsoleOutput, Output};
use crate::error::CliError;

/// Category selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// AI command line tools
    Cli,
    /// VS Code extensions
    Extension,
    /// Special tools (system utilities)
    Tool,
    /// CLI enhancers
    Enhancer,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Cli => Category::CliTool,
            CategoryArg::Extension => Category::Extension,
            CategoryArg::Tool => Category::SpecialTool,
            CategoryArg::Enhancer => Category::Enhancer,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

pub fn run(args: ListArgs) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    print_catalog(&ConsoleOutput, &catalog, args.category.map(Category::from));
    Ok(())
}

/// Print every item of `only` (or of all categories) with the names the
/// `install` command accepts.
pub fn print_catalog(out: &dyn Output, catalog: &Catalog, only: Option<Category>) {
    let categories: Vec<Category> = match only {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for (i, category) in categories.into_iter().enumerate() {
        if i > 0 {
            out.newline();
        }
        out.header(&format!("{} (--{})", category.title(), category.slug()));
        for item in catalog.items(category) {
            out.indented(&item_line(item));
        }
    }
}

fn item_line(item: &CatalogItem) -> String {
    let name = if item.package_id() == item.display_name() {
        item.display_name().to_string()
    } else {
        format!("{} [{}]", item.display_name(), item.package_id())
    };
    if item.description().is_empty() {
        format!("{:<44} {}", name, item.run_alias())
    } else {
        format!(
            "{:<44} {:<12} {}",
            name,
            item.run_alias(),
            item.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::output::testing::MockOutput;

    #[test]
    fn test_lists_all_categories() {
        let out = MockOutput::new();
        print_catalog(&out, &Catalog::builtin(), None);

        assert!(out.contains("AI CLI Tools (--cli)"));
        assert!(out.contains("VS Code Extensions (--extension)"));
        assert!(out.contains("Special Tools (--tool)"));
        assert!(out.contains("CLI Enhancers (--enhancer)"));
        assert!(out.contains("Gemini CLI by Google [@google/gemini-cli]"));
    }

    #[test]
    fn test_single_category() {
        let out = MockOutput::new();
        print_catalog(&out, &Catalog::builtin(), Some(Category::SpecialTool));

        assert!(out.contains("ripgrep"));
        assert!(!out.contains("AI CLI Tools"));
    }

    #[test]
    fn test_category_arg_mapping() {
        assert_eq!(Category::from(CategoryArg::Tool), Category::SpecialTool);
        assert_eq!(Category::from(CategoryArg::Cli), Category::CliTool);
    }
}
