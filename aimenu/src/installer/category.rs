//! Per-category install parameters.
//!
//! The four categories differ only in data: how a generic item becomes a
//! command, whether an external program must exist first, and which marker
//! and extra aliases go into the shell file. [`CategoryDescriptor`] captures
//! exactly that so a single loop in the orchestrator can serve all of them.

use std::path::Path;

use crate::catalog::{CatalogItem, Category, InstallStrategy};
use crate::process::CommandSpec;
use crate::shell::{ShellAlias, CLI_TOOLS_MARKER, SPECIAL_TOOLS_MARKER};

/// Builds the command for an item using the generic strategy.
pub type GenericTemplate = fn(&CatalogItem, &Path) -> CommandSpec;

/// Install parameters for one category.
#[derive(Clone, Copy)]
pub struct CategoryDescriptor {
    pub category: Category,
    /// Command used for items without a dedicated recipe.
    /// `None` means such items are skipped.
    pub generic: Option<GenericTemplate>,
    /// Program that must be on `PATH`, with the warning shown when it is not.
    pub requires: Option<(&'static str, &'static str)>,
    /// Marker comment for this category's aliases, `None` for no aliases.
    pub alias_marker: Option<&'static str>,
    /// Aliases registered once any item in the category succeeds.
    pub extra_aliases: fn(&Path) -> Vec<ShellAlias>,
}

impl CategoryDescriptor {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::CliTool => Self {
                category,
                generic: Some(npm_global_install),
                requires: None,
                alias_marker: Some(CLI_TOOLS_MARKER),
                extra_aliases: node_aliases,
            },
            Category::Extension => Self {
                category,
                generic: Some(editor_extension_install),
                requires: Some((
                    "code",
                    "VS Code CLI not found. Please install VS Code and ensure 'code' is in your PATH",
                )),
                alias_marker: None,
                extra_aliases: no_aliases,
            },
            Category::SpecialTool => Self {
                category,
                generic: None,
                requires: None,
                alias_marker: Some(SPECIAL_TOOLS_MARKER),
                extra_aliases: no_aliases,
            },
            Category::Enhancer => Self {
                category,
                generic: Some(npm_global_install),
                requires: None,
                alias_marker: Some(CLI_TOOLS_MARKER),
                extra_aliases: no_aliases,
            },
        }
    }

    /// Resolve the install command for `item`, or `None` to skip it.
    pub fn command_for(&self, item: &CatalogItem, env_dir: &Path) -> Option<CommandSpec> {
        match item.strategy() {
            InstallStrategy::Dedicated(recipe) => Some(recipe.to_command(env_dir)),
            InstallStrategy::Generic => self.generic.map(|template| template(item, env_dir)),
        }
    }
}

fn npm_global_install(item: &CatalogItem, env_dir: &Path) -> CommandSpec {
    CommandSpec::new("pixi")
        .args(["run", "npm", "install", "-g"])
        .arg(item.package_id())
        .current_dir(env_dir)
}

fn editor_extension_install(item: &CatalogItem, env_dir: &Path) -> CommandSpec {
    CommandSpec::new("code")
        .arg("--install-extension")
        .arg(item.package_id())
        .current_dir(env_dir)
}

fn node_aliases(env_dir: &Path) -> Vec<ShellAlias> {
    vec![
        ShellAlias::in_environment("npx", env_dir, "npx"),
        ShellAlias::in_environment("npm", env_dir, "npm"),
    ]
}

fn no_aliases(_env_dir: &Path) -> Vec<ShellAlias> {
    Vec::new()
}
