//! Catalog item types.

use std::fmt;
use std::path::Path;

use crate::process::CommandSpec;

/// The four groups of installable items, in installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    CliTool,
    Extension,
    SpecialTool,
    Enhancer,
}

impl Category {
    /// Every category in installation order.
    pub const ALL: [Category; 4] = [
        Category::CliTool,
        Category::Extension,
        Category::SpecialTool,
        Category::Enhancer,
    ];

    /// Heading shown above the category's checklist.
    pub fn title(&self) -> &'static str {
        match self {
            Category::CliTool => "AI CLI Tools",
            Category::Extension => "VS Code Extensions",
            Category::SpecialTool => "Special Tools",
            Category::Enhancer => "CLI Enhancers",
        }
    }

    /// Short lowercase name used in logs and the `list` command.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::CliTool => "cli",
            Category::Extension => "extension",
            Category::SpecialTool => "tool",
            Category::Enhancer => "enhancer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A dedicated install procedure for items that are not plain npm packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    /// A shell pipeline executed with `bash -c`.
    Script(String),
    /// A direct command, optionally routed through `pixi run`.
    Command {
        program: String,
        args: Vec<String>,
        in_environment: bool,
    },
}

impl Recipe {
    pub fn script(script: impl Into<String>) -> Self {
        Recipe::Script(script.into())
    }

    pub fn command(program: &str, args: &[&str]) -> Self {
        Recipe::Command {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            in_environment: false,
        }
    }

    /// A command executed with `pixi run` inside the environment.
    pub fn in_environment(program: &str, args: &[&str]) -> Self {
        Recipe::Command {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            in_environment: true,
        }
    }

    /// Build the process invocation, run from `env_dir`.
    pub fn to_command(&self, env_dir: &Path) -> CommandSpec {
        let spec = match self {
            Recipe::Script(script) => CommandSpec::shell(script.as_str()),
            Recipe::Command {
                program,
                args,
                in_environment: true,
            } => CommandSpec::new("pixi")
                .arg("run")
                .arg(program.as_str())
                .args(args.iter().map(String::as_str)),
            Recipe::Command { program, args, .. } => {
                CommandSpec::new(program.as_str()).args(args.iter().map(String::as_str))
            }
        };
        spec.current_dir(env_dir)
    }
}

/// How an item gets installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStrategy {
    /// The category's generic template applied to the package id.
    Generic,
    /// An item-specific recipe.
    Dedicated(Recipe),
}

/// What a successful install binds a shell alias to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasTarget {
    /// `pixi run --manifest-path <env> <command>`
    EnvironmentCommand,
    /// `pixi run --manifest-path <env>/pixi.toml python -m <module>`
    EnvironmentModule(String),
    /// A fixed invocation, e.g. `batcat`.
    Plain(String),
    /// No alias.
    None,
}

/// One selectable entry in the menu.
///
/// Identifiers fall back in a chain: the package id defaults to the display
/// name, the run alias to the package id, and the command to the run alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    display_name: String,
    description: String,
    package_id: Option<String>,
    run_alias: Option<String>,
    command: Option<String>,
    category: Category,
    strategy: InstallStrategy,
    alias_target: AliasTarget,
}

impl CatalogItem {
    /// A generic item with an environment alias and no overrides.
    pub fn new(category: Category, display_name: impl Into<String>) -> Self {
        let alias_target = match category {
            Category::CliTool | Category::Enhancer => AliasTarget::EnvironmentCommand,
            Category::Extension | Category::SpecialTool => AliasTarget::None,
        };
        Self {
            display_name: display_name.into(),
            description: String::new(),
            package_id: None,
            run_alias: None,
            command: None,
            category,
            strategy: InstallStrategy::Generic,
            alias_target,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn package(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = Some(package_id.into());
        self
    }

    pub fn alias(mut self, run_alias: impl Into<String>) -> Self {
        self.run_alias = Some(run_alias.into());
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.strategy = InstallStrategy::Dedicated(recipe);
        self
    }

    pub fn alias_target(mut self, target: AliasTarget) -> Self {
        self.alias_target = target;
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn strategy(&self) -> &InstallStrategy {
        &self.strategy
    }

    pub fn target(&self) -> &AliasTarget {
        &self.alias_target
    }

    /// Identifier handed to the package manager.
    pub fn package_id(&self) -> &str {
        self.package_id.as_deref().unwrap_or(&self.display_name)
    }

    /// Short name used for the shell alias and outcome reporting.
    pub fn run_alias(&self) -> &str {
        self.run_alias.as_deref().unwrap_or_else(|| self.package_id())
    }

    /// Executable name inside the environment.
    pub fn run_command(&self) -> &str {
        self.command.as_deref().unwrap_or_else(|| self.run_alias())
    }

    /// Whether `query` names this item by display name, package id or alias.
    pub fn matches(&self, query: &str) -> bool {
        [self.display_name(), self.package_id(), self.run_alias()]
            .iter()
            .any(|name| name.eq_ignore_ascii_case(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_fallback_chain() {
        let bare = CatalogItem::new(Category::CliTool, "goose");
        assert_eq!(bare.package_id(), "goose");
        assert_eq!(bare.run_alias(), "goose");
        assert_eq!(bare.run_command(), "goose");

        let full = CatalogItem::new(Category::CliTool, "Qoder CLI")
            .package("@qoder-ai/qodercli")
            .alias("qoder")
            .command("qodercli");
        assert_eq!(full.package_id(), "@qoder-ai/qodercli");
        assert_eq!(full.run_alias(), "qoder");
        assert_eq!(full.run_command(), "qodercli");
    }

    #[test]
    fn test_matches_any_identifier_case_insensitively() {
        let item = CatalogItem::new(Category::CliTool, "Gemini CLI by Google")
            .package("@google/gemini-cli")
            .alias("gemini");

        assert!(item.matches("gemini"));
        assert!(item.matches("@google/gemini-cli"));
        assert!(item.matches("gemini cli by google"));
        assert!(!item.matches("codex"));
    }

    #[test]
    fn test_recipe_commands() {
        let env = Path::new("/opt/tools/ai-dev-pixi");

        let script =
            Recipe::script("curl -sL https://plandex.ai/install.sh | bash").to_command(env);
        assert_eq!(script.program(), "bash");
        assert_eq!(script.working_dir(), Some(env));

        let uv = Recipe::in_environment("uv", &["tool", "install", "openhands"]).to_command(env);
        assert_eq!(uv.to_string(), "pixi run uv tool install openhands");

        let apt = Recipe::command("sudo", &["apt-get", "install", "-y", "jq"]).to_command(env);
        assert_eq!(apt.to_string(), "sudo apt-get install -y jq");
    }

    #[test]
    fn test_default_alias_targets() {
        assert_eq!(
            CatalogItem::new(Category::Enhancer, "x").target(),
            &AliasTarget::EnvironmentCommand
        );
        assert_eq!(
            CatalogItem::new(Category::Extension, "x").target(),
            &AliasTarget::None
        );
    }
}
