use std::fmt;
use std::path::Path;

use crate::catalog::{AliasTarget, CatalogItem};

/// A single `alias name='invocation'` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellAlias {
    name: String,
    invocation: String,
}

impl ShellAlias {
    pub fn new(name: impl Into<String>, invocation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invocation: invocation.into(),
        }
    }

    /// An alias that runs `command` inside the environment at `env_dir`.
    pub fn in_environment(name: impl Into<String>, env_dir: &Path, command: &str) -> Self {
        Self::new(
            name,
            format!("pixi run --manifest-path {} {}", shell_word(env_dir), command),
        )
    }

    /// The alias a successful install of `item` should register, if any.
    pub fn for_item(item: &CatalogItem, env_dir: &Path) -> Option<Self> {
        match item.target() {
            AliasTarget::EnvironmentCommand => Some(Self::in_environment(
                item.run_alias(),
                env_dir,
                item.run_command(),
            )),
            AliasTarget::EnvironmentModule(module) => Some(Self::new(
                item.run_alias(),
                format!(
                    "pixi run --manifest-path {} python -m {}",
                    shell_word(&env_dir.join("pixi.toml")),
                    module
                ),
            )),
            AliasTarget::Plain(invocation) => {
                Some(Self::new(item.run_alias(), invocation.as_str()))
            }
            AliasTarget::None => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full line as written to the startup file, without newline.
    ///
    /// Single quotes inside the invocation are closed, escaped and reopened.
    pub fn line(&self) -> String {
        format!(
            "alias {}='{}'",
            self.name,
            self.invocation.replace('\'', r"'\''")
        )
    }
}

/// `path` as one shell word.
///
/// Plain paths are left bare so existing alias lines stay byte-identical.
/// Anything else is double quoted, or single quoted when it contains
/// characters that double quotes would still expand.
fn shell_word(path: &Path) -> String {
    let text = path.display().to_string();
    let plain = |c: char| c.is_ascii_alphanumeric() || "/._-+:@%,=".contains(c);
    if !text.is_empty() && text.chars().all(plain) {
        text
    } else if !text.contains(['"', '$', '`', '\\', '!']) {
        format!("\"{}\"", text)
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}

impl fmt::Display for ShellAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    #[test]
    fn test_environment_command_alias() {
        let catalog = Catalog::builtin();
        let kiro = catalog.find(Category::CliTool, "Kiro CLI").unwrap();
        let alias = ShellAlias::for_item(kiro, Path::new("/opt/ai-dev-pixi")).unwrap();

        assert_eq!(alias.name(), "kiro");
        assert_eq!(
            alias.line(),
            "alias kiro='pixi run --manifest-path /opt/ai-dev-pixi kiro-cli'"
        );
    }

    #[test]
    fn test_module_and_plain_aliases() {
        let catalog = Catalog::builtin();
        let env = Path::new("/opt/ai-dev-pixi");

        let modal = catalog.find(Category::SpecialTool, "modal").unwrap();
        assert_eq!(
            ShellAlias::for_item(modal, env).unwrap().line(),
            "alias modal='pixi run --manifest-path /opt/ai-dev-pixi/pixi.toml python -m modal'"
        );

        let bat = catalog.find(Category::SpecialTool, "bat").unwrap();
        assert_eq!(ShellAlias::for_item(bat, env).unwrap().line(), "alias bat='batcat'");

        let jq = catalog.find(Category::SpecialTool, "jq").unwrap();
        assert!(ShellAlias::for_item(jq, env).is_none());
    }

    #[test]
    fn test_path_with_space_stays_one_word() {
        let catalog = Catalog::builtin();
        let opencode = catalog.find(Category::CliTool, "OpenCode").unwrap();
        let env = Path::new("/home/dev/my tools/ai-dev-pixi");

        assert_eq!(
            ShellAlias::for_item(opencode, env).unwrap().line(),
            "alias opencode='pixi run --manifest-path \"/home/dev/my tools/ai-dev-pixi\" opencode'"
        );

        let modal = catalog.find(Category::SpecialTool, "modal").unwrap();
        assert_eq!(
            ShellAlias::for_item(modal, env).unwrap().line(),
            "alias modal='pixi run --manifest-path \"/home/dev/my tools/ai-dev-pixi/pixi.toml\" python -m modal'"
        );
    }

    #[test]
    fn test_apostrophe_does_not_end_alias() {
        let env = Path::new("/home/o'neil/ai-dev-pixi");
        let alias = ShellAlias::in_environment("kiro", env, "kiro-cli");

        assert_eq!(
            alias.line(),
            "alias kiro='pixi run --manifest-path \"/home/o'\\''neil/ai-dev-pixi\" kiro-cli'"
        );
    }

    #[test]
    fn test_expanding_characters_are_single_quoted() {
        assert_eq!(shell_word(Path::new("/srv/$HOME")), "'/srv/$HOME'");
        assert_eq!(shell_word(Path::new("/srv/a\"b")), "'/srv/a\"b'");
        assert_eq!(shell_word(Path::new("/srv/tools")), "/srv/tools");
    }
}
