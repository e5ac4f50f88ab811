//! Built-in item lists.

use super::item::{AliasTarget, CatalogItem, Category, Recipe};

pub(super) fn cli_tools() -> Vec<CatalogItem> {
    let cli = |name: &str| CatalogItem::new(Category::CliTool, name);
    vec![
        cli("Gemini CLI by Google")
            .package("@google/gemini-cli")
            .alias("gemini")
            .describe("Google Gemini in the terminal"),
        cli("Qodo Command")
            .package("@qodo/command")
            .alias("qodo")
            .describe("Qodo agentic CLI"),
        cli("OpenCode")
            .package("opencode-ai")
            .alias("opencode")
            .describe("Open source terminal coding agent"),
        cli("OpenAI Codex CLI")
            .package("@openai/codex")
            .alias("codex")
            .describe("OpenAI's coding agent"),
        cli("Droid by Factory")
            .package("droid")
            .describe("Droid AI coding assistant by Factory")
            .recipe(Recipe::script("curl -fsSL https://app.factory.ai/cli | sh")),
        cli("Kiro CLI")
            .package("kiro")
            .command("kiro-cli")
            .describe("Kiro agent in the terminal")
            .recipe(Recipe::script("curl -fsSL https://cli.kiro.dev/install | bash")),
        cli("Amp by Sourcegraph")
            .package("@sourcegraph/amp@latest")
            .alias("amp")
            .describe("Sourcegraph's agentic coding tool"),
        cli("Auggie by Augment Code")
            .package("@augmentcode/auggie")
            .alias("auggie")
            .describe("Augment Code agent CLI"),
        cli("Forge Code")
            .package("forgecode@latest")
            .alias("forge")
            .describe("AI pair programmer for the shell"),
        cli("Goose by Block")
            .package("goose")
            .describe("Block's open source agent")
            .recipe(Recipe::script(
                "curl -fsSL https://github.com/block/goose/releases/download/stable/download_cli.sh | CONFIGURE=false bash",
            )),
        cli("Kimi CLI")
            .package("kimi-cli")
            .alias("kimi")
            .describe("Moonshot AI's Kimi agent")
            .recipe(Recipe::in_environment(
                "uv",
                &["tool", "install", "--python", "3.13", "kimi-cli"],
            )),
        cli("OpenHands")
            .package("openhands")
            .describe("OpenHands agent CLI")
            .recipe(Recipe::in_environment("uv", &["tool", "install", "openhands"])),
        cli("Plandex")
            .package("plandex")
            .describe("Planning-first agent for large tasks")
            .recipe(Recipe::script("curl -sL https://plandex.ai/install.sh | bash")),
        cli("Qoder CLI")
            .package("@qoder-ai/qodercli")
            .alias("qoder")
            .command("qodercli")
            .describe("Qoder agentic coding CLI"),
    ]
}

pub(super) fn extensions() -> Vec<CatalogItem> {
    let ext = |name: &str, id: &str| CatalogItem::new(Category::Extension, name).package(id);
    vec![
        ext("Kilo Code", "kilocode.kilo-code").describe("Open source coding agent"),
        ext("Augment Code", "augment.vscode-augment").describe("Context-aware coding assistant"),
        ext("Zencoder", "zencoderai.zencoder").describe("AI coding agent"),
    ]
}

pub(super) fn special_tools() -> Vec<CatalogItem> {
    let tool = |name: &str, description: &str| {
        CatalogItem::new(Category::SpecialTool, name).describe(description)
    };
    let apt = |package: &str| Recipe::command("sudo", &["apt-get", "install", "-y", package]);
    vec![
        tool("helm", "Kubernetes package manager").recipe(Recipe::script(
            "curl https://raw.githubusercontent.com/helm/helm/main/scripts/get-helm-3 | bash",
        )),
        tool("gh", "GitHub CLI").recipe(Recipe::script(GH_INSTALL)),
        tool("ripgrep", "Fast search tool (rg)").recipe(apt("ripgrep")),
        tool("jq", "JSON processor").recipe(apt("jq")),
        tool("yq", "YAML processor").recipe(apt("yq")),
        tool("bat", "Better cat with syntax highlighting")
            .recipe(apt("bat"))
            .alias_target(AliasTarget::Plain("batcat".to_string())),
        tool("exa", "Modern ls replacement (installs eza)").recipe(apt("eza")),
        tool("fd", "Better find alternative").recipe(apt("fd-find")),
        tool("lazygit", "Git TUI").recipe(Recipe::script(LAZYGIT_INSTALL)),
        tool("modal", "Serverless cloud compute client")
            .recipe(Recipe::in_environment("uv", &["pip", "install", "modal"]))
            .alias_target(AliasTarget::EnvironmentModule("modal".to_string())),
    ]
}

pub(super) fn enhancers() -> Vec<CatalogItem> {
    let enhancer = |name: &str| CatalogItem::new(Category::Enhancer, name);
    vec![
        enhancer("Claude Flow")
            .package("claude-flow@alpha")
            .alias("claude-flow")
            .describe("Multi-agent orchestration for Claude Code"),
        enhancer("Task Master AI")
            .package("task-master-ai")
            .alias("task-master")
            .describe("Task planning for AI-driven development"),
    ]
}

const GH_INSTALL: &str = "(type -p wget >/dev/null || (sudo apt update && sudo apt-get install wget -y)) \
    && sudo mkdir -p -m 755 /etc/apt/keyrings \
    && wget -qO- https://cli.github.com/packages/githubcli-archive-keyring.gpg | sudo tee /etc/apt/keyrings/githubcli-archive-keyring.gpg > /dev/null \
    && sudo chmod go+r /etc/apt/keyrings/githubcli-archive-keyring.gpg \
    && echo \"deb [arch=$(dpkg --print-architecture) signed-by=/etc/apt/keyrings/githubcli-archive-keyring.gpg] https://cli.github.com/packages stable main\" | sudo tee /etc/apt/sources.list.d/github-cli.list > /dev/null \
    && sudo apt update \
    && sudo apt install gh -y";

const LAZYGIT_INSTALL: &str = "LAZYGIT_VERSION=$(curl -s \"https://api.github.com/repos/jesseduffield/lazygit/releases/latest\" | grep -Po '\"tag_name\": \"v\\K[^\"]*') \
    && curl -Lo /tmp/lazygit.tar.gz \"https://github.com/jesseduffield/lazygit/releases/latest/download/lazygit_${LAZYGIT_VERSION}_Linux_x86_64.tar.gz\" \
    && tar xf /tmp/lazygit.tar.gz -C /tmp lazygit \
    && sudo install /tmp/lazygit /usr/local/bin \
    && rm -f /tmp/lazygit /tmp/lazygit.tar.gz";
