//! aimenu CLI - Command-line interface
//!
//! This binary provides the interactive menu and headless commands on top of
//! the aimenu library.

mod commands;
mod error;
mod runner;
mod tui_app;
mod ui;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::install::InstallArgs;
use commands::list::ListArgs;
use commands::menu::MenuArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "aimenu")]
#[command(version = aimenu::VERSION)]
#[command(about = "Install AI coding tools into a shared pixi environment", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose tools in the interactive menu (default)
    Menu(MenuArgs),

    /// Install tools without the menu
    Install(InstallArgs),

    /// List every installable item
    List(ListArgs),

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or(Commands::Menu(MenuArgs::default())) {
        Commands::Menu(args) => commands::menu::run(args, cli.debug),
        Commands::Install(args) => commands::install::run(args, cli.debug),
        Commands::List(args) => commands::list::run(args),
        Commands::Config { command } => commands::config::run(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_menu() {
        let cli = Cli::try_parse_from(["aimenu"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_install_flags_repeat() {
        let cli = Cli::try_parse_from([
            "aimenu",
            "install",
            "--cli",
            "gemini",
            "--cli",
            "codex",
            "--tool",
            "jq",
            "--dry-run",
            "--debug",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.cli, vec!["gemini", "codex"]);
                assert_eq!(args.tools, vec!["jq"]);
                assert!(args.dry_run);
            }
            _ => panic!("expected install command"),
        }
    }

    #[test]
    fn test_menu_flags() {
        let cli = Cli::try_parse_from(["aimenu", "menu", "--path", "~/dev", "--no-enhancers"])
            .unwrap();
        match cli.command {
            Some(Commands::Menu(args)) => {
                assert_eq!(args.path.as_deref(), Some("~/dev"));
                assert!(args.no_enhancers);
            }
            _ => panic!("expected menu command"),
        }
    }
}
