//! Output abstraction shared by the non-interactive commands.
//!
//! Handlers write through [`Output`] so tests can capture what would be
//! printed instead of scraping stdout.

use console::style;

/// Trait for output operations.
pub trait Output: Send + Sync {
    /// Print a line of text.
    fn println(&self, message: &str);

    /// Print an empty line.
    fn newline(&self) {
        self.println("");
    }

    /// Print a section header.
    fn header(&self, title: &str) {
        self.println(title);
        self.println(&"=".repeat(title.chars().count()));
    }

    /// Print a sub-section header.
    fn subheader(&self, title: &str) {
        self.println(title);
        self.println(&"-".repeat(title.chars().count()));
    }

    /// Print an indented line.
    fn indented(&self, message: &str) {
        self.println(&format!("  {}", message));
    }
}

/// Writes to stdout, with bold headers when the terminal supports it.
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn println(&self, message: &str) {
        println!("{}", message);
    }

    fn header(&self, title: &str) {
        println!("{}", style(title).bold().cyan());
        println!("{}", "=".repeat(title.chars().count()));
    }

    fn subheader(&self, title: &str) {
        println!("{}", style(title).bold());
        println!("{}", "-".repeat(title.chars().count()));
    }
}
