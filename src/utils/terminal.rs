//! Terminal output utilities

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message to stderr
///
/// Status lines go to stderr so that a caller capturing wrench's stdout as
/// data (the dispatched child owns stdout) never sees wrapper chatter.
pub fn print_info(message: &str) {
    eprintln!("{}: {}", style("info").blue().bold(), message);
}
