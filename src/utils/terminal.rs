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

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}: {}", style("success").green().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}
