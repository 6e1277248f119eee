// Console message helpers for the one-shot commands

use colored::Colorize;

/// Display a warning message
pub fn warn(message: &str) {
    println!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display a bold white message
pub fn bold(message: &str) {
    println!("{}", message.white().bold());
}
