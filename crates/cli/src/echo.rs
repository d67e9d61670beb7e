use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Summatim".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Summarize text and measure readability\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
#[allow(dead_code)]
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print selection details for a computed summary
pub fn print_summary_details(summary: &summatim_core::Summary) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Summary Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!(
        "  {} {}",
        "Strategy:".dimmed(),
        summary.strategy.to_string().bright_white()
    );
    eprintln!(
        "  {} {} {} {}\n",
        "Sentences:".dimmed(),
        summary.selected.len().to_string().bright_white(),
        "of".dimmed(),
        summary.sentence_count.to_string().bright_white()
    );
}

/// Format a word count for display
pub fn format_words(words: usize) -> String {
    if words >= 1000 {
        format!("{:.1}k words", words as f64 / 1000.0)
    } else {
        format!("{} words", words)
    }
}
