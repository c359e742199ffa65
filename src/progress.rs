//! Progress display module
//!
//! Styled console output and run statistics. Nothing printed here is
//! part of the tool's contract; `--quiet` suppresses all of it.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║                       SOWPODS-FETCH v1.0.0                       ║
║              5-Letter Wordlist Builder for SOWPODS               ║
╚══════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Statistics for one build run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    /// Size of the fetched document in bytes
    pub bytes_fetched: u64,
    /// Candidate lines seen in the document
    pub candidate_lines: u64,
    /// Lines accepted as 5-letter words
    pub accepted: u64,
    /// Lines silently dropped
    pub rejected: u64,
    /// Accepted words that were duplicates
    pub duplicates: u64,
    /// Unique words written to the output
    pub unique: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print final statistics
    pub fn print_summary(&self, elapsed: Duration) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                      BUILD COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Candidate lines:".green(),
            format_number(self.candidate_lines)
        );
        println!(
            "  {} {}",
            "Accepted:       ".green(),
            format_number(self.accepted)
        );
        println!(
            "  {} {}",
            "Rejected:       ".yellow(),
            format_number(self.rejected)
        );
        println!(
            "  {} {}",
            "Duplicates:     ".yellow(),
            format_number(self.duplicates)
        );
        println!(
            "  {} {}",
            "Unique output:  ".green().bold(),
            format_number(self.unique).green().bold()
        );

        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(elapsed));
        println!("{}", "═".repeat(60).green());
    }
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
