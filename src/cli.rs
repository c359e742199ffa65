//! Command-line interface definition for sowpods-fetch
//!
//! Every flag has a default, so a bare invocation performs the
//! standard SOWPODS run.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default word list source.
pub const DEFAULT_URL: &str = "https://web.mit.edu/jesstess/www/sowpods.txt";

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "public/wordlists/sowpods_5.txt";

/// Fetch the public SOWPODS word list and build a sorted, deduplicated
/// 5-letter wordlist
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sowpods-fetch",
    author = "m0h1nd4",
    version,
    about = "Fetch SOWPODS and build a sorted 5-letter wordlist",
    long_about = r#"
Downloads the public SOWPODS word list, keeps only entries that are
exactly five ASCII letters, lowercases them, removes duplicates, sorts
the result, and writes it to a text file (one word per line).

EXAMPLES:
    # Standard run: fetch SOWPODS, write public/wordlists/sowpods_5.txt
    sowpods-fetch

    # Alternate output location
    sowpods-fetch -o /tmp/five_letter_words.txt

    # Alternate source list
    sowpods-fetch -u https://example.com/words.txt -o words_5.txt
"#
)]
pub struct Args {
    /// Source word list URL
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Output file path
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["sowpods-fetch"]).unwrap();

        assert_eq!(args.url, DEFAULT_URL);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.timeout, 30);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "sowpods-fetch",
            "-u",
            "https://example.com/words.txt",
            "-o",
            "/tmp/out.txt",
            "--timeout",
            "5",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(args.url, "https://example.com/words.txt");
        assert_eq!(args.output, PathBuf::from("/tmp/out.txt"));
        assert_eq!(args.timeout(), Duration::from_secs(5));
        assert!(args.quiet);
    }
}
