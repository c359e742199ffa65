//! # sowpods-fetch
//!
//! One-shot wordlist builder: downloads the public SOWPODS word list,
//! keeps the entries that are exactly five ASCII letters, lowercases
//! them, removes duplicates, sorts, and writes the result to a text
//! file (one word per line), creating parent directories as needed.
//!
//! ## Pipeline
//!
//! fetch -> filter -> dedupe/sort -> persist, strictly in that order.
//! A failed fetch never touches the output path, and the write itself
//! goes through a temp-file-and-rename so the destination is never a
//! partial file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sowpods_fetch::builder::{BuilderConfig, WordListBuilder};
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! let config = BuilderConfig {
//!     url: "https://web.mit.edu/jesstess/www/sowpods.txt".to_string(),
//!     destination: PathBuf::from("public/wordlists/sowpods_5.txt"),
//!     timeout: Duration::from_secs(30),
//!     quiet: false,
//!     verbose: false,
//! };
//!
//! let builder = WordListBuilder::new(config);
//! // builder.run().unwrap();
//! ```

pub mod builder;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod output;
pub mod progress;
pub mod wordset;

pub use builder::{BuilderConfig, WordListBuilder};
pub use cli::Args;
