//! Build pipeline
//!
//! Strictly sequential: fetch, filter, dedupe and sort, persist. A
//! fetch failure aborts before the destination is touched, and the
//! persist step itself is atomic, so the output file is either the
//! previous valid list or the complete new one.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use bytesize::ByteSize;

use crate::cli::Args;
use crate::fetch::{Fetcher, RawDocument};
use crate::filter::WordFilter;
use crate::output;
use crate::progress::{create_spinner, print_header, print_info, print_success, BuildStats};
use crate::wordset::WordSet;

/// Builder configuration
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub url: String,
    pub destination: PathBuf,
    pub timeout: Duration,
    pub quiet: bool,
    pub verbose: bool,
}

impl BuilderConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            url: args.url.clone(),
            destination: args.output.clone(),
            timeout: args.timeout(),
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

/// One-shot wordlist builder
pub struct WordListBuilder {
    config: BuilderConfig,
    filter: WordFilter,
}

impl WordListBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            filter: WordFilter::new(),
        }
    }

    /// Run the full pipeline once.
    pub fn run(&self) -> anyhow::Result<BuildStats> {
        let start = Instant::now();

        if !self.config.quiet {
            print_header(&format!("Fetching {}...", self.config.url));
        }

        let fetcher = Fetcher::new(self.config.timeout)?;

        let spinner = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner("Downloading...")
        };

        let fetched = fetcher.fetch(&self.config.url);
        spinner.finish_and_clear();
        let doc = fetched?;

        if !self.config.quiet {
            print_info(&format!("Downloaded {}", ByteSize(doc.byte_len() as u64)));
        }

        let mut stats = BuildStats::new();
        stats.bytes_fetched = doc.byte_len() as u64;

        let set = self.build(&doc, &mut stats);

        log::info!(
            "{} candidates, {} accepted, {} unique",
            stats.candidate_lines,
            stats.accepted,
            stats.unique
        );

        let bytes_written = output::persist(&set, &self.config.destination)?;

        if !self.config.quiet {
            print_success(&format!(
                "Saved {} words to {:?} ({})",
                set.len(),
                self.config.destination,
                ByteSize(bytes_written)
            ));
            stats.print_summary(start.elapsed());
        }

        Ok(stats)
    }

    /// Run the filter and dedupe stages over an already fetched
    /// document. Network-free seam of the pipeline.
    pub fn build(&self, doc: &RawDocument, stats: &mut BuildStats) -> WordSet {
        let mut accepted = Vec::new();

        for line in doc.text().lines() {
            stats.candidate_lines += 1;

            match self.filter.accept(line) {
                Some(word) => {
                    stats.accepted += 1;
                    accepted.push(word);
                }
                None => stats.rejected += 1,
            }
        }

        let set = WordSet::from_words(accepted);
        stats.unique = set.len() as u64;
        stats.duplicates = stats.accepted - stats.unique;

        set
    }
}
