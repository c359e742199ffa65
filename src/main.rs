//! sowpods-fetch - build a sorted 5-letter wordlist from SOWPODS
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use sowpods_fetch::builder::{BuilderConfig, WordListBuilder};
use sowpods_fetch::cli::Args;
use sowpods_fetch::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = BuilderConfig::from_args(&args);

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let builder = WordListBuilder::new(config);
    builder.run()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &BuilderConfig) {
    use sowpods_fetch::progress::{print_header, print_info};

    print_header("Configuration");

    print_info(&format!("Source URL:   {}", config.url));
    print_info(&format!("Output:       {:?}", config.destination));
    print_info(&format!("Timeout:      {:?}", config.timeout));
}
