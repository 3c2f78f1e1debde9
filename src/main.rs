//! # tgpack CLI
//!
//! Command-line interface for the tgpack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use tgpack::TgpackError;
use tgpack::cli::Args;
use tgpack::core::process_documents;
use tgpack::format::{OutputFormat, append_to_format};
use tgpack::input::{discover, read_documents};
use tgpack::parsers::TelegramHtmlParser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), TgpackError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    log::debug!("{:?}", args);

    // Configuration errors abort before any file is touched
    let config = args.to_config()?;
    let format: OutputFormat = args.format.into();

    println!("📦 tgpack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", args.output);
    println!("📄 Format:  {}", format);
    for (from, to) in config.renames.iter() {
        println!("👤 Rename:  {} → {}", from, to);
    }
    println!();

    // Step 1: Discover and read every file up front
    let paths = discover(&args.input)?;
    println!("⏳ Reading {} file(s)...", paths.len());
    let documents = read_documents(&paths)?;

    // Step 2: Extract, merge and sort
    let parse_start = Instant::now();
    let parser = TelegramHtmlParser::with_config(config);
    let verbose = args.verbose;
    let (messages, stats) = process_documents(&parser, documents, |msg| {
        if verbose {
            println!("{}", msg.to_log_line());
        }
    })?;
    println!(
        "   Found {} messages in {} file(s), {:.1} per file ({:.2}s)",
        stats.messages,
        stats.documents,
        stats.messages_per_document(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 3: Render once and append
    println!("💾 Writing {}...", format);
    append_to_format(&messages, &args.output, format)?;

    println!();
    println!("✅ Done! Output appended to {}", args.output);
    println!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
