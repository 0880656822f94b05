// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI driver: thin wrappers over [`boolex::build_to_file`] and
//! [`boolex::evaluate`] for building and querying a persistent index.

mod cli;

use boolex::{evaluate, DocId, LoadedIndex};
use clap::Parser;
use cli::{display, Cli, Commands};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

const REPL_RESULT_LIMIT: usize = 50;
const BATCH_RESULT_LIMIT: usize = 100;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Build {
            input,
            output,
            emit_tokens,
        } => run_build(&input, &output, emit_tokens.as_deref()),
        Commands::Query {
            index,
            input,
            output,
        } => run_query(&index, input.as_deref(), output.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn run_build(
    input: &std::path::Path,
    output: &std::path::Path,
    emit_tokens: Option<&std::path::Path>,
) -> Result<(), String> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message(format!("reading {}", input.display()));
    bar.enable_steady_tick(std::time::Duration::from_millis(120));

    let started = Instant::now();
    bar.set_message("tokenizing and building index");
    let stats = boolex::build_to_file(input, output, emit_tokens).map_err(|e| e.to_string())?;
    bar.finish_and_clear();

    println!("{}", display::bold("Build complete"));
    println!("  documents:       {}", stats.documents);
    println!("  unique terms:    {}", stats.unique_terms);
    println!("  tokens accepted: {}", stats.tokens_accepted);
    println!("  tokens rejected: {}", stats.tokens_rejected);
    println!(
        "  elapsed:         {}",
        display::timing_ms(started.elapsed().as_millis())
    );
    println!("  wrote:           {}", output.display());
    Ok(())
}

fn run_query(
    index_path: &std::path::Path,
    input: Option<&std::path::Path>,
    output: Option<&std::path::Path>,
) -> Result<(), String> {
    let index = LoadedIndex::load(index_path).map_err(|e| e.to_string())?;

    match (input, output) {
        (Some(input), Some(output)) => batch_search(&index, input, output),
        _ => interactive_search(&index),
    }
}

/// Builds the closure `evaluate` uses to resolve a `WORD` token: normalize
/// and stem exactly as indexing did, then binary-search the loaded terms.
fn lookup_fn(index: &LoadedIndex) -> impl FnMut(&[u8]) -> Vec<DocId> + '_ {
    let mut stemmer = boolex::stem::Stemmer::new();
    move |word: &[u8]| {
        let mut buf = word.to_vec();
        boolex::normalize::normalize_in_place(&mut buf);
        let stem = stemmer.stem(&buf).to_vec();
        index
            .lookup_term(&stem)
            .map(|ids| ids.to_vec())
            .unwrap_or_default()
    }
}

fn interactive_search(index: &LoadedIndex) -> Result<(), String> {
    println!("{}", display::bold("boolex interactive search"));
    println!("Type a query and press enter. Type 'exit' to quit.\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let query = line.trim();
        if query == "exit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let started = Instant::now();
        let hits = evaluate(query, index.document_count() as u32, lookup_fn(index));
        let elapsed = started.elapsed();

        println!(
            "Found: {} documents ({})",
            hits.len(),
            display::timing_ms(elapsed.as_millis())
        );
        for (rank, id) in hits.iter().take(REPL_RESULT_LIMIT).enumerate() {
            let url = index
                .find_document(*id)
                .map(|d| d.url.as_str())
                .unwrap_or("<unknown>");
            println!("  [{}] doc {} - {}", rank + 1, id, url);
        }
        println!();
    }
    Ok(())
}

fn batch_search(
    index: &LoadedIndex,
    input: &std::path::Path,
    output: &std::path::Path,
) -> Result<(), String> {
    let input_text =
        std::fs::read_to_string(input).map_err(|e| format!("{}: {}", input.display(), e))?;
    let mut out =
        std::fs::File::create(output).map_err(|e| format!("{}: {}", output.display(), e))?;

    for (n, line) in input_text.lines().enumerate() {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        let started = Instant::now();
        let hits = evaluate(query, index.document_count() as u32, lookup_fn(index));
        let elapsed = started.elapsed();

        writeln!(out, "Query #{}: {}", n + 1, query).ok();
        writeln!(out, "Found: {} documents", hits.len()).ok();
        writeln!(out, "Time: {} ms", elapsed.as_millis()).ok();
        let ids: Vec<String> = hits
            .iter()
            .take(BATCH_RESULT_LIMIT)
            .map(|d| d.get().to_string())
            .collect();
        writeln!(out, "Results: {}", ids.join(", ")).ok();
        writeln!(out).ok();
    }
    Ok(())
}
