// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and load settings
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success or nothing to do, 1 = conversion
//    failed, 2 = error)
//
// Converted text goes to stdout; notices and logs go to stderr so the output
// can be piped straight into a file.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use link_titler::config::{load_settings, Settings};
use link_titler::fetch::HttpFetcher;
use link_titler::handlers::{
    convert_selected_urls, handle_paste, ConvertedResult, Editor, PasteEvent, TextBuffer,
    NO_LINKS_FOUND_MESSAGE,
};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(placeholder) = cli.placeholder {
        settings.placeholder_text = placeholder;
    }
    tracing::debug!(?settings, "effective settings");

    // One client for the whole run (connection pooling)
    let fetcher = HttpFetcher::new(settings.timeout()).context("failed to set up HTTP client")?;

    match cli.command {
        Commands::Convert { text, json } => handle_convert(&fetcher, &settings, text, json).await,
        Commands::Paste {
            file,
            text,
            at,
            no_convert,
        } => {
            if no_convert {
                settings.enable_auto_convert = false;
            }
            handle_paste_into_file(&fetcher, &settings, &file, text, at).await
        }
    }
}

// Handles the 'convert' subcommand
//
// The whole input is treated as the selection, so the output is either the
// converted text or, when there were no URLs, the input unchanged.
async fn handle_convert(
    fetcher: &HttpFetcher,
    settings: &Settings,
    text: Option<String>,
    json: bool,
) -> Result<i32> {
    let text = read_input(text)?;

    let mut buffer = TextBuffer::select_all(text);
    let result = convert_selected_urls(&mut buffer, fetcher, settings).await;

    if json {
        let output = serde_json::json!({
            "result": result,
            "text": buffer.text(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if buffer.text().ends_with('\n') {
        print!("{}", buffer.text());
    } else {
        println!("{}", buffer.text());
    }

    Ok(notify(result.as_ref()))
}

// Handles the 'paste' subcommand
//
// Loads the document into a TextBuffer with the cursor at `at`, runs the
// paste handler, falls back to a plain paste when the handler passes, and
// writes the document back.
async fn handle_paste_into_file(
    fetcher: &HttpFetcher,
    settings: &Settings,
    file: &Path,
    text: Option<String>,
    at: Option<usize>,
) -> Result<i32> {
    let pasted = read_input(text)?;

    let document = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", file.display()));
        }
    };

    // No --at means the end of the document
    let mut buffer = TextBuffer::with_cursor(document, at.unwrap_or(usize::MAX));
    let mut event = PasteEvent::new(pasted.clone());

    let result = handle_paste(&mut event, &mut buffer, fetcher, settings).await;

    if !event.is_default_prevented() {
        // The handler passed on this one: do what a normal paste would
        buffer.replace_selection(&pasted);
    }

    std::fs::write(file, buffer.text())
        .with_context(|| format!("failed to write {}", file.display()))?;

    Ok(notify(result.as_ref()))
}

// Shows the outcome the way an editor would show a notice, and picks the
// exit code
fn notify(result: Option<&ConvertedResult>) -> i32 {
    match result {
        Some(result) if result.success => {
            eprintln!("✅ {}", result.message);
            0
        }
        Some(result) => {
            eprintln!("❌ {}", result.message);
            1
        }
        None => {
            // Nothing to do is not worth a notice
            tracing::debug!("{}", NO_LINKS_FOUND_MESSAGE);
            0
        }
    }
}

// Uses the text from the command line, or reads all of stdin
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_titler=warn,warn"),
            1 => EnvFilter::new("link_titler=info,warn"),
            2 => EnvFilter::new("link_titler=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
