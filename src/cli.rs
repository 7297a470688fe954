// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI stands in for a note editor:
// - `convert` behaves like running the "convert links" command on a selection
// - `paste` behaves like pasting text into a document at the cursor
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-titler",
    version = "0.1.0",
    about = "Turn URLs into markdown links titled after the page they point to",
    long_about = "link-titler finds http(s) URLs in text, fetches each page's <title>, and rewrites \
                  every URL as [title](url). Pages whose title cannot be fetched get a placeholder label."
)]
pub struct Cli {
    /// Settings file (TOML). Defaults are used when omitted.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Label for links whose page title could not be fetched
    ///
    /// Overrides `placeholder-text` from the settings file
    #[arg(long, global = true, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (convert, paste)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every URL in some text and print the result
    ///
    /// Example: link-titler convert "Read https://www.rust-lang.org"
    Convert {
        /// Text to convert. Read from stdin when omitted.
        text: Option<String>,

        /// Output the result and converted text as JSON
        #[arg(long)]
        json: bool,
    },

    /// Paste text into a document file, converting URLs on the way in
    ///
    /// Example: link-titler paste notes.md "https://example.com" --at 0
    Paste {
        /// Document to paste into (created if it does not exist)
        file: PathBuf,

        /// Text to paste. Read from stdin when omitted.
        text: Option<String>,

        /// Character offset of the cursor (default: end of the document)
        #[arg(long, value_name = "CHAR_INDEX")]
        at: Option<usize>,

        /// Paste as-is, without converting URLs
        #[arg(long)]
        no_convert: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `global = true` do?
//    - The flag can be written before or after the subcommand
//    - `link-titler -v convert ...` and `link-titler convert ... -v` both work
//
// 2. Why Option<String> for the text?
//    - None means the user did not pass it, so we read stdin instead
//    - That lets you pipe text in: `pbpaste | link-titler convert`
//
// 3. What is ArgAction::Count?
//    - Counts how many times a flag appears
//    - -v = 1, -vv = 2, -vvv = 3
// -----------------------------------------------------------------------------
