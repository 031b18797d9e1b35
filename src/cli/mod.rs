// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the stemlight command-line interface.
//!
//! Three subcommands over a posts JSON file: `search` runs a query the way the
//! blog's search page does, `highlight` marks the search term inside one post,
//! and `inspect` shows the effective configuration and index size.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stemlight",
    about = "Blog search with stemming-aware highlighting",
    version
)]
pub struct Cli {
    /// Log index statistics and recovered problems
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the posts and show matching summaries
    Search {
        /// Posts JSON (an array, or an object with `allPosts`)
        #[arg(short, long)]
        posts: PathBuf,

        /// Search configuration JSON (indexBy, indexStrategy, ...)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Search query; empty lists every post
        #[arg(default_value = "")]
        query: String,
    },

    /// Print one post field with the search term highlighted
    Highlight {
        /// Posts JSON (an array, or an object with `allPosts`)
        #[arg(short, long)]
        posts: PathBuf,

        /// Post uid or slug
        #[arg(long)]
        post: String,

        /// Field to highlight
        #[arg(short, long, default_value = "body")]
        field: String,

        /// Match the exact case of the similar words
        #[arg(long)]
        case_sensitive: bool,

        /// Search term
        query: String,
    },

    /// Show the effective configuration and index statistics
    Inspect {
        /// Posts JSON (an array, or an object with `allPosts`)
        #[arg(short, long)]
        posts: PathBuf,

        /// Search configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
