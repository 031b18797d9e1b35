// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use stemlight::{
    first_highlight_offset, highlight_text, highlighted_words, load_config, load_posts,
    render_highlighted, similar_words, Document, IndexConfiguration, SearchIndex,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
use cli::display::{
    error_prefix, label, pad_right, row, score_value, section_bot, section_top, span_rows,
    themed, CYAN,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{} {:#}", error_prefix(), e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Search {
            posts,
            config,
            limit,
            query,
        } => run_search(&posts, config.as_deref(), limit, &query),
        Commands::Highlight {
            posts,
            post,
            field,
            case_sensitive,
            query,
        } => run_highlight(&posts, &post, &field, case_sensitive, &query),
        Commands::Inspect { posts, config } => run_inspect(&posts, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", error_prefix(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")?;
    Ok(())
}

fn build_index(posts: &Path, config: Option<&Path>) -> Result<SearchIndex> {
    let documents = load_posts(posts).context("loading posts")?;
    let config = match config {
        Some(path) => load_config(path).context("loading search configuration")?,
        None => IndexConfiguration::default(),
    };
    SearchIndex::build(documents, config).context("building search index")
}

fn post_title<'a>(document: &'a Document, uid: &'a str) -> std::borrow::Cow<'a, str> {
    let title = document.text("postTitle");
    if title.is_empty() {
        uid.into()
    } else {
        title
    }
}

fn print_summary(document: &Document, uid: &str, score: Option<f64>, query: &str) {
    section_top(&post_title(document, uid));
    row(&format!(
        "{} {}  {} {}",
        label("uid"),
        uid,
        label("score"),
        score_value(score)
    ));
    let description = document.text("seoMetaDescription");
    if !description.is_empty() {
        span_rows(&highlight_text(query, &description, true));
    }
    section_bot();
}

fn run_search(posts: &Path, config: Option<&Path>, limit: usize, query: &str) -> Result<()> {
    let index = build_index(posts, config)?;

    // An empty query shows every post, as the search page does.
    if query.trim().is_empty() {
        let uid_field = &index.config().uid_field;
        for document in index.documents().iter().take(limit) {
            let uid = document.uid(uid_field).unwrap_or_default();
            print_summary(document, &uid, None, query);
        }
        println!(
            "{}",
            label(&format!("{} of {} posts", index.len().min(limit), index.len()))
        );
        return Ok(());
    }

    let hits = index.query_scored(query);
    if hits.is_empty() {
        println!("Nothing found for \"{}\".", query);
        return Ok(());
    }
    for hit in hits.iter().take(limit) {
        print_summary(hit.document, hit.uid, hit.score, query);
    }
    println!(
        "{}",
        label(&format!(
            "{} of {} matching posts ({} indexed)",
            hits.len().min(limit),
            hits.len(),
            index.len()
        ))
    );
    Ok(())
}

fn run_highlight(
    posts: &Path,
    post: &str,
    field: &str,
    case_sensitive: bool,
    query: &str,
) -> Result<()> {
    let documents = load_posts(posts).context("loading posts")?;
    let Some(document) = documents
        .iter()
        .find(|d| d.uid("id").as_deref() == Some(post) || d.text("slug") == post)
    else {
        bail!("no post with uid or slug '{}'", post);
    };

    let text = document.text(field);
    if text.is_empty() {
        bail!("post '{}' has no text in field '{}'", post, field);
    }

    let words = similar_words(query, &text);
    let spans = render_highlighted(&text, &words, query, !case_sensitive);

    section_top(field);
    span_rows(&spans);
    section_bot();

    let marked = highlighted_words(&spans);
    match first_highlight_offset(&spans) {
        Some(offset) => println!(
            "{}",
            label(&format!(
                "{} highlights, first at byte {}; similar words: {}",
                marked.len(),
                offset,
                words.join(", ")
            ))
        ),
        None => println!("{}", label("no highlights")),
    }
    Ok(())
}

fn run_inspect(posts: &Path, config: Option<&Path>) -> Result<()> {
    let index = build_index(posts, config)?;
    let config = index.config();
    let stats = index.stats();

    let entry = |name: &str, value: &str| {
        row(&format!(
            "{}{}",
            pad_right(&themed(CYAN, &[], name), 22),
            value
        ));
    };

    section_top("Configuration");
    entry("uidField", &config.uid_field);
    entry("indexBy", &config.index_by.join(", "));
    entry("indexStrategy", config.index_strategy.as_str());
    entry("searchSanitiser", config.search_sanitiser.as_str());
    entry("termFrequency", &config.term_frequency.to_string());
    entry("removeStopWords", &config.remove_stop_words.to_string());
    entry("stemWords", &config.stem_words.to_string());
    section_bot();

    section_top("Index");
    entry("documents", &stats.documents.to_string());
    entry("vocabulary", &stats.vocabulary.to_string());
    entry("postings", &stats.postings.to_string());
    entry("skipped duplicates", &stats.skipped_duplicates.to_string());
    section_bot();
    Ok(())
}
