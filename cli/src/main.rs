use anyhow::{Context, Result};
use catalog_search::{dataset, OutputFormat, Session, Source};
use clap::Parser;
use search_core::{InvertedIndex, MatchPolicy, SearchConfig, Searcher, Stopwords};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "catalog-search")]
#[command(about = "Fuzzy keyword search over a product catalog", long_about = None)]
struct Cli {
    /// Dataset: a JSON/JSONL file, a directory of them, or an http(s) URL
    #[arg(long)]
    input: String,
    /// Stopword file, one word per line (defaults to the built-in English list)
    #[arg(long)]
    stopwords: Option<String>,
    /// Similarity ratio a keyword must exceed to match
    #[arg(long, default_value_t = search_core::fuzzy::DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Credit every similar index keyword instead of only the first
    #[arg(long, default_value_t = false)]
    all_matches: bool,
    /// Number of results to print
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Run a single query and exit instead of prompting
    #[arg(long)]
    query: Option<String>,
    /// Emit JSON responses
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let config = SearchConfig {
        threshold: cli.threshold,
        policy: if cli.all_matches { MatchPolicy::AllMatches } else { MatchPolicy::FirstMatch },
    };
    config.validate()?;

    let stopwords = match &cli.stopwords {
        Some(path) => Stopwords::load(path)?,
        None => Stopwords::english(),
    };
    let records = dataset::load(&Source::parse(&cli.input))
        .with_context(|| format!("loading product data from {}", cli.input))?;
    let index = InvertedIndex::build(&records, &stopwords);

    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Plain };
    let searcher = Searcher::with_config(&index, &stopwords, config);
    let session = Session::new(searcher, &records, cli.top, format);
    let mut stdout = io::stdout().lock();
    match cli.query {
        Some(q) => session.run_query(&q, &mut stdout),
        None => session.run(io::stdin().lock(), &mut stdout),
    }
}
