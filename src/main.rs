use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lexvec::config::{Config, Overrides};
use lexvec::{
    build_vectors, round2, search, CorpusProvider, LinguisticResources, QueryProcessor,
    RankedEntry, SearchError, SearchOutcome, SearchRequest,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY, YELLOW};
use cli::{feedback_mode, query_weights, Cli, Commands, PipelineArgs, SourceArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(display::use_log_colors())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            query,
            source,
            pipeline,
            weights,
            override_weights,
            json,
        } => {
            let config = load_config(&cli.config, &source)?;
            let resources = config.resources().context("loading linguistic resources")?;
            let weights = query_weights(&query, weights);
            let request = SearchRequest::new(query)
                .feedback(feedback_mode(override_weights))
                .weights(weights)
                .pipeline(pipeline.resolve(config.pipeline));

            let outcome = search(&config.corpus(), &resources, &request).with_context(|| {
                format!("searching {}", config.corpus_dir.display())
            })?;

            if json {
                let report = SearchReport {
                    query: &request.query,
                    processed_query: &outcome.processed_query,
                    results: outcome.ranking.entries(),
                    weights: &outcome.weights,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_outcome(&request, &outcome);
            }
        }

        Commands::Process {
            query,
            synonyms,
            pipeline,
        } => {
            let source = SourceArgs {
                corpus: None,
                synonyms,
            };
            let config = load_config(&cli.config, &source)?;
            let resources = config.resources().context("loading linguistic resources")?;
            let processed = QueryProcessor::new(&resources)
                .process(&query, &pipeline.resolve(config.pipeline))
                .context("processing query")?;
            println!("{}", processed);
        }

        Commands::Vocab {
            query,
            source,
            pipeline,
        } => {
            let config = load_config(&cli.config, &source)?;
            let resources = config.resources().context("loading linguistic resources")?;
            run_vocab(&config, &resources, &query, pipeline)?;
        }
    }

    Ok(())
}

fn load_config(file: &Option<std::path::PathBuf>, source: &SourceArgs) -> Result<Config> {
    Config::resolve(file.as_deref(), &Overrides::from(source)).context("resolving configuration")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: &'a str,
    processed_query: &'a str,
    results: &'a [RankedEntry],
    weights: &'a [f64],
}

fn print_outcome(request: &SearchRequest, outcome: &SearchOutcome) {
    display::section_top("QUERY");
    display::row(&format!(" {}", themed(YELLOW, &[BOLD], &request.query)));
    display::row(&format!(
        " {} {}",
        themed(GRAY, &[], "processed:"),
        outcome.processed_query
    ));

    display::section_mid("RESULTS");
    if outcome.ranking.is_no_relevant_results() {
        display::row(&format!(" {}", themed(GRAY, &[], lexvec::NO_RELEVANT_RESULTS)));
    } else {
        for (position, entry) in outcome.ranking.entries().iter().enumerate() {
            display::row(&format!(
                " {:>2}. {} {} {}",
                position + 1,
                display::pad_right(&entry.id, 28),
                display::score_value(entry.score),
                display::score_bar(entry.score)
            ));
        }
    }

    display::section_mid("WEIGHTS");
    let words: Vec<&str> = request.query.split(' ').collect();
    for (word, weight) in words.iter().zip(&outcome.weights) {
        display::row(&format!(
            " {} {}",
            display::pad_right(&themed(CYAN, &[], word), 28),
            display::weight_value(*weight)
        ));
    }
    display::section_bot();
}

/// Column and current query weight of every raw query word.
fn run_vocab(
    config: &Config,
    resources: &LinguisticResources,
    query: &str,
    pipeline: PipelineArgs,
) -> Result<()> {
    let processed = QueryProcessor::new(resources)
        .process(query, &pipeline.resolve(config.pipeline))
        .context("processing query")?;

    let corpus = config
        .corpus()
        .load()
        .with_context(|| format!("loading {}", config.corpus_dir.display()))?;
    if corpus.is_empty() {
        return Err(SearchError::EmptyCorpus.into());
    }

    let mut texts = corpus.texts();
    texts.push(processed.text());
    let zeros = query_weights(query, Vec::new());
    let space = build_vectors(&texts, query, lexvec::FeedbackMode::Report, &zeros)?;
    let query_row = space.query_row();

    display::section_top("VOCABULARY");
    for word in query.split(' ') {
        let line = match space.vocabulary.get(word) {
            Some(column) => {
                let weight = space.matrix.get(query_row, column).unwrap_or(0.0);
                format!(
                    " {} {:>6} {}",
                    display::pad_right(&themed(CYAN, &[], word), 28),
                    column,
                    display::weight_value(round2(weight))
                )
            }
            None => format!(
                " {} {}",
                display::pad_right(word, 28),
                themed(GRAY, &[], "not in vocabulary")
            ),
        };
        display::row(&line);
    }
    display::section_bot();
    Ok(())
}
