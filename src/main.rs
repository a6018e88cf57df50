use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newsprobe::articles::profile::QueryProfile;
use newsprobe::articles::store;
use newsprobe::config::{Config, DataKind};
use newsprobe::expansion::expander::{expand_keywords, ExpansionConfig};
use newsprobe::expansion::matrix::VectorizerConfig;
use newsprobe::output::{report, terminal};
use newsprobe::pipeline::corpus::prepare_corpus;
use newsprobe::ranking::filter::filter_articles;
use newsprobe::text::phrases::PhraseConfig;
use newsprobe::text::{TextField, Tokenizer};
use newsprobe::topics::tfidf::TfIdfTopics;
use newsprobe::topics::traits::TopicModel;

/// Newsprobe: keyword expansion and relevance ranking for news corpora.
///
/// Finds the terms most associated with a seed phrase in a corpus of
/// articles, and ranks articles by how densely they mention a set of
/// query terms.
#[derive(Parser)]
#[command(name = "newsprobe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the raw/processed/outputs data directories
    Init,

    /// Rank a corpus against a query profile and write a report
    Rank {
        /// Query profile JSON with core_terms and seed_terms
        profile: PathBuf,

        /// Articles JSON (an array of news API articles)
        articles: PathBuf,

        /// Name for the saved results (default: the articles file name)
        #[arg(long)]
        label: Option<String>,

        /// Minimum total core-term occurrences for an article to be kept
        #[arg(long)]
        min_core_df: Option<usize>,

        /// Minimum total seed-term occurrences (default: min-core-df)
        #[arg(long)]
        min_seed_df: Option<usize>,

        /// Number of articles to show in the terminal
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Find the terms most associated with a seed phrase
    Expand {
        /// Articles JSON (an array of news API articles)
        articles: PathBuf,

        /// Seed phrase; every word must appear in a foreground document
        seed: String,

        /// Article field to analyze
        #[arg(long, value_enum, default_value = "content")]
        field: TextField,

        /// Keep terms scoring above this fraction of the best seed score
        #[arg(long)]
        threshold: Option<f64>,

        /// Drop terms appearing in more than this fraction of documents
        #[arg(long, default_value = "1.0")]
        max_df: f64,

        /// Drop terms appearing in fewer documents than this
        #[arg(long, default_value = "1")]
        min_df: usize,

        /// Keep only the most frequent terms
        #[arg(long)]
        max_features: Option<usize>,

        /// Count presence instead of occurrences
        #[arg(long)]
        binary: bool,

        /// Number of least-associated terms to report
        #[arg(long)]
        unkeywords: Option<usize>,

        /// Detect phrases up to this many words (0 disables)
        #[arg(long, default_value = "0")]
        phrases: usize,

        /// Stem tokens before counting (overrides NEWSPROBE_STEM)
        #[arg(long)]
        stem: bool,
    },

    /// Summarize what a corpus is about
    Topics {
        /// Articles JSON (an array of news API articles)
        articles: PathBuf,

        /// Article field to analyze
        #[arg(long, value_enum, default_value = "content")]
        field: TextField,

        /// Maximum number of topics
        #[arg(long, default_value = "10")]
        topics: usize,
    },

    /// Rebuild the report for previously ranked articles
    Report {
        /// Articles JSON the ranking was computed on
        articles: PathBuf,

        /// Label the ranking was saved under
        label: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsprobe=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = Config::load()?;
            info!(data_dir = %config.data_dir.display(), "Initializing data layout");
            for dir in config.init_data_dirs()? {
                println!("  {}", dir.display());
            }
            println!("\nNewsprobe is ready. Put article JSON files in the raw directory,");
            println!("then run: newsprobe rank <profile.json> <articles.json>");
        }

        Commands::Rank {
            profile,
            articles,
            label,
            min_core_df,
            min_seed_df,
            top,
        } => {
            let config = Config::load()?;
            let profile = QueryProfile::load(&profile)?;
            let label = match label {
                Some(label) => label,
                None => file_label(&articles)?,
            };

            println!("Query: {}", profile.api_query().bold());

            let corpus = store::load_articles(&articles)?;
            let mut rank_config = config.rank_config();
            if let Some(min_core_df) = min_core_df {
                rank_config.min_core_df = min_core_df;
            }
            if min_seed_df.is_some() {
                rank_config.min_seed_df = min_seed_df;
            }
            rank_config.validate()?;

            info!(
                articles = corpus.len(),
                core_terms = profile.core_terms.len(),
                seed_rules = profile.seed_terms.len(),
                "Ranking articles"
            );

            let ranked = filter_articles(
                &corpus,
                &profile.core_terms,
                &profile.seed_terms,
                &rank_config,
            );
            terminal::display_ranked(&ranked, &corpus, top);

            let ranked_path =
                config.data_path(DataKind::Processed, &format!("filtered_{label}.json"))?;
            store::save_ranked(&ranked_path, &ranked)?;
            println!("Ranking saved to: {}", ranked_path.display());

            let rows = report::build_report(&ranked, &corpus);
            let md_path = report::write_report(&config.data_dir_for(DataKind::Outputs)?, &label, &rows)?;
            println!("Report written to: {md_path}");
        }

        Commands::Expand {
            articles,
            seed,
            field,
            threshold,
            max_df,
            min_df,
            max_features,
            binary,
            unkeywords,
            phrases,
            stem,
        } => {
            let config = Config::load()?;
            let tokenizer = Tokenizer::english()?.with_stemming(stem || config.stem);

            let expansion_config = ExpansionConfig {
                vectorizer: VectorizerConfig {
                    max_df,
                    min_df,
                    max_features,
                    binary,
                },
                threshold: threshold.unwrap_or(config.threshold),
                n_unkeywords: unkeywords.unwrap_or(config.n_unkeywords),
            };
            expansion_config.validate()?;

            let corpus = store::load_articles(&articles)?;
            println!("Tokenizing {} articles...", corpus.len());

            let phrase_config = PhraseConfig {
                max_order: phrases,
                ..Default::default()
            };
            let docs = prepare_corpus(&corpus, field, &tokenizer, Some(&phrase_config))?;

            let normalized = tokenizer.normalize_phrase(&seed);
            let expansion = expand_keywords(&docs, &normalized, &expansion_config)
                .with_context(|| format!("Keyword expansion for \"{seed}\" failed"))?;
            terminal::display_expansion(&seed, &expansion);
        }

        Commands::Topics {
            articles,
            field,
            topics,
        } => {
            let config = Config::load()?;
            let tokenizer = Tokenizer::english()?.with_stemming(config.stem);

            let corpus = store::load_articles(&articles)?;
            let docs = prepare_corpus(&corpus, field, &tokenizer, None)?;

            let model = TfIdfTopics {
                max_topics: topics,
                ..Default::default()
            };
            let summary = model.discover(&docs)?;
            summary.display();
            println!("Label: {}", summary.slug(3).bold());
        }

        Commands::Report { articles, label } => {
            let config = Config::load()?;
            let corpus = store::load_articles(&articles)?;

            let ranked_path =
                config.data_path(DataKind::Processed, &format!("filtered_{label}.json"))?;
            let ranked = store::load_ranked(&ranked_path)?;
            if ranked.by_rank_desc().iter().any(|(pos, _)| *pos >= corpus.len()) {
                anyhow::bail!(
                    "Ranking {} refers to articles beyond the {} in {}; was it computed on a different file?",
                    ranked_path.display(),
                    corpus.len(),
                    articles.display()
                );
            }

            let rows = report::build_report(&ranked, &corpus);
            let md_path = report::write_report(&config.data_dir_for(DataKind::Outputs)?, &label, &rows)?;
            println!("Report written to: {md_path} ({} articles)", rows.len());
        }
    }

    Ok(())
}

/// Label derived from a file name: `raw/nhs_digital.json` -> `nhs_digital`.
fn file_label(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("Cannot derive a label from {}; pass --label", path.display()))
}
