use std::path::PathBuf;

use anyhow::Result;
use chapter_relation::analysis::classifier::{classify_chapter, ChapterAnalysis};
use chapter_relation::config::{parse_constant, Config};
use chapter_relation::output::{markdown, terminal};
use chapter_relation::sources::{self, SourceKind, TermList};
use chapter_relation::text::chapters::split_into_chapters;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// Books with more chapters than this get a progress bar while classifying.
const PROGRESS_MIN_CHAPTERS: usize = 50;

/// Chapter Relation: classify each chapter of a book as war- or peace-related.
///
/// Compares how often, and how tightly clustered, the terms of two curated
/// lists appear in each chapter.
#[derive(Parser)]
#[command(name = "chapter-relation", version, about)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct InputArgs {
    /// War term list, one term per line
    #[arg(long, global = true)]
    war_terms: Option<PathBuf>,

    /// Peace term list, one term per line
    #[arg(long, global = true)]
    peace_terms: Option<PathBuf>,

    /// Book text containing "CHAPTER <n>" markers
    #[arg(long, global = true)]
    book: Option<PathBuf>,

    /// Relation score constant (default 1000)
    #[arg(long, global = true, value_parser = parse_constant_arg)]
    constant: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every chapter (the default command)
    Classify {
        /// Print results as JSON instead of one line per chapter
        #[arg(long)]
        json: bool,

        /// Also show counts, densities and scores per chapter
        #[arg(long)]
        details: bool,
    },

    /// Show the loaded war and peace term lists
    Terms,

    /// Classify every chapter and write a Markdown report
    Report {
        /// Where to write the report
        #[arg(long, default_value = "output/chapter-relation-report.md")]
        output: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chapter_relation=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?.with_overrides(
        cli.inputs.war_terms,
        cli.inputs.peace_terms,
        cli.inputs.book,
        cli.inputs.constant,
    );

    let command = cli.command.unwrap_or(Commands::Classify {
        json: false,
        details: false,
    });

    match command {
        Commands::Classify { json, details } => {
            let analyses = run(&config)?;

            if json {
                let results: Vec<_> = analyses.iter().map(|a| a.result()).collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            terminal::display_results(&analyses);
            if details {
                terminal::display_details(&analyses);
                terminal::display_summary(&analyses);
            }
        }

        Commands::Terms => {
            let (war_terms, peace_terms) = load_term_lists(&config)?;
            terminal::display_terms(&war_terms, &peace_terms);
        }

        Commands::Report { output } => {
            let analyses = run(&config)?;
            terminal::display_results(&analyses);

            let report_path = markdown::generate_report(&analyses, &config, &output)?;
            println!(
                "\n{}",
                format!("Markdown report saved to: {report_path}").bold()
            );
        }
    }

    Ok(())
}

/// Load all three inputs and classify every chapter.
///
/// Any input that cannot be read aborts before classification starts.
fn run(config: &Config) -> Result<Vec<ChapterAnalysis>> {
    let (war_terms, peace_terms) = load_term_lists(config)?;
    let book = sources::load_book(&config.book_path)?;

    let chapters = split_into_chapters(&book);
    if chapters.is_empty() {
        warn!(
            path = %config.book_path.display(),
            "No chapter markers found, nothing to classify"
        );
        eprintln!(
            "{} no \"CHAPTER <number>\" markers found in {}",
            "Warning:".yellow(),
            config.book_path.display()
        );
        return Ok(Vec::new());
    }

    info!(
        chapters = chapters.len(),
        constant = config.weights.constant,
        "Classifying chapters"
    );

    let pb = if chapters.len() >= PROGRESS_MIN_CHAPTERS {
        let pb = ProgressBar::new(chapters.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  Chapters [{bar:30}] {pos}/{len}")
        {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut analyses = Vec::with_capacity(chapters.len());
    for (i, text) in chapters.iter().enumerate() {
        analyses.push(classify_chapter(
            i + 1,
            text,
            &war_terms,
            &peace_terms,
            &config.weights,
        ));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(analyses)
}

fn load_term_lists(config: &Config) -> Result<(TermList, TermList)> {
    let war_terms = sources::load_terms(&config.war_terms_path, SourceKind::WarTerms)?;
    let peace_terms = sources::load_terms(&config.peace_terms_path, SourceKind::PeaceTerms)?;
    Ok((war_terms, peace_terms))
}

fn parse_constant_arg(raw: &str) -> Result<f64, String> {
    parse_constant(raw).map_err(|e| format!("{e:#}"))
}
