use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::relation::{RelationWeights, DEFAULT_RELATION_CONSTANT};

/// Chapters are tokenized on single spaces.
pub const WORD_SEPARATOR: char = ' ';

pub const DEFAULT_WAR_TERMS_PATH: &str = "./data/war_terms.txt";
pub const DEFAULT_PEACE_TERMS_PATH: &str = "./data/peace_terms.txt";
pub const DEFAULT_BOOK_PATH: &str = "./data/book.txt";

pub const ENV_WAR_TERMS: &str = "CHAPTER_RELATION_WAR_TERMS";
pub const ENV_PEACE_TERMS: &str = "CHAPTER_RELATION_PEACE_TERMS";
pub const ENV_BOOK: &str = "CHAPTER_RELATION_BOOK";
pub const ENV_RELATION_CONSTANT: &str = "CHAPTER_RELATION_CONSTANT";

/// Input locations and scoring parameters.
///
/// Every value has a fixed default. Environment variables (a .env file is
/// loaded at startup via dotenvy) override the defaults, and command-line
/// flags override the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub war_terms_path: PathBuf,
    pub peace_terms_path: PathBuf,
    pub book_path: PathBuf,
    pub weights: RelationWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            war_terms_path: PathBuf::from(DEFAULT_WAR_TERMS_PATH),
            peace_terms_path: PathBuf::from(DEFAULT_PEACE_TERMS_PATH),
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            weights: RelationWeights::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        let constant = match lookup(ENV_RELATION_CONSTANT) {
            Some(raw) if !raw.trim().is_empty() => parse_constant(&raw)
                .with_context(|| format!("Invalid {ENV_RELATION_CONSTANT}"))?,
            _ => DEFAULT_RELATION_CONSTANT,
        };

        Ok(Self {
            war_terms_path: path(ENV_WAR_TERMS, DEFAULT_WAR_TERMS_PATH),
            peace_terms_path: path(ENV_PEACE_TERMS, DEFAULT_PEACE_TERMS_PATH),
            book_path: path(ENV_BOOK, DEFAULT_BOOK_PATH),
            weights: RelationWeights::with_constant(constant),
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        war_terms: Option<PathBuf>,
        peace_terms: Option<PathBuf>,
        book: Option<PathBuf>,
        constant: Option<f64>,
    ) -> Self {
        if let Some(p) = war_terms {
            self.war_terms_path = p;
        }
        if let Some(p) = peace_terms {
            self.peace_terms_path = p;
        }
        if let Some(p) = book {
            self.book_path = p;
        }
        if let Some(k) = constant {
            self.weights = RelationWeights::with_constant(k);
        }
        self
    }
}

/// Parse a relation constant. Must be a finite number.
pub fn parse_constant(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a number", raw.trim()))?;
    if !value.is_finite() {
        anyhow::bail!("relation constant must be finite, got {value}");
    }
    Ok(value)
}
