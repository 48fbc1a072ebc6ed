// Chapter classification — the full per-chapter pipeline.
//
//   chapter text -> tokenize -> filter (war / peace) -> group + density
//                -> relation score per topic -> label
//
// Chapters are independent of each other; results come back in chapter
// order with 1-based indices.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::density::{density, is_defined};
use super::filter::filter_terms;
use super::grouping::{group_terms, term_frequencies, total_count, TermFrequency};
use super::relation::{relation_score, RelationWeights};
use crate::config::WORD_SEPARATOR;
use crate::sources::TermList;
use crate::text::chapters::split_into_chapters;
use crate::text::tokenizer::{tokenize, WordOccurrence};

/// Which topic a chapter leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    War,
    Peace,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::War => "war",
            Relation::Peace => "peace",
        }
    }

    /// War only when it strictly outscores peace; ties go to peace.
    pub fn from_scores(war_score: i64, peace_score: i64) -> Self {
        if war_score > peace_score {
            Relation::War
        } else {
            Relation::Peace
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One chapter's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub chapter_index: usize,
    pub label: Relation,
}

/// Everything computed for one topic within one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAnalysis {
    /// Per-term counts, in order of first appearance
    pub frequencies: Vec<TermFrequency>,
    /// Sum of all counts
    pub total: usize,
    /// Mean offset gap over all of the topic's occurrences, or -1.0
    pub density: f64,
    pub score: i64,
}

impl TopicAnalysis {
    fn from_occurrences(occurrences: &[WordOccurrence], weights: &RelationWeights) -> Self {
        let frequencies = term_frequencies(&group_terms(occurrences));
        // Density pools every term of the topic, not one term at a time.
        let density = density(occurrences);
        let score = relation_score(&frequencies, density, weights);
        Self {
            total: total_count(&frequencies),
            frequencies,
            density,
            score,
        }
    }

    pub fn density_defined(&self) -> bool {
        is_defined(self.density)
    }
}

/// Full analysis of one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterAnalysis {
    /// 1-based position of the chapter in the book
    pub chapter_index: usize,
    pub war: TopicAnalysis,
    pub peace: TopicAnalysis,
    pub label: Relation,
}

impl ChapterAnalysis {
    pub fn result(&self) -> ClassificationResult {
        ClassificationResult {
            chapter_index: self.chapter_index,
            label: self.label,
        }
    }
}

/// Classify a single chapter's text.
pub fn classify_chapter(
    chapter_index: usize,
    text: &str,
    war_terms: &TermList,
    peace_terms: &TermList,
    weights: &RelationWeights,
) -> ChapterAnalysis {
    let words: Vec<WordOccurrence> = tokenize(text, WORD_SEPARATOR).collect();

    let war = TopicAnalysis::from_occurrences(&filter_terms(&words, war_terms), weights);
    let peace = TopicAnalysis::from_occurrences(&filter_terms(&words, peace_terms), weights);
    let label = Relation::from_scores(war.score, peace.score);

    debug!(
        chapter = chapter_index,
        words = words.len(),
        war_count = war.total,
        war_density = war.density,
        war_score = war.score,
        peace_count = peace.total,
        peace_density = peace.density,
        peace_score = peace.score,
        label = %label,
        "Classified chapter"
    );

    ChapterAnalysis {
        chapter_index,
        war,
        peace,
        label,
    }
}

/// Classify already-split chapters, numbering them from 1.
pub fn classify_chapters(
    chapters: &[&str],
    war_terms: &TermList,
    peace_terms: &TermList,
    weights: &RelationWeights,
) -> Vec<ChapterAnalysis> {
    chapters
        .iter()
        .enumerate()
        .map(|(i, text)| classify_chapter(i + 1, text, war_terms, peace_terms, weights))
        .collect()
}

/// Split a book into chapters and classify each one.
pub fn classify_book(
    book: &str,
    war_terms: &TermList,
    peace_terms: &TermList,
    weights: &RelationWeights,
) -> Vec<ChapterAnalysis> {
    classify_chapters(&split_into_chapters(book), war_terms, peace_terms, weights)
}
