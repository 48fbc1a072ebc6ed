// Terminal output for classification results and term lists.
//
// The per-chapter result lines are plain text so they can be piped and
// compared. Colors are only used in the optional detail table and summary.

use colored::Colorize;

use crate::analysis::classifier::{ChapterAnalysis, ClassificationResult, Relation};
use crate::sources::TermList;

/// The canonical result line: `Chapter <index>: <war|peace>-related`.
pub fn format_result_line(result: &ClassificationResult) -> String {
    format!("Chapter {}: {}-related", result.chapter_index, result.label)
}

/// Print one result line per chapter, in chapter order.
pub fn display_results(analyses: &[ChapterAnalysis]) {
    for analysis in analyses {
        println!("{}", format_result_line(&analysis.result()));
    }
}

/// Print a table of counts, densities and scores for every chapter.
pub fn display_details(analyses: &[ChapterAnalysis]) {
    if analyses.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("=== Chapter Details ({} chapters) ===", analyses.len()).bold()
    );
    println!();
    println!(
        "  {:>7}  {:<6}  {:>6} {:>9} {:>7}  {:>6} {:>9} {:>7}",
        "Chapter".dimmed(),
        "Label".dimmed(),
        "War".dimmed(),
        "Density".dimmed(),
        "Score".dimmed(),
        "Peace".dimmed(),
        "Density".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for a in analyses {
        println!(
            "  {:>7}  {:<6}  {:>6} {:>9} {:>7}  {:>6} {:>9} {:>7}",
            a.chapter_index,
            colorize_relation(a.label),
            a.war.total,
            super::format_density(a.war.density),
            a.war.score,
            a.peace.total,
            super::format_density(a.peace.density),
            a.peace.score,
        );
    }
}

/// Print how many chapters ended up on each side.
pub fn display_summary(analyses: &[ChapterAnalysis]) {
    let (war, peace) = count_labels(analyses);
    println!();
    println!(
        "  {} war-related, {} peace-related ({} chapters)",
        war.to_string().red().bold(),
        peace.to_string().green().bold(),
        analyses.len()
    );
}

/// Print both term lists in load order.
pub fn display_terms(war_terms: &TermList, peace_terms: &TermList) {
    for (title, list) in [("War terms", war_terms), ("Peace terms", peace_terms)] {
        println!(
            "\n{}",
            format!(
                "=== {title} ({} entries, {} unique) ===",
                list.len(),
                list.unique_len()
            )
            .bold()
        );
        for term in list.terms() {
            println!("  {term}");
        }
    }
}

/// Number of (war, peace) labelled chapters.
pub fn count_labels(analyses: &[ChapterAnalysis]) -> (usize, usize) {
    let war = analyses
        .iter()
        .filter(|a| a.label == Relation::War)
        .count();
    (war, analyses.len() - war)
}

fn colorize_relation(relation: Relation) -> colored::ColoredString {
    match relation {
        Relation::War => relation.as_str().red().bold(),
        Relation::Peace => relation.as_str().green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_line_format() {
        let war = ClassificationResult {
            chapter_index: 1,
            label: Relation::War,
        };
        let peace = ClassificationResult {
            chapter_index: 12,
            label: Relation::Peace,
        };
        assert_eq!(format_result_line(&war), "Chapter 1: war-related");
        assert_eq!(format_result_line(&peace), "Chapter 12: peace-related");
    }
}
