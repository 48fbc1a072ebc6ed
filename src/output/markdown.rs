// Markdown report — a shareable record of one classification run.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use super::format_density;
use super::terminal::{count_labels, format_result_line};
use crate::analysis::classifier::ChapterAnalysis;
use crate::config::Config;

/// Render the report as a Markdown string.
pub fn render_report(analyses: &[ChapterAnalysis], config: &Config) -> String {
    let mut md = String::new();
    let (war, peace) = count_labels(analyses);

    let _ = writeln!(md, "# Chapter Relation Report");
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "Generated {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(md);

    let _ = writeln!(md, "## Inputs");
    let _ = writeln!(md);
    let _ = writeln!(md, "- Book: `{}`", config.book_path.display());
    let _ = writeln!(md, "- War terms: `{}`", config.war_terms_path.display());
    let _ = writeln!(md, "- Peace terms: `{}`", config.peace_terms_path.display());
    let _ = writeln!(md, "- Relation constant: {}", config.weights.constant);
    let _ = writeln!(md);

    let _ = writeln!(md, "## Summary");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Relation | Chapters |");
    let _ = writeln!(md, "|----------|----------|");
    let _ = writeln!(md, "| War | {war} |");
    let _ = writeln!(md, "| Peace | {peace} |");
    let _ = writeln!(md, "| **Total** | **{}** |", analyses.len());
    let _ = writeln!(md);

    if analyses.is_empty() {
        let _ = writeln!(md, "No chapter markers were found in the book.");
        return md;
    }

    let _ = writeln!(md, "## Chapters");
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "| Chapter | Label | War count | War density | War score | Peace count | Peace density | Peace score |"
    );
    let _ = writeln!(
        md,
        "|---------|-------|-----------|-------------|-----------|-------------|---------------|-------------|"
    );
    for a in analyses {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            a.chapter_index,
            a.label,
            a.war.total,
            format_density(a.war.density),
            a.war.score,
            a.peace.total,
            format_density(a.peace.density),
            a.peace.score,
        );
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Results");
    let _ = writeln!(md);
    let _ = writeln!(md, "```");
    for a in analyses {
        let _ = writeln!(md, "{}", format_result_line(&a.result()));
    }
    let _ = writeln!(md, "```");

    md
}

/// Write the report to `output_path`, creating parent directories.
/// Returns the path written.
pub fn generate_report(
    analyses: &[ChapterAnalysis],
    config: &Config,
    output_path: &str,
) -> Result<String> {
    let path = Path::new(output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
    }

    std::fs::write(path, render_report(analyses, config))
        .with_context(|| format!("Failed to write report to {output_path}"))?;

    Ok(output_path.to_string())
}
