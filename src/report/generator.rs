//! Statistics report generation.
//!
//! This module turns aggregator output into Markdown or JSON reports.

use crate::analysis::{author_summaries, blog_stats};
use crate::models::{
    author_label, AuthorSummary, BlogRecord, BlogStats, ReportMetadata, StatsReport,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

/// Build a report over a blog snapshot.
///
/// Authors are ranked by blog count, then by likes; equal authors keep
/// their first-seen order. Only the first `top_authors` are kept.
pub fn build_report(source: &str, blogs: &[BlogRecord], top_authors: usize) -> StatsReport {
    let mut authors = author_summaries(blogs);
    authors.sort_by(|a, b| b.blogs.cmp(&a.blogs).then_with(|| b.likes.cmp(&a.likes)));
    authors.truncate(top_authors);

    StatsReport {
        metadata: ReportMetadata {
            source: source.to_string(),
            generated_at: Utc::now(),
        },
        stats: blog_stats(blogs),
        authors,
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &StatsReport) -> String {
    let mut output = String::new();

    output.push_str("# Blog List Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_summary_section(&report.stats));
    output.push_str(&generate_authors_section(&report.authors));
    output.push_str(&generate_footer());

    output
}

fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    section
}

fn generate_summary_section(stats: &BlogStats) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str("| Blogs | Total Likes |\n");
    section.push_str("|:---:|:---:|\n");
    section.push_str(&format!("| {} | {} |\n\n", stats.blog_count, stats.total_likes));

    if stats.blog_count == 0 {
        section.push_str("No blogs to summarize.\n\n");
        return section;
    }

    if let Some(ref favorite) = stats.favorite_blog {
        section.push_str("### Favorite Blog\n\n");
        section.push_str(&format!(
            "**{}** by {} ({} likes)\n\n<{}>\n\n",
            favorite.title,
            author_label(favorite.author.as_deref()),
            favorite.likes,
            favorite.url
        ));
    }

    if let Some(ref most) = stats.most_blogs {
        section.push_str(&format!(
            "- **Most blogs:** {} ({})\n",
            author_label(most.author.as_deref()),
            most.blogs
        ));
    }

    if let Some(ref most) = stats.most_likes {
        section.push_str(&format!(
            "- **Most likes:** {} ({})\n",
            author_label(most.author.as_deref()),
            most.likes
        ));
    }

    section.push('\n');
    section
}

fn generate_authors_section(authors: &[AuthorSummary]) -> String {
    if authors.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Authors\n\n");
    section.push_str("| Author | Blogs | Likes |\n");
    section.push_str("|:---|:---:|:---:|\n");

    for author in authors {
        section.push_str(&format!(
            "| {} | {} | {} |\n",
            author_label(author.author.as_deref()),
            author.blogs,
            author.likes
        ));
    }
    section.push('\n');

    section
}

fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by bloglist v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &StatsReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
