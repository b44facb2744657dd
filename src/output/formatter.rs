use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{RankedOrganization, ScoringProfile};

const BAR_WIDTH: usize = 24;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a dissatisfaction score. Four decimals, matching the precision
/// the scores are meaningful at (squared gaps of 0..1 values).
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the full ranking as a table.
///
/// Columns: rank, score, name, then one column per profile attribute in
/// profile order. Names are truncated on narrow terminals; attribute
/// columns are never dropped since they are the point of the table.
pub fn format_ranked_table(
    ranked: &[RankedOrganization],
    profile: &ScoringProfile,
    use_colors: bool,
) -> String {
    if ranked.is_empty() {
        return "No organizations in dataset.".to_string();
    }

    let score_width = "score".len().max(6);
    let name_budget = match get_terminal_width() {
        // rank(3) + score + attribute columns, two spaces between columns
        Some(width) => {
            let fixed: usize = 4
                + score_width
                + 2
                + profile
                    .attributes
                    .iter()
                    .map(|a| a.chars().count().max(4) + 2)
                    .sum::<usize>();
            width.saturating_sub(fixed).clamp(8, 40)
        }
        None => usize::MAX,
    };

    let name_width = ranked
        .iter()
        .map(|r| truncate_name(&r.organization.name, name_budget).chars().count())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(4);

    let mut lines = Vec::with_capacity(ranked.len() + 1);

    let mut header = format!(
        "{:>3} {:>score_width$}  {:<name_width$}",
        "#", "score", "name"
    );
    for attribute in &profile.attributes {
        header.push_str(&format!("  {:>width$}", attribute, width = attribute.chars().count().max(4)));
    }
    if use_colors {
        lines.push(header.dimmed().to_string());
    } else {
        lines.push(header);
    }

    for entry in ranked {
        let name = truncate_name(&entry.organization.name, name_budget);
        // Pad before colorizing so ANSI codes don't skew the columns
        let rank_str = format!("{:>3}", format!("{}.", entry.rank));
        let score_str = format!("{:>score_width$}", format_score(entry.score));
        let name_str = format!("{:<name_width$}", name);
        let mut line = if use_colors {
            format!("{} {}  {}", rank_str.dimmed(), score_str.bold(), name_str)
        } else {
            format!("{} {}  {}", rank_str, score_str, name_str)
        };
        for attribute in &profile.attributes {
            let width = attribute.chars().count().max(4);
            match entry.organization.attribute(attribute) {
                Some(value) => line.push_str(&format!("  {:>width$.2}", value)),
                None => line.push_str(&format!("  {:>width$}", "-")),
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Format the best-match panel: winner, score, and highlight notes.
pub fn format_top_summary(
    top: &RankedOrganization,
    highlights: &[String],
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("Best match: {}", top.organization.name.bold()));
        lines.push(format!(
            "Dissatisfaction score: {} (closer to 0 is better)",
            format_score(top.score).bold()
        ));
    } else {
        lines.push(format!("Best match: {}", top.organization.name));
        lines.push(format!(
            "Dissatisfaction score: {} (closer to 0 is better)",
            format_score(top.score)
        ));
    }

    lines.push(String::new());
    lines.push("Why it fits:".to_string());
    for note in highlights {
        lines.push(format!("  - {}", note));
    }

    lines.join("\n")
}

/// Per-attribute bar chart for one organization's values.
pub fn format_bar_chart(
    org: &RankedOrganization,
    profile: &ScoringProfile,
    use_colors: bool,
) -> String {
    let label_width = profile
        .attributes
        .iter()
        .map(|a| a.chars().count())
        .max()
        .unwrap_or(0);

    profile
        .attributes
        .iter()
        .map(|attribute| {
            let value = org.organization.attribute(attribute).unwrap_or(0.0);
            let filled = (value * BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
            if use_colors {
                format!(
                    "{:<label_width$}  {}  {:.2}",
                    attribute,
                    bar.cyan(),
                    value
                )
            } else {
                format!("{:<label_width$}  {}  {:.2}", attribute, bar, value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the ranking as tab-separated values for scripting
/// Columns: rank, score, name, attribute values (no headers, no colors)
pub fn format_tsv(ranked: &[RankedOrganization], profile: &ScoringProfile) -> String {
    if ranked.is_empty() {
        return String::new();
    }

    ranked
        .iter()
        .map(|entry| {
            let mut fields = vec![
                entry.rank.to_string(),
                format_score(entry.score),
                entry.organization.name.clone(),
            ];
            for attribute in &profile.attributes {
                match entry.organization.attribute(attribute) {
                    Some(value) => fields.push(format!("{:.2}", value)),
                    None => fields.push(String::new()),
                }
            }
            fields.join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
