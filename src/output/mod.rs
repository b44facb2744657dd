mod formatter;

pub use formatter::{
    format_bar_chart, format_ranked_table, format_score, format_top_summary, format_tsv,
    should_use_colors,
};
