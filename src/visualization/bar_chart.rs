//! Horizontal bar chart of recommendations
//!
//! Every song gets the same placeholder influence score, so the chart is
//! mostly a labelled list. Bars are drawn top to bottom in reply order.

use crate::core::constants::chart::{BAR_COLOR, LABEL_MAX_CHARS, PLACEHOLDER_SCORE, X_LABEL};
use crate::visualization::escape_xml;
use std::fmt::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 190.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Fraction of each row occupied by its bar
const BAR_FILL: f64 = 0.8;

/// Headroom added beyond the longest bar
const AXIS_HEADROOM: f64 = 1.05;

/// Bar label for a recommendation line: its first 20 characters
pub fn bar_label(line: &str) -> String {
    line.chars().take(LABEL_MAX_CHARS).collect()
}

/// Render the recommendation bar chart as an SVG document
///
/// Empty lines are skipped. The title embeds the raw mood text.
pub fn render_bar_chart(mood: &str, lines: &[String]) -> String {
    let labels: Vec<String> = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| bar_label(line))
        .collect();

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let x_max = f64::from(PLACEHOLDER_SCORE) * AXIS_HEADROOM;
    let scale = plot_width / x_max;
    let axis_bottom = MARGIN_TOP + plot_height;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = write!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="30" font-size="16" text-anchor="middle">Songs Recommended for Mood: {}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        escape_xml(mood)
    );

    if !labels.is_empty() {
        let row = plot_height / labels.len() as f64;
        let bar_height = row * BAR_FILL;
        let bar_width = f64::from(PLACEHOLDER_SCORE) * scale;

        for (i, label) in labels.iter().enumerate() {
            let y = MARGIN_TOP + row * i as f64 + (row - bar_height) / 2.0;
            let _ = write!(
                svg,
                r#"<rect x="{MARGIN_LEFT}" y="{y:.1}" width="{bar_width:.1}" height="{bar_height:.1}" fill="{BAR_COLOR}"/>"#
            );
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                MARGIN_LEFT - 8.0,
                y + bar_height / 2.0,
                escape_xml(label)
            );
        }
    }

    // Axes
    let _ = write!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{axis_bottom}" stroke="black"/>"#
    );
    let _ = write!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{axis_bottom}" x2="{:.1}" y2="{axis_bottom}" stroke="black"/>"#,
        MARGIN_LEFT + plot_width
    );

    for tick in 0..=PLACEHOLDER_SCORE {
        let x = MARGIN_LEFT + f64::from(tick) * scale;
        let _ = write!(
            svg,
            r#"<line x1="{x:.1}" y1="{axis_bottom}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
            axis_bottom + 5.0
        );
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" font-size="12" text-anchor="middle">{tick}</text>"#,
            axis_bottom + 20.0
        );
    }

    let _ = write!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle">{X_LABEL}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 20.0
    );
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bar_label_truncates_long_lines() {
        let line = "1. Bohemian Rhapsody - Queen";
        assert_eq!(bar_label(line), "1. Bohemian Rhapsody");
        assert_eq!(bar_label(line).chars().count(), 20);
    }

    #[test]
    fn test_bar_label_keeps_short_lines() {
        assert_eq!(bar_label("Yesterday"), "Yesterday");
        assert_eq!(bar_label("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(bar_label(""), "");
    }

    #[test]
    fn test_bar_label_counts_characters_not_bytes() {
        let line = "Ünïcödé sóng títlé wîth áccents";
        let label = bar_label(line);
        assert_eq!(label.chars().count(), 20);
        assert!(line.starts_with(&label));
    }

    #[test]
    fn test_one_bar_per_non_empty_line() {
        let svg = render_bar_chart("happy", &lines(&["Song A", "", "Song B", "Song C"]));
        assert_eq!(svg.matches(&format!(r#"fill="{BAR_COLOR}""#)).count(), 3);
        assert!(svg.contains(">Song A</text>"));
        assert!(svg.contains(">Song C</text>"));
        assert!(svg.contains("Songs Recommended for Mood: happy"));
        assert!(svg.contains(X_LABEL));
    }

    #[test]
    fn test_bars_share_the_placeholder_length() {
        let svg = render_bar_chart("calm", &lines(&["A", "B"]));
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let expected = format!(r#"width="{:.1}""#, plot_width / AXIS_HEADROOM);
        assert_eq!(svg.matches(&expected).count(), 2);
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = render_bar_chart("<angry> & loud", &lines(&["Rock & Roll <live>"]));
        assert!(svg.contains("&lt;angry&gt; &amp; loud"));
        assert!(svg.contains("Rock &amp; Roll &lt;li"));
        assert!(!svg.contains("<angry>"));
    }

    #[test]
    fn test_no_lines_renders_empty_axes() {
        let svg = render_bar_chart("blue", &[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains(BAR_COLOR));
    }
}
