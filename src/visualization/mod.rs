//! SVG renderers for the mood word cloud and the recommendation bar chart

pub mod bar_chart;
pub mod word_cloud;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub use bar_chart::render_bar_chart;
pub use word_cloud::render_word_cloud;

/// Escape text for use inside XML/HTML content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encode an SVG document as a `data:` URI usable in an `<img src>`
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_svg_data_uri() {
        let uri = svg_data_uri("<svg/>");
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
