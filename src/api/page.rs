//! Server-rendered HTML page

use crate::api::view::{RecommendationView, ViewStatus};
use crate::core::constants::text;
use crate::visualization::{escape_xml, svg_data_uri};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;max-width:820px;margin:2rem auto;padding:0 1rem}\
.error{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:.4rem}\
.warning{background:#fdf6b2;color:#723b13;padding:.75rem;border-radius:.4rem}\
.success{background:#def7ec;color:#03543f;padding:.75rem;border-radius:.4rem}\
input[type=text]{width:100%;padding:.5rem;font-size:1rem;box-sizing:border-box}\
button{margin-top:.75rem;padding:.5rem 1rem;font-size:1rem}\
img{max-width:100%}";

/// Render the full page, optionally with the outcome of a submission
pub fn render_page(api_key_configured: bool, view: Option<&RecommendationView>) -> String {
    let mood = view.map(|v| v.mood.as_str()).unwrap_or("");

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{title}</title><style>{STYLE}</style></head><body>\
         <h1>{title}</h1><p>{subtitle}</p>",
        title = escape_xml(text::TITLE),
        subtitle = escape_xml(text::SUBTITLE),
    );

    if !api_key_configured {
        notice(&mut html, "error", text::MISSING_API_KEY);
    }

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/\"><label for=\"mood\">{prompt}</label>\
         <input type=\"text\" id=\"mood\" name=\"mood\" value=\"{mood}\">\
         <button type=\"submit\">{button}</button></form>",
        prompt = escape_xml(text::MOOD_PROMPT),
        mood = escape_xml(mood),
        button = escape_xml(text::BUTTON),
    );

    if let Some(view) = view {
        render_view(&mut html, view);
    }

    html.push_str("</body></html>");
    html
}

fn notice(html: &mut String, class: &str, message: &str) {
    let _ = write!(html, "<p class=\"{class}\">{}</p>", escape_xml(message));
}

fn render_view(html: &mut String, view: &RecommendationView) {
    match view.status {
        ViewStatus::EmptyMood | ViewStatus::NoRecommendations => {
            for message in &view.messages {
                notice(html, "warning", message);
            }
        }
        ViewStatus::Error => {
            for message in &view.messages {
                notice(html, "error", message);
            }
        }
        ViewStatus::Success => {
            notice(html, "success", text::SONGS_HEADER);
            html.push_str("<ul>");
            for song in &view.recommendations {
                let _ = write!(html, "<li>{}</li>", escape_xml(song));
            }
            html.push_str("</ul>");

            if let Some(svg) = &view.word_cloud_svg {
                image(html, text::WORD_CLOUD_HEADER, svg);
            }
            if let Some(svg) = &view.bar_chart_svg {
                image(html, text::BAR_CHART_HEADER, svg);
            }
        }
    }
}

fn image(html: &mut String, heading: &str, svg: &str) {
    let _ = write!(
        html,
        "<h2>{}</h2><img alt=\"{}\" src=\"{}\">",
        escape_xml(heading),
        escape_xml(heading),
        svg_data_uri(svg)
    );
}
