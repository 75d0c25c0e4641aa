//! Word cloud of the mood text
//!
//! Tokenization mirrors the usual word-cloud defaults: words of two or more
//! word characters, possessive `'s` removed, English stopwords and bare
//! numbers dropped, case variants and simple plurals merged. Layout is
//! deterministic: words are placed largest first along a spiral starting at
//! the canvas centre.

use crate::visualization::escape_xml;
use std::collections::HashMap;
use std::fmt::Write;

const WIDTH: f64 = 500.0;
const HEIGHT: f64 = 300.0;
const MAX_WORDS: usize = 200;
const MAX_FONT_SIZE: f64 = 90.0;
const MIN_FONT_SIZE: f64 = 8.0;
const RELATIVE_SCALING: f64 = 0.5;

/// Approximate glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Spiral positions tried per font size before shrinking the word
const SPIRAL_STEPS: usize = 2000;

/// Viridis samples, dark to light
const PALETTE: [&str; 8] = [
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#a0da39", "#fde725",
];

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers",
    "herself", "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "since", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "therefore", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// A word and its (merged) occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside_canvas(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= WIDTH && self.y + self.h <= HEIGHT
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into candidate words
///
/// A word starts with a word character and continues with word characters
/// or apostrophes; single-character words are discarded.
fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_word_char(c) || (c == '\'' && !current.is_empty()) {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.retain(|word| word.chars().count() >= 2);
    words
}

/// Count words in the mood text, most frequent first
pub fn word_frequencies(text: &str) -> Vec<WordCount> {
    // lowercase form -> (spelling counts in first-seen order, first position)
    let mut variants: HashMap<String, (Vec<(String, usize)>, usize)> = HashMap::new();

    for (position, token) in tokenize(text).into_iter().enumerate() {
        let word = if token.to_lowercase().ends_with("'s") {
            token[..token.len() - 2].to_string()
        } else {
            token
        };
        let lower = word.to_lowercase();
        if word.is_empty()
            || word.chars().all(|c| c.is_ascii_digit())
            || STOPWORDS.contains(&lower.as_str())
        {
            continue;
        }

        let entry = variants.entry(lower).or_insert_with(|| (Vec::new(), position));
        match entry.0.iter_mut().find(|(spelling, _)| *spelling == word) {
            Some((_, count)) => *count += 1,
            None => entry.0.push((word, 1)),
        }
    }

    // Fold plurals into their singular when both appear
    let plurals: Vec<String> = variants
        .keys()
        .filter(|key| key.ends_with('s') && !key.ends_with("ss"))
        .filter(|key| variants.contains_key(&key[..key.len() - 1]))
        .cloned()
        .collect();
    for plural in plurals {
        if let Some((spellings, _)) = variants.remove(&plural) {
            if let Some(singular) = variants.get_mut(&plural[..plural.len() - 1]) {
                let extra: usize = spellings.iter().map(|(_, count)| count).sum();
                if let Some(first) = singular.0.first_mut() {
                    first.1 += extra;
                }
            }
        }
    }

    let mut counts: Vec<(WordCount, usize)> = variants
        .into_values()
        .map(|(spellings, position)| {
            let total = spellings.iter().map(|(_, count)| count).sum();
            let mut best = &spellings[0];
            for candidate in &spellings[1..] {
                if candidate.1 > best.1 {
                    best = candidate;
                }
            }
            (
                WordCount {
                    word: best.0.clone(),
                    count: total,
                },
                position,
            )
        })
        .collect();

    counts.sort_by(|a, b| b.0.count.cmp(&a.0.count).then(a.1.cmp(&b.1)));
    counts.truncate(MAX_WORDS);
    counts.into_iter().map(|(word, _)| word).collect()
}

fn text_box(word: &str, font_size: f64, cx: f64, cy: f64) -> Rect {
    let w = word.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO;
    let h = font_size;
    Rect {
        x: cx - w / 2.0,
        y: cy - h / 2.0,
        w,
        h,
    }
}

/// Find a free spot on the spiral for a word at the given size
fn place(word: &str, font_size: f64, placed: &[Rect]) -> Option<Rect> {
    for step in 0..SPIRAL_STEPS {
        let theta = step as f64 * 0.1;
        let radius = 1.5 * theta;
        let cx = WIDTH / 2.0 + radius * theta.cos() * (WIDTH / HEIGHT);
        let cy = HEIGHT / 2.0 + radius * theta.sin();
        let candidate = text_box(word, font_size, cx, cy);
        if candidate.inside_canvas() && placed.iter().all(|rect| !rect.intersects(&candidate)) {
            return Some(candidate);
        }
    }
    None
}

/// Render the mood text as a word cloud SVG on a white canvas
pub fn render_word_cloud(mood: &str) -> String {
    let frequencies = word_frequencies(mood);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = write!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    let max_count = frequencies.first().map(|w| w.count).unwrap_or(1) as f64;
    let mut placed: Vec<Rect> = Vec::new();

    for (index, entry) in frequencies.iter().enumerate() {
        let relative = entry.count as f64 / max_count;
        let mut font_size =
            MAX_FONT_SIZE * (RELATIVE_SCALING * relative + (1.0 - RELATIVE_SCALING));

        let slot = loop {
            if font_size < MIN_FONT_SIZE {
                break None;
            }
            if let Some(rect) = place(&entry.word, font_size, &placed) {
                break Some(rect);
            }
            font_size *= 0.9;
        };

        let Some(rect) = slot else {
            continue;
        };
        placed.push(rect);

        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            rect.x + rect.w / 2.0,
            rect.y + rect.h / 2.0,
            font_size,
            PALETTE[index % PALETTE.len()],
            escape_xml(&entry.word)
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<(String, usize)> {
        word_frequencies(text)
            .into_iter()
            .map(|w| (w.word, w.count))
            .collect()
    }

    #[test]
    fn test_stopwords_and_short_words_are_dropped() {
        assert_eq!(
            words("I am feeling a bit tired and sad"),
            vec![
                ("feeling".to_string(), 1),
                ("bit".to_string(), 1),
                ("tired".to_string(), 1),
                ("sad".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_counts_sort_most_frequent_first() {
        let result = words("calm rain, calm night, Calm sea");
        assert_eq!(result[0], ("calm".to_string(), 3));
        assert_eq!(result[1], ("rain".to_string(), 1));
    }

    #[test]
    fn test_possessive_and_numbers() {
        assert_eq!(
            words("Friday's vibe 2024"),
            vec![("Friday".to_string(), 1), ("vibe".to_string(), 1)]
        );
    }

    #[test]
    fn test_plurals_merge_into_singular() {
        assert_eq!(words("dream dreams"), vec![("dream".to_string(), 2)]);
        assert_eq!(words("glass"), vec![("glass".to_string(), 1)]);
    }

    #[test]
    fn test_contractions_are_stopwords() {
        assert_eq!(words("I'm happy"), vec![("happy".to_string(), 1)]);
    }

    #[test]
    fn test_render_contains_words() {
        let svg = render_word_cloud("happy energetic sunny happy");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"fill="white""#));
        assert!(svg.contains(">happy</text>"));
        assert!(svg.contains(">energetic</text>"));
        assert!(svg.contains(">sunny</text>"));
    }

    #[test]
    fn test_render_escapes_words() {
        let svg = render_word_cloud("rock'n'roll");
        assert!(svg.contains(">rock&#39;n&#39;roll</text>"));
    }

    #[test]
    fn test_render_without_words_is_blank_canvas() {
        let svg = render_word_cloud("a an the");
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mood = "restless curious hopeful restless wandering";
        assert_eq!(render_word_cloud(mood), render_word_cloud(mood));
    }

    #[test]
    fn test_placed_words_do_not_overlap() {
        let frequencies = word_frequencies("one two three four five six seven eight nine ten");
        let mut placed = Vec::new();
        for entry in &frequencies {
            if let Some(rect) = place(&entry.word, 20.0, &placed) {
                assert!(rect.inside_canvas());
                placed.push(rect);
            }
        }
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }
}
