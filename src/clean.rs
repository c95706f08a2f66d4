//! Deterministic text cleaning for the processed table: case folding,
//! pattern stripping, stop-word removal, and noun lemmatization.
//!
//! The whole pipeline is a fixed point: running `clean_text` on its own
//! output returns it unchanged.

use regex::Regex;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Standard English stop-word list (NLTK's set). Contraction entries keep
/// their apostrophes even though punctuation stripping runs first; they are
/// inert there but keep the table equal to the reference list.
const STOP_WORDS_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Irregular plurals plus -s nouns that must not lose their ending.
const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("politics", "politics"),
    ("economics", "economics"),
    ("ethics", "ethics"),
];

fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| STOP_WORDS_LIST.iter().copied().collect())
}

fn lemma_exceptions() -> &'static HashMap<&'static str, &'static str> {
    static EXCEPTIONS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    EXCEPTIONS.get_or_init(|| LEMMA_EXCEPTIONS.iter().copied().collect())
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid url regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S*@\S*\s?").expect("valid email regex"))
}

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\w+").expect("valid hashtag regex"))
}

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+").expect("valid mention regex"))
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("valid digits regex"))
}

fn punct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"))
}

fn spaces_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Reduce a lowercase token to its dictionary form for nouns: irregulars via
/// the exception table, then plural-suffix detachment. Verb inflection is
/// deliberately untouched ("running" stays "running").
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = lemma_exceptions().get(token) {
        return (*lemma).to_string();
    }
    if token.len() <= 3 {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if token.len() > 4 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = token.strip_suffix("ches").or_else(|| token.strip_suffix("shes")) {
        let kept = &token[..stem.len() + 2];
        return kept.to_string();
    }
    for (suffix, replacement) in [("sses", "ss"), ("xes", "x"), ("zes", "z")] {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    if let Some(stem) = token.strip_suffix("men") {
        return format!("{stem}man");
    }
    if token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

/// Normalize one row's text content.
///
/// Steps, in order: lowercase; strip URLs, email-like tokens, hashtags,
/// mentions, and digit runs; drop remaining punctuation; collapse
/// whitespace; tokenize; drop stop words; lemmatize; rejoin with single
/// spaces. An empty result means the row carried no usable signal.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();

    let text = url_re().replace_all(&text, "");
    let text = email_re().replace_all(&text, "");
    let text = hashtag_re().replace_all(&text, "");
    let text = mention_re().replace_all(&text, "");
    let text = digits_re().replace_all(&text, "");
    let text = punct_re().replace_all(&text, "");
    let text = spaces_re().replace_all(&text, " ");
    let text = text.trim();

    let stop = stop_words();
    let tokens: Vec<String> = text
        .split_whitespace()
        .filter(|tok| !stop.contains(tok))
        .map(lemmatize)
        .collect();

    tokens.join(" ")
}
