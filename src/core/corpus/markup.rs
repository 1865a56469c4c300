//! Field extraction from tagged corpus files.
//!
//! Corpus files hold any number of `<DOC>` elements:
//!
//! ```text
//! <DOC>
//!   <DOCID>LN-20020102001</DOCID>
//!   <TITLE>...</TITLE>
//!   <HEADING>...</HEADING>
//!   <TEXT>...</TEXT>
//! </DOC>
//! ```
//!
//! Topic files hold `<top>` elements with a `<num>DIR/NAME</num>` and an
//! optional `<query>` line. Only flat element text is needed, so elements
//! are located with regular expressions; nested tags inside a field are
//! stripped and character references are decoded.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::error::{Result, SiftError};
use crate::core::types::{Document, Topic};

// Regex patterns compiled once at startup
static DOC_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("DOC"));
static DOCID_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("DOCID"));
static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("TITLE"));
static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("HEADING"));
static TEXT_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("TEXT"));

static TOP_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("top"));
static NUM_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("num"));
static QUERY_PATTERN: Lazy<Regex> = Lazy::new(|| element_pattern("query"));

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>|<!--.*?-->|<[^>]*>").unwrap());
static ENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]+|#x[0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

/// Non-greedy match of `<name ...>body</name>`, capturing the body
fn element_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{name}(?:\s[^>]*)?>(.*?)</{name}\s*>")).unwrap()
}

/// Extract every document from the contents of one corpus file.
///
/// A `<DOC>` without a `<DOCID>` is skipped with a warning.
pub fn parse_documents(source: &str) -> Vec<Document> {
    DOC_PATTERN
        .captures_iter(source)
        .filter_map(|doc| {
            let body = &doc[1];

            let id = match first_text(&DOCID_PATTERN, body) {
                Some(id) if !id.is_empty() => id,
                _ => {
                    tracing::warn!("Skipping <DOC> without a DOCID");
                    return None;
                }
            };

            Some(Document {
                id,
                titles: all_text(&TITLE_PATTERN, body),
                headings: all_text(&HEADING_PATTERN, body),
                texts: all_text(&TEXT_PATTERN, body),
            })
        })
        .collect()
}

/// Extract every topic carrying a query from a topic file.
///
/// Topics without a `<query>` are skipped silently. A topic whose number
/// lacks the `DIR/NAME` form is reported as an error entry so the caller
/// can log it and continue.
pub fn parse_topics(source: &str) -> Vec<Result<Topic>> {
    TOP_PATTERN
        .captures_iter(source)
        .filter_map(|top| {
            let body = &top[1];
            let query = first_text(&QUERY_PATTERN, body)?;
            let num = first_text(&NUM_PATTERN, body).unwrap_or_default();
            Some(split_topic_number(&num).map(|(output_dir, name)| Topic {
                output_dir,
                name,
                query,
            }))
        })
        .collect()
}

/// Split `DIR/NAME[/...]` into its first two segments
fn split_topic_number(num: &str) -> Result<(String, String)> {
    let mut parts = num.split('/');
    match (parts.next(), parts.next()) {
        (Some(dir), Some(name)) if !name.is_empty() => Ok((dir.to_string(), name.to_string())),
        _ => Err(SiftError::InvalidTopic(format!(
            "Topic number {num:?} is not of the form DIR/NAME"
        ))),
    }
}

/// Trimmed text of the first matching element
fn first_text(pattern: &Regex, body: &str) -> Option<String> {
    pattern
        .captures(body)
        .map(|c| element_text(&c[1]).trim().to_string())
}

/// Text of every matching element, in document order
fn all_text(pattern: &Regex, body: &str) -> Vec<String> {
    pattern
        .captures_iter(body)
        .map(|c| element_text(&c[1]))
        .collect()
}

/// Strip nested markup and decode character references
pub fn element_text(raw: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(raw, |caps: &Captures| {
        // CDATA content is literal text
        caps.get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    });
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => name
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| name.strip_prefix('#').map(|dec| dec.parse::<u32>()))
                    .and_then(|code| code.ok())
                    .and_then(char::from_u32),
            };
            // Unknown references are kept verbatim
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
