// src/services/reply_parser.rs
//! Splits a model reply into the answer and its trailing reference list.
//!
//! The reply is expected to look like
//!
//! ```text
//! <answer text>
//! References:
//! Title one - https://one.example
//! Title two - https://two.example
//! ```
//!
//! Parsing is total: anything that does not fit the shape just yields fewer
//! (or no) references.

use crate::message::Reference;

pub const REFERENCES_MARKER: &str = "References:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub answer: String,
    pub references: Vec<Reference>,
    /// Whether the reply contained a references section at all.
    pub has_marker: bool,
}

pub fn parse(raw: &str) -> ParsedReply {
    let mut parts = raw.splitn(2, REFERENCES_MARKER);
    // splitn always yields at least one item
    let answer = parts.next().unwrap_or(raw).trim().to_string();

    let block = parts.next();
    let has_marker = block.is_some();
    let references = block
        .map(|block| block.trim().lines().filter_map(parse_line).collect())
        .unwrap_or_default();

    ParsedReply {
        answer,
        references,
        has_marker,
    }
}

/// `Title - url` with the split on the first `-` only. Lines without a `-`
/// are dropped.
fn parse_line(line: &str) -> Option<Reference> {
    let (title, url) = line.split_once('-')?;
    Some(Reference {
        title: title.trim().to_string(),
        url: url.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(title: &str, url: &str) -> Reference {
        Reference {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn splits_answer_and_references() {
        let raw = "Paris is the capital.\nReferences:\nWikipedia - https://en.wikipedia.org/wiki/Paris\nEncyclopedia - https://example.com/paris";
        let parsed = parse(raw);
        assert_eq!(parsed.answer, "Paris is the capital.");
        assert_eq!(
            parsed.references,
            vec![
                reference("Wikipedia", "https://en.wikipedia.org/wiki/Paris"),
                reference("Encyclopedia", "https://example.com/paris"),
            ]
        );
    }

    #[test]
    fn no_marker_means_no_references() {
        let parsed = parse("Just an answer.");
        assert_eq!(parsed.answer, "Just an answer.");
        assert!(parsed.references.is_empty());
        assert!(!parsed.has_marker);
    }

    #[test]
    fn lines_without_dash_are_dropped() {
        let raw = "Answer\nReferences:\nInvalid reference line\nDocs - https://docs.example";
        let parsed = parse(raw);
        assert_eq!(parsed.references, vec![reference("Docs", "https://docs.example")]);
    }

    #[test]
    fn splits_on_first_dash_only() {
        let parsed = parse("A\nReferences:\nTitle - http://a.com - extra");
        assert_eq!(parsed.references, vec![reference("Title", "http://a.com - extra")]);
    }

    #[test]
    fn empty_reference_block() {
        let bare = parse("A\nReferences:");
        assert!(bare.references.is_empty());
        assert!(bare.has_marker);
        assert!(parse("A\nReferences:   \n\t\n").references.is_empty());
    }

    #[test]
    fn answer_is_a_fixed_point() {
        let first = parse("  The answer.\nReferences:\nX - https://x.example\n");
        let second = parse(&first.answer);
        assert_eq!(second.answer, first.answer);
        assert!(second.references.is_empty());
    }

    #[test]
    fn only_first_marker_splits() {
        let parsed = parse("A\nReferences:\nB - one\nReferences:\nC - two");
        assert_eq!(parsed.answer, "A");
        assert_eq!(
            parsed.references,
            vec![reference("B", "one"), reference("C", "two")]
        );
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let parsed = parse("A References: z - 1\na - 2\nz - 1");
        assert_eq!(
            parsed.references,
            vec![reference("z", "1"), reference("a", "2"), reference("z", "1")]
        );
    }
}
