//! Hashtag extraction from gist descriptions.
//!
//! A tag is a `#` immediately followed by one or more ASCII word
//! characters (`[A-Za-z0-9_]`). Extraction first records every match
//! span, then rebuilds the description without those spans.
use std::ops::Range;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("tag pattern is a valid regex"));

/// A description split into its free text and the tags embedded in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDescription {
    /// Description with every tag removed, trimmed at both ends
    pub description: String,
    /// Tags in order of appearance, `#` included, duplicates kept
    pub tags: Vec<String>,
}

/// Splits `raw` into a cleaned description and the tags found in it.
///
/// Whitespace left behind by a removed tag is kept; only the ends of the
/// result are trimmed. The same tag appearing twice is returned twice.
pub fn extract_tags(raw: &str) -> ExtractedDescription {
    let spans: Vec<Range<usize>> = TAG_PATTERN.find_iter(raw).map(|m| m.range()).collect();

    let tags: Vec<String> = spans.iter().map(|span| raw[span.clone()].to_string()).collect();

    let mut cleaned = String::with_capacity(raw.len());
    let mut cursor = 0;
    for span in &spans {
        cleaned.push_str(&raw[cursor..span.start]);
        cursor = span.end;
    }
    cleaned.push_str(&raw[cursor..]);

    trace!("Extracted {} tag(s) from description", tags.len());

    ExtractedDescription {
        description: cleaned.trim().to_string(),
        tags,
    }
}

/// Returns true when `token` is exactly one tag and nothing else.
pub fn is_tag(token: &str) -> bool {
    TAG_PATTERN
        .find(token)
        .is_some_and(|m| m.start() == 0 && m.end() == token.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_tags_out_of_text() {
        let extracted = extract_tags("Sample #todo #urgent text");

        assert_eq!(extracted.tags, vec!["#todo", "#urgent"]);
        assert_eq!(extracted.description, "Sample   text");
        assert_eq!(
            extracted.description.split_whitespace().collect::<Vec<_>>(),
            vec!["Sample", "text"]
        );
    }

    #[test]
    fn text_without_tags_is_only_trimmed() {
        let extracted = extract_tags("  no tags here \n");

        assert_eq!(extracted.description, "no tags here");
        assert!(extracted.tags.is_empty());
    }

    #[test]
    fn all_tags_leaves_empty_description() {
        let extracted = extract_tags("#rust #cli");

        assert_eq!(extracted.description, "");
        assert_eq!(extracted.tags, vec!["#rust", "#cli"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract_tags(""), ExtractedDescription::default());
    }

    #[test]
    fn duplicates_are_kept() {
        let extracted = extract_tags("#x #x");

        assert_eq!(extracted.tags, vec!["#x", "#x"]);
        assert_eq!(extracted.description, "");
    }

    #[test]
    fn tag_stops_at_punctuation() {
        let extracted = extract_tags("deploy (#ops-team), see #notes.");

        assert_eq!(extracted.tags, vec!["#ops", "#notes"]);
        assert_eq!(extracted.description, "deploy (-team), see .");
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        let extracted = extract_tags("issue # 42 and ##double");

        assert_eq!(extracted.tags, vec!["#double"]);
        assert_eq!(extracted.description, "issue # 42 and #");
    }

    #[test]
    fn non_ascii_letters_end_a_tag() {
        let extracted = extract_tags("#café menu");

        assert_eq!(extracted.tags, vec!["#caf"]);
        assert_eq!(extracted.description, "é menu");
    }

    #[test]
    fn tag_inside_word_is_still_extracted() {
        let extracted = extract_tags("abc#def ghi");

        assert_eq!(extracted.tags, vec!["#def"]);
        assert_eq!(extracted.description, "abc ghi");
    }

    #[test]
    fn recognises_single_tags() {
        assert!(is_tag("#todo"));
        assert!(is_tag("#snake_case_2"));
        assert!(!is_tag("todo"));
        assert!(!is_tag("#"));
        assert!(!is_tag("#a b"));
        assert!(!is_tag("x#a"));
    }
}
