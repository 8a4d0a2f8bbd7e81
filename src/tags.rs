//! Custom tag handling: block extraction, the hide filter, and body
//! normalization.
//!
//! A tag is documentation iff its name starts with `md.`. The reserved name
//! `md.hide` (exact match) suppresses the declaration it annotates.

use crate::model::Tag;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix that marks a tag as documentation.
pub const TAG_PREFIX: &str = "md.";

/// Exact tag name that hides a declaration from the output.
pub const HIDE_TAG: &str = "md.hide";

/// Platform line separator used when rejoining normalized bodies.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

// Any vertical-whitespace line break form; CRLF counts as one break.
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\r\n\x0B\x0C\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Group a declaration's tags into an ordered mapping from tag name to the
/// list of raw bodies.
///
/// The mapping preserves discovery order: names appear in first-seen order,
/// and repeated tags keep their bodies in occurrence order. A declaration
/// without tags yields an empty mapping.
pub fn tag_blocks(tags: &[Tag]) -> Vec<(String, Vec<String>)> {
    let mut blocks: Vec<(String, Vec<String>)> = Vec::new();
    for tag in tags {
        match blocks.iter_mut().find(|(name, _)| *name == tag.name) {
            Some((_, bodies)) => bodies.push(tag.body.clone()),
            None => blocks.push((tag.name.clone(), vec![tag.body.clone()])),
        }
    }
    blocks
}

/// Whether a declaration must be suppressed entirely.
///
/// Only the exact name counts; `md.hidden` does not hide anything.
pub fn is_hidden(tags: &[Tag]) -> bool {
    tags.iter().any(|tag| tag.name == HIDE_TAG)
}

/// Whether a tag name marks a documentation paragraph.
pub fn is_documentation_tag(name: &str) -> bool {
    name.starts_with(TAG_PREFIX)
}

/// Paragraph type for a documentation tag: the name with the prefix
/// stripped. Callers must check [`is_documentation_tag`] first.
pub fn paragraph_type(name: &str) -> &str {
    &name[TAG_PREFIX.len()..]
}

/// Normalize a raw multi-line tag body.
///
/// Tag bodies are conventionally written with a one-space indent relative
/// to the tag marker. Stripping exactly one leading whitespace character
/// per line removes that artificial indent while keeping intentional deeper
/// indentation (code samples, nested lists) aligned. Lines of a single
/// character are left untouched, as is anything not starting with
/// whitespace.
pub fn normalize(body: &str) -> String {
    RE_LINE_BREAK
        .split(body)
        .map(strip_one_indent)
        .collect::<Vec<&str>>()
        .join(LINE_SEPARATOR)
}

fn strip_one_indent(line: &str) -> &str {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) if first.is_whitespace() => &line[first.len_utf8()..],
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, body: &str) -> Tag {
        Tag {
            name: name.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn blocks_keep_discovery_order() {
        let tags = vec![
            tag("md.common", "first"),
            tag("md.secure", "second"),
            tag("md.common", "third"),
        ];
        let blocks = tag_blocks(&tags);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].0, "md.common");
        assert_eq!(blocks[0].1, vec!["first", "third"]);
        assert_eq!(blocks[1].0, "md.secure");
    }

    #[test]
    fn no_tags_yield_empty_mapping() {
        assert!(tag_blocks(&[]).is_empty());
    }

    #[test]
    fn hide_requires_exact_match() {
        assert!(is_hidden(&[tag("md.hide", "")]));
        assert!(!is_hidden(&[tag("md.hidden", "")]));
        assert!(!is_hidden(&[tag("hide", "")]));
        assert!(!is_hidden(&[tag("md.common", "md.hide")]));
    }

    #[test]
    fn only_prefixed_tags_are_documentation() {
        assert!(is_documentation_tag("md.common"));
        assert!(is_documentation_tag("md.secure"));
        assert!(!is_documentation_tag("deprecated"));
        assert!(!is_documentation_tag("see"));
    }

    #[test]
    fn paragraph_type_strips_prefix() {
        assert_eq!(paragraph_type("md.common"), "common");
        assert_eq!(paragraph_type("md.secure"), "secure");
    }

    #[test]
    fn normalize_strips_one_space_per_line() {
        let expected = format!("line one{LINE_SEPARATOR} line two");
        assert_eq!(normalize(" line one\n  line two"), expected);
    }

    #[test]
    fn normalize_keeps_single_character_line() {
        assert_eq!(normalize(" "), " ");
    }

    #[test]
    fn normalize_keeps_unindented_lines() {
        let expected = format!("plain{LINE_SEPARATOR}plain");
        assert_eq!(normalize("plain\nplain"), expected);
    }

    #[test]
    fn normalize_handles_crlf_as_one_break() {
        let expected = format!("a{LINE_SEPARATOR}b");
        assert_eq!(normalize(" a\r\n b"), expected);
    }

    #[test]
    fn normalize_splits_on_every_vertical_whitespace_form() {
        let expected = format!("a{LINE_SEPARATOR}b");
        assert_eq!(normalize(" a\r b"), expected);
        assert_eq!(normalize(" a\x0B b"), expected);
        assert_eq!(normalize(" a\x0C b"), expected);
        assert_eq!(normalize(" a\u{85} b"), expected);
        assert_eq!(normalize(" a\u{2028} b"), expected);
        assert_eq!(normalize(" a\u{2029} b"), expected);
    }

    #[test]
    fn normalize_preserves_deeper_indentation() {
        let body = " text\n     code sample\n text";
        let expected = format!("text{LINE_SEPARATOR}    code sample{LINE_SEPARATOR}text");
        assert_eq!(normalize(body), expected);
    }

    #[test]
    fn normalize_empty_body() {
        assert_eq!(normalize(""), "");
    }
}
