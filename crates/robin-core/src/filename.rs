//! Field extraction from scanned floor-plan file names, and caption synthesis.
//!
//! A source file name carries three things robin cares about:
//! ```text
//! PRJ-JS-A01 (北区 首层)-C0003.pdf
//!    ^^^^      ^^^^ ^^    ^^^^^
//!    document  site floor sort key
//! ```
//! The document fragment runs from the `-JS-` marker (without its leading
//! dash) to the end of the stem; the sort key runs from the last `-C` to the
//! end of the stem. The stem is the name minus its four-character extension.

use serde::{Deserialize, Serialize};

use crate::error::{HeaderError, NumeralError};
use crate::numeral::parse_floor_word;

/// Marker that starts the sort key. The last occurrence wins.
pub const SORT_MARKER: &str = "-C";

/// Marker that starts the document fragment. The first occurrence wins.
pub const DOC_MARKER: &str = "-JS-";

/// Character that terminates the floor word inside the header.
pub const FLOOR_SUFFIX: char = '层';

/// Extension written on every generated name.
pub const EXTENSION: &str = ".pdf";

/// Tail shared by every generated name.
pub const CAPTION_SUFFIX: &str = "层平面图 ).pdf";

const EXTENSION_CHARS: usize = 4;

/// Site and floor read from the parenthesized header of a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorHeader {
    pub site_name: String,
    /// Raw floor word, e.g. `首` or `一二`.
    pub floor_word: String,
}

impl FloorHeader {
    /// Floor index named by the header.
    ///
    /// # Errors
    ///
    /// Returns a [`NumeralError`] if the floor word is not a digit-by-digit numeral.
    pub fn floor_index(&self) -> Result<u32, NumeralError> {
        parse_floor_word(&self.floor_word)
    }
}

/// File name without its trailing four-character extension.
///
/// Returns `None` for names shorter than the extension.
#[must_use]
pub fn stem(name: &str) -> Option<&str> {
    let (cut, _) = name.char_indices().rev().nth(EXTENSION_CHARS - 1)?;
    Some(&name[..cut])
}

/// Sort key of a file name: from the last [`SORT_MARKER`] to the end of the stem.
///
/// Returns `None` when the marker is absent or falls inside the extension.
#[must_use]
pub fn sort_key(name: &str) -> Option<&str> {
    let start = name.rfind(SORT_MARKER)?;
    let end = stem(name)?.len();
    (start + SORT_MARKER.len() <= end).then(|| &name[start..end])
}

/// Document fragment of a file name: from just after the leading dash of
/// [`DOC_MARKER`] to the end of the stem.
///
/// Returns `None` when the marker is absent or falls inside the extension.
#[must_use]
pub fn doc_fragment(name: &str) -> Option<&str> {
    let idx = name.find(DOC_MARKER)?;
    let end = stem(name)?.len();
    (idx + DOC_MARKER.len() <= end).then(|| &name[idx + 1..end])
}

/// Read the `( site floor层 )` header of a file name.
///
/// # Errors
///
/// Returns a [`HeaderError`] when the parentheses, the space after the site
/// name, or the [`FLOOR_SUFFIX`] marker are missing.
pub fn parse_header(name: &str) -> Result<FloorHeader, HeaderError> {
    let (open, close) = match (name.find('('), name.find(')')) {
        (Some(open), Some(close)) => (open, close),
        _ => return Err(HeaderError::MissingParentheses(name.to_string())),
    };
    if close < open {
        return Err(HeaderError::UnbalancedParentheses(name.to_string()));
    }

    let inner = name[open + 1..close].trim();
    let (site_name, rest) = inner
        .split_once(' ')
        .ok_or_else(|| HeaderError::MissingSiteSeparator(name.to_string()))?;
    let (floor_word, _) = rest
        .trim_start()
        .split_once(FLOOR_SUFFIX)
        .ok_or_else(|| HeaderError::MissingFloorSuffix(name.to_string()))?;

    Ok(FloorHeader {
        site_name: site_name.to_string(),
        floor_word: floor_word.to_string(),
    })
}

/// Build a renamed file name: `<fragment> ( <site> <floor>层平面图 ).pdf`.
#[must_use]
pub fn build_name(fragment: &str, site_name: &str, floor_numeral: &str) -> String {
    format!("{fragment} ( {site_name} {floor_numeral}{CAPTION_SUFFIX}")
}

/// Whether a name already carries a generated caption.
#[must_use]
pub fn is_renamed(name: &str) -> bool {
    name.ends_with(CAPTION_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "PRJ-JS-A01 (北区 首层)-C0003.pdf";

    #[test]
    fn stem_drops_four_characters() {
        assert_eq!(stem("plan.pdf"), Some("plan"));
        assert_eq!(stem(".pdf"), Some(""));
        assert_eq!(stem("pdf"), None);
        assert_eq!(stem("平面图层.pdf"), Some("平面图层"));
    }

    #[test]
    fn sort_key_uses_last_marker() {
        assert_eq!(sort_key(SAMPLE), Some("-C0003"));
        assert_eq!(sort_key("A-C1-C2.pdf"), Some("-C2"));
    }

    #[test]
    fn sort_key_absent_without_marker() {
        assert_eq!(sort_key("PRJ-JS-A01.pdf"), None);
        assert_eq!(sort_key("x-C"), None);
    }

    #[test]
    fn doc_fragment_skips_leading_dash() {
        assert_eq!(doc_fragment(SAMPLE), Some("JS-A01 (北区 首层)-C0003"));
    }

    #[test]
    fn doc_fragment_absent_without_marker() {
        assert_eq!(doc_fragment("PRJ-A01 (北区 首层)-C0003.pdf"), None);
        assert_eq!(doc_fragment("-JS-"), None);
    }

    #[test]
    fn parse_header_reads_site_and_floor() {
        let header = parse_header(SAMPLE).unwrap();
        assert_eq!(header.site_name, "北区");
        assert_eq!(header.floor_word, "首");
        assert_eq!(header.floor_index(), Ok(1));
    }

    #[test]
    fn parse_header_trims_inner_whitespace() {
        let header = parse_header("X-JS-1 (  A  一二层 )-C1.pdf").unwrap();
        assert_eq!(header.site_name, "A");
        assert_eq!(header.floor_word, "一二");
        assert_eq!(header.floor_index(), Ok(12));
    }

    #[test]
    fn parse_header_requires_parentheses() {
        assert_eq!(
            parse_header("PRJ-JS-A01-C0003.pdf"),
            Err(HeaderError::MissingParentheses(
                "PRJ-JS-A01-C0003.pdf".to_string()
            ))
        );
        assert!(matches!(
            parse_header("PRJ (A 首层.pdf"),
            Err(HeaderError::MissingParentheses(_))
        ));
        assert!(matches!(
            parse_header("PRJ )A 首层(.pdf"),
            Err(HeaderError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn parse_header_requires_separator_and_suffix() {
        assert!(matches!(
            parse_header("P (北区首层)-C1.pdf"),
            Err(HeaderError::MissingSiteSeparator(_))
        ));
        assert!(matches!(
            parse_header("P (北区 首)-C1.pdf"),
            Err(HeaderError::MissingFloorSuffix(_))
        ));
    }

    #[test]
    fn build_name_follows_caption_template() {
        assert_eq!(
            build_name("JS-A01", "北区", "一二"),
            "JS-A01 ( 北区 一二层平面图 ).pdf"
        );
    }

    #[test]
    fn generated_names_are_detected() {
        let name = build_name("JS-A01", "北区", "三");
        assert!(is_renamed(&name));
        assert!(!is_renamed(SAMPLE));
    }
}
