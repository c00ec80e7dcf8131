//! Chinese floor numerals.
//!
//! Floor words on the scanned documents are written digit by digit
//! (`一二` is floor 12), except for `首`, which marks the ground floor.
//! Captions written back out follow the site's labeling convention:
//! a `十` is spliced in at a fixed boundary and zero digits are never shown.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumeralError;

/// Chinese digit characters, indexed by decimal value.
pub const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// The "ten" character spliced into long captions.
pub const TEN: char = '十';

/// Floor word meaning "first/ground floor".
pub const GROUND_FLOOR: &str = "首";

const ZERO: char = DIGITS[0];
const ONE: char = DIGITS[1];

/// Decimal value of a Chinese digit character.
#[must_use]
pub fn digit_value(ch: char) -> Option<u32> {
    DIGITS.iter().position(|&d| d == ch).map(|i| i as u32)
}

/// Chinese character for a decimal digit (`0..=9`).
#[must_use]
pub fn digit_char(value: u32) -> Option<char> {
    DIGITS.get(value as usize).copied()
}

/// Where the `十` goes when a caption is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralStyle {
    /// Splice `十` after the third digit character (`一二三四` -> `一二三十四`).
    #[default]
    Digits,
    /// Splice `十` after the first digit character (`一二` -> `十二`).
    Tens,
}

impl NumeralStyle {
    /// Number of leading digit characters kept before the spliced `十`.
    #[must_use]
    pub fn ten_boundary(self) -> usize {
        match self {
            Self::Digits => 3,
            Self::Tens => 1,
        }
    }
}

impl fmt::Display for NumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => f.write_str("digits"),
            Self::Tens => f.write_str("tens"),
        }
    }
}

impl FromStr for NumeralStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "digits" => Ok(Self::Digits),
            "tens" => Ok(Self::Tens),
            other => Err(format!(
                "unknown numeral style '{other}' (expected 'digits' or 'tens')"
            )),
        }
    }
}

/// Parse a floor word such as `首`, `三` or `一二` into a floor index.
///
/// # Errors
///
/// Returns [`NumeralError::Empty`] for an empty word,
/// [`NumeralError::UnrecognizedDigit`] for any character outside [`DIGITS`],
/// and [`NumeralError::Overflow`] if the value does not fit in a `u32`.
pub fn parse_floor_word(word: &str) -> Result<u32, NumeralError> {
    let digits = if word == GROUND_FLOOR { "一" } else { word };
    if digits.is_empty() {
        return Err(NumeralError::Empty);
    }

    digits.chars().try_fold(0u32, |acc, ch| -> Result<u32, NumeralError> {
        let digit = digit_value(ch).ok_or_else(|| NumeralError::UnrecognizedDigit {
            ch,
            word: word.to_string(),
        })?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| NumeralError::Overflow {
                word: word.to_string(),
            })
    })
}

/// Digit-mapped form of `n`: each decimal digit replaced by its Chinese character.
#[must_use]
pub fn digit_mapped(n: u32) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).and_then(digit_char))
        .collect()
}

/// Render a floor index as a caption numeral in the default style.
#[must_use]
pub fn format_floor(n: u32) -> String {
    format_floor_with(n, NumeralStyle::default())
}

/// Render a floor index as a caption numeral.
///
/// When the digit-mapped form is longer than the style's boundary, `十` is
/// inserted after the boundary, and a prefix that is exactly `一` is dropped.
/// All `零` characters are removed from the result.
#[must_use]
pub fn format_floor_with(n: u32, style: NumeralStyle) -> String {
    let mapped: Vec<char> = digit_mapped(n).chars().collect();
    let boundary = style.ten_boundary();

    let mut out = String::with_capacity((mapped.len() + 1) * 3);
    if mapped.len() > boundary {
        let (prefix, suffix) = mapped.split_at(boundary);
        if prefix != [ONE] {
            out.extend(prefix);
        }
        out.push(TEN);
        out.extend(suffix);
    } else {
        out.extend(&mapped);
    }

    out.retain(|c| c != ZERO);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn digit_table_is_a_bijection() {
        for (value, &ch) in DIGITS.iter().enumerate() {
            assert_eq!(digit_value(ch), Some(value as u32));
            assert_eq!(digit_char(value as u32), Some(ch));
        }
        assert_eq!(digit_value(TEN), None);
        assert_eq!(digit_char(10), None);
    }

    // === Parser ===

    #[test]
    fn parse_ground_floor_is_one() {
        assert_eq!(parse_floor_word("首"), Ok(1));
    }

    #[test]
    fn parse_reads_digits_positionally() {
        assert_eq!(parse_floor_word("三"), Ok(3));
        assert_eq!(parse_floor_word("一二"), Ok(12));
        assert_eq!(parse_floor_word("二零五"), Ok(205));
        assert_eq!(parse_floor_word("零七"), Ok(7));
    }

    #[test]
    fn parse_rejects_empty_word() {
        assert_eq!(parse_floor_word(""), Err(NumeralError::Empty));
    }

    #[test]
    fn parse_rejects_multipliers_and_foreign_chars() {
        assert_eq!(
            parse_floor_word("十二"),
            Err(NumeralError::UnrecognizedDigit {
                ch: '十',
                word: "十二".to_string()
            })
        );
        assert!(matches!(
            parse_floor_word("B1"),
            Err(NumeralError::UnrecognizedDigit { ch: 'B', .. })
        ));
        // Only the bare ground-floor word is normalized.
        assert!(parse_floor_word("首一").is_err());
    }

    #[test]
    fn parse_reports_overflow() {
        let word = "九".repeat(11);
        assert_eq!(
            parse_floor_word(&word),
            Err(NumeralError::Overflow { word: word.clone() })
        );
    }

    // === Formatter ===

    #[test]
    fn format_short_values_are_plain_digits() {
        assert_eq!(format_floor(1), "一");
        assert_eq!(format_floor(12), "一二");
        assert_eq!(format_floor(999), "九九九");
    }

    #[test]
    fn format_strips_zero_digits() {
        assert_eq!(format_floor(105), "一五");
        assert_eq!(format_floor(10), "一");
        assert_eq!(format_floor(0), "");
    }

    #[test]
    fn format_inserts_ten_after_third_character() {
        assert_eq!(format_floor(1234), "一二三十四");
        assert_eq!(format_floor(1000), "一十");
        assert_eq!(format_floor(98765), "九八七十六五");
    }

    #[test]
    fn tens_style_drops_leading_one() {
        assert_eq!(format_floor_with(7, NumeralStyle::Tens), "七");
        assert_eq!(format_floor_with(10, NumeralStyle::Tens), "十");
        assert_eq!(format_floor_with(12, NumeralStyle::Tens), "十二");
        assert_eq!(format_floor_with(20, NumeralStyle::Tens), "二十");
        assert_eq!(format_floor_with(35, NumeralStyle::Tens), "三十五");
    }

    #[test]
    fn style_parses_from_cli_strings() {
        assert_eq!("digits".parse::<NumeralStyle>(), Ok(NumeralStyle::Digits));
        assert_eq!("TENS".parse::<NumeralStyle>(), Ok(NumeralStyle::Tens));
        assert!("roman".parse::<NumeralStyle>().is_err());
        assert_eq!(NumeralStyle::Tens.to_string(), "tens");
    }

    #[test]
    fn style_serializes_lowercase() {
        let json = serde_json::to_string(&NumeralStyle::Tens).expect("serialize");
        assert_eq!(json, "\"tens\"");
    }

    proptest! {
        #[test]
        fn format_then_parse_recovers_zero_free_values(n in 1u32..1000) {
            prop_assume!(!n.to_string().contains('0'));
            prop_assert_eq!(parse_floor_word(&format_floor(n)), Ok(n));
        }

        #[test]
        fn formatted_numerals_never_show_zero(n in any::<u32>(), tens in any::<bool>()) {
            let style = if tens { NumeralStyle::Tens } else { NumeralStyle::Digits };
            prop_assert!(!format_floor_with(n, style).contains(ZERO));
        }
    }
}
