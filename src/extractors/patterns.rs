// src/extractors/patterns.rs

use once_cell::sync::Lazy;
use regex::Regex;

// --- Boilerplate repeated on every page ---
pub const HEADER_SKIP: [&str; 2] = [
    "氏名: カナ: 所属: 学校:人数:",
    "第101回日本選手権水泳競技大会",
];

// --- Regex Patterns (Lazy Static) ---
// Page footer, e.g. "3/12 ページ". Matched as a prefix only.
pub static FOOTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+/\d+\s+ページ").expect("Failed to compile FOOTER_RE")
});

// Data row: everything up to a trailing seed rank and a 5 character org code.
pub static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<body>.+?)(?P<seed>\d+)\s+(?P<code>[0-9A-Z]{5})$")
        .expect("Failed to compile ROW_RE")
});

// First line of an event page: gender token, then the event name.
pub static EVENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(男子|女子)\s*(.+?)\s*$").expect("Failed to compile EVENT_RE")
});

// Name ends right before the half-width katakana reading (U+FF66..=U+FF9F).
pub static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+[\x{FF66}-\x{FF9F}]").expect("Failed to compile NAME_RE")
});

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE")
});

/// Replaces ideographic spaces, collapses whitespace runs and trims.
pub fn normalize_space(value: &str) -> String {
    let replaced = value.replace('\u{3000}', " ");
    WHITESPACE_RUN_RE.replace_all(&replaced, " ").trim().to_string()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Splits extracted page text into trimmed, non-empty lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn is_boilerplate(line: &str) -> bool {
    HEADER_SKIP.iter().any(|skip| *skip == line) || FOOTER_RE.is_match(line)
}

static DECIMAL_DIGIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d$").expect("Failed to compile DECIMAL_DIGIT_RE")
});

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit (general category Nd).
/// Nd digits come in contiguous runs that start at zero, so the value is the
/// length of the run before `c`, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let run = (1..)
        .map_while(|back| char::from_u32((c as u32).checked_sub(back)?))
        .take_while(|&prev| is_decimal_digit(prev))
        .count();
    Some((run % 10) as u32)
}

/// Parses a seed rank written in any decimal digit script (ASCII, full-width, ...).
/// Ranks that overflow `u64` are rejected.
pub fn parse_seed(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(u64::from(digit_value(c)?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_space() {
        assert_eq!(normalize_space("  山田\u{3000}太郎  "), "山田 太郎");
        assert_eq!(normalize_space("a \t\u{3000} b"), "a b");
        assert_eq!(normalize_space(""), "");
        assert_eq!(normalize_space("\u{3000}\u{3000}"), "");
    }

    #[test]
    fn test_content_lines_drops_blank_and_trims() {
        let text = "男子 400m自由形\r\n\n  山田 太郎 ﾖﾁﾓﾀﾞ 1 A1B2C  \u{2028}\u{0C}tail";
        assert_eq!(
            content_lines(text),
            vec!["男子 400m自由形", "山田 太郎 ﾖﾁﾓﾀﾞ 1 A1B2C", "tail"]
        );
        assert!(content_lines("").is_empty());
        assert!(content_lines(" \n \u{3000}\n").is_empty());
    }

    #[test]
    fn test_boilerplate_lines() {
        assert!(is_boilerplate("氏名: カナ: 所属: 学校:人数:"));
        assert!(is_boilerplate("第101回日本選手権水泳競技大会"));
        assert!(is_boilerplate("3/12 ページ"));
        assert!(is_boilerplate("10/12  ページ 印刷日"));
        assert!(!is_boilerplate("ページ 3/12"));
        assert!(!is_boilerplate("氏名: カナ: 所属:"));
    }

    #[test]
    fn test_row_pattern_captures() {
        let caps = ROW_RE.captures("山田 太郎 ﾖﾁﾓﾀﾞ 12 A1B2C").unwrap();
        assert_eq!(&caps["body"], "山田 太郎 ﾖﾁﾓﾀﾞ ");
        assert_eq!(&caps["seed"], "12");
        assert_eq!(&caps["code"], "A1B2C");

        assert!(ROW_RE.captures("山田 太郎 ﾖﾁﾓﾀﾞ 12 a1b2c").is_none());
        assert!(ROW_RE.captures("山田 太郎 ﾖﾁﾓﾀﾞ 12 A1B2C3").is_none());
        assert!(ROW_RE.captures("1 A1B2C").is_none());
        assert!(ROW_RE.captures("山田 太郎 ﾖﾁﾓﾀﾞ A1B2C").is_none());
    }

    #[test]
    fn test_name_pattern_stops_at_kana() {
        let caps = NAME_RE.captures("山田 太郎 ﾖﾁﾓﾀﾞ ﾀﾛｳ 東京").unwrap();
        assert_eq!(&caps["name"], "山田 太郎");
        assert!(NAME_RE.captures("山田 太郎 ヤマダ").is_none());
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("007"), Some(7));
        assert_eq!(parse_seed("１２"), Some(12));
        assert_eq!(parse_seed("99999999999"), Some(99_999_999_999));
        assert_eq!(parse_seed("99999999999999999999"), None);
        assert_eq!(parse_seed(""), None);
        assert_eq!(parse_seed("1a"), None);
    }

    #[test]
    fn test_parse_seed_other_digit_scripts() {
        // Arabic-Indic, Devanagari, mathematical bold (adjacent runs of ten)
        assert_eq!(parse_seed("\u{0663}\u{0660}"), Some(30));
        assert_eq!(parse_seed("\u{096D}"), Some(7));
        assert_eq!(parse_seed("\u{1D7CF}\u{1D7D9}"), Some(11));

        let caps = ROW_RE.captures("山田 太郎 ﾔﾏﾀﾞ \u{0665} A1B2C").unwrap();
        assert_eq!(parse_seed(&caps["seed"]), Some(5));
    }
}
