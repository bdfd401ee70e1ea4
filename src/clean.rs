//! ASCII folding and title sanitizing.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use lazy_static::lazy_static;

lazy_static! {
    /// Everything that is not a letter, a digit, whitespace or plain punctuation.
    pub static ref RE_DISALLOWED: Regex = Regex::new(r#"[^a-zA-Z0-9\s.,:;!?'"-]"#).unwrap();

    pub static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Converts the text to its closest ASCII form.
///
/// The text is decomposed (NFKD) first, so accented letters keep their base
/// letter, then every code point outside of 7-bit ASCII is dropped.
/// Characters without an ASCII decomposition vanish entirely.
///
/// A missing text yields an empty string.
///
/// # Example
///
/// ```rust
///  use enricher::clean::normalize_unicode;
///  assert_eq!(normalize_unicode("café"), "cafe");
///  assert_eq!(normalize_unicode(None), "");
/// ```
pub fn normalize_unicode<'a, T: Into<Option<&'a str>>>(text: T) -> String {
    match text.into() {
        Some(text) => text.nfkd().filter(char::is_ascii).collect(),
        None => String::new(),
    }
}

/// Cleans a title for display and matching.
///
/// Runs three passes in order:
///   1. strip everything outside of 7-bit ASCII
///   2. strip everything except letters, digits, whitespace and `.,:;!?'"-`
///   3. collapse whitespace runs into a single space and trim
///
/// The first pass runs on the decomposed text, see [`normalize_unicode`].
///
/// # Example
///
/// ```rust
///  use enricher::clean::clean_title;
///  assert_eq!(clean_title("  Héllo,   World!! "), "Hello, World!!");
/// ```
pub fn clean_title<'a, T: Into<Option<&'a str>>>(text: T) -> String {
    let text = match text.into() {
        Some(text) => text,
        None => return String::new(),
    };
    // must run before the allow-list, multi-byte chars would only be removed
    // partially otherwise
    let ascii = normalize_unicode(text);
    let allowed = RE_DISALLOWED.replace_all(&ascii, "");
    RE_WHITESPACE.replace_all(&allowed, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ascii_unchanged() {
        let s = "Plain ASCII, with punctuation! 123";
        assert_eq!(normalize_unicode(s), s);
    }

    #[test]
    fn normalize_folds_accents() {
        assert_eq!(normalize_unicode("café"), "cafe");
        assert_eq!(normalize_unicode("Ærøskøbing"), "rskbing");
        assert_eq!(normalize_unicode("São Paulo"), "Sao Paulo");
        assert_eq!(normalize_unicode("ﬁle"), "file");
    }

    #[test]
    fn normalize_drops_non_latin() {
        assert_eq!(normalize_unicode("東京 Tokyo"), " Tokyo");
    }

    #[test]
    fn normalize_missing_text() {
        assert_eq!(normalize_unicode(None), "");
    }

    #[test]
    fn clean_title_passes() {
        assert_eq!(clean_title("  Héllo,   World!! "), "Hello, World!!");
        assert_eq!(
            clean_title("Breaking: <b>News</b> @ 10 #live"),
            "Breaking: bNewsb 10 live"
        );
        assert_eq!(clean_title("It's \"quoted\" - ok?"), "It's \"quoted\" - ok?");
        assert_eq!(clean_title("tab\tand\nnewline"), "tab and newline");
    }

    #[test]
    fn clean_title_missing_text() {
        assert_eq!(clean_title(None), "");
        assert_eq!(clean_title("   "), "");
        assert_eq!(clean_title("🎉🎉"), "");
    }

    #[test]
    fn clean_title_idempotent() {
        for s in &[
            "  Héllo,   World!! ",
            "Ünïcödé & <html> stuff",
            "a\u{0}b\u{7f}c",
            "already clean",
            "  --  ",
        ] {
            let once = clean_title(*s);
            assert_eq!(clean_title(once.as_str()), once);
        }
    }
}
