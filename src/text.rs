pub const PUNCTUATION: &'static str = r###",."'!?&-/:;()#$%*+<=>@[\]^_`{|}~"###;

/// Whether the char is a punctuation.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Whether the char ends a phrase.
///
/// Apostrophes and hyphens join words (`don't`, `state-of-the-art`), every
/// other punctuation separates phrases.
pub fn is_phrase_delimiter(c: char) -> bool {
    c != '\'' && c != '-' && (is_punctuation(c) || c.is_control())
}

/// Returns an iterator over the punctuation delimited fragments of the text,
/// each split into its words.
///
/// Leading and trailing apostrophes and hyphens are removed from every word.
pub fn phrase_fragments(txt: &str) -> impl Iterator<Item = Vec<&str>> {
    txt.split(is_phrase_delimiter)
        .map(|fragment| {
            fragment
                .split_whitespace()
                .map(|word| word.trim_matches(|c| c == '\'' || c == '-'))
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|words| !words.is_empty())
}
