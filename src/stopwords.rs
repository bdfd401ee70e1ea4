use crate::language::Language;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::ops::Deref;

macro_rules! stop_words {
    ($($name:ident $lang:tt $words:ident,)*) => {
        lazy_static! {
            $(
                pub static ref $name: StopWords = StopWords::new(Language::$lang, $words);
            )*
        }
    };
}

stop_words!(
    ENGLISH_STOPWORDS English ENGLISH,
    GERMAN_STOPWORDS German GERMAN,
    FRENCH_STOPWORDS French FRENCH,
    SPANISH_STOPWORDS Spanish SPANISH,
    ITALIAN_STOPWORDS Italian ITALIAN,
    PORTUGUESE_STOPWORDS Portuguese PORTUGUESE,
    DUTCH_STOPWORDS Dutch DUTCH,
);

#[derive(Debug, Clone)]
pub struct StopWords {
    pub language: Language,
    words: HashSet<&'static str>,
}

impl Deref for StopWords {
    type Target = HashSet<&'static str>;

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

impl StopWords {
    pub fn new(language: Language, words: &[&'static str]) -> Self {
        Self {
            language,
            words: words.iter().copied().collect(),
        }
    }

    /// Whether the lowercase `word` is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "it's", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "new", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "vs", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    "yourself", "yourselves",
];

const GERMAN: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "da", "damit", "dann", "das", "dass", "dem", "den", "denn", "der", "des", "die", "dies",
    "diese", "dieser", "doch", "du", "durch", "ein", "eine", "einem", "einen", "einer", "eines",
    "er", "es", "für", "gegen", "hat", "hatte", "ich", "ihr", "im", "in", "ist", "ja", "kann",
    "kein", "mit", "nach", "nicht", "noch", "nur", "ob", "oder", "ohne", "sich", "sie", "sind",
    "so", "über", "um", "und", "uns", "unter", "vom", "von", "vor", "war", "was", "weil", "wenn",
    "wie", "wir", "wird", "zu", "zum", "zur",
];

const FRENCH: &[&str] = &[
    "à", "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux",
    "il", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "où", "par", "pas", "pour", "qu", "que", "qui",
    "sa", "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "est", "sont", "été", "être",
];

const SPANISH: &[&str] = &[
    "a", "al", "algo", "como", "con", "de", "del", "desde", "donde", "el", "ella", "en", "entre",
    "es", "esta", "este", "fue", "ha", "la", "las", "le", "les", "lo", "los", "más", "me", "mi",
    "muy", "no", "nos", "o", "para", "pero", "por", "que", "se", "sin", "sobre", "su", "sus",
    "también", "te", "tu", "un", "una", "uno", "y", "ya", "yo",
];

const ITALIAN: &[&str] = &[
    "a", "ad", "al", "alla", "anche", "che", "chi", "con", "da", "dal", "dei", "del", "della",
    "di", "e", "è", "gli", "ha", "i", "il", "in", "io", "la", "le", "lo", "ma", "mi", "ne", "nel",
    "nella", "non", "o", "per", "più", "se", "si", "sono", "su", "sul", "tra", "tu", "un", "una",
    "uno",
];

const PORTUGUESE: &[&str] = &[
    "a", "ao", "aos", "as", "com", "como", "da", "das", "de", "do", "dos", "e", "é", "ela", "ele",
    "em", "entre", "eu", "foi", "isso", "já", "mais", "mas", "na", "nas", "no", "nos", "não", "o",
    "os", "ou", "para", "pela", "pelo", "por", "que", "se", "sem", "seu", "sua", "também", "um",
    "uma",
];

const DUTCH: &[&str] = &[
    "aan", "al", "als", "bij", "dat", "de", "die", "dit", "door", "een", "en", "er", "het", "hij",
    "ik", "in", "is", "je", "maar", "met", "na", "naar", "niet", "nog", "of", "om", "ook", "op",
    "over", "te", "tot", "uit", "van", "voor", "was", "wat", "we", "wel", "werd", "wordt", "zich",
    "zij", "zijn",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_stopwords() {
        for lang in Language::known_languages() {
            let words = lang.stopwords().unwrap();
            assert!(!words.is_empty());
            assert_eq!(&words.language, lang);
        }
        assert!(Language::Other("xx".to_string()).stopwords().is_none());
    }

    #[test]
    fn english_lookup() {
        assert!(ENGLISH_STOPWORDS.is_stopword("the"));
        assert!(!ENGLISH_STOPWORDS.is_stopword("election"));
    }
}
