#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use std::slice::Iter;
use std::str::FromStr;

#[cfg(feature = "stopwords")]
use crate::stopwords::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Other(String),
}

impl Language {
    /// All known languages.
    pub fn known_languages() -> Iter<'static, Language> {
        static LANGUAGES: [Language; 7] = [
            Language::English,
            Language::German,
            Language::French,
            Language::Spanish,
            Language::Italian,
            Language::Portuguese,
            Language::Dutch,
        ];
        LANGUAGES.iter()
    }

    pub fn identifier(&self) -> &str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Other(s) => s.as_str(),
        }
    }

    pub fn full_name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Other(s) => s.as_str(),
        }
    }

    /// Get the stopwords for a language.
    #[cfg(feature = "stopwords")]
    pub fn stopwords(&self) -> Option<&'static StopWords> {
        match self {
            Language::English => Some(&*ENGLISH_STOPWORDS),
            Language::German => Some(&*GERMAN_STOPWORDS),
            Language::French => Some(&*FRENCH_STOPWORDS),
            Language::Spanish => Some(&*SPANISH_STOPWORDS),
            Language::Italian => Some(&*ITALIAN_STOPWORDS),
            Language::Portuguese => Some(&*PORTUGUESE_STOPWORDS),
            Language::Dutch => Some(&*DUTCH_STOPWORDS),
            Language::Other(_) => None,
        }
    }
}

impl FromStr for Language {
    type Err = Language;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "german" => Ok(Language::German),
            "fr" | "french" => Ok(Language::French),
            "es" | "spanish" => Ok(Language::Spanish),
            "it" | "italian" => Ok(Language::Italian),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            "nl" | "dutch" => Ok(Language::Dutch),
            _ => Err(Language::Other(s.to_string())),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("German".parse::<Language>(), Ok(Language::German));
        assert_eq!(
            "klingon".parse::<Language>(),
            Err(Language::Other("klingon".to_string()))
        );
    }

    #[test]
    fn identifiers_round_trip() {
        for lang in Language::known_languages() {
            assert_eq!(&lang.identifier().parse::<Language>().unwrap(), lang);
            assert_eq!(&lang.full_name().parse::<Language>().unwrap(), lang);
        }
    }
}
