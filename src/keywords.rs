//! Keyword extraction.
//!
//! The extraction itself is a capability that is handed in by the caller,
//! anything implementing [`KeywordExtractor`] works. [`RakeExtractor`] is a
//! model free implementation based on stopwords.

#[cfg(feature = "stopwords")]
use std::collections::HashMap;

#[cfg(feature = "stopwords")]
use crate::config::Config;
#[cfg(feature = "stopwords")]
use crate::language::Language;
#[cfg(feature = "stopwords")]
use crate::text::phrase_fragments;

/// Extracts scored keywords from a text.
pub trait KeywordExtractor {
    /// The keywords of `text` with their scores, most relevant first.
    fn extract_keywords(&self, text: &str) -> Vec<(String, f64)>;
}

impl<F> KeywordExtractor for F
where
    F: Fn(&str) -> Vec<(String, f64)>,
{
    fn extract_keywords(&self, text: &str) -> Vec<(String, f64)> {
        self(text)
    }
}

/// The keywords `extractor` finds in `text`, without their scores.
///
/// The order of the extractor is kept.
///
/// # Example
///
/// ```rust
///  use enricher::keywords::extract_keywords;
///  let extractor = |txt: &str| {
///      txt.split_whitespace()
///          .map(|w| (w.to_lowercase(), 1.0))
///          .collect::<Vec<_>>()
///  };
///  assert_eq!(extract_keywords(&extractor, "Rust Parser"), vec!["rust", "parser"]);
/// ```
pub fn extract_keywords<E: KeywordExtractor + ?Sized>(extractor: &E, text: &str) -> Vec<String> {
    extractor
        .extract_keywords(text)
        .into_iter()
        .map(|(keyword, _)| keyword)
        .collect()
}

/// Rapid automatic keyword extraction.
///
/// Candidate phrases are the runs of words between stopwords and
/// punctuation. A word scores its degree (the summed length of the phrases it
/// occurs in) divided by its frequency, a phrase scores the sum of its words.
#[cfg(feature = "stopwords")]
#[derive(Debug, Clone)]
pub struct RakeExtractor {
    language: Language,
    max_keywords: usize,
    max_ngram: usize,
}

#[cfg(feature = "stopwords")]
impl RakeExtractor {
    pub fn new(language: Language, max_keywords: usize, max_ngram: usize) -> Self {
        Self {
            language,
            max_keywords,
            max_ngram: max_ngram.max(1),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        RakeExtractor::new(
            config.keyword_language().clone(),
            config.max_keywords(),
            config.max_keyword_ngram(),
        )
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.language
            .stopwords()
            .map_or(false, |stopwords| stopwords.is_stopword(word))
    }

    /// Splits the text into lowercase candidate phrases.
    ///
    /// Phrases longer than the configured n-gram length are cut into chunks.
    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let mut phrases = Vec::new();
        for fragment in phrase_fragments(text) {
            let mut current: Vec<String> = Vec::new();
            for word in fragment {
                let word = word.to_lowercase();
                if self.is_stopword(&word) || word.chars().all(|c| c.is_numeric()) {
                    if !current.is_empty() {
                        phrases.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(word);
                }
            }
            if !current.is_empty() {
                phrases.push(current);
            }
        }
        phrases
            .into_iter()
            .flat_map(|phrase| {
                phrase
                    .chunks(self.max_ngram)
                    .map(<[String]>::to_vec)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(feature = "stopwords")]
impl Default for RakeExtractor {
    fn default() -> Self {
        RakeExtractor::from_config(&Config::default())
    }
}

#[cfg(feature = "stopwords")]
impl KeywordExtractor for RakeExtractor {
    fn extract_keywords(&self, text: &str) -> Vec<(String, f64)> {
        let phrases = self.candidate_phrases(text);

        // word -> (frequency, degree)
        let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
        for phrase in &phrases {
            for word in phrase {
                let (freq, degree) = stats.entry(word.as_str()).or_insert((0, 0));
                *freq += 1;
                *degree += phrase.len();
            }
        }

        let mut scored: Vec<(String, f64)> = Vec::with_capacity(phrases.len());
        for phrase in &phrases {
            let keyword = phrase.join(" ");
            if scored.iter().any(|(known, _)| *known == keyword) {
                continue;
            }
            let score: f64 = phrase
                .iter()
                .map(|word| {
                    let (freq, degree) = stats[word.as_str()];
                    degree as f64 / freq as f64
                })
                .sum();
            scored.push((keyword, score));
        }

        // stable, ties keep their order of appearance
        scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_keywords);

        if let Some(top) = scored.first().map(|(_, score)| *score) {
            for (_, score) in scored.iter_mut() {
                *score /= top;
            }
        }
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_drops_scores_keeps_order() {
        let extractor = |_: &str| {
            vec![
                ("second best".to_string(), 0.4),
                ("best".to_string(), 0.9),
                ("worst".to_string(), 0.1),
            ]
        };
        assert_eq!(
            extract_keywords(&extractor, "ignored"),
            vec!["second best", "best", "worst"]
        );
    }

    #[test]
    fn adapter_trait_object() {
        let extractor: Box<dyn KeywordExtractor> = Box::new(|_: &str| Vec::<(String, f64)>::new());
        assert!(extract_keywords(extractor.as_ref(), "anything").is_empty());
    }

    #[cfg(feature = "stopwords")]
    #[test]
    fn rake_phrases() {
        let rake = RakeExtractor::new(Language::English, 10, 3);
        let keywords = extract_keywords(
            &rake,
            "Compatibility of systems of linear constraints over the set of natural numbers",
        );
        assert_eq!(
            keywords,
            vec![
                "linear constraints",
                "natural numbers",
                "compatibility",
                "systems",
                "set"
            ]
        );
    }

    #[cfg(feature = "stopwords")]
    #[test]
    fn rake_scores_and_limits() {
        let rake = RakeExtractor::new(Language::English, 2, 1);
        let keywords = rake.extract_keywords("Rust parser, rust compiler and the rust book");
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].0, "rust");
        assert!((keywords[0].1 - 1.0).abs() < f64::EPSILON);
        assert!(keywords[1].1 <= 1.0);
    }

    #[cfg(feature = "stopwords")]
    #[test]
    fn rake_empty_text() {
        let rake = RakeExtractor::default();
        assert!(rake.extract_keywords("").is_empty());
        assert!(rake.extract_keywords("the of and 2024").is_empty());
    }
}
