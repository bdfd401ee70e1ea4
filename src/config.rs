use std::time::Duration;

use crate::language::Language;

/// Settings shared by the enrichment functions.
///
/// Constructed once, e.g. from command line flags, and passed down
/// explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timeout for requests.
    request_timeout: Duration,
    /// The user-agent used for existence checks.
    user_agent: String,
    /// The user-agent used when downloading pages.
    browser_user_agent: String,
    /// Number of keywords to extract.
    max_keywords: usize,
    /// Max. number of words of a single keyphrase.
    max_keyword_ngram: usize,
    /// Language of the texts keywords are extracted from.
    keyword_language: Language,
}

impl Config {
    /// Default timeout for requests made inside `enricher`.
    pub const DEFAULT_REQ_TIMEOUT_SEC: u64 = 5;

    /// Minimal browser identification, enough to get past trivial bot
    /// blocking.
    pub const DEFAULT_BROWSER_USER_AGENT: &'static str = "Mozilla/5.0";

    /// Default user agent for `enricher`.
    #[inline]
    pub(crate) fn user_agent() -> String {
        format!("enricher/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Convenience method to create a [`ConfigBuilder`]
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn agent(&self) -> &str {
        &self.user_agent
    }

    pub fn browser_user_agent(&self) -> &str {
        &self.browser_user_agent
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    pub fn max_keyword_ngram(&self) -> usize {
        self.max_keyword_ngram
    }

    pub fn keyword_language(&self) -> &Language {
        &self.keyword_language
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    /// Timeout for requests.
    request_timeout: Option<Duration>,
    /// The user-agent used for existence checks.
    user_agent: Option<String>,
    /// The user-agent used when downloading pages.
    browser_user_agent: Option<String>,
    /// Number of keywords to extract.
    max_keywords: Option<usize>,
    /// Max. number of words of a single keyphrase.
    max_keyword_ngram: Option<usize>,
    /// Language of the texts keywords are extracted from.
    keyword_language: Option<Language>,
}

impl ConfigBuilder {
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn user_agent<T: ToString>(mut self, user_agent: T) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn browser_user_agent<T: ToString>(mut self, browser_user_agent: T) -> Self {
        self.browser_user_agent = Some(browser_user_agent.to_string());
        self
    }

    pub fn max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = Some(max_keywords);
        self
    }

    pub fn max_keyword_ngram(mut self, max_keyword_ngram: usize) -> Self {
        self.max_keyword_ngram = Some(max_keyword_ngram);
        self
    }

    pub fn keyword_language(mut self, keyword_language: Language) -> Self {
        self.keyword_language = Some(keyword_language);
        self
    }

    pub fn build(self) -> Config {
        Config {
            request_timeout: self
                .request_timeout
                .unwrap_or_else(|| Duration::from_secs(Config::DEFAULT_REQ_TIMEOUT_SEC)),
            user_agent: self.user_agent.unwrap_or_else(Config::user_agent),
            browser_user_agent: self
                .browser_user_agent
                .unwrap_or_else(|| Config::DEFAULT_BROWSER_USER_AGENT.to_string()),
            max_keywords: self.max_keywords.unwrap_or(5),
            // a phrase needs at least one word
            max_keyword_ngram: self.max_keyword_ngram.unwrap_or(3).max(1),
            keyword_language: self.keyword_language.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.browser_user_agent(), "Mozilla/5.0");
        assert!(config.agent().starts_with("enricher/"));
        assert_eq!(config.keyword_language(), &Language::English);
    }

    #[test]
    fn overrides() {
        let config = Config::builder()
            .request_timeout(Duration::from_millis(250))
            .browser_user_agent("Mozilla/5.0 (X11; Linux x86_64)")
            .max_keywords(10)
            .max_keyword_ngram(0)
            .build();
        assert_eq!(config.request_timeout(), Duration::from_millis(250));
        assert_eq!(config.browser_user_agent(), "Mozilla/5.0 (X11; Linux x86_64)");
        assert_eq!(config.max_keywords(), 10);
        assert_eq!(config.max_keyword_ngram(), 1);
    }
}
