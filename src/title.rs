//! Recovering a human readable title for a page.

use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use select::document::Document;
use select::predicate::Name;

use crate::config::Config;
use crate::error::EnrichError;

/// The heading levels that are harvested, in this order, after the title.
pub const HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// Issues the requests for existence checks and title lookups.
///
/// Connections are not kept alive between calls, every request opens and
/// releases its own.
#[derive(Debug, Clone)]
pub struct Fetcher {
    /// Drives the `HEAD` requests, does not follow redirects.
    probe: Client,
    /// Drives the `GET` requests with the browser user agent.
    browser: Client,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, EnrichError> {
        let probe = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.agent())
            .redirect(Policy::none())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|error| EnrichError::ClientBuild { error })?;

        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(config.browser_user_agent())
                .map_err(|_| EnrichError::parse_failure(config.browser_user_agent(), "header"))?,
        );

        let browser = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|error| EnrichError::ClientBuild { error })?;

        Ok(Self { probe, browser })
    }

    /// Whether `url` answers a `HEAD` request with a status below 400.
    ///
    /// Redirects count as accessible. Timeouts, connection errors and
    /// malformed urls all result in `false`.
    pub async fn is_url_accessible(&self, url: &str) -> bool {
        match self.head_status(url).await {
            Ok(status) => status.as_u16() < 400,
            Err(err) => {
                debug!("HEAD {} failed: {}", url, err);
                false
            }
        }
    }

    /// Downloads `url` and selects the best title, see [`best_title`].
    ///
    /// Returns `None` for anything but a `200 OK` response, for failed
    /// requests and for pages without any title or heading.
    pub async fn get_best_title_from_url(&self, url: &str) -> Option<String> {
        match self.fetch_document(url).await {
            Ok(doc) => best_title(&doc),
            Err(err) => {
                debug!("GET {} failed: {}", url, err);
                None
            }
        }
    }

    async fn head_status(&self, url: &str) -> Result<StatusCode, EnrichError> {
        let resp = self.probe.head(url).send().await?;
        Ok(resp.status())
    }

    async fn fetch_document(&self, url: &str) -> Result<Document, EnrichError> {
        let resp = self.browser.get(url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(EnrichError::NoHttpSuccess {
                status: resp.status(),
            });
        }
        let body = resp.text().await?;
        Ok(Document::from(body.as_str()))
    }
}

/// Checks `url` with the default [`Config`].
pub async fn is_url_accessible(url: &str) -> bool {
    match Fetcher::new(&Config::default()) {
        Ok(fetcher) => fetcher.is_url_accessible(url).await,
        Err(err) => {
            debug!("{}", err);
            false
        }
    }
}

/// Fetches the best title of `url` with the default [`Config`].
pub async fn get_best_title_from_url(url: &str) -> Option<String> {
    match Fetcher::new(&Config::default()) {
        Ok(fetcher) => fetcher.get_best_title_from_url(url).await,
        Err(err) => {
            debug!("{}", err);
            None
        }
    }
}

/// All title candidates of the document.
///
/// The text of the first `<title>` comes first, followed by every `h1`, then
/// every `h2` and every `h3` in document order. Each candidate is trimmed,
/// blank candidates are skipped.
pub fn title_candidates(doc: &Document) -> Vec<String> {
    let title = doc.find(Name("title")).next().map(|node| node.text());

    title
        .into_iter()
        .chain(
            HEADING_TAGS
                .iter()
                .flat_map(move |tag| doc.find(Name(*tag)).map(|node| node.text())),
        )
        .map(|txt| txt.trim().to_string())
        .filter(|txt| !txt.is_empty())
        .collect()
}

/// The longest of the [`title_candidates`], counted in chars.
///
/// Headings are often more descriptive than the generic page title. Among
/// candidates of the same length the first one wins, so the `<title>` is
/// preferred over a heading of equal length.
pub fn best_title(doc: &Document) -> Option<String> {
    let mut best: Option<(usize, String)> = None;
    for candidate in title_candidates(doc) {
        let len = candidate.chars().count();
        trace!("title candidate ({} chars): {:?}", len, candidate);
        if best.as_ref().map_or(true, |(max, _)| len > *max) {
            best = Some((len, candidate));
        }
    }
    best.map(|(_, title)| title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_beats_short_title() {
        let doc = Document::from(
            r#"<html><head><title>Home</title></head>
            <body><h1>News</h1><h2>A much longer and more useful heading</h2></body></html>"#,
        );
        assert_eq!(
            best_title(&doc),
            Some("A much longer and more useful heading".to_string())
        );
    }

    #[test]
    fn title_wins_ties() {
        let doc = Document::from(
            r#"<html><head><title>  Home  </title></head><body><h1>News</h1><h2>Feed</h2></body></html>"#,
        );
        assert_eq!(best_title(&doc), Some("Home".to_string()));

        let doc = Document::from(r#"<body><h2>Left</h2><h2>Both</h2><h1>One</h1></body>"#);
        assert_eq!(best_title(&doc), Some("Left".to_string()));
    }

    #[test]
    fn candidates_order() {
        let doc = Document::from(
            r#"<html><head><title>T</title></head>
            <body><h3>third</h3><h2>second</h2><h1>first</h1><h1>   </h1><h1>again</h1></body></html>"#,
        );
        assert_eq!(
            title_candidates(&doc),
            vec!["T", "first", "again", "second", "third"]
        );
    }

    #[test]
    fn nested_heading_text() {
        let doc = Document::from(r#"<h2>  Hello <b>World</b>  </h2>"#);
        assert_eq!(best_title(&doc), Some("Hello World".to_string()));
    }

    #[test]
    fn counts_chars_not_bytes() {
        let doc = Document::from(r#"<title>ééééé</title><h1>abcdef</h1>"#);
        assert_eq!(best_title(&doc), Some("abcdef".to_string()));
    }

    #[test]
    fn no_candidates() {
        let doc = Document::from(r#"<html><head></head><body><p>text only</p><h1> </h1></body></html>"#);
        assert_eq!(best_title(&doc), None);
        assert!(title_candidates(&doc).is_empty());
    }
}
