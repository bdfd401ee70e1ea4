//! Helpers to enrich scraped records.
//!
//! Every function here is best effort: failures are logged at `debug` level
//! and mapped onto a documented sentinel (an empty string, `None`, `false`
//! or `"Unknown"`), a single bad record never aborts a batch.

pub use clean::{clean_title, normalize_unicode};
pub use config::{Config, ConfigBuilder};
pub use domain::{extract_domain_parts, DomainParts};
pub use error::EnrichError;
#[cfg(feature = "stopwords")]
pub use keywords::RakeExtractor;
pub use keywords::{extract_keywords, KeywordExtractor};
pub use language::Language;
pub use location::{
    get_continent, get_country_from_text, location_list_to_string, LocationList,
    UNKNOWN_CONTINENT,
};
pub use title::{get_best_title_from_url, is_url_accessible, Fetcher};

pub mod clean;
pub mod config;
pub mod domain;
mod error;
pub mod keywords;
pub mod language;
pub mod location;
#[cfg(feature = "stopwords")]
pub mod stopwords;
pub mod text;
pub mod title;

/// Rexported to run the title heuristics on own documents.
pub use select;
