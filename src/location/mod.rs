//! Resolving free text location mentions to a country and its continent.

use log::debug;

use crate::error::EnrichError;

pub use continent::ContinentCode;
pub use country::{countries, lookup_country, Country};
pub use literal::{parse_literal, Literal};

pub mod continent;
pub mod country;
pub mod literal;

/// Returned by [`get_continent`] if the continent can't be determined.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// A location field of a record.
///
/// Exported records store locations either as a list, as a stringified list
/// (`"['Paris', 'France']"`) or as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationList {
    /// A list of location mentions.
    Sequence(Vec<String>),
    /// A plain location or an encoded list.
    Text(String),
    /// Anything else, e.g. a missing value or a number.
    Other,
}

impl From<Vec<String>> for LocationList {
    fn from(items: Vec<String>) -> Self {
        LocationList::Sequence(items)
    }
}

impl<'a> From<Vec<&'a str>> for LocationList {
    fn from(items: Vec<&'a str>) -> Self {
        LocationList::Sequence(items.into_iter().map(str::to_string).collect())
    }
}

impl<'a, 'b> From<&'b [&'a str]> for LocationList {
    fn from(items: &'b [&'a str]) -> Self {
        LocationList::Sequence(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<String> for LocationList {
    fn from(text: String) -> Self {
        LocationList::Text(text)
    }
}

impl<'a> From<&'a str> for LocationList {
    fn from(text: &'a str) -> Self {
        LocationList::Text(text.to_string())
    }
}

impl<T: Into<LocationList>> From<Option<T>> for LocationList {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LocationList::Other)
    }
}

#[cfg(feature = "serde0")]
impl From<serde_json::Value> for LocationList {
    /// Arrays of strings become a `Sequence`, strings `Text` and everything
    /// else, including arrays with non string elements, `Other`.
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(text) => LocationList::Text(text),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(LocationList::Sequence)
                .unwrap_or(LocationList::Other),
            _ => LocationList::Other,
        }
    }
}

/// Joins the location mentions into a single space separated string.
///
/// Text is decoded as a python literal first. If that yields a list (or
/// tuple) of strings, the elements are joined, any other literal results in
/// an empty string. Text that is no literal at all is returned as is.
///
/// # Example
///
/// ```rust
///  use enricher::location::{location_list_to_string, LocationList};
///  assert_eq!(location_list_to_string(vec!["Paris", "France"]), "Paris France");
///  assert_eq!(location_list_to_string("['Paris', 'France']"), "Paris France");
///  assert_eq!(location_list_to_string("Paris"), "Paris");
///  assert_eq!(location_list_to_string(LocationList::Other), "");
/// ```
pub fn location_list_to_string<T: Into<LocationList>>(x: T) -> String {
    match x.into() {
        LocationList::Sequence(items) => items.join(" "),
        LocationList::Text(text) => match parse_literal(&text) {
            Ok(literal) => literal
                .into_strings()
                .map(|items| items.join(" "))
                .unwrap_or_default(),
            Err(_) => text,
        },
        LocationList::Other => String::new(),
    }
}

/// Finds the country mentioned in `text`.
///
/// Locations usually end with the country ("City, Region, Country"), so the
/// words are scanned from the back. For every word, starting with the last
/// one, the spans ending at that word are looked up, longest first, and the
/// canonical name of the first match is returned.
///
/// # Example
///
/// ```rust
///  use enricher::location::get_country_from_text;
///  assert_eq!(get_country_from_text("New York United States"), Some("United States"));
///  assert_eq!(get_country_from_text("Lyon, France"), Some("France"));
///  assert_eq!(get_country_from_text("Nowhereland"), None);
/// ```
pub fn get_country_from_text<'a, T: Into<Option<&'a str>>>(text: T) -> Option<&'static str> {
    let text = text.into()?;
    let words: Vec<&str> = text.split_whitespace().collect();
    let max_words = *country::MAX_NAME_WORDS;

    for end in (0..words.len()).rev() {
        let first = (end + 1).saturating_sub(max_words);
        for start in first..=end {
            let span = words[start..=end].join(" ");
            if let Some(country) = lookup_span(&span) {
                return Some(country.name);
            }
        }
    }
    debug!("No country in {:?}", text);
    None
}

/// Looks up the span as is and without surrounding punctuation.
fn lookup_span(span: &str) -> Option<&'static Country> {
    lookup_country(span).or_else(|| {
        let trimmed = span.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.len() != span.len() {
            lookup_country(trimmed)
        } else {
            None
        }
    })
}

/// The continent of the country named `country_name`.
///
/// Returns [`UNKNOWN_CONTINENT`] if the country or its continent is not
/// known.
///
/// # Example
///
/// ```rust
///  use enricher::location::{get_continent, get_country_from_text};
///  assert_eq!(get_continent("France"), "Europe");
///  assert_eq!(get_continent(get_country_from_text("Sydney Australia")), "Oceania");
///  assert_eq!(get_continent("NotACountry"), "Unknown");
/// ```
pub fn get_continent<'a, T: Into<Option<&'a str>>>(country_name: T) -> &'static str {
    match continent_of(country_name.into()) {
        Ok(continent) => continent.name(),
        Err(err) => {
            debug!("{}", err);
            UNKNOWN_CONTINENT
        }
    }
}

fn continent_of(country_name: Option<&str>) -> Result<ContinentCode, EnrichError> {
    let country_name = country_name.ok_or(EnrichError::InputTypeMismatch {
        expected: "country name",
    })?;
    let country = lookup_country(country_name)
        .ok_or_else(|| EnrichError::lookup_miss("country", country_name))?;
    ContinentCode::from_alpha2(country.alpha_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_sequences() {
        assert_eq!(location_list_to_string(vec!["Paris", "France"]), "Paris France");
        assert_eq!(
            location_list_to_string(vec!["Paris".to_string()]),
            "Paris"
        );
        assert_eq!(location_list_to_string(Vec::<String>::new()), "");
    }

    #[test]
    fn decode_text() {
        assert_eq!(location_list_to_string("['Paris', 'France']"), "Paris France");
        assert_eq!(location_list_to_string("('Lima', 'Peru')"), "Lima Peru");
        assert_eq!(location_list_to_string("Paris"), "Paris");
        assert_eq!(location_list_to_string("Paris, France"), "Paris, France");
        assert_eq!(location_list_to_string(""), "");
    }

    #[test]
    fn deeply_nested_text_is_kept() {
        let input = "[".repeat(200_000);
        assert_eq!(location_list_to_string(input.as_str()), input);

        let input = format!("{}'Paris'{}", "(".repeat(500), ")".repeat(500));
        assert_eq!(location_list_to_string(input.as_str()), input);
    }

    #[test]
    fn tuples_join_like_lists() {
        assert_eq!(location_list_to_string("('Lima', 'Peru')"), "Lima Peru");
        assert_eq!(location_list_to_string("('Lima',)"), "Lima");
    }

    #[test]
    fn non_list_literals() {
        assert_eq!(location_list_to_string("42"), "");
        assert_eq!(location_list_to_string("'Paris'"), "");
        assert_eq!(location_list_to_string("['Paris', 1]"), "");
        assert_eq!(location_list_to_string("None"), "");
    }

    #[test]
    fn other_values() {
        assert_eq!(location_list_to_string(LocationList::Other), "");
        assert_eq!(location_list_to_string(None::<String>), "");
        assert_eq!(location_list_to_string(Some("Oslo")), "Oslo");
    }

    #[cfg(feature = "serde0")]
    #[test]
    fn json_values() {
        use serde_json::json;
        assert_eq!(location_list_to_string(json!(["Paris", "France"])), "Paris France");
        assert_eq!(location_list_to_string(json!("['Paris', 'France']")), "Paris France");
        assert_eq!(location_list_to_string(json!(42)), "");
        assert_eq!(location_list_to_string(json!(null)), "");
        assert_eq!(location_list_to_string(json!(["Paris", 1])), "");
    }

    #[test]
    fn country_from_last_word() {
        assert_eq!(get_country_from_text("Paris France"), Some("France"));
        assert_eq!(get_country_from_text("Lyon, France."), Some("France"));
        assert_eq!(get_country_from_text("Berlin Germany France"), Some("France"));
    }

    #[test]
    fn country_spans() {
        assert_eq!(get_country_from_text("New York United States"), Some("United States"));
        assert_eq!(
            get_country_from_text("Port Moresby Papua New Guinea"),
            Some("Papua New Guinea")
        );
        assert_eq!(
            get_country_from_text("Seoul Korea, Republic of"),
            Some("Korea, Republic of")
        );
        assert_eq!(get_country_from_text("Stanley Falkland Islands (Malvinas)"), Some("Falkland Islands (Malvinas)"));
    }

    #[test]
    fn country_aliases_resolve_to_canonical_name() {
        assert_eq!(get_country_from_text("Austin USA"), Some("United States"));
        assert_eq!(get_country_from_text("La Paz Bolivia"), Some("Bolivia, Plurinational State of"));
        assert_eq!(get_country_from_text("london uk"), None);
        assert_eq!(get_country_from_text("london gb"), Some("United Kingdom"));
    }

    #[test]
    fn country_misses() {
        assert_eq!(get_country_from_text("Nowhereland"), None);
        assert_eq!(get_country_from_text(""), None);
        assert_eq!(get_country_from_text(None), None);
    }

    #[test]
    fn continents() {
        assert_eq!(get_continent("France"), "Europe");
        assert_eq!(get_continent("FRA"), "Europe");
        assert_eq!(get_continent("Japan"), "Asia");
        assert_eq!(get_continent("Brazil"), "South America");
        assert_eq!(get_continent("Canada"), "North America");
        assert_eq!(get_continent("Kenya"), "Africa");
        assert_eq!(get_continent("New Zealand"), "Oceania");
        assert_eq!(get_continent("Antarctica"), "Antarctica");
    }

    #[test]
    fn unknown_continent() {
        assert_eq!(get_continent("NotACountry"), UNKNOWN_CONTINENT);
        assert_eq!(get_continent(""), UNKNOWN_CONTINENT);
        assert_eq!(get_continent(None), UNKNOWN_CONTINENT);
    }

    #[test]
    fn resolve_pipeline() {
        let location = location_list_to_string("['Nairobi', 'Kenya']");
        let country = get_country_from_text(location.as_str());
        assert_eq!(country, Some("Kenya"));
        assert_eq!(get_continent(country), "Africa");
    }
}
