//! Splitting hosts into subdomain, registrable domain and public suffix.

use log::debug;
use psl::Type;
#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use url::{Host, Url};

use crate::error::EnrichError;

/// The components of a host.
///
/// For `blog.example.co.uk` this is `blog`, `example` and `co.uk`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
pub struct DomainParts {
    /// Everything left of the registrable domain, may contain dots.
    pub subdomain: String,
    /// The label directly left of the public suffix.
    pub domain_root: String,
    /// The public suffix, may contain dots (`co.uk`).
    pub tld: String,
}

impl DomainParts {
    /// The registrable domain, `example.co.uk`.
    ///
    /// Empty if either the root or the suffix is unknown.
    pub fn registered_domain(&self) -> String {
        if self.domain_root.is_empty() || self.tld.is_empty() {
            return String::new();
        }
        format!("{}.{}", self.domain_root, self.tld)
    }

    /// The full host, `blog.example.co.uk`.
    pub fn fqdn(&self) -> String {
        let registered = self.registered_domain();
        if registered.is_empty() || self.subdomain.is_empty() {
            return registered;
        }
        format!("{}.{}", self.subdomain, registered)
    }
}

/// Splits the domain of a url or bare host into its [`DomainParts`].
///
/// Only the first whitespace separated token of `domain` is considered.
/// Scheme, credentials, port, path, query and fragment are ignored. Suffixes
/// come from the ICANN section of the public suffix list, unknown suffixes
/// leave `tld` empty.
///
/// Never fails, input without a host results in empty parts.
///
/// # Example
///
/// ```rust
///  use enricher::domain::extract_domain_parts;
///  let parts = extract_domain_parts("  http://blog.example.co.uk/path more text");
///  assert_eq!(parts.subdomain, "blog");
///  assert_eq!(parts.domain_root, "example");
///  assert_eq!(parts.tld, "co.uk");
/// ```
pub fn extract_domain_parts(domain: &str) -> DomainParts {
    let token = match domain.split_whitespace().next() {
        Some(token) => token,
        None => return DomainParts::default(),
    };
    match host_of(token) {
        Ok(host) => split_host(&host),
        Err(err) => {
            debug!("No host in {:?}: {}", token, err);
            DomainParts::default()
        }
    }
}

/// The host of `input`, which may or may not carry a scheme.
fn host_of(input: &str) -> Result<Host<String>, EnrichError> {
    let url = if input.contains("://") {
        Url::parse(input)
    } else {
        Url::parse(&format!("http://{}", input))
    }
    .map_err(|_| EnrichError::parse_failure(input, "url"))?;

    url.host()
        .map(|host| host.to_owned())
        .ok_or_else(|| EnrichError::parse_failure(input, "host"))
}

fn split_host(host: &Host<String>) -> DomainParts {
    let name = match host {
        Host::Domain(name) => name.trim_end_matches('.'),
        Host::Ipv4(addr) => {
            return DomainParts {
                domain_root: addr.to_string(),
                ..Default::default()
            }
        }
        Host::Ipv6(addr) => {
            return DomainParts {
                domain_root: addr.to_string(),
                ..Default::default()
            }
        }
    };
    if name.is_empty() {
        return DomainParts::default();
    }

    let tld = icann_suffix(name).unwrap_or("");
    let rest = if tld.is_empty() {
        name
    } else {
        name[..name.len() - tld.len()].trim_end_matches('.')
    };

    let (subdomain, domain_root) = match rest.rfind('.') {
        Some(idx) => (&rest[..idx], &rest[idx + 1..]),
        None => ("", rest),
    };

    DomainParts {
        subdomain: subdomain.to_string(),
        domain_root: domain_root.to_string(),
        tld: tld.to_string(),
    }
}

/// The longest known ICANN suffix of `name`.
///
/// Private suffixes (`blogspot.com`, `github.io`) are walked back label by
/// label until an ICANN suffix remains.
fn icann_suffix(name: &str) -> Option<&str> {
    let mut candidate = name;
    loop {
        let suffix = psl::suffix(candidate.as_bytes())?;
        if !suffix.is_known() {
            return None;
        }
        let len = suffix.as_bytes().len();
        if suffix.typ() != Some(Type::Private) {
            return Some(&name[name.len() - len..]);
        }
        // drop the leftmost label of the private suffix and try again
        let private = &candidate[candidate.len() - len..];
        candidate = private.splitn(2, '.').nth(1)?;
    }
}
