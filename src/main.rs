use std::path::PathBuf;
use std::time::Duration;

use futures::{stream, StreamExt};
use serde_json::{json, Value};
use structopt::StructOpt;

use enricher::{
    clean_title, extract_domain_parts, extract_keywords, get_continent, get_country_from_text,
    location_list_to_string, normalize_unicode, Config, Fetcher, Language, RakeExtractor,
};

/// Number of requests in flight at once.
const CONCURRENT_REQUESTS: usize = 10;

#[allow(missing_docs)]
#[derive(Debug, StructOpt)]
#[structopt(name = "enricher", about = "Enrich scraped records.")]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
enum App {
    #[structopt(name = "domain", about = "Split urls into subdomain, domain and suffix.")]
    Domain {
        #[structopt(name = "urls", help = "The urls or hosts to split.")]
        urls: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "accessible", about = "Check whether urls answer a HEAD request.")]
    Accessible {
        #[structopt(name = "urls", help = "The urls to check.")]
        urls: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "title", about = "Find the best title of web pages.")]
    Title {
        #[structopt(name = "urls", help = "The urls of the pages.")]
        urls: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "normalize", about = "Reduce texts to plain ascii.")]
    Normalize {
        #[structopt(name = "texts")]
        texts: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "clean", about = "Clean titles.")]
    Clean {
        #[structopt(name = "texts")]
        texts: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "keywords", about = "Extract the keywords of texts.")]
    Keywords {
        #[structopt(name = "texts")]
        texts: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "country", about = "Find the country mentioned in texts.")]
    Country {
        #[structopt(name = "texts")]
        texts: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(name = "continent", about = "Map country names to their continent.")]
    Continent {
        #[structopt(name = "countries")]
        countries: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
    #[structopt(
        name = "location",
        about = "Resolve location fields, plain or encoded as list, to country and continent."
    )]
    Location {
        #[structopt(name = "locations")]
        locations: Vec<String>,
        #[structopt(flatten)]
        opts: Opts,
    },
}

impl App {
    async fn run(self) -> anyhow::Result<()> {
        let (out, records): (Option<PathBuf>, Vec<Value>) = match self {
            App::Domain { urls, opts } => (
                opts.output,
                urls.into_iter()
                    .map(|url| {
                        let parts = extract_domain_parts(&url);
                        let registered = parts.registered_domain();
                        json!({
                            "input": url,
                            "domain": parts,
                            "registered_domain": registered,
                        })
                    })
                    .collect(),
            ),
            App::Accessible { urls, opts } => {
                let fetcher = Fetcher::new(&opts.as_config())?;
                let records = stream::iter(urls.into_iter().map(|url| {
                    let fetcher = fetcher.clone();
                    async move {
                        let accessible = fetcher.is_url_accessible(&url).await;
                        json!({ "input": url, "accessible": accessible })
                    }
                }))
                .buffer_unordered(CONCURRENT_REQUESTS)
                .collect::<Vec<_>>()
                .await;
                (opts.output, records)
            }
            App::Title { urls, opts } => {
                let fetcher = Fetcher::new(&opts.as_config())?;
                let records = stream::iter(urls.into_iter().map(|url| {
                    let fetcher = fetcher.clone();
                    async move {
                        let title = fetcher.get_best_title_from_url(&url).await;
                        json!({ "input": url, "title": title })
                    }
                }))
                .buffer_unordered(CONCURRENT_REQUESTS)
                .collect::<Vec<_>>()
                .await;
                (opts.output, records)
            }
            App::Normalize { texts, opts } => (
                opts.output,
                texts
                    .into_iter()
                    .map(|text| {
                        let normalized = normalize_unicode(text.as_str());
                        json!({ "input": text, "normalized": normalized })
                    })
                    .collect(),
            ),
            App::Clean { texts, opts } => (
                opts.output,
                texts
                    .into_iter()
                    .map(|text| {
                        let title = clean_title(text.as_str());
                        json!({ "input": text, "title": title })
                    })
                    .collect(),
            ),
            App::Keywords { texts, opts } => {
                let rake = RakeExtractor::from_config(&opts.as_config());
                let records = texts
                    .into_iter()
                    .map(|text| {
                        let keywords = extract_keywords(&rake, &text);
                        json!({ "input": text, "keywords": keywords })
                    })
                    .collect();
                (opts.output, records)
            }
            App::Country { texts, opts } => (
                opts.output,
                texts
                    .into_iter()
                    .map(|text| {
                        let country = get_country_from_text(text.as_str());
                        json!({ "input": text, "country": country })
                    })
                    .collect(),
            ),
            App::Continent { countries, opts } => (
                opts.output,
                countries
                    .into_iter()
                    .map(|country| {
                        let continent = get_continent(country.as_str());
                        json!({ "input": country, "continent": continent })
                    })
                    .collect(),
            ),
            App::Location { locations, opts } => (
                opts.output,
                locations
                    .into_iter()
                    .map(|location| {
                        let joined = location_list_to_string(location.as_str());
                        let country = get_country_from_text(joined.as_str());
                        json!({
                            "input": location,
                            "location": joined,
                            "country": country,
                            "continent": get_continent(country),
                        })
                    })
                    .collect(),
            ),
        };
        Self::write(out, records).await
    }

    /// Writes the records as json.
    ///
    /// If a output file is configured, then the records will be stored there,
    /// otherwise to std::out.
    async fn write(out: Option<PathBuf>, records: Vec<Value>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&records)?;
        if let Some(out) = out {
            tokio::fs::write(out, json).await?;
        } else {
            println!("{}", json);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, StructOpt)]
pub struct Opts {
    #[structopt(long = "timeout", help = "Request timeout in seconds.")]
    timeout: Option<u64>,
    #[structopt(long = "user-agent", help = "The user-agent used for HEAD requests.")]
    user_agent: Option<String>,
    #[structopt(
        long = "browser-user-agent",
        help = "The user-agent used to download pages."
    )]
    browser_user_agent: Option<String>,
    #[structopt(long = "max-keywords", help = "Maximum number of keywords.")]
    max_keywords: Option<usize>,
    #[structopt(long = "ngram", help = "Maximum number of words of a keyword.")]
    max_keyword_ngram: Option<usize>,
    #[structopt(long = "language", help = "Language of the texts, e.g. `en` or `german`.")]
    language: Option<String>,
    #[structopt(
        long = "output",
        short = "o",
        help = "The file to store the results as json.",
        parse(from_os_str)
    )]
    output: Option<PathBuf>,
}

impl Opts {
    fn as_config(&self) -> Config {
        let mut config = Config::builder();
        if let Some(timeout) = self.timeout {
            config = config.request_timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = self.user_agent.clone() {
            config = config.user_agent(user_agent);
        }
        if let Some(browser_user_agent) = self.browser_user_agent.clone() {
            config = config.browser_user_agent(browser_user_agent);
        }
        if let Some(max_keywords) = self.max_keywords {
            config = config.max_keywords(max_keywords);
        }
        if let Some(max_keyword_ngram) = self.max_keyword_ngram {
            config = config.max_keyword_ngram(max_keyword_ngram);
        }
        if let Some(language) = self.language.as_ref() {
            // unknown languages are kept as `Other` and run without stopwords
            let language = language
                .parse::<Language>()
                .unwrap_or_else(|other| other);
            config = config.keyword_language(language);
        }

        config.build()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    App::from_args().run().await
}
