//! Register page fetching and PDF link discovery.
//!
//! Council register sites are plain HTML index pages with anchor links
//! to monthly PDF files. The client fetches the index, collects the
//! absolute PDF URLs, and downloads PDF bytes for the decoder.

use std::time::Duration;

use reqwest::Url;
use scraper::{Html, Selector};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const USER_AGENT: &str = concat!("planscrape/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for one register site.
#[derive(Debug, Clone)]
pub struct RegisterClient {
    http: reqwest::Client,
}

impl RegisterClient {
    /// Build a client honoring the configuration's proxy setting.
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT);

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Fetch the register index page as HTML text.
    pub async fn fetch_index(&self, url: &str) -> Result<String, ScrapeError> {
        log::info!("fetching register index {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Download one PDF's bytes.
    pub async fn fetch_pdf(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        log::info!("fetching pdf {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Collect the absolute URLs of all PDF links on an index page.
///
/// Anchors whose `href` ends in `.pdf` (case-insensitive, query string
/// ignored) count; relative links are resolved against `base_url`.
/// Unresolvable hrefs are skipped. Duplicate URLs are kept once, in
/// first-seen order.
pub fn discover_pdf_links(html: &str, base_url: &str) -> Result<Vec<String>, ScrapeError> {
    let base = Url::parse(base_url).map_err(|e| ScrapeError::BadUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("static selector");

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };
        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(_) => {
                log::debug!("skipping unresolvable link {href:?}");
                continue;
            }
        };
        if !resolved.path().to_ascii_lowercase().ends_with(".pdf") {
            continue;
        }
        let url = resolved.to_string();
        if !links.contains(&url) {
            links.push(url);
        }
    }

    log::info!("discovered {} pdf link(s)", links.len());
    Ok(links)
}
