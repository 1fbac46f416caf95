//! Scraper configuration.

/// Configuration for one register scrape.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// URL of the register index page carrying the PDF links.
    pub register_url: String,
    /// Fixed contact URL stamped onto every record's `comment_url`.
    pub comment_url: String,
    /// Optional proxy URL for all HTTP traffic.
    pub proxy: Option<String>,
}

impl ScrapeConfig {
    /// Configuration for the given register and contact URLs, no proxy.
    pub fn new(register_url: impl Into<String>, comment_url: impl Into<String>) -> Self {
        Self {
            register_url: register_url.into(),
            comment_url: comment_url.into(),
            proxy: None,
        }
    }

    /// Set the proxy URL.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(
            "https://www.onkaparingacity.com/development-register",
            "mailto:mail@onkaparingacity.com",
        )
    }
}
