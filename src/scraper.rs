use log::{error, info, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use std::time::Duration;
use url::Url;

const BASE_URL: &str = "https://www.karriere.at/jobs";

/// Blocking fetch layer for karriere.at. Everything network-related lives
/// here; callers get page HTML or None, never an error to handle.
pub struct KarriereScraper {
    client: Client,
}

impl KarriereScraper {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        KarriereScraper { client }
    }

    fn get_random_user_agent(&self) -> &str {
        let uas = [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
        ];
        use rand::Rng;
        let mut rng = rand::thread_rng();
        uas[rng.gen_range(0..uas.len())]
    }

    /// One search-result page for a query in Vienna. URL shape:
    /// /jobs/{query}/wien?page={n}
    pub fn fetch_search_page(&self, query: &str, page: usize) -> Option<String> {
        let url = format!("{}/{}/wien?page={}", BASE_URL, query, page);
        info!("Scraping page {}: {}", page, url);
        self.fetch_page(&url)
    }

    /// Fetches any page and returns its HTML. Transport errors, blocks and
    /// non-success statuses all collapse to None; the caller treats that as
    /// "no node available" and moves on.
    pub fn fetch_page(&self, url: &str) -> Option<String> {
        if Url::parse(url).is_err() {
            error!("Invalid URL: {}", url);
            return None;
        }

        let ua = self.get_random_user_agent();
        let resp = match self.client.get(url).header(USER_AGENT, ua).send() {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return None;
            }
        };

        let status = resp.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            warn!("Blocked at {}: {}", url, status);
            return None;
        }
        if !status.is_success() {
            warn!("Failed to retrieve page {}: {}", url, status);
            return None;
        }

        match resp.text() {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("Failed to read body of {}: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_yields_none() {
        let scraper = KarriereScraper::new();
        assert!(scraper.fetch_page("not a url").is_none());
    }
}
