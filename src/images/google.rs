// images/google.rs
use crate::config::SearchConfig;
use crate::images::search::{ImageSearch, SearchError};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const PAGE_SIZE: u32 = 10;

/// Google Custom Search client restricted to image results.
pub struct GoogleImageSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
    max_pages: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    queries: Option<SearchQueries>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQueries {
    #[serde(default)]
    next_page: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRef {
    start_index: Option<u32>,
}

impl SearchResponse {
    fn first_link(&self) -> Option<&str> {
        self.items
            .iter()
            .filter_map(|item| item.link.as_deref())
            .find(|link| !link.is_empty())
    }

    fn next_start(&self) -> Option<u32> {
        self.queries.as_ref()?.next_page.first()?.start_index
    }
}

impl GoogleImageSearch {
    pub fn new(
        config: &SearchConfig,
        api_key: String,
        engine_id: String,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            engine_id,
            max_pages: config.max_pages,
        })
    }

    fn page_url(&self, query: &str, start: u32) -> Result<Url, SearchError> {
        let num = PAGE_SIZE.to_string();
        let start = start.to_string();
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("searchType", "image"),
                ("num", num.as_str()),
                ("start", start.as_str()),
            ],
        )
        .map_err(|e| SearchError::Request(format!("bad endpoint '{}': {e}", self.endpoint)))
    }

    fn fetch_page(&self, query: &str, start: u32) -> Result<SearchResponse, SearchError> {
        let url = self.page_url(query, start)?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<SearchResponse>()
            .map_err(|e| SearchError::Decode(e.to_string()))
    }
}

impl ImageSearch for GoogleImageSearch {
    /// Walks result pages until an item carries a link.
    fn first_image(&self, query: &str) -> Result<Option<String>, SearchError> {
        let mut start = 1;
        for _ in 0..self.max_pages {
            let page = self.fetch_page(query, start)?;
            if let Some(link) = page.first_link() {
                return Ok(Some(link.to_string()));
            }
            match page.next_start() {
                Some(next) if next > start => start = next,
                _ => break,
            }
        }
        Ok(None)
    }
}
