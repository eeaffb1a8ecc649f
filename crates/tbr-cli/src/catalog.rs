//! Catalog search client
//!
//! Queries the OpenLibrary search API for candidate books. The store
//! never talks to the catalog; search results are converted to `Book`
//! values and handed to it.

use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

use tbr_core::Book;

/// OpenLibrary search endpoint
const SEARCH_ENDPOINT: &str = "https://openlibrary.org/search.json";

/// Fields requested per result, to keep responses small
const SEARCH_FIELDS: &str = "key,title,author_name,first_publish_year,number_of_pages_median";

/// Fetch timeout in seconds
const FETCH_TIMEOUT: u64 = 10;

/// One page of catalog search results
#[derive(Debug, Default, Deserialize)]
pub struct SearchPage {
    /// Candidate records, in catalog relevance order
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
    /// Total matches across all pages
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
}

/// One candidate record from the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDoc {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub first_publish_year: Option<i64>,
    pub number_of_pages_median: Option<i64>,
}

impl From<SearchDoc> for Book {
    fn from(doc: SearchDoc) -> Self {
        let mut book = Book::new(doc.key, doc.title);
        book.authors = doc.author_name;
        book.first_publish_year = doc.first_publish_year;
        book.pages_median = doc.number_of_pages_median;
        book
    }
}

/// Client for the catalog search API
pub struct CatalogClient {
    http: reqwest::Client,
    page_size: usize,
}

impl CatalogClient {
    /// Create a client requesting `page_size` results per page
    pub fn new(page_size: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT))
            .user_agent("Mozilla/5.0 (compatible; TBR/1.0)")
            .build()?;

        Ok(Self { http, page_size })
    }

    /// Fetch one page of results for a query (pages are 1-based)
    ///
    /// Each call is awaited to completion before another can be issued,
    /// so a superseded response can never overwrite a newer one.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage> {
        let page_param = page.to_string();
        let limit_param = self.page_size.to_string();
        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("q", query),
                ("page", page_param.as_str()),
                ("limit", limit_param.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Catalog returned HTTP {}", response.status());
        }

        Ok(response.json::<SearchPage>().await?)
    }

    /// Number of pages needed for `num_found` matches
    pub fn page_count(&self, num_found: u64) -> u64 {
        num_found.div_ceil(self.page_size as u64)
    }
}
