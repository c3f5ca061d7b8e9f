// src/services/details.rs

//! Detail page extraction.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::JobSelectors;
use crate::services::parse_selector;
use crate::utils::http::PageFetcher;

/// Pulls the long-form description out of a job detail page.
#[derive(Debug, Clone)]
pub struct DetailExtractor {
    description: Selector,
}

impl DetailExtractor {
    pub fn new(selectors: &JobSelectors) -> Result<Self> {
        Ok(Self {
            description: parse_selector(&selectors.description)?,
        })
    }

    /// Return the trimmed description text, or an empty string when the page
    /// has no description container.
    pub fn extract(&self, markup: &str) -> String {
        let document = Html::parse_document(markup);
        document
            .select(&self.description)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Fetch a detail page and extract its description.
    ///
    /// Transport failures are errors; a page without a description is not.
    pub async fn fetch(&self, fetcher: &dyn PageFetcher, url: &str) -> Result<String> {
        let markup = fetcher
            .fetch(url)
            .await
            .map_err(|e| AppError::crawl(format!("detail page {url}"), e))?;
        Ok(self.extract(&markup))
    }
}
