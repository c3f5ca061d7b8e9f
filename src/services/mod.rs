//! Service layer for the job crawler.
//!
//! This module contains the scraping logic for:
//! - Search-results parsing (`ListingExtractor`)
//! - Detail page parsing (`DetailExtractor`)
//! - Browser rendering of result pages (`PageRenderer`, `ChromeRenderer`)

mod browser;
mod details;
mod listings;

pub use browser::{ChromeRenderer, PageRenderer};
pub use details::DetailExtractor;
pub use listings::ListingExtractor;

use scraper::Selector;

use crate::error::{AppError, Result};

pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
