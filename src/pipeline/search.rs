// src/pipeline/search.rs

//! Search pagination pipeline.
//!
//! Result pages are loaded one at a time through the browser. For each page
//! the detail pages of its listings are fetched concurrently, and the whole
//! batch completes before the records are appended and the operator is asked
//! whether to continue.

use std::fmt;

use chrono::Utc;
use futures::future::join_all;

use crate::error::{AppError, Result};
use crate::models::{Config, JobListing, JobRecord, ResultSet, RunStats, SearchQuery};
use crate::services::{DetailExtractor, ListingExtractor, PageRenderer};
use crate::utils::report;
use crate::utils::http::PageFetcher;
use crate::utils::prompt::Operator;

/// Why pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The page had no results container
    NoResults,
    /// The operator answered "no" at the continue prompt
    Declined,
    /// `search.max_pages` pages were visited
    PageLimit,
    /// Loading, parsing or fetching failed
    Failed(String),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NoResults => write!(f, "no more results"),
            StopReason::Declined => write!(f, "stopped by operator"),
            StopReason::PageLimit => write!(f, "page limit reached"),
            StopReason::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Records and statistics of a finished search.
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: ResultSet,
    pub stop: StopReason,
    pub stats: RunStats,
}

/// Progress that survives a failed page.
#[derive(Debug, Default)]
struct Progress {
    results: ResultSet,
    /// Page being loaded or processed, 1-based
    current_page: usize,
    pages_visited: usize,
}

/// Drives result-page pagination for one query.
struct SearchDriver<'a> {
    config: &'a Config,
    listings: ListingExtractor,
    details: DetailExtractor,
}

impl<'a> SearchDriver<'a> {
    fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            listings: ListingExtractor::new(&config.selectors)?,
            details: DetailExtractor::new(&config.selectors)?,
        })
    }

    async fn paginate(
        &self,
        query: &SearchQuery,
        renderer: &mut dyn PageRenderer,
        fetcher: &dyn PageFetcher,
        operator: &mut dyn Operator,
        progress: &mut Progress,
    ) -> Result<StopReason> {
        let mut offset = 0;

        loop {
            let page = progress.pages_visited + 1;
            progress.current_page = page;
            let url = query.page_url(&self.config.search.base_url, offset)?;
            log::info!("Loading page {} ({})", page, url);

            let markup = renderer.render(&url).await?;
            progress.pages_visited = page;

            let Some(listings) = self.listings.parse(&markup, Some(&url)) else {
                log::info!("Page {}: no results container", page);
                return Ok(StopReason::NoResults);
            };
            log::info!("Page {}: {} listings", page, listings.len());

            let records = self.fetch_details(listings, fetcher).await?;
            let described = records.iter().filter(|r| r.has_description()).count();
            log::info!(
                "Page {}: {} descriptions fetched ({} empty)",
                page,
                described,
                records.len() - described
            );
            progress.results.append_page(records);

            if self.config.search.max_pages == Some(page) {
                return Ok(StopReason::PageLimit);
            }
            if !operator.confirm_continue(page)? {
                return Ok(StopReason::Declined);
            }

            offset += self.config.search.page_size;
        }
    }

    /// Fetch every listing's description concurrently and wait for all.
    ///
    /// Records come back in listing order regardless of completion order.
    async fn fetch_details(
        &self,
        listings: Vec<JobListing>,
        fetcher: &dyn PageFetcher,
    ) -> Result<Vec<JobRecord>> {
        let batch = listings.into_iter().map(|listing| async move {
            let description = self.details.fetch(fetcher, &listing.link).await?;
            Ok::<_, AppError>(JobRecord::new(listing, description))
        });

        join_all(batch).await.into_iter().collect()
    }
}

/// Run the search pipeline.
///
/// Takes ownership of the browser session and closes it before returning,
/// whatever the outcome. Failures while paginating end the search but keep the
/// records collected from earlier pages.
pub async fn run_search<R: PageRenderer>(
    config: &Config,
    query: &SearchQuery,
    mut renderer: R,
    fetcher: &dyn PageFetcher,
    operator: &mut dyn Operator,
) -> Result<SearchOutcome> {
    let start_time = Utc::now();

    let driver = match SearchDriver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            release(&mut renderer).await;
            return Err(e);
        }
    };

    report::header(&format!("Job search: {} / {}", query.title, query.location));
    log::info!(
        "Searching \"{}\" in \"{}\" ({} per page)",
        query.title,
        query.location,
        config.search.page_size
    );

    let mut progress = Progress::default();
    let stop = match driver
        .paginate(query, &mut renderer, fetcher, operator, &mut progress)
        .await
    {
        Ok(stop) => stop,
        Err(e) => {
            log::error!("Search aborted on page {}: {}", progress.current_page, e);
            report::failure(&format!("An error occurred: {e}"));
            StopReason::Failed(format!("page {}: {e}", progress.current_page))
        }
    };

    release(&mut renderer).await;

    let stats = RunStats {
        start_time,
        end_time: Utc::now(),
        pages_visited: progress.pages_visited,
        record_count: progress.results.len(),
        described_count: progress.results.described_count(),
    };

    report::summary(
        "Search",
        &[
            ("Stopped", stop.to_string()),
            ("Pages", stats.pages_visited.to_string()),
            ("Records", stats.record_count.to_string()),
            ("With description", stats.described_count.to_string()),
            ("Elapsed", format!("{}s", stats.elapsed_secs())),
        ],
    );

    Ok(SearchOutcome {
        results: progress.results,
        stop,
        stats,
    })
}

async fn release(renderer: &mut dyn PageRenderer) {
    match renderer.close().await {
        Ok(()) => log::debug!("Browser session closed"),
        Err(e) => log::warn!("Failed to close browser session: {}", e),
    }
}
