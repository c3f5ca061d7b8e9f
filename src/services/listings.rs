// src/services/listings.rs

//! Search-results page extraction.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{JobListing, JobSelectors};
use crate::services::parse_selector;
use crate::utils::{element_text, resolve_url};

/// Pulls listing summaries out of a rendered search-results page.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    container: Selector,
    listing: Selector,
    title: Selector,
    location: Selector,
    company: Selector,
    link: Selector,
    link_attr: String,
}

impl ListingExtractor {
    pub fn new(selectors: &JobSelectors) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&selectors.results_container)?,
            listing: parse_selector(&selectors.listing)?,
            title: parse_selector(&selectors.title)?,
            location: parse_selector(&selectors.location)?,
            company: parse_selector(&selectors.company)?,
            link: parse_selector(&selectors.link)?,
            link_attr: selectors.link_attr.clone(),
        })
    }

    /// Iterate over the complete listings of a parsed page.
    ///
    /// Returns `None` when the page has no results container, which is how
    /// the site signals the end of pagination. Incomplete listings are
    /// skipped. Relative links are resolved against `base` when given.
    pub fn extract<'a>(
        &'a self,
        document: &'a Html,
        base: Option<&'a Url>,
    ) -> Option<impl Iterator<Item = JobListing> + 'a> {
        let container = document.select(&self.container).next()?;
        Some(
            container
                .select(&self.listing)
                .filter_map(move |item| self.parse_listing(&item, base)),
        )
    }

    /// Parse markup and collect its listings in page order.
    pub fn parse(&self, markup: &str, base: Option<&Url>) -> Option<Vec<JobListing>> {
        let document = Html::parse_document(markup);
        self.extract(&document, base).map(Iterator::collect)
    }

    fn parse_listing(&self, item: &ElementRef, base: Option<&Url>) -> Option<JobListing> {
        let title = first_text(item, &self.title)?;
        let location = first_text(item, &self.location)?;
        let company = first_text(item, &self.company)?;

        let href = item
            .select(&self.link)
            .next()?
            .value()
            .attr(&self.link_attr)?
            .trim();
        if href.is_empty() {
            return None;
        }
        let link = match base {
            Some(base) => resolve_url(base, href),
            None => href.to_string(),
        };

        JobListing::new(title, location, company, link)
    }
}

fn first_text(item: &ElementRef, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(|el| element_text(&el))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: Option<&str>, location: Option<&str>, company: Option<&str>, href: Option<&str>) -> String {
        let mut html = String::from("<li><div class=\"base-card\">");
        if let Some(href) = href {
            html.push_str(&format!("<a class=\"base-card__full-link\" href=\"{href}\"></a>"));
        }
        if let Some(title) = title {
            html.push_str(&format!("<h3 class=\"base-search-card__title\">\n  {title}\n</h3>"));
        }
        if let Some(company) = company {
            html.push_str(&format!(
                "<h4 class=\"base-search-card__subtitle\"><span>{company}</span></h4>"
            ));
        }
        if let Some(location) = location {
            html.push_str(&format!(
                "<span class=\"job-search-card__location\"> {location} </span>"
            ));
        }
        html.push_str("</div></li>");
        html
    }

    fn page(cards: &[String]) -> String {
        format!(
            "<html><body><ul class=\"jobs-search__results-list\">{}</ul></body></html>",
            cards.concat()
        )
    }

    fn extractor() -> ListingExtractor {
        ListingExtractor::new(&JobSelectors::default()).unwrap()
    }

    #[test]
    fn test_extracts_complete_listings() {
        let html = page(&[
            card(Some("Data Engineer"), Some("Remote"), Some("Acme"), Some("https://example.com/jobs/1")),
            card(Some("Rust Developer"), Some("Berlin, Germany"), Some("Ferrous"), Some("https://example.com/jobs/2")),
        ]);

        let listings = extractor().parse(&html, None).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(
            listings[0],
            JobListing::new("Data Engineer", "Remote", "Acme", "https://example.com/jobs/1").unwrap()
        );
        assert_eq!(listings[1].location, "Berlin, Germany");
        assert_eq!(listings[1].company, "Ferrous");
    }

    #[test]
    fn test_skips_listings_missing_any_field() {
        let html = page(&[
            card(None, Some("Remote"), Some("Acme"), Some("https://example.com/jobs/1")),
            card(Some("A"), None, Some("Acme"), Some("https://example.com/jobs/2")),
            card(Some("B"), Some("Remote"), None, Some("https://example.com/jobs/3")),
            card(Some("C"), Some("Remote"), Some("Acme"), None),
            card(Some("   "), Some("Remote"), Some("Acme"), Some("https://example.com/jobs/5")),
            card(Some("Kept"), Some("Remote"), Some("Acme"), Some("https://example.com/jobs/6")),
        ]);

        let listings = extractor().parse(&html, None).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Kept");
    }

    #[test]
    fn test_missing_container_is_none() {
        let html = "<html><body><div class=\"no-results\">No matching jobs</div></body></html>";
        assert!(extractor().parse(html, None).is_none());
    }

    #[test]
    fn test_empty_container_is_some_empty() {
        let html = page(&[]);
        assert_eq!(extractor().parse(&html, None).unwrap(), Vec::new());
    }

    #[test]
    fn test_resolves_relative_links() {
        let html = page(&[card(Some("Engineer"), Some("Remote"), Some("Acme"), Some("/jobs/view/42"))]);
        let base = Url::parse("https://www.linkedin.com/jobs/search/?keywords=x").unwrap();

        let listings = extractor().parse(&html, Some(&base)).unwrap();
        assert_eq!(listings[0].link, "https://www.linkedin.com/jobs/view/42");
    }

    #[test]
    fn test_blank_link_is_skipped_when_resolving() {
        let html = page(&[
            card(Some("Empty"), Some("Remote"), Some("Acme"), Some("")),
            card(Some("Blank"), Some("Remote"), Some("Acme"), Some("  ")),
            card(Some("Kept"), Some("Remote"), Some("Acme"), Some("/jobs/view/7")),
        ]);
        let base = Url::parse("https://www.linkedin.com/jobs/search/?keywords=x&start=0").unwrap();

        let listings = extractor().parse(&html, Some(&base)).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Kept");
        assert_eq!(listings[0].link, "https://www.linkedin.com/jobs/view/7");
    }

    #[test]
    fn test_extract_is_lazy_over_document() {
        let html = page(&[
            card(Some("One"), Some("Remote"), Some("Acme"), Some("https://example.com/1")),
            card(Some("Two"), Some("Remote"), Some("Acme"), Some("https://example.com/2")),
        ]);
        let document = Html::parse_document(&html);
        let extractor = extractor();

        let mut listings = extractor.extract(&document, None).unwrap();
        assert_eq!(listings.next().unwrap().title, "One");
        assert_eq!(listings.next().unwrap().title, "Two");
        assert!(listings.next().is_none());
    }
}
