// src/models/selectors.rs

//! CSS selectors for scraping search-results and detail pages.

use serde::{Deserialize, Serialize};

/// CSS selectors for scraping job listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSelectors {
    /// Container holding all listings; its absence ends pagination
    #[serde(default = "defaults::results_container")]
    pub results_container: String,

    /// Selector for each listing within the container
    #[serde(default = "defaults::listing")]
    pub listing: String,

    /// Selector for the title element within a listing
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Selector for the location element within a listing
    #[serde(default = "defaults::location")]
    pub location: String,

    /// Selector for the company element within a listing
    #[serde(default = "defaults::company")]
    pub company: String,

    /// Selector for the link element within a listing
    #[serde(default = "defaults::link")]
    pub link: String,

    /// HTML attribute name for extracting links (usually "href")
    #[serde(default = "defaults::link_attr")]
    pub link_attr: String,

    /// Selector for the description body on the detail page
    #[serde(default = "defaults::description")]
    pub description: String,
}

impl Default for JobSelectors {
    fn default() -> Self {
        Self {
            results_container: defaults::results_container(),
            listing: defaults::listing(),
            title: defaults::title(),
            location: defaults::location(),
            company: defaults::company(),
            link: defaults::link(),
            link_attr: defaults::link_attr(),
            description: defaults::description(),
        }
    }
}

impl JobSelectors {
    /// All selector strings, labelled, for validation.
    pub fn labelled(&self) -> [(&'static str, &str); 7] {
        [
            ("results_container", &self.results_container),
            ("listing", &self.listing),
            ("title", &self.title),
            ("location", &self.location),
            ("company", &self.company),
            ("link", &self.link),
            ("description", &self.description),
        ]
    }
}

mod defaults {
    pub fn results_container() -> String {
        "ul.jobs-search__results-list".into()
    }
    pub fn listing() -> String {
        "li".into()
    }
    pub fn title() -> String {
        "h3.base-search-card__title".into()
    }
    pub fn location() -> String {
        "span.job-search-card__location".into()
    }
    pub fn company() -> String {
        "h4.base-search-card__subtitle".into()
    }
    pub fn link() -> String {
        "a".into()
    }
    pub fn link_attr() -> String {
        "href".into()
    }
    pub fn description() -> String {
        "div.show-more-less-html__markup".into()
    }
}
