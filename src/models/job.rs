//! Job listing data structures.

use serde::{Deserialize, Serialize};

/// A job posting summary as shown on a search-results page.
///
/// Only constructed when all four fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub title: String,
    pub location: String,
    pub company: String,
    pub link: String,
}

impl JobListing {
    /// Build a listing, rejecting it if any field is blank.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        company: impl Into<String>,
        link: impl Into<String>,
    ) -> Option<Self> {
        let listing = Self {
            title: title.into(),
            location: location.into(),
            company: company.into(),
            link: link.into(),
        };
        listing.is_complete().then_some(listing)
    }

    fn is_complete(&self) -> bool {
        [&self.title, &self.location, &self.company, &self.link]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A listing together with the description scraped from its detail page.
///
/// Field order and names match the exported CSV header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Company")]
    pub company: String,

    #[serde(rename = "Link")]
    pub link: String,

    /// Empty when the detail page had no description container
    #[serde(rename = "Description")]
    pub description: String,
}

impl JobRecord {
    /// Attach a description to a listing.
    pub fn new(listing: JobListing, description: impl Into<String>) -> Self {
        Self {
            title: listing.title,
            location: listing.location,
            company: listing.company,
            link: listing.link,
            description: description.into(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Ordered accumulation of records for one run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<JobRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's completed batch, keeping its order.
    pub fn append_page(&mut self, page: Vec<JobRecord>) {
        self.records.extend(page);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Number of records whose detail page yielded a description.
    pub fn described_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_description()).count()
    }
}

impl From<Vec<JobRecord>> for ResultSet {
    fn from(records: Vec<JobRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a JobRecord;
    type IntoIter = std::slice::Iter<'a, JobRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
