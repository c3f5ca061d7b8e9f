//! Search query and result-page addressing.

use url::Url;

use crate::error::Result;

/// Keyword and location entered by the operator for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            location: location.into().trim().to_string(),
        }
    }

    /// Build the results-page URL for a given offset.
    pub fn page_url(&self, base_url: &str, offset: usize) -> Result<Url> {
        let mut url = Url::parse(base_url)?;
        url.query_pairs_mut()
            .clear()
            .append_pair("keywords", &self.title)
            .append_pair("location", &self.location)
            .append_pair("start", &offset.to_string());
        Ok(url)
    }

    /// File name stem shared by every export: `<title>_<location>_jobs`.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_jobs",
            sanitize_component(&self.title),
            sanitize_component(&self.location)
        )
    }
}

/// Replace characters that would escape the output directory.
fn sanitize_component(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '-',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.linkedin.com/jobs/search/";

    #[test]
    fn test_page_url() {
        let query = SearchQuery::new("Data Engineer", "Remote");
        let url = query.page_url(BASE, 25).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.linkedin.com/jobs/search/?keywords=Data+Engineer&location=Remote&start=25"
        );
    }

    #[test]
    fn test_page_url_encodes_values() {
        let query = SearchQuery::new("C++ & Rust", "São Paulo");
        let url = query.page_url(BASE, 0).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("keywords".into(), "C++ & Rust".into()));
        assert_eq!(pairs[1], ("location".into(), "São Paulo".into()));
        assert_eq!(pairs[2], ("start".into(), "0".into()));
    }

    #[test]
    fn test_file_stem() {
        let query = SearchQuery::new(" Data Engineer ", "Remote");
        assert_eq!(query.file_stem(), "Data Engineer_Remote_jobs");

        let query = SearchQuery::new("CI/CD", "..\\x");
        assert_eq!(query.file_stem(), "CI-CD_..-x_jobs");
    }
}
