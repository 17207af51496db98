//! Mock dataset sources for testing

use super::error::{FetchError, Result};
use super::fetcher::DataSource;
use super::types::Dataset;

/// Dataset source that serves a predetermined in-memory dataset
///
/// Useful for testing and custom frontends without a running endpoint
#[derive(Debug, Clone)]
pub struct StaticSource {
    /// The dataset every fetch returns
    pub dataset: Dataset,
}

impl StaticSource {
    /// Create a source serving the given dataset
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}

/// Dataset source that simulates a transport failure
#[derive(Debug, Clone, Copy)]
pub struct FailingSource {
    /// HTTP status the simulated response carries
    pub status: u16,
}

impl FailingSource {
    /// Create a source failing with the given status
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self { status }
    }
}

impl Default for FailingSource {
    fn default() -> Self {
        Self::new(500)
    }
}

impl DataSource for FailingSource {
    fn fetch(&self) -> Result<Dataset> {
        Err(FetchError::Transport {
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    #[test]
    fn test_static_source_serves_dataset() {
        let source = StaticSource::new(sample_dataset());
        let dataset = source.fetch().unwrap();

        assert_eq!(dataset, sample_dataset());
        // Every fetch is a fresh copy
        assert_eq!(source.fetch().unwrap(), dataset);
    }

    #[test]
    fn test_failing_source_reports_status() {
        let source = FailingSource::new(404);

        match source.fetch() {
            Err(FetchError::Transport { status }) => assert_eq!(status, 404),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }
}
