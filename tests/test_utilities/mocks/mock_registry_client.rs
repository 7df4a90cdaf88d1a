use depgraph_viz::ports::outbound::PackageMetadata;
use depgraph_viz::prelude::*;
use depgraph_viz::shared::error::RegistryError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock RegistryClient serving canned registry documents
///
/// Names without a document answer with a 404. Every fetch is recorded.
#[derive(Default, Clone)]
pub struct MockRegistryClient {
    pub packages: HashMap<String, PackageMetadata>,
    pub failing: HashSet<String>,
    pub fetch_log: Arc<Mutex<Vec<String>>>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `name` with a single `latest` version depending on `deps`
    pub fn with_package(mut self, name: &str, deps: &[&str]) -> Self {
        let deps: Vec<(&str, &str)> = deps.iter().map(|d| (*d, "^1.0.0")).collect();
        self.packages.insert(
            name.to_string(),
            PackageMetadata::new()
                .with_version("1.0.0", &deps)
                .with_latest("1.0.0"),
        );
        self
    }

    pub fn with_metadata(mut self, name: &str, metadata: PackageMetadata) -> Self {
        self.packages.insert(name.to_string(), metadata);
        self
    }

    /// Makes every fetch of `name` fail with a server error
    pub fn with_failure(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn fetches(&self) -> Vec<String> {
        self.fetch_log.lock().unwrap().clone()
    }

    pub fn fetch_count(&self, name: &str) -> usize {
        self.fetches().iter().filter(|n| n.as_str() == name).count()
    }
}

impl RegistryClient for MockRegistryClient {
    fn fetch_package(&self, package: &PackageName) -> Result<PackageMetadata> {
        self.fetch_log.lock().unwrap().push(package.to_string());

        if self.failing.contains(package.as_str()) {
            return Err(RegistryError::UnexpectedStatus {
                package: package.to_string(),
                status: 503,
            }
            .into());
        }

        self.packages.get(package.as_str()).cloned().ok_or_else(|| {
            RegistryError::UnexpectedStatus {
                package: package.to_string(),
                status: 404,
            }
            .into()
        })
    }
}
