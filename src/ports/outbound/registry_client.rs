use crate::dependency_graph::domain::PackageName;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Registry metadata document for one package
///
/// Only the fields needed for dependency resolution are kept: the
/// `dist-tags` pointers and each version's `dependencies` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageMetadata {
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    #[serde(default)]
    pub versions: HashMap<String, VersionMetadata>,
}

/// Metadata of a single published version
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionMetadata {
    /// `{ name: range }` object; any other JSON shape means "no dependencies"
    #[serde(default)]
    pub dependencies: Option<Value>,
}

impl PackageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a version with its dependencies, keeping their order
    pub fn with_version(mut self, version: &str, dependencies: &[(&str, &str)]) -> Self {
        let deps: Map<String, Value> = dependencies
            .iter()
            .map(|(name, range)| (name.to_string(), Value::String(range.to_string())))
            .collect();
        self.versions.insert(
            version.to_string(),
            VersionMetadata {
                dependencies: Some(Value::Object(deps)),
            },
        );
        self
    }

    /// Points the `latest` tag at `version`
    pub fn with_latest(mut self, version: &str) -> Self {
        self.dist_tags
            .insert("latest".to_string(), version.to_string());
        self
    }

    /// The version the `latest` tag points at
    pub fn latest_version(&self) -> Option<&str> {
        self.dist_tags.get("latest").map(String::as_str)
    }

    /// Dependency names of `version`, in document order
    ///
    /// An unknown version yields an empty list.
    pub fn dependency_names(&self, version: &str) -> Vec<String> {
        self.versions
            .get(version)
            .map(VersionMetadata::dependency_names)
            .unwrap_or_default()
    }
}

impl VersionMetadata {
    pub fn dependency_names(&self) -> Vec<String> {
        match &self.dependencies {
            Some(Value::Object(deps)) => deps.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// RegistryClient port for fetching package metadata by name
///
/// Implementations report every failure (transport error, non-success
/// status, undecodable body) as an `Err`; deciding what a failure means
/// for the dependency graph is left to the caller.
pub trait RegistryClient {
    /// Fetches the metadata document of `package`
    fn fetch_package(&self, package: &PackageName) -> Result<PackageMetadata>;
}

impl<T: RegistryClient + ?Sized> RegistryClient for &T {
    fn fetch_package(&self, package: &PackageName) -> Result<PackageMetadata> {
        (**self).fetch_package(package)
    }
}
