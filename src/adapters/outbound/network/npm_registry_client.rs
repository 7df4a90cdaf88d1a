use crate::dependency_graph::domain::PackageName;
use crate::ports::outbound::{PackageMetadata, RegistryClient};
use crate::shared::error::RegistryError;
use crate::shared::Result;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Abbreviated metadata document: dist-tags plus per-version dependencies
const ABBREVIATED_METADATA: &str = "application/vnd.npm.install-v1+json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// NpmRegistryClient adapter fetching package documents from an npm registry
///
/// Requests are blocking and issued one at a time; the resolver drives them
/// sequentially.
pub struct NpmRegistryClient {
    client: reqwest::blocking::Client,
    registry_url: String,
}

impl NpmRegistryClient {
    /// Creates a client for the public npm registry
    pub fn new() -> Result<Self> {
        Self::with_registry_url(DEFAULT_REGISTRY_URL)
    }

    /// Creates a client for a custom registry base URL
    pub fn with_registry_url(registry_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depgraph-viz/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            registry_url: registry_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn registry_url(&self) -> &str {
        &self.registry_url
    }

    /// Builds the document URL for a package
    ///
    /// Scoped names keep their leading `@` and encode the slash
    /// (`@types/node` -> `@types%2Fnode`).
    fn package_url(&self, package: &PackageName) -> Result<String> {
        let name = package.as_str();

        let encoded = match name.strip_prefix('@') {
            Some(scoped) => {
                let (scope, bare) =
                    scoped
                        .split_once('/')
                        .ok_or_else(|| RegistryError::InvalidUrlComponent {
                            package: name.to_string(),
                            reason: "scoped name must have the form @scope/name".to_string(),
                        })?;
                Self::validate_url_component(name, scope)?;
                Self::validate_url_component(name, bare)?;
                format!(
                    "@{}%2F{}",
                    urlencoding::encode(scope),
                    urlencoding::encode(bare)
                )
            }
            None => {
                Self::validate_url_component(name, name)?;
                urlencoding::encode(name).into_owned()
            }
        };

        Ok(format!("{}/{}", self.registry_url, encoded))
    }

    /// Rejects components that could change the request path
    fn validate_url_component(package: &str, component: &str) -> Result<()> {
        let reason = if component.is_empty() {
            Some("empty name component")
        } else if component.contains('/') || component.contains('\\') {
            Some("contains path separators")
        } else if component.starts_with('.') {
            Some("starts with '.'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RegistryError::InvalidUrlComponent {
                package: package.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl RegistryClient for NpmRegistryClient {
    fn fetch_package(&self, package: &PackageName) -> Result<PackageMetadata> {
        let url = self.package_url(package)?;

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, ABBREVIATED_METADATA)
            .send()
            .map_err(|e| RegistryError::Network {
                package: package.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::UnexpectedStatus {
                package: package.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let metadata: PackageMetadata =
            response
                .json()
                .map_err(|e| RegistryError::MalformedResponse {
                    package: package.to_string(),
                    details: e.to_string(),
                })?;

        Ok(metadata)
    }
}
