use crate::shared::error::VisualizerError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for a registry package name with validation
///
/// Names are case-sensitive and kept exactly as the registry reports them.
/// Scoped names (`@scope/name`) are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Self::invalid(&name, "name cannot be empty"));
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(Self::invalid(
                &name,
                &format!(
                    "name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        // Security: characters that would alter the registry URL
        if name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '?' | '#' | '\\' | '%'))
        {
            return Err(Self::invalid(
                &name,
                "name contains whitespace, control characters or URL-reserved characters",
            ));
        }

        if name.split('/').any(|segment| segment == ".." || segment == ".") {
            return Err(Self::invalid(&name, "name contains a relative path segment"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a scoped name such as `@types/node`
    pub fn is_scoped(&self) -> bool {
        self.0.starts_with('@')
    }

    fn invalid(name: &str, reason: &str) -> anyhow::Error {
        VisualizerError::InvalidPackageName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
