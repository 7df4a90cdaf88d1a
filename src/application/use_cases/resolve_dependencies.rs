use crate::dependency_graph::domain::{DependencyMap, PackageName};
use crate::ports::outbound::{ProgressReporter, RegistryClient};
use crate::shared::error::RegistryError;
use crate::shared::Result;
use std::collections::HashSet;

/// A package whose registry fetch failed during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub package: PackageName,
    /// Traversal depth at which the fetch was attempted
    pub depth: usize,
    pub reason: String,
}

/// Outcome of one resolution run
#[derive(Debug, Clone, Default)]
pub struct DependencyResolution {
    /// Package -> direct dependencies; packages without dependencies are absent
    pub dependencies: DependencyMap,
    /// Packages fetched, in fetch order
    pub fetched: Vec<PackageName>,
    /// Fetches that failed and were treated as "no dependencies"
    pub failures: Vec<FetchFailure>,
}

/// Traversal state owned by a single `execute` call
#[derive(Default)]
struct ResolutionContext {
    visited: HashSet<PackageName>,
    /// Names seen within the depth bound, fetched or not (progress total)
    discovered: HashSet<PackageName>,
    resolution: DependencyResolution,
}

/// ResolveDependenciesUseCase - bounded recursive dependency resolution
///
/// Walks the registry depth-first from a root package. The root sits at
/// depth 0; a package deeper than `max_depth` or already fetched in this run
/// is not fetched. Each fetched package contributes the dependencies of the
/// version its `latest` tag points at, in registry order.
///
/// Fetch failures never abort the run: the package contributes no
/// dependencies and the failure goes to the progress reporter.
///
/// # Type Parameters
/// * `RC` - RegistryClient implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<RC, PR> {
    registry_client: RC,
    progress_reporter: PR,
}

impl<RC, PR> ResolveDependenciesUseCase<RC, PR>
where
    RC: RegistryClient,
    PR: ProgressReporter,
{
    pub fn new(registry_client: RC, progress_reporter: PR) -> Self {
        Self {
            registry_client,
            progress_reporter,
        }
    }

    /// Resolves the dependency map of `root` down to `max_depth`
    pub fn resolve(&self, root: &PackageName, max_depth: usize) -> DependencyMap {
        self.execute(root, max_depth).dependencies
    }

    /// Resolves `root` and returns the map together with fetch bookkeeping
    pub fn execute(&self, root: &PackageName, max_depth: usize) -> DependencyResolution {
        let mut context = ResolutionContext::default();
        context.discovered.insert(root.clone());

        self.visit(root, 0, max_depth, &mut context);

        context.resolution
    }

    fn visit(
        &self,
        package: &PackageName,
        depth: usize,
        max_depth: usize,
        context: &mut ResolutionContext,
    ) {
        if depth > max_depth || context.visited.contains(package) {
            return;
        }

        context.visited.insert(package.clone());
        context.resolution.fetched.push(package.clone());
        self.progress_reporter.report_progress(
            context.visited.len(),
            context.discovered.len(),
            Some(&format!("{} (depth {})", package, depth)),
        );

        let dependencies = match self.fetch_latest_dependencies(package) {
            Ok(names) => self.parse_dependency_names(package, names),
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch dependencies of {}: {}",
                    package, e
                ));
                context.resolution.failures.push(FetchFailure {
                    package: package.clone(),
                    depth,
                    reason: e.to_string(),
                });
                Vec::new()
            }
        };

        if dependencies.is_empty() {
            return;
        }

        if depth < max_depth {
            context.discovered.extend(dependencies.iter().cloned());
        }
        context
            .resolution
            .dependencies
            .insert(package.clone(), dependencies.clone());

        for dependency in &dependencies {
            self.visit(dependency, depth + 1, max_depth, context);
        }
    }

    /// Dependency names of the version the `latest` tag points at
    fn fetch_latest_dependencies(&self, package: &PackageName) -> Result<Vec<String>> {
        let metadata = self.registry_client.fetch_package(package)?;

        let latest = metadata
            .latest_version()
            .ok_or_else(|| RegistryError::MissingLatestTag {
                package: package.to_string(),
            })?;

        Ok(metadata.dependency_names(latest))
    }

    /// Keeps valid names in order, reporting and skipping the rest
    fn parse_dependency_names(&self, package: &PackageName, names: Vec<String>) -> Vec<PackageName> {
        names
            .into_iter()
            .filter_map(|name| match PackageName::new(name.clone()) {
                Ok(dependency) => Some(dependency),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping dependency '{}' of {}: {}",
                        name, package, e
                    ));
                    None
                }
            })
            .collect()
    }
}
