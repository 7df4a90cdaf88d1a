use super::PackageName;
use std::collections::HashMap;

/// Mapping from package name to its direct dependencies, as discovered.
///
/// Keys keep the order in which resolution recorded them, and each value
/// keeps the registry's listing order. Packages without dependencies are
/// never keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    order: Vec<PackageName>,
    entries: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the direct dependencies of `package`.
    ///
    /// Re-inserting an existing key replaces its dependencies but keeps its
    /// original position. Returns the previous dependencies, if any.
    pub fn insert(
        &mut self,
        package: PackageName,
        dependencies: Vec<PackageName>,
    ) -> Option<Vec<PackageName>> {
        if !self.entries.contains_key(&package) {
            self.order.push(package.clone());
        }
        self.entries.insert(package, dependencies)
    }

    pub fn get(&self, package: &str) -> Option<&[PackageName]> {
        self.entries.get(package).map(Vec::as_slice)
    }

    pub fn contains_key(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    /// Iterates entries in recording order
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|deps| (name, deps.as_slice())))
    }

    pub fn keys(&self) -> impl Iterator<Item = &PackageName> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of (package, dependency) pairs
    pub fn dependency_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl std::fmt::Display for DependencyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (package, deps)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let names: Vec<&str> = deps.iter().map(PackageName::as_str).collect();
            write!(f, "{}: [{}]", package, names.join(", "))?;
        }
        write!(f, "}}")
    }
}
