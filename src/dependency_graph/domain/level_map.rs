use super::{DisplayAttribute, PackageName};
use std::collections::{BTreeSet, HashMap};

/// Depths (1-based) at which a node is reachable from some root
pub type LevelSet = BTreeSet<usize>;

/// Mapping from node to its level set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: HashMap<PackageName, LevelSet>,
}

impl LevelMap {
    /// Creates a map with an empty level set for every given node
    pub fn for_nodes<'a>(nodes: impl IntoIterator<Item = &'a PackageName>) -> Self {
        Self {
            levels: nodes
                .into_iter()
                .map(|name| (name.clone(), LevelSet::new()))
                .collect(),
        }
    }

    /// Adds `level` to the node's set. Returns false if it was already there.
    pub fn add_level(&mut self, name: &PackageName, level: usize) -> bool {
        self.levels.entry(name.clone()).or_default().insert(level)
    }

    pub fn has_level(&self, name: &str, level: usize) -> bool {
        self.levels
            .get(name)
            .is_some_and(|levels| levels.contains(&level))
    }

    pub fn levels_of(&self, name: &str) -> Option<&LevelSet> {
        self.levels.get(name)
    }

    /// Display attribute for a node; unknown nodes are unreached
    pub fn display_attribute(&self, name: &str) -> DisplayAttribute {
        self.levels
            .get(name)
            .map(DisplayAttribute::from_levels)
            .unwrap_or(DisplayAttribute::Unreached)
    }

    /// Node -> display attribute mapping handed to the renderer
    pub fn display_attributes(&self) -> HashMap<PackageName, DisplayAttribute> {
        self.levels
            .iter()
            .map(|(name, levels)| (name.clone(), DisplayAttribute::from_levels(levels)))
            .collect()
    }

    /// Number of nodes per display attribute, in legend order
    pub fn attribute_counts(&self) -> Vec<(DisplayAttribute, usize)> {
        let attributes = self.display_attributes();
        DisplayAttribute::ALL
            .iter()
            .map(|&attr| (attr, attributes.values().filter(|&&a| a == attr).count()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
