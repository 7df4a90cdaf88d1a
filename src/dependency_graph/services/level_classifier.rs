use crate::dependency_graph::domain::{DependencyGraph, LevelMap, PackageName};
use std::collections::HashSet;

/// Default classification depth cap
pub const DEFAULT_DEPTH_CAP: usize = 3;

/// Largest supported cap: only depths 1..=3 have their own display attribute
pub const MAX_DEPTH_CAP: usize = 3;

/// LevelClassifier service assigning reachability depths to graph nodes
///
/// Roots (nodes without incoming edges) sit at level 1 and every edge
/// followed adds one level. Levels above the cap are never recorded.
///
/// A node reached again at a depth it already holds is not expanded again;
/// a node reached at a new depth records it and is expanded from there. On
/// dense diamond-shaped graphs this re-expansion grows exponentially with
/// the cap, which stays small (at most 3).
pub struct LevelClassifier;

/// Traversal state shared by all roots of one classification run
struct LevelAssignment {
    levels: LevelMap,
    visited: HashSet<PackageName>,
    depth_cap: usize,
}

impl LevelClassifier {
    /// Computes the level set of every node in `graph`
    ///
    /// `depth_cap` is clamped to [`MAX_DEPTH_CAP`].
    pub fn classify(graph: &DependencyGraph, depth_cap: usize) -> LevelMap {
        let mut assignment = LevelAssignment {
            levels: LevelMap::for_nodes(graph.nodes()),
            visited: HashSet::new(),
            depth_cap: depth_cap.min(MAX_DEPTH_CAP),
        };

        for root in graph.roots() {
            Self::assign_levels(graph, root, 1, &mut assignment);
        }

        assignment.levels
    }

    fn assign_levels(
        graph: &DependencyGraph,
        node: &PackageName,
        level: usize,
        assignment: &mut LevelAssignment,
    ) {
        if level > assignment.depth_cap {
            return;
        }

        // Already expanded from this node at this depth
        if assignment.visited.contains(node) && assignment.levels.has_level(node.as_str(), level)
        {
            return;
        }

        assignment.levels.add_level(node, level);
        assignment.visited.insert(node.clone());

        for successor in graph.successors(node.as_str()) {
            Self::assign_levels(graph, successor, level + 1, assignment);
        }
    }
}
