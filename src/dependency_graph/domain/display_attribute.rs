use super::LevelSet;

/// Per-node presentation tag derived from a node's level set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayAttribute {
    Depth1,
    Depth2,
    Depth3,
    /// Reachable at more than one depth
    MultiLevel,
    /// Not reachable from any root within the depth cap
    Unreached,
}

impl DisplayAttribute {
    /// All attributes, in legend order
    pub const ALL: [DisplayAttribute; 5] = [
        DisplayAttribute::Depth1,
        DisplayAttribute::Depth2,
        DisplayAttribute::Depth3,
        DisplayAttribute::MultiLevel,
        DisplayAttribute::Unreached,
    ];

    /// Classifies a level set
    pub fn from_levels(levels: &LevelSet) -> Self {
        let mut iter = levels.iter();
        match (iter.next(), iter.next()) {
            (None, _) => DisplayAttribute::Unreached,
            (Some(_), Some(_)) => DisplayAttribute::MultiLevel,
            (Some(1), None) => DisplayAttribute::Depth1,
            (Some(2), None) => DisplayAttribute::Depth2,
            (Some(3), None) => DisplayAttribute::Depth3,
            // Levels beyond the classifier's maximum cap are never recorded
            (Some(_), None) => DisplayAttribute::Unreached,
        }
    }

    /// Graphviz fill color
    pub fn fill_color(self) -> &'static str {
        match self {
            DisplayAttribute::Depth1 => "yellow",
            DisplayAttribute::Depth2 => "red",
            DisplayAttribute::Depth3 => "blue",
            DisplayAttribute::MultiLevel => "purple",
            DisplayAttribute::Unreached => "white",
        }
    }
}

impl std::fmt::Display for DisplayAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayAttribute::Depth1 => write!(f, "depth-1"),
            DisplayAttribute::Depth2 => write!(f, "depth-2"),
            DisplayAttribute::Depth3 => write!(f, "depth-3"),
            DisplayAttribute::MultiLevel => write!(f, "multi-level"),
            DisplayAttribute::Unreached => write!(f, "unreached"),
        }
    }
}
