mod graph_builder;
mod level_classifier;

pub use graph_builder::GraphBuilder;
pub use level_classifier::{LevelClassifier, DEFAULT_DEPTH_CAP, MAX_DEPTH_CAP};
