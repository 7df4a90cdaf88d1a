use clap::Parser;
use std::path::PathBuf;

/// Visualize the dependency graph of an npm package with Graphviz
#[derive(Parser, Debug)]
#[command(name = "depgraph-viz")]
#[command(version)]
#[command(
    about = "Visualize the dependency graph of an npm package with Graphviz",
    long_about = "Resolves the dependencies of the configured npm package from the registry, \
                  colors every package by the depth at which it is reachable and renders the \
                  graph with Graphviz into the current directory."
)]
pub struct Args {
    /// Configuration file (.yml/.yaml, .toml or .xml)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
