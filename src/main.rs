mod cli;

use cli::Args;
use depgraph_viz::adapters::outbound::console::StderrProgressReporter;
use depgraph_viz::adapters::outbound::network::NpmRegistryClient;
use depgraph_viz::adapters::outbound::rendering::GraphvizRenderer;
use depgraph_viz::application::dto::VisualizeRequest;
use depgraph_viz::application::use_cases::VisualizeDependenciesUseCase;
use depgraph_viz::config::load_config;
use depgraph_viz::ports::outbound::RenderTarget;
use depgraph_viz::shared::error::{ConfigError, ExitCode};
use depgraph_viz::shared::Result;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Load configuration before touching the network
    let config = load_config(&args.config)?;

    // Create adapters (Dependency Injection)
    let registry_client = NpmRegistryClient::with_registry_url(&config.registry_url)?;
    let graph_renderer = match config.graphviz_path.as_deref() {
        Some(path) => GraphvizRenderer::with_graphviz_path(path),
        None => GraphvizRenderer::new(),
    };
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        VisualizeDependenciesUseCase::new(registry_client, graph_renderer, progress_reporter);

    // Diagrams land in the working directory
    let output_dir = std::env::current_dir()?;
    let request = VisualizeRequest::new(
        config.package_name,
        config.max_depth,
        RenderTarget::new(output_dir, config.output.file_name, config.output.format),
    )
    .with_depth_cap(config.depth_cap);

    use_case.execute(request)?;

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        ExitCode::ConfigurationError
    } else {
        ExitCode::ApplicationError
    }
}
