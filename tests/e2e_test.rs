/// End-to-end tests for the CLI
///
/// The binary runs inside a temporary working directory. The registry is
/// either a closed local port or a throwaway HTTP server in this process, so
/// no test touches the public registry.
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Nothing listens on the discard port, so every fetch fails fast.
const CLOSED_REGISTRY: &str = "http://127.0.0.1:9";

const PROXY_VARIABLES: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

fn depgraph_viz(working_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("depgraph-viz");
    cmd.current_dir(working_dir);
    for variable in PROXY_VARIABLES {
        cmd.env_remove(variable);
    }
    cmd
}

fn write_config(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

fn yaml_config(registry_url: &str, graphviz_path: &str) -> String {
    format!(
        r#"package_name: express
max_depth: 2
registry_url: "{}"
graphviz_path: "{}"
output:
  file_name: express-graph
  format: svg
"#,
        registry_url, graphviz_path
    )
}

/// Serves `documents` (path without the leading slash -> JSON body) over
/// HTTP/1.1 and returns the base URL. Unknown paths answer 404.
fn serve_registry(documents: HashMap<&'static str, &'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut header = String::new();
                match reader.read_line(&mut header) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if header == "\r\n" => break,
                    Ok(_) => {}
                }
            }

            let path = request_line
                .split_whitespace()
                .nth(1)
                .unwrap_or("/")
                .trim_start_matches('/');
            let (status, body) = match documents.get(path) {
                Some(body) => ("200 OK", *body),
                None => ("404 Not Found", "{}"),
            };
            let _ = write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
        }
    });

    format!("http://{}", address)
}

// ============================================================================
// Exit code tests
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depgraph-viz")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("CONFIG"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depgraph-viz")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: no configuration argument
    #[test]
    fn test_exit_code_missing_argument() {
        let dir = TempDir::new().unwrap();
        depgraph_viz(dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Usage"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    /// Exit code 2: more than one argument
    #[test]
    fn test_exit_code_too_many_arguments() {
        let dir = TempDir::new().unwrap();
        depgraph_viz(dir.path())
            .args(["a.yml", "b.yml"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Usage"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    /// Exit code 3: configuration file does not exist
    #[test]
    fn test_exit_code_missing_config_file() {
        let dir = TempDir::new().unwrap();
        depgraph_viz(dir.path())
            .arg("missing.yml")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    /// Exit code 3: required field missing
    #[test]
    fn test_exit_code_missing_field() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "config.yml",
            "max_depth: 2\noutput: { file_name: graph, format: png }\n",
        );

        depgraph_viz(dir.path())
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Missing required config field 'package_name'",
            ));
    }

    /// Exit code 3: malformed XML configuration
    #[test]
    fn test_exit_code_malformed_xml() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "config.xml",
            "<config><package_name>express</package_name><max_depth>zero</max_depth></config>",
        );

        depgraph_viz(dir.path())
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("valid XML syntax"));
    }
}

// ============================================================================
// Full runs
// ============================================================================

#[test]
fn test_unreachable_registry_skips_visualization() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "config.yml",
        &yaml_config(CLOSED_REGISTRY, "/nonexistent/graphviz"),
    );

    depgraph_viz(dir.path())
        .arg(&config)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Failed to fetch dependencies of express"))
        .stderr(predicate::str::contains("No dependencies found for express"));

    assert!(!dir.path().join("express-graph.dot").exists());
    assert!(!dir.path().join("express-graph.svg").exists());
}

#[cfg(unix)]
#[test]
fn test_full_run_writes_dot_source() {
    let registry_url = serve_registry(HashMap::from([
        (
            "express",
            r#"{"dist-tags":{"latest":"1.0.0"},"versions":{"1.0.0":{"dependencies":{"lodash":"4.17.21","debug":"2.6.9"}}}}"#,
        ),
        (
            "debug",
            r#"{"dist-tags":{"latest":"2.6.9"},"versions":{"2.6.9":{"dependencies":{"ms":"2.0.0"}}}}"#,
        ),
        (
            "lodash",
            r#"{"dist-tags":{"latest":"4.17.21"},"versions":{"4.17.21":{}}}"#,
        ),
    ]));
    let dir = TempDir::new().unwrap();
    // `true` stands in for Graphviz: it accepts the arguments and exits 0
    let config = write_config(dir.path(), "config.yml", &yaml_config(&registry_url, "true"));

    depgraph_viz(dir.path())
        .arg(&config)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Diagram written to"));

    let source = fs::read_to_string(dir.path().join("express-graph.dot")).unwrap();
    assert!(source.starts_with("digraph \"dependencies\" {"));
    assert!(source.contains("\"express\" [fillcolor=\"yellow\"];"));
    assert!(source.contains("\"lodash\" [fillcolor=\"red\"];"));
    assert!(source.contains("\"debug\" [fillcolor=\"red\"];"));
    // max_depth 2 still fetches debug (depth 1), so ms is drawn at level 3
    assert!(source.contains("\"ms\" [fillcolor=\"blue\"];"));
    assert!(source.contains("\"express\" -> \"lodash\";"));
    assert!(source.contains("\"debug\" -> \"ms\";"));
}

#[cfg(unix)]
#[test]
fn test_broken_packages_do_not_stop_siblings() {
    // "missing" answers 404 and "broken" answers with a non-JSON body
    let registry_url = serve_registry(HashMap::from([
        (
            "express",
            r#"{"dist-tags":{"latest":"1.0.0"},"versions":{"1.0.0":{"dependencies":{"missing":"1","broken":"1","debug":"2.6.9"}}}}"#,
        ),
        ("broken", "not json"),
        (
            "debug",
            r#"{"dist-tags":{"latest":"2.6.9"},"versions":{"2.6.9":{"dependencies":{"ms":"2.0.0"}}}}"#,
        ),
    ]));
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "config.yml", &yaml_config(&registry_url, "true"));

    depgraph_viz(dir.path())
        .arg(&config)
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Registry returned status code 404 for 'missing'",
        ))
        .stderr(predicate::str::contains("Malformed registry response for 'broken'"))
        .stderr(predicate::str::contains("2 package(s) could not be fetched"));

    let source = fs::read_to_string(dir.path().join("express-graph.dot")).unwrap();
    assert!(source.contains("\"express\" -> \"missing\";"));
    assert!(source.contains("\"express\" -> \"broken\";"));
    assert!(source.contains("\"debug\" -> \"ms\";"));
}

#[cfg(unix)]
#[test]
fn test_missing_graphviz_keeps_dot_source() {
    let registry_url = serve_registry(HashMap::from([(
        "express",
        r#"{"dist-tags":{"latest":"1.0.0"},"versions":{"1.0.0":{"dependencies":{"lodash":"4.17.21"}}}}"#,
    )]));
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "config.yml",
        &yaml_config(&registry_url, "/nonexistent/graphviz/bin/dot"),
    );

    depgraph_viz(dir.path())
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not be started"));

    assert!(dir.path().join("express-graph.dot").exists());
}
