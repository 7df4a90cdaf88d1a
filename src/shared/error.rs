use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph resolved (and rendered, if non-empty)
    Success = 0,
    /// Application error (file I/O, renderer failure, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Configuration file missing, unreadable or invalid
    ConfigurationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (3)"),
        }
    }
}

/// Configuration errors.
///
/// Always fatal: they abort the run before any registry request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable.")]
    ReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid {format} syntax.")]
    ParseError {
        path: PathBuf,
        format: String,
        details: String,
    },

    #[error("Missing required config field '{field}' in {path}\n\n💡 Hint: Add '{field}' to the configuration file.")]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid value for config field '{field}' in {path}\nReason: {reason}")]
    InvalidField {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error("Unsupported output format '{format}' in {path}\n\n💡 Hint: Use one of 'png', 'svg', 'pdf', 'jpg' or 'gif'.")]
    UnsupportedFormat { path: PathBuf, format: String },
}

/// Registry fetch failures.
///
/// The resolver recovers from all of these: the affected package simply
/// contributes no dependencies.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error while fetching '{package}': {details}")]
    Network { package: String, details: String },

    #[error("Registry returned status code {status} for '{package}'")]
    UnexpectedStatus { package: String, status: u16 },

    #[error("Malformed registry response for '{package}': {details}")]
    MalformedResponse { package: String, details: String },

    #[error("Registry reports no 'latest' tag for '{package}'")]
    MissingLatestTag { package: String },

    #[error("Security: package name '{package}' cannot be used in a registry URL: {reason}")]
    InvalidUrlComponent { package: String, reason: String },
}

/// Application-specific errors for graph output.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Graphviz renderer '{executable}' could not be started\nDetails: {details}\n\n💡 Hint: Install Graphviz or set 'graphviz_path' in the configuration file")]
    RendererUnavailable { executable: PathBuf, details: String },

    #[error("Graphviz failed to render {path}\nDetails: {details}")]
    RenderFailed { path: PathBuf, details: String },
}
