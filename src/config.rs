//! Configuration file support for depgraph-viz.
//!
//! The configuration path is the single CLI argument. YAML, TOML and XML
//! files are accepted, chosen by file extension, and validated into a
//! [`VisualizerConfig`] before any registry request is made. Unknown
//! top-level keys (XML: child elements of the root) are warned about and
//! ignored in every format.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::DEFAULT_REGISTRY_URL;
use crate::dependency_graph::domain::PackageName;
use crate::dependency_graph::services::{DEFAULT_DEPTH_CAP, MAX_DEPTH_CAP};
use crate::ports::outbound::DiagramFormat;
use crate::shared::error::ConfigError;
use crate::shared::security::{
    validate_file_stem, validate_regular_file, MAX_CONFIG_FILE_SIZE,
};
use crate::shared::Result;

/// Largest accepted `max_depth`
const MAX_DEPTH_LIMIT: i64 = 100;

/// Top-level configuration file schema (YAML and TOML).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(alias = "root_package_name")]
    pub package_name: Option<String>,
    /// 1-based: `1` fetches the root package only
    pub max_depth: Option<i64>,
    pub output: Option<OutputSection>,
    pub graphviz_path: Option<String>,
    pub depth_cap: Option<i64>,
    pub registry_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The `output` section.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSection {
    pub file_name: Option<String>,
    pub format: Option<String>,
}

/// XML schema: every value arrives as element text.
#[derive(Debug, Deserialize, Default)]
struct XmlConfigFile {
    #[serde(alias = "root_package_name")]
    package_name: Option<String>,
    max_depth: Option<String>,
    output: Option<XmlOutputSection>,
    graphviz_path: Option<String>,
    depth_cap: Option<String>,
    registry_url: Option<String>,
}

/// Child elements of the XML root that [`XmlConfigFile`] reads.
const XML_KNOWN_ELEMENTS: [&str; 7] = [
    "package_name",
    "root_package_name",
    "max_depth",
    "output",
    "graphviz_path",
    "depth_cap",
    "registry_url",
];

#[derive(Debug, Deserialize, Default)]
struct XmlOutputSection {
    file_name: Option<String>,
    format: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub package_name: PackageName,
    /// 0-based resolver bound (`max_depth - 1` of the file)
    pub max_depth: usize,
    pub depth_cap: usize,
    /// Directory containing `dot`, or the executable itself
    pub graphviz_path: Option<PathBuf>,
    pub registry_url: String,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub file_name: String,
    pub format: DiagramFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
    Xml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("xml") => ConfigFormat::Xml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Xml => "XML",
        }
    }
}

/// Load and validate the configuration file at `path`.
///
/// # Errors
/// Every failure is a [`ConfigError`].
pub fn load_config(path: &Path) -> Result<VisualizerConfig> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).map_err(|e| {
        ConfigError::ReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let format = ConfigFormat::from_path(path);
    let config = parse_config(&content, format).map_err(|details| ConfigError::ParseError {
        path: path.to_path_buf(),
        format: format.name().to_string(),
        details,
    })?;

    warn_unknown_fields(&config);
    validate_config(config, path)
}

fn parse_config(content: &str, format: ConfigFormat) -> std::result::Result<ConfigFile, String> {
    match format {
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Xml => {
            let xml: XmlConfigFile =
                quick_xml::de::from_str(content).map_err(|e| e.to_string())?;
            let mut config = xml.into_config_file()?;
            for element in unknown_xml_elements(content)? {
                config
                    .unknown_fields
                    .insert(element, serde_yaml_ng::Value::Null);
            }
            Ok(config)
        }
    }
}

impl XmlConfigFile {
    fn into_config_file(self) -> std::result::Result<ConfigFile, String> {
        Ok(ConfigFile {
            package_name: self.package_name,
            max_depth: parse_xml_integer("max_depth", self.max_depth)?,
            output: self.output.map(|output| OutputSection {
                file_name: output.file_name,
                format: output.format,
            }),
            graphviz_path: self.graphviz_path,
            depth_cap: parse_xml_integer("depth_cap", self.depth_cap)?,
            registry_url: self.registry_url,
            unknown_fields: HashMap::new(),
        })
    }
}

/// Names of the root's child elements outside [`XML_KNOWN_ELEMENTS`].
fn unknown_xml_elements(content: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(content);
    let mut depth = 0usize;
    let mut unknown = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        let (element, opens) = match &event {
            Event::Start(element) => (element, true),
            Event::Empty(element) => (element, false),
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        if depth == 1 {
            let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
            if !XML_KNOWN_ELEMENTS.contains(&name.as_str()) && !unknown.contains(&name) {
                unknown.push(name);
            }
        }
        if opens {
            depth += 1;
        }
    }

    Ok(unknown)
}

fn parse_xml_integer(
    field: &str,
    value: Option<String>,
) -> std::result::Result<Option<i64>, String> {
    value
        .map(|text| {
            text.trim()
                .parse::<i64>()
                .map_err(|_| format!("<{}> must be an integer, got '{}'", field, text.trim()))
        })
        .transpose()
}

/// Validate the parsed configuration.
fn validate_config(config: ConfigFile, path: &Path) -> Result<VisualizerConfig> {
    let missing = |field: &str| ConfigError::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
    };
    let invalid = |field: &str, reason: String| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: field.to_string(),
        reason,
    };

    let package_name = non_blank(config.package_name).ok_or_else(|| missing("package_name"))?;
    let package_name =
        PackageName::new(package_name).map_err(|e| invalid("package_name", e.to_string()))?;

    let max_depth = config.max_depth.ok_or_else(|| missing("max_depth"))?;
    if !(1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        return Err(invalid(
            "max_depth",
            format!("must be between 1 and {}, got {}", MAX_DEPTH_LIMIT, max_depth),
        )
        .into());
    }

    let output = config.output.ok_or_else(|| missing("output"))?;
    let file_name = non_blank(output.file_name).ok_or_else(|| missing("output.file_name"))?;
    validate_file_stem(&file_name).map_err(|e| invalid("output.file_name", e.to_string()))?;
    let format = non_blank(output.format).ok_or_else(|| missing("output.format"))?;
    let format = format
        .parse::<DiagramFormat>()
        .map_err(|_| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
            format: format.clone(),
        })?;

    let depth_cap = match config.depth_cap {
        None => DEFAULT_DEPTH_CAP,
        Some(cap) if (0..=MAX_DEPTH_CAP as i64).contains(&cap) => cap as usize,
        Some(cap) => {
            return Err(invalid(
                "depth_cap",
                format!("must be between 0 and {}, got {}", MAX_DEPTH_CAP, cap),
            )
            .into())
        }
    };

    let registry_url = match non_blank(config.registry_url) {
        None => DEFAULT_REGISTRY_URL.to_string(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
        Some(url) => {
            return Err(invalid(
                "registry_url",
                format!("'{}' must start with http:// or https://", url),
            )
            .into())
        }
    };

    Ok(VisualizerConfig {
        package_name,
        max_depth: (max_depth - 1) as usize,
        depth_cap,
        graphviz_path: non_blank(config.graphviz_path).map(PathBuf::from),
        registry_url,
        output: OutputConfig { file_name, format },
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
