//! DOT format builder.

use std::fmt::Write;

/// Quote and escape a string as a DOT identifier or attribute value.
fn quote(input: &str) -> String {
    let escaped = input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
///
/// Node identifiers are always quoted, so package names such as
/// `@types/node` or `lodash.merge` need no sanitizing.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", quote(name));
        Self { output, indent: 1 }
    }

    /// Add a node style default.
    pub fn node_style(&mut self, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str("node");
        self.write_attrs(attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add a node with attributes.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&quote(id));
        self.write_attrs(attrs);
        self.output.push_str(";\n");
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{} -> {};", quote(from), quote(to));
        self
    }

    /// Close the graph and return the DOT source.
    pub fn finish(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        if attrs.is_empty() {
            return;
        }
        self.output.push_str(" [");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}={}", key, quote(value));
        }
        self.output.push(']');
    }
}
