//! The library descriptor read from the resolver's JSON IR.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, RenderContext, Result};

/// The part of a library's JSON IR the header emitter consumes.
///
/// Unknown fields (declarations, type shapes, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LibraryDescriptor {
    /// Dotted library name, e.g. `fuchsia.io`.
    #[serde(default)]
    pub name: String,
    /// Libraries this one depends on, in resolver order.
    #[serde(default)]
    pub library_dependencies: Vec<Dependency>,
    /// Extra include paths, emitted after the dependency headers.
    #[serde(default)]
    pub headers: Vec<String>,
}

/// A library dependency entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dependency {
    /// Dotted library name of the dependency.
    pub name: String,
}

impl Dependency {
    /// Include path of the dependency's generated header.
    pub fn header(&self) -> String {
        header_path(&segments(&self.name))
    }
}

impl LibraryDescriptor {
    /// Open and parse a descriptor file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_json_str_with_filename(&content, &filename)
    }

    /// Parse a descriptor from a string (uses "library.json" as default filename)
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_str_with_filename(content, "library.json")
    }

    /// Parse a descriptor from a string with a custom filename for error reporting
    pub fn from_json_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Namespace segments of this library, outermost first.
    pub fn segments(&self) -> Vec<String> {
        segments(&self.name)
    }

    /// Lower the descriptor into the context the renderers consume.
    ///
    /// Dependency headers come first, in dependency order, followed by the
    /// explicit headers. Nothing is sorted or deduplicated.
    pub fn render_context(&self) -> RenderContext {
        let headers = self
            .library_dependencies
            .iter()
            .map(Dependency::header)
            .chain(self.headers.iter().cloned());
        RenderContext::new(self.segments(), headers)
    }

    /// Path of this library's generated header, relative to the output root.
    pub fn output_path(&self) -> String {
        header_path(&self.segments())
    }
}

/// Include path of the generated header for a library, e.g.
/// `["fuchsia", "io"]` → `fuchsia/io/cpp/fidl.h`.
pub fn header_path(segments: &[String]) -> String {
    let mut parts: Vec<&str> = segments.iter().map(String::as_str).collect();
    parts.extend(["cpp", "fidl.h"]);
    parts.join("/")
}

fn segments(name: &str) -> Vec<String> {
    name.split('.')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
