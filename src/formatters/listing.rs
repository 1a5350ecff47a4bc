use anyhow::Result;
use serde::Serialize;

use crate::core::IncludeGraph;

/// JSON view of the collected dependency mapping, for inspection without
/// writing the merged output.
#[derive(Debug, Serialize)]
pub struct DependencyListing {
    files: Vec<FileEntry>,
    system_includes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FileEntry {
    name: String,
    includes: Vec<String>,
}

impl DependencyListing {
    pub fn from_graph(graph: &IncludeGraph) -> Self {
        let files = graph
            .names()
            .filter_map(|name| graph.file(name))
            .map(|file| FileEntry {
                name: file.name.clone(),
                includes: file.includes.clone(),
            })
            .collect();
        let system_includes = graph.system_includes().map(str::to_string).collect();

        Self {
            files,
            system_includes,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
