use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

use super::graph::{IncludeGraph, SourceFile};

/// Walks a header tree and classifies `#include` directives.
///
/// Every regular file under the root is treated as a source file, whatever
/// its extension. Directives are matched against the start of the line only,
/// with optional leading whitespace.
pub struct Collector {
    local_include: Regex,
    system_include: Regex,
}

impl Collector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            local_include: Regex::new(r#"^\s*#include\s+"([^"]+)""#)?,
            system_include: Regex::new(r"^\s*#include\s+<([^>]+)>")?,
        })
    }

    /// Reads every file under `root` once and builds the dependency mapping.
    ///
    /// Directory entries are visited in file-name order so repeated runs on
    /// the same tree collect files in the same order.
    pub fn collect(&self, root: &Path) -> Result<IncludeGraph> {
        let mut graph = IncludeGraph::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let file = self.scan_file(entry.path(), name, &mut graph)?;
            graph.add_file(file);
        }

        Ok(graph)
    }

    fn scan_file(&self, path: &Path, name: String, graph: &mut IncludeGraph) -> Result<SourceFile> {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        );

        let mut includes = Vec::new();
        for line in reader.lines() {
            let line = line.with_context(|| format!("failed to read {}", path.display()))?;
            if let Some(caps) = self.local_include.captures(&line) {
                includes.push(caps[1].to_string());
            } else if let Some(caps) = self.system_include.captures(&line) {
                graph.add_system_include(&caps[1]);
            }
        }

        Ok(SourceFile {
            name,
            path: path.to_path_buf(),
            includes,
        })
    }
}
