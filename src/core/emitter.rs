use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::graph::{IncludeGraph, SourceFile};
use crate::formatters::LineWriter;

/// Envelope settings for the merged output.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Namespace wrapped once around all merged bodies.
    pub namespace: String,
    /// Include-guard macro name.
    pub guard: String,
    /// Text for a `/* Source: ... */` comment at the top, if any.
    pub attribution: Option<String>,
}

/// Default include-guard macro for an output path: `testgen.hpp` becomes
/// `TESTGEN_HPP_`. Non-alphanumeric characters map to underscores, letters
/// upper-case, one trailing underscore.
pub fn guard_from_file_name(output: &Path) -> String {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    guard.push('_');
    guard
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Writes the amalgamated output: guard and system-include preamble, then
/// every file body in depth-first dependency order inside one namespace
/// block.
///
/// Bodies are read and written line by line; CRLF line endings in the input
/// come out as LF.
pub struct Emitter {
    options: EmitOptions,
    /// Lines containing this substring are dropped from file bodies, so the
    /// per-file namespace open and close lines both disappear.
    namespace_marker: String,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        let namespace_marker = format!("namespace {}", options.namespace);
        Self {
            options,
            namespace_marker,
        }
    }

    pub fn emit<W: Write>(&self, graph: &IncludeGraph, out: W) -> Result<W> {
        let mut writer = LineWriter::new(out);

        if let Some(source) = &self.options.attribution {
            writer.write_verbatim("")?;
            writer.write_verbatim(&format!("/* Source: {source} */"))?;
            writer.write_verbatim("")?;
        }
        writer.write_verbatim(&format!("#ifndef {}", self.options.guard))?;
        writer.write_verbatim(&format!("#define {}", self.options.guard))?;
        if graph.system_include_count() > 0 {
            writer.write_verbatim("")?;
            for token in graph.system_includes() {
                writer.write_verbatim(&format!("#include <{token}>"))?;
            }
        }
        writer.write_verbatim("")?;
        writer.write_verbatim(&format!("namespace {} {{", self.options.namespace))?;

        let mut visited = HashMap::new();
        for name in graph.names() {
            if !visited.contains_key(name) {
                self.emit_file(graph, name, &mut visited, &mut writer)?;
            }
        }

        writer.write_verbatim(&format!("}} /* namespace {} */", self.options.namespace))?;
        writer.write_verbatim("")?;
        writer.write_verbatim(&format!("#endif /* {} */", self.options.guard))?;

        Ok(writer.into_inner())
    }

    /// Post-order emission: dependencies first, then the file itself.
    ///
    /// A dependency that is still in progress when reached again means the
    /// local-include graph has a cycle, which is reported instead of letting
    /// the recursion run away.
    fn emit_file<W: Write>(
        &self,
        graph: &IncludeGraph,
        name: &str,
        visited: &mut HashMap<String, Visit>,
        writer: &mut LineWriter<W>,
    ) -> Result<()> {
        visited.insert(name.to_string(), Visit::InProgress);

        let file = graph
            .file(name)
            .with_context(|| format!("include \"{name}\" does not match any collected file"))?;

        for dep in &file.includes {
            match visited.get(dep.as_str()) {
                Some(Visit::Done) => {}
                Some(Visit::InProgress) => {
                    bail!("cyclic include chain: \"{dep}\" is included again while \"{name}\" is still being emitted")
                }
                None => self.emit_file(graph, dep, visited, writer)?,
            }
        }

        self.emit_body(file, writer)?;
        visited.insert(name.to_string(), Visit::Done);
        Ok(())
    }

    fn emit_body<W: Write>(&self, file: &SourceFile, writer: &mut LineWriter<W>) -> Result<()> {
        writer.write_verbatim(&format!(
            "/* ==================== {} ====================*/",
            file.name
        ))?;

        let reader = BufReader::new(
            File::open(&file.path)
                .with_context(|| format!("failed to reopen {}", file.path.display()))?,
        );

        for line in reader.lines() {
            let line = line.with_context(|| format!("failed to read {}", file.path.display()))?;
            // Directives (including the local includes already resolved) and
            // per-file namespace lines are dropped entirely.
            if line.starts_with('#') || line.contains(&self.namespace_marker) {
                continue;
            }
            writer.write_line(&line)?;
        }

        Ok(())
    }
}
