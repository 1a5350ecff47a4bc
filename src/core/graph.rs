use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// A single input file, keyed by its base name.
///
/// Only the dependency list is captured up front; the body is re-read from
/// `path` at emission time rather than cached.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub path: PathBuf,
    /// Locally-included file names, in order of appearance, duplicates kept.
    pub includes: Vec<String>,
}

/// File-name keyed dependency mapping plus the global system-include set.
///
/// The key is the base file name only; two files with the same name in
/// different subdirectories collide and the last one collected wins.
#[derive(Debug, Default)]
pub struct IncludeGraph {
    files: HashMap<String, SourceFile>,
    order: Vec<String>,
    system_includes: BTreeSet<String>,
}

impl IncludeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: SourceFile) {
        if !self.files.contains_key(&file.name) {
            self.order.push(file.name.clone());
        }
        self.files.insert(file.name.clone(), file);
    }

    /// Records a system header token (the text between `<` and `>`).
    /// Duplicates collapse.
    pub fn add_system_include(&mut self, token: &str) {
        self.system_includes.insert(token.to_string());
    }

    pub fn file(&self, name: &str) -> Option<&SourceFile> {
        self.files.get(name)
    }

    /// File names in the order they were collected.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Distinct system header tokens in lexicographic order.
    pub fn system_includes(&self) -> impl Iterator<Item = &str> {
        self.system_includes.iter().map(String::as_str)
    }

    pub fn file_count(&self) -> usize {
        self.order.len()
    }

    pub fn system_include_count(&self) -> usize {
        self.system_includes.len()
    }
}
