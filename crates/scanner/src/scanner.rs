use crate::imports::extract_stems;
use crate::source::{read_source, SourceText};
use ignore::WalkBuilder;
use log::{debug, error, info, warn};
use repograph_graph::{FileNode, ImportEdge};
use std::path::{Component, Path, PathBuf};

/// Directories never descended into, at any depth: dependency caches,
/// version-control metadata, virtual environments, build output.
const IGNORED_SCOPES: &[&str] = &[
    // VCS / tooling
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    // dependency caches / environments
    "node_modules",
    "venv",
    ".venv",
    "__pycache__",
    ".cache",
    // build output
    "build",
    "dist",
    "target",
    "coverage",
];

/// Extensions that qualify a file as a graph node.
const SOURCE_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "py", "java", "kt", "go", "rs", "cpp",
];

/// Result of a repository scan. Totals are logged, never fatal.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub nodes: Vec<FileNode>,
    pub edges: Vec<ImportEdge>,
}

/// One-shot scanner deriving the file graph for a repository root.
pub struct RepoScanner {
    root: PathBuf,
}

impl RepoScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Walk the tree and produce nodes, then link import-like references.
    ///
    /// A missing root is reported and yields an empty outcome; the service
    /// still starts and accepts viewers.
    pub fn scan(&self) -> ScanOutcome {
        if !self.root.exists() {
            error!("Scan root not found: {}", self.root.display());
            return ScanOutcome::default();
        }

        info!("Scanning: {}", self.root.display());
        let nodes = self.collect_nodes();
        let edges = self.link_imports(&nodes);
        info!("Scan complete: {} nodes, {} edges", nodes.len(), edges.len());
        ScanOutcome { nodes, edges }
    }

    /// Pass one: every allow-listed source file becomes a node.
    fn collect_nodes(&self) -> Vec<FileNode> {
        let mut nodes = Vec::new();

        let root = self.root.clone();
        let mut builder = WalkBuilder::new(&self.root);
        // The noise-directory list is the only exclusion: no gitignore or
        // hidden-file semantics, unlike an indexing walk.
        builder.standard_filters(false);
        builder.filter_entry(move |entry| !is_ignored_scope(entry.path(), &root));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !is_source_file(path) {
                        continue;
                    }

                    let Some(id) = self.relative_id(path) else {
                        debug!("Skipping non-relative entry {}", path.display());
                        continue;
                    };
                    let label = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or_default()
                        .to_string();
                    nodes.push(FileNode::new(id, label));
                }
                Err(e) => warn!("Failed to read entry: {e}"),
            }
        }

        nodes
    }

    /// Pass two: re-read each node's file and connect import stems to other
    /// nodes. Unreadable files contribute nothing and never abort the scan.
    fn link_imports(&self, nodes: &[FileNode]) -> Vec<ImportEdge> {
        let mut edges = Vec::new();

        for node in nodes {
            let content = match read_source(&self.root.join(&node.id)) {
                SourceText::Content(content) => content,
                SourceText::Unreadable | SourceText::NotFound => {
                    debug!("No readable content for {}", node.id);
                    continue;
                }
            };

            for stem in extract_stems(&content) {
                // first node (in scan order) whose filename starts with the
                // stem; the reading file itself never matches
                let target = nodes
                    .iter()
                    .find(|candidate| candidate.id != node.id && candidate.label.starts_with(&stem));
                if let Some(target) = target {
                    edges.push(ImportEdge {
                        source: node.id.clone(),
                        target: target.id.clone(),
                    });
                }
            }
        }

        edges
    }

    /// Root-relative id with separators normalized to `/`.
    fn relative_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => parts.push(name.to_str()?.to_string()),
                _ => return None,
            }
        }
        (!parts.is_empty()).then(|| parts.join("/"))
    }
}

fn is_ignored_scope(path: &Path, root: &Path) -> bool {
    if let Ok(relative) = path.strip_prefix(root) {
        for component in relative.components() {
            if let Component::Normal(name) = component {
                let lowered = name.to_string_lossy().to_lowercase();
                if IGNORED_SCOPES.iter().any(|ignored| ignored == &lowered) {
                    return true;
                }
            }
        }
    }
    false
}

fn is_source_file(path: &Path) -> bool {
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        let ext = ext.to_lowercase();
        return SOURCE_EXTENSIONS.iter().any(|candidate| candidate == &ext);
    }
    false
}
