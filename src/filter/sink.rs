//! Style output targets

use crate::error::{EyeFilterError, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for generated style rules
pub trait StyleSink: Send + Sync {
    /// Write `css` under `id`, replacing whatever was previously written under it
    fn upsert_style(&self, id: &str, css: &str) -> Result<()>;
}

/// A style element in a [`PageStyles`] document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleNode {
    /// Element identifier
    pub id: String,
    /// Text content
    pub content: String,
}

/// In-memory document head holding style nodes
#[derive(Debug, Default)]
pub struct PageStyles {
    nodes: Mutex<Vec<StyleNode>>,
}

impl PageStyles {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all style nodes, in insertion order
    pub fn nodes(&self) -> Vec<StyleNode> {
        self.nodes.lock().clone()
    }

    /// Content of the node with `id`
    pub fn content(&self, id: &str) -> Option<String> {
        self.nodes
            .lock()
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.content.clone())
    }

    /// Number of nodes with `id`
    pub fn count(&self, id: &str) -> usize {
        self.nodes.lock().iter().filter(|node| node.id == id).count()
    }
}

impl StyleSink for PageStyles {
    fn upsert_style(&self, id: &str, css: &str) -> Result<()> {
        let mut nodes = self.nodes.lock();
        if let Some(node) = nodes.iter_mut().find(|node| node.id == id) {
            css.clone_into(&mut node.content);
        } else {
            debug!("Creating style node '{}'", id);
            nodes.push(StyleNode {
                id: id.to_string(),
                content: css.to_string(),
            });
        }
        Ok(())
    }
}

/// User stylesheet file holding the filter rule
///
/// The file contains a single block: a comment naming the style id followed by
/// the rule. Writing the same content again leaves the file untouched.
#[derive(Debug)]
pub struct StylesheetFile {
    path: PathBuf,
}

impl StylesheetFile {
    /// Stylesheet at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the stylesheet
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full file content for a rule
    pub fn document(id: &str, css: &str) -> String {
        format!("/* {id} */\n{css}\n")
    }
}

impl StyleSink for StylesheetFile {
    fn upsert_style(&self, id: &str, css: &str) -> Result<()> {
        let document = Self::document(id, css);

        if std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == document) {
            debug!("Stylesheet {} already up to date", self.path.display());
            return Ok(());
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(document.as_bytes())?;
        temp.persist(&self.path)
            .map_err(|e| EyeFilterError::StyleOutputError(Box::new(e)))?;

        debug!("Stylesheet {} updated", self.path.display());
        Ok(())
    }
}
