//! Static navigation table.
//!
//! Each entry is a `[label, link, children]` triple, exactly as the
//! documentation generator emits it:
//!
//! ```text
//! [ "Files", "files.html", [
//!   [ "File List", "files.html", null ],
//!   [ "Globals", "globals.html", null ]
//! ] ]
//! ```
//!
//! `link` and `children` may be `null` or missing. An empty children array is
//! read the same as `null`.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};

use crate::error::{NavTreeError, Result};

/// One generated navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodeSpec {
    /// Display text.
    pub label: String,
    /// Target page; `None` for pure containers.
    pub link: Option<String>,
    /// Nested entries, materialized only on first expansion.
    pub children: Option<Arc<[TreeNodeSpec]>>,
}

impl TreeNodeSpec {
    /// Creates a leaf entry.
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
            children: None,
        }
    }

    /// Creates an entry with children.
    ///
    /// An empty `children` vector produces a leaf.
    pub fn branch(
        label: impl Into<String>,
        link: Option<&str>,
        children: Vec<TreeNodeSpec>,
    ) -> Self {
        Self {
            label: label.into(),
            link: link.map(str::to_string),
            children: (!children.is_empty()).then(|| children.into()),
        }
    }

    /// Whether this entry can be expanded.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Child entries, empty for leaves.
    pub fn children(&self) -> &[TreeNodeSpec] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl<'de> Deserialize<'de> for TreeNodeSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeNodeSpecVisitor)
    }
}

struct TreeNodeSpecVisitor;

impl<'de> Visitor<'de> for TreeNodeSpecVisitor {
    type Value = TreeNodeSpec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a [label, link, children] navigation entry")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<TreeNodeSpec, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let label: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let link: Option<String> = seq.next_element::<Option<String>>()?.flatten();
        let children: Option<Vec<TreeNodeSpec>> =
            seq.next_element::<Option<Vec<TreeNodeSpec>>>()?.flatten();

        // Newer generators append extra fields; they carry nothing we render.
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(TreeNodeSpec {
            label,
            link,
            children: children.filter(|c| !c.is_empty()).map(Into::into),
        })
    }
}

/// The top-level navigation table.
///
/// Cheap to clone; entries are shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavData {
    entries: Arc<[TreeNodeSpec]>,
}

impl NavData {
    /// Wraps an already-built table.
    pub fn new(entries: Vec<TreeNodeSpec>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Parses a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<TreeNodeSpec> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Parses a generated script such as `var NAVTREE = [ ... ];`.
    ///
    /// Only the first array literal is read. Whatever follows it, such as
    /// the generator's rendering functions, is ignored.
    pub fn from_script(script: &str) -> Result<Self> {
        let start = script.find('[').ok_or(NavTreeError::MissingArray)?;
        let entries = serde_json::Deserializer::from_str(&script[start..])
            .into_iter::<Vec<TreeNodeSpec>>()
            .next()
            .ok_or(NavTreeError::MissingArray)??;
        Ok(Self::new(entries))
    }

    /// Loads a table from disk, accepting either a bare JSON array or a
    /// generated script.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| NavTreeError::io(path, e))?;
        let data = if text.trim_start().starts_with('[') {
            Self::from_json(&text)?
        } else {
            Self::from_script(&text)?
        };
        log::debug!(
            "Loaded {} top-level navigation entries from {}",
            data.len(),
            path.display()
        );
        Ok(data)
    }

    /// Top-level entries.
    pub fn entries(&self) -> &[TreeNodeSpec] {
        &self.entries
    }

    /// Shared handle to the top-level entries.
    pub fn shared(&self) -> Arc<[TreeNodeSpec]> {
        Arc::clone(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<TreeNodeSpec>> for NavData {
    fn from(entries: Vec<TreeNodeSpec>) -> Self {
        Self::new(entries)
    }
}
