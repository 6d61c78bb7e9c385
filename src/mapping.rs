//! Gesture-to-URL mapping table with JSON persistence.
//!
//! The table is a flat JSON object keyed by gesture name:
//!
//! ```json
//! { "open-hand": "https://example.org", "pinch": "https://crates.io" }
//! ```
//!
//! A missing file reads as an empty table; callers rewrite the file after
//! every mutation.  The dispatcher only reads the table at dispatch time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::gesture::GestureKind;

/// Mutable gesture-to-URL table, owned by the dispatcher side of the system.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    entries: BTreeMap<GestureKind, String>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from a JSON file.  A missing file is an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading mapping file {}", path.display()))?;
        let entries = serde_json::from_str(&raw)
            .with_context(|| format!("parsing mapping file {}", path.display()))?;
        Ok(Self { entries })
    }

    /// Persist the table, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, raw).with_context(|| format!("writing mapping file {}", path.display()))
    }

    /// Bind a gesture to a URL.  Returns the URL it replaced, if any.
    pub fn bind(&mut self, kind: GestureKind, url: String) -> Option<String> {
        self.entries.insert(kind, url)
    }

    /// Remove a binding.  Returns the URL that was bound, if any.
    pub fn unbind(&mut self, kind: GestureKind) -> Option<String> {
        self.entries.remove(&kind)
    }

    /// URL bound to a gesture, if any.
    pub fn url_for(&self, kind: GestureKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All bindings in gesture order.
    pub fn iter(&self) -> impl Iterator<Item = (GestureKind, &str)> {
        self.entries.iter().map(|(kind, url)| (*kind, url.as_str()))
    }
}

// ── Tests ──────────────────────────────────────────────────
