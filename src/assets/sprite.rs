use std::collections::HashMap;

use crate::foundation::core::Rect;
use crate::foundation::error::{LedstageError, LedstageResult};

/// One named region of a sprite sheet.
///
/// Mirrors the on-disk spec format: `{ "position": [x, y], "size": [w, h] }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpriteEntry {
    /// Top-left corner of the region within the sheet.
    pub position: [i32; 2],
    /// Region extent in pixels.
    pub size: [u32; 2],
}

impl SpriteEntry {
    /// The region as a rectangle in sheet coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position[0], self.position[1], self.size[0], self.size[1])
    }
}

/// A sprite-sheet specification: sprite name to sheet region.
///
/// Lookups of unknown names resolve to `None`, never an error; callers render
/// nothing for them.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SpriteSheetSpec(HashMap<String, SpriteEntry>);

impl SpriteSheetSpec {
    /// An empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a spec from its JSON file contents.
    pub fn from_json_bytes(bytes: &[u8]) -> LedstageResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| LedstageError::asset(format!("sprite spec parse failed: {e}")))
    }

    /// Read and parse a spec file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LedstageResult<Self> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(|e| LedstageError::asset(format!("read {}: {e}", path.as_ref().display())))?;
        Self::from_json_bytes(&bytes)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: SpriteEntry) {
        self.0.insert(name.into(), entry);
    }

    /// Look up a sprite's sheet region; `None` for unknown names.
    pub fn region(&self, name: &str) -> Option<Rect> {
        self.0.get(name).map(SpriteEntry::rect)
    }

    /// Number of named sprites.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when the spec has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sprite.rs"]
mod tests;
