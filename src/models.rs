//! Data models for palette entries and groups

use crate::color::{ColorError, HexColor};
use indexmap::IndexMap;
use serde::Serialize;

/// A single named color parsed from a palette file.
///
/// Entries are immutable once constructed; the hex invariant is enforced
/// by [`HexColor`] at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    /// Full label as written in the file, e.g. `"Primary 1 (Main)"`.
    pub label: String,
    /// Group the entry belongs to, e.g. `"Primary"`.
    pub group: String,
    /// Validated `#RRGGBB` value, casing preserved.
    pub color: HexColor,
}

impl ColorEntry {
    /// Build an entry, validating the color value.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if `color` is not a valid `#RRGGBB` string.
    pub fn new(
        label: impl Into<String>,
        group: impl Into<String>,
        color: &str,
    ) -> Result<Self, ColorError> {
        Ok(Self {
            label: label.into(),
            group: group.into(),
            color: HexColor::parse(color)?,
        })
    }
}

/// Ordered collection of palette groups.
///
/// Groups keep their first-appearance order and entries keep file order
/// within each group. This is the canonical shape every caller input is
/// normalized into before layout begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    groups: IndexMap<String, Vec<ColorEntry>>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a flat entry list into grouped form.
    ///
    /// Groups are created in first-seen order; entries stay in input order
    /// within their group.
    pub fn from_entries(entries: impl IntoIterator<Item = ColorEntry>) -> Self {
        let mut palette = Self::new();
        for entry in entries {
            palette.push(entry);
        }
        palette
    }

    /// Append an entry, creating its group if this is the first sighting.
    pub fn push(&mut self, entry: ColorEntry) {
        self.groups.entry(entry.group.clone()).or_default().push(entry);
    }

    /// Iterate groups in first-appearance order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ColorEntry])> {
        self.groups.iter().map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A warning message from parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub message: String,
    /// 1-based line number in the input file.
    pub line: usize,
}
