//! Core types for usage-code generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Viewports at or below this width (in CSS pixels) get the condensed sample
pub const NARROW_VIEWPORT_MAX_WIDTH: u32 = 768;

/// Shape of the generated usage sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayContext {
    /// Condensed sample without comments
    Narrow,
    /// Fully commented sample
    #[default]
    Wide,
}

impl DisplayContext {
    pub fn from_viewport_width(width: u32) -> Self {
        if width <= NARROW_VIEWPORT_MAX_WIDTH {
            DisplayContext::Narrow
        } else {
            DisplayContext::Wide
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayContext::Narrow => "narrow",
            DisplayContext::Wide => "wide",
        }
    }
}

impl fmt::Display for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "narrow" => Ok(DisplayContext::Narrow),
            "wide" => Ok(DisplayContext::Wide),
            _ => Err(format!("Unknown display context: {s} (expected narrow or wide)")),
        }
    }
}

/// Variable name to sample value, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends `key` unless it is already present. Returns whether it was added.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push((key, value.into()));
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as a JavaScript object literal: unquoted keys, single-quoted
    /// values, two-space indent. Values are inserted verbatim.
    pub fn to_object_literal(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }

        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("  {key}: '{value}'"))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("{{\n{body}\n}}")
    }
}
