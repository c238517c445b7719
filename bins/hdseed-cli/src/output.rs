//! Labeled report printing, as text or JSON.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// An ordered set of labeled values produced by one command.
#[derive(Debug, Default)]
pub struct Report {
    title: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl Report {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push((label, value.to_string()));
        self
    }

    /// Render as a heading followed by `label: value` lines.
    pub fn to_text(&self) -> String {
        let width = self.fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut out = format!("=== {} ===\n", self.title);
        for (label, value) in &self.fields {
            out.push_str(&format!("{:<width$} {value}\n", format!("{label}:"), width = width + 1));
        }
        out
    }

    /// Render as a single JSON object keyed by label, in insertion order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print(&self, json: bool) -> serde_json::Result<()> {
        if json {
            println!("{}", self.to_json()?);
        } else {
            print!("{}", self.to_text());
        }
        Ok(())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
