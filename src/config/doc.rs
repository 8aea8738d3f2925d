//! Section/key/value document codec.
//!
//! The persisted configuration format is a flat text document:
//!
//! ```text
//! [Script Settings]
//! version=1.0
//! language=en
//! ```
//!
//! Sections keep insertion order and entries keep insertion order, so a
//! parse → render round trip is value-stable. Values are plain strings;
//! typed coercion happens in the readers, not in the format. Lines starting
//! with `;` are comments and blank lines are skipped — neither survives a
//! round trip.

use crate::error::{ParseError, ParseErrorKind};

/// One named section: an ordered list of `key=value` entries.
///
/// Key lookup is a case-sensitive exact match; the first matching entry
/// wins. Duplicate keys cannot arise through this API (`set` replaces in
/// place) or through parsing (a repeated key overwrites the earlier value).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// The whole persisted document: an ordered collection of named sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDoc {
    sections: Vec<Section>,
}

impl ConfigDoc {
    /// An empty document with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from raw text.
    ///
    /// Any malformed line aborts the parse — partial state is discarded and
    /// the caller decides how to recover (the gate substitutes a fresh
    /// default document).
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let mut doc = Self::new();
        let mut current: Option<usize> = None;

        for (idx, line) in raw.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(ParseError {
                        line: line_no,
                        kind: ParseErrorKind::UnterminatedSection,
                    });
                };
                current = Some(doc.section_index(name.trim()));
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ParseError {
                    line: line_no,
                    kind: ParseErrorKind::MissingDelimiter,
                });
            };

            let Some(section) = current else {
                return Err(ParseError {
                    line: line_no,
                    kind: ParseErrorKind::KeyOutsideSection,
                });
            };

            doc.sections[section].set(key.trim(), value.trim());
        }

        Ok(doc)
    }

    /// Serialize the full document back to the textual form `parse` accepts.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(&section.name);
            out.push_str("]\n");
            for (key, value) in &section.entries {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }

    // ── Readers ───────────────────────────────────────────────

    /// Raw value lookup. `None` when the section or key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.get(key))
    }

    /// String value with a caller default for absent section/key.
    pub fn get_str_or(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key).unwrap_or(default).to_string()
    }

    /// Numeric value; the default covers both absence and coercion failure.
    pub fn get_f32_or(&self, section: &str, key: &str, default: f32) -> f32 {
        self.get(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Integer value; the default covers both absence and coercion failure.
    pub fn get_u32_or(&self, section: &str, key: &str, default: u32) -> u32 {
        self.get(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    // ── Writers ───────────────────────────────────────────────

    /// Set a value, creating the section on demand.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let idx = self.section_index(section);
        self.sections[idx].set(key, value);
    }

    /// Set a numeric value. Uses the debug float form so whole numbers keep
    /// their fractional point (`1.0`, not `1`).
    pub fn set_f32(&mut self, section: &str, key: &str, value: f32) {
        self.set(section, key, &format!("{value:?}"));
    }

    /// Ensure a section exists, returning its index.
    fn section_index(&mut self, name: &str) -> usize {
        if let Some(i) = self.sections.iter().position(|s| s.name == name) {
            return i;
        }
        self.sections.push(Section::new(name));
        self.sections.len() - 1
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
