//! Message catalog with visible fallback for untranslated keys.
//!
//! User-facing text is looked up by a stable key in the active language's
//! table. A key missing from the active language but present in the default
//! language is NOT silently substituted — the default text comes back
//! wrapped in a marker naming the key and the active language, so missing
//! translations are impossible to overlook in the status output. Absence is
//! always representable: resolution returns an empty string, never an error.
//!
//! Templates carry `{0}`/`{1}` positional placeholders; substitution order
//! is deterministic.

use std::collections::HashMap;

use crate::config::DEFAULT_LANGUAGE;

// ── Message keys ──────────────────────────────────────────────

pub const CONFIGURATION_LOADED: &str = "CONFIGURATION_LOADED";
pub const CONFIGURATION_SAVED: &str = "CONFIGURATION_SAVED";
pub const EXECUTION_STARTED: &str = "EXECUTION_STARTED";
pub const EXECUTION_STOPPED: &str = "EXECUTION_STOPPED";
pub const ERROR_SAVE_VERSION_MISMATCH: &str = "ERROR_SAVE_VERSION_MISMATCH";

type Table = HashMap<&'static str, &'static str>;

/// Language tag → key → template text.
pub struct Catalog {
    tables: HashMap<String, Table>,
}

impl Catalog {
    /// The built-in catalog: a complete English table plus placeholder
    /// tables for the other supported languages (translations pending).
    pub fn builtin() -> Self {
        let en: Table = [
            (CONFIGURATION_LOADED, "Configuration Loaded."),
            (CONFIGURATION_SAVED, "Configuration Saved."),
            (EXECUTION_STARTED, "Execution Started."),
            (EXECUTION_STOPPED, "Execution Halted."),
            (
                ERROR_SAVE_VERSION_MISMATCH,
                "Error: Save version is newer than script version: '{0}' > '{1}'\nAborting...",
            ),
        ]
        .into_iter()
        .collect();

        let mut tables = HashMap::new();
        tables.insert(DEFAULT_LANGUAGE.to_string(), en);
        tables.insert("de".to_string(), Table::new());
        tables.insert("es".to_string(), Table::new());
        Self { tables }
    }

    /// Add or replace one entry, creating the language table on demand.
    /// Domain scripts extend the catalog with their own keys this way.
    pub fn insert(&mut self, lang: &str, key: &'static str, text: &'static str) {
        self.tables
            .entry(normalize(lang))
            .or_default()
            .insert(key, text);
    }

    /// Resolve `key` in `lang`.
    ///
    /// Empty key → empty string. Active-language hit → the text verbatim.
    /// Default-language hit → the default text annotated as untranslated.
    /// Miss everywhere → empty string.
    pub fn resolve(&self, key: &str, lang: &str) -> String {
        if key.is_empty() {
            return String::new();
        }

        let lang = normalize(lang);
        if let Some(text) = self.tables.get(&lang).and_then(|t| t.get(key)) {
            return (*text).to_string();
        }

        if let Some(text) = self
            .tables
            .get(DEFAULT_LANGUAGE)
            .and_then(|t| t.get(key))
        {
            return format!("Untranslated Key: [{key}] for language [{lang}]\n{text}");
        }

        String::new()
    }

    /// Resolve `key` and substitute `{0}`, `{1}`, … with `args` in order.
    pub fn resolve_args(&self, key: &str, lang: &str, args: &[&str]) -> String {
        let mut text = self.resolve(key, lang);
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{i}}}"), arg);
        }
        text
    }
}

fn normalize(lang: &str) -> String {
    lang.trim().to_ascii_lowercase()
}
