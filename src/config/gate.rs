//! Version-gated configuration ownership.
//!
//! [`ConfigGate`] owns the in-memory [`ConfigDoc`] for the lifetime of the
//! controller and is the only component that interprets the distinguished
//! `Script Settings` section. Loads are all-or-nothing: blank or malformed
//! input is replaced by a fresh default document (that is "no prior
//! configuration", not an error), while a document written by a newer
//! script version is rejected wholesale — no field is adopted, the
//! previously active document stays in place, and the caller must halt
//! periodic execution.

use log::{debug, info, warn};

use super::doc::ConfigDoc;
use super::{DEFAULT_LANGUAGE, KEY_LANGUAGE, KEY_VERSION, SCRIPT_VERSION, SETTINGS_SECTION};
use crate::error::{Error, Result, VersionCheck};

/// Compare a stored version against the running script version.
///
/// Reject exactly when the stored version is strictly newer: the script
/// needs updating before it can interpret that document.
pub fn check_version(stored: f32, running: f32) -> VersionCheck {
    if stored > running {
        VersionCheck::Reject
    } else {
        VersionCheck::Accept
    }
}

/// Owner of the persisted configuration document.
pub struct ConfigGate {
    doc: ConfigDoc,
    language: String,
    loaded: bool,
}

impl ConfigGate {
    /// Start with a fresh default document (running version, default
    /// language) so a `save` before any `load` persists something sane.
    pub fn new() -> Self {
        Self {
            doc: default_doc(),
            language: DEFAULT_LANGUAGE.to_string(),
            loaded: false,
        }
    }

    /// Adopt configuration from the host field's raw text.
    ///
    /// Blank or malformed text seeds a fresh default document and still
    /// counts as a successful load. The only error is a version mismatch,
    /// which leaves every piece of gate state untouched.
    pub fn load(&mut self, raw: &str) -> Result<()> {
        let doc = if raw.trim().is_empty() {
            default_doc()
        } else {
            match ConfigDoc::parse(raw) {
                Ok(doc) => doc,
                Err(e) => {
                    debug!("config parse failed ({e}), seeding defaults");
                    default_doc()
                }
            }
        };

        let stored = doc.get_f32_or(SETTINGS_SECTION, KEY_VERSION, SCRIPT_VERSION);
        if check_version(stored, SCRIPT_VERSION) == VersionCheck::Reject {
            warn!("config rejected: stored version {stored} > running {SCRIPT_VERSION}");
            return Err(Error::VersionMismatch {
                stored,
                running: SCRIPT_VERSION,
            });
        }

        self.language = doc.get_str_or(SETTINGS_SECTION, KEY_LANGUAGE, DEFAULT_LANGUAGE);
        self.doc = doc;
        self.loaded = true;
        info!("config loaded (version {stored}, language '{}')", self.language);
        Ok(())
    }

    /// Serialize the current document for the host field.
    ///
    /// Pre-existing non-document text in the field is not preserved.
    pub fn serialize(&self) -> String {
        self.doc.render()
    }

    /// Active language tag, adopted on the last successful load.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// True once the first load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read access for domain settings stored alongside the script section.
    pub fn doc(&self) -> &ConfigDoc {
        &self.doc
    }

    /// Write access for domain settings; persisted on the next `save`.
    pub fn doc_mut(&mut self) -> &mut ConfigDoc {
        &mut self.doc
    }
}

impl Default for ConfigGate {
    fn default() -> Self {
        Self::new()
    }
}

fn default_doc() -> ConfigDoc {
    let mut doc = ConfigDoc::new();
    doc.set_f32(SETTINGS_SECTION, KEY_VERSION, SCRIPT_VERSION);
    doc.set(SETTINGS_SECTION, KEY_LANGUAGE, DEFAULT_LANGUAGE);
    doc
}
