//! Persisted configuration: the section/key/value document codec and the
//! version gate that decides whether a stored document may be adopted.

pub mod doc;
pub mod gate;

pub use doc::ConfigDoc;
pub use gate::{ConfigGate, check_version};

/// Version of the running script, persisted on every save and compared
/// against the stored document's `version` on load.
pub const SCRIPT_VERSION: f32 = 1.0;

/// Fixed section the script itself owns inside the document.
pub const SETTINGS_SECTION: &str = "Script Settings";

/// Keys within [`SETTINGS_SECTION`].
pub const KEY_VERSION: &str = "version";
pub const KEY_LANGUAGE: &str = "language";

/// Fallback language tag; its catalog table is always present.
pub const DEFAULT_LANGUAGE: &str = "en";
