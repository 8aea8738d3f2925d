//! Port traits — the boundary between the control loop and its host.
//!
//! ```text
//!   Host adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! The host implements these traits; the [`Controller`](super::service::Controller)
//! consumes them per activation, so the control loop never touches a
//! concrete host API. Every port is synchronous and must complete within
//! the activation that invoked it.

// ───────────────────────────────────────────────────────────────
// Configuration field (host text blob the document persists in)
// ───────────────────────────────────────────────────────────────

/// The single host-provided text field configuration is persisted in.
///
/// Reads and writes replace the whole field; pre-existing non-document
/// text is not preserved across a save.
pub trait ConfigFieldPort {
    fn read(&self) -> String;
    fn write(&mut self, contents: &str);
}

// ───────────────────────────────────────────────────────────────
// Status-output surface
// ───────────────────────────────────────────────────────────────

/// Where rendered status text goes.
///
/// `target` is the display device resolved at initialization, when the
/// host's index found one; `None` means the host's default surface.
pub trait StatusSink {
    fn present(&mut self, target: Option<&DeviceRef>, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Device index (external indexed-query collaborator)
// ───────────────────────────────────────────────────────────────

/// Capability tag of devices that can display the status surface.
pub const CAP_TEXT_SURFACE: &str = "text-surface";

/// Handle to a host-addressable device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRef {
    pub id: u32,
    pub name: String,
}

/// How a device name is matched.
#[derive(Debug, Clone, Copy)]
pub enum NameMatch<'a> {
    Any,
    Prefix(&'a str),
    Contains(&'a str),
}

/// A single indexed query: capability, optional name filter, optional
/// restriction to the connected structure of a reference device.
#[derive(Debug, Clone, Copy)]
pub struct DeviceQuery<'a> {
    pub capability: &'a str,
    pub name: NameMatch<'a>,
    pub same_construct_as: Option<u32>,
}

impl<'a> DeviceQuery<'a> {
    /// Match any device with `capability`.
    pub fn with_capability(capability: &'a str) -> Self {
        Self {
            capability,
            name: NameMatch::Any,
            same_construct_as: None,
        }
    }

    pub fn named(mut self, name: NameMatch<'a>) -> Self {
        self.name = name;
        self
    }

    pub fn on_construct_of(mut self, device_id: u32) -> Self {
        self.same_construct_as = Some(device_id);
        self
    }
}

/// Synchronous, side-effect-free query over the host's device index.
///
/// Returns the first match in the index's own order. The index internals
/// (and what "connected structure" means) are entirely the host's concern.
pub trait DeviceIndexPort {
    fn first_matching(&self, query: &DeviceQuery<'_>) -> Option<DeviceRef>;
}
