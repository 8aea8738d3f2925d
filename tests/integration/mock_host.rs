//! Mock host adapter for integration tests.
//!
//! Implements all three ports and records every status presentation so
//! tests can assert on the full surface history without a real host.

use autohelm::app::ports::{
    ConfigFieldPort, DeviceIndexPort, DeviceQuery, DeviceRef, NameMatch, StatusSink,
};

/// One recorded `present` call: resolved target name (if any) plus text.
#[derive(Debug, Clone, PartialEq)]
pub struct Presented {
    pub target: Option<String>,
    pub text: String,
}

pub struct MockHost {
    /// The host-provided configuration text field.
    pub field: String,
    /// Devices the index can answer with: (device, capability).
    pub devices: Vec<(DeviceRef, &'static str)>,
    /// Every status presentation, in order.
    pub presented: Vec<Presented>,
    pub field_writes: usize,
}

#[allow(dead_code)]
impl MockHost {
    pub fn new() -> Self {
        Self {
            field: String::new(),
            devices: Vec::new(),
            presented: Vec::new(),
            field_writes: 0,
        }
    }

    pub fn with_field(field: &str) -> Self {
        let mut host = Self::new();
        host.field = field.to_string();
        host
    }

    pub fn with_device(mut self, id: u32, name: &str, capability: &'static str) -> Self {
        self.devices.push((
            DeviceRef {
                id,
                name: name.to_string(),
            },
            capability,
        ));
        self
    }

    pub fn last_presented(&self) -> Option<&Presented> {
        self.presented.last()
    }
}

impl ConfigFieldPort for MockHost {
    fn read(&self) -> String {
        self.field.clone()
    }

    fn write(&mut self, contents: &str) {
        self.field = contents.to_string();
        self.field_writes += 1;
    }
}

impl StatusSink for MockHost {
    fn present(&mut self, target: Option<&DeviceRef>, text: &str) {
        self.presented.push(Presented {
            target: target.map(|d| d.name.clone()),
            text: text.to_string(),
        });
    }
}

impl DeviceIndexPort for MockHost {
    fn first_matching(&self, query: &DeviceQuery<'_>) -> Option<DeviceRef> {
        self.devices
            .iter()
            .filter(|(_, cap)| *cap == query.capability)
            .find(|(dev, _)| match query.name {
                NameMatch::Any => true,
                NameMatch::Prefix(p) => dev.name.starts_with(p),
                NameMatch::Contains(c) => dev.name.contains(c),
            })
            .map(|(dev, _)| dev.clone())
    }
}
