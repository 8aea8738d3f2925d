//! The controller — composition root of the control loop.
//!
//! [`Controller`] owns the configuration gate, the scheduler, the message
//! catalog, the command table, and the status panel. The host calls
//! [`Controller::activate`] once per activation event; everything runs to
//! completion synchronously within that call.
//!
//! ```text
//!  ConfigFieldPort ──▶ ┌──────────────────────────────┐
//!                      │          Controller          │ ──▶ StatusSink
//!  DeviceIndexPort ──▶ │  Gate · Scheduler · Catalog  │
//!                      │  CommandTable · StatusPanel  │
//!                      └──────────────────────────────┘
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::command::context::CommandContext;
use crate::command::table::{build_command_table, cmd_load, cmd_start};
use crate::command::{CommandLine, CommandRegistry, Dispatch};
use crate::config::{ConfigGate, SCRIPT_VERSION};
use crate::i18n::Catalog;
use crate::scheduler::{Cadence, CadenceSet, SchedState, Scheduler};
use crate::status::StatusPanel;

use super::activation::Activation;
use super::ports::{CAP_TEXT_SURFACE, ConfigFieldPort, DeviceIndexPort, DeviceQuery, DeviceRef, StatusSink};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

pub struct Controller {
    gate: ConfigGate,
    scheduler: Scheduler,
    catalog: Catalog,
    table: CommandRegistry,
    status: StatusPanel,
    /// Status display resolved through the device index at initialization.
    display: Option<DeviceRef>,
    /// Arm the scheduler automatically after the first successful load.
    auto_start: bool,
    activations: u64,
}

impl Controller {
    /// Construct with the built-in message catalog and auto-start enabled.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    /// Construct with a caller-supplied catalog (extended message keys,
    /// extra languages).
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            gate: ConfigGate::new(),
            scheduler: Scheduler::new(),
            catalog,
            table: build_command_table(),
            status: StatusPanel::new(),
            display: None,
            auto_start: true,
            activations: 0,
        }
    }

    /// Disable or re-enable auto-start on initialization.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.auto_start = auto_start;
    }

    // ── Entry point ───────────────────────────────────────────

    /// Run one activation to completion.
    ///
    /// `host` supplies all three ports; the controller borrows it only for
    /// the duration of this call.
    pub fn activate<H>(&mut self, activation: Activation<'_>, host: &mut H)
    where
        H: ConfigFieldPort + StatusSink + DeviceIndexPort,
    {
        self.activations += 1;

        match activation {
            Activation::Command(raw) => self.handle_command(raw, host),

            // Reserved for domain work; this core carries no per-tick logic.
            Activation::FastTick | Activation::SlowTick10 => {}

            Activation::SlowTick100 => {
                let text = self.status.render();
                host.present(self.display.as_ref(), &text);
            }

            Activation::Initialize => self.initialize(host),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current scheduler run state.
    pub fn sched_state(&self) -> SchedState {
        self.scheduler.state()
    }

    /// Cadences the host should re-invoke on.
    pub fn armed(&self) -> CadenceSet {
        self.scheduler.armed()
    }

    /// True once the first configuration load has succeeded.
    pub fn is_config_loaded(&self) -> bool {
        self.gate.is_loaded()
    }

    /// Active language tag.
    pub fn language(&self) -> &str {
        self.gate.language()
    }

    /// Last status message (what the ×100 render will show).
    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    /// Snapshot of controller state for diagnostics or host display.
    pub fn report(&self) -> ControllerReport {
        ControllerReport {
            version: SCRIPT_VERSION,
            language: self.gate.language().to_string(),
            sched_state: format!("{:?}", self.scheduler.state()),
            fast_armed: self.scheduler.is_armed(Cadence::Fast),
            slow_armed: self.scheduler.is_armed(Cadence::Slow),
            config_loaded: self.gate.is_loaded(),
            activations: self.activations,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn handle_command(&mut self, raw: &str, host: &mut impl ConfigFieldPort) {
        let Some(line) = CommandLine::parse(raw) else {
            debug!("activation carried no command: {raw:?}");
            return;
        };

        let Self {
            gate,
            scheduler,
            status,
            catalog,
            table,
            ..
        } = self;
        let mut ctx = CommandContext {
            gate,
            scheduler,
            status,
            catalog,
            field: host,
        };

        match table.dispatch(line.name(), line.args(), &mut ctx) {
            Dispatch::Handled => {}
            Dispatch::MissingArgument => {
                warn!("command '{}' requires an argument", line.name());
            }
            Dispatch::Unknown => {
                warn!("unrecognized command '{}'", line.name());
            }
        }
    }

    fn initialize<H>(&mut self, host: &mut H)
    where
        H: ConfigFieldPort + DeviceIndexPort,
    {
        if !self.scheduler.take_init() {
            debug!("initialize cadence already consumed");
            return;
        }

        self.display = host.first_matching(&DeviceQuery::with_capability(CAP_TEXT_SURFACE));
        match &self.display {
            Some(d) => info!("status display: '{}'", d.name),
            None => info!("no status display found, using default surface"),
        }

        if self.gate.is_loaded() {
            return;
        }

        let Self {
            gate,
            scheduler,
            status,
            catalog,
            auto_start,
            ..
        } = self;
        let mut ctx = CommandContext {
            gate,
            scheduler,
            status,
            catalog,
            field: host,
        };

        cmd_load(&mut ctx);
        if ctx.gate.is_loaded() && *auto_start {
            cmd_start(&mut ctx);
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// Report
// ───────────────────────────────────────────────────────────────

/// A point-in-time controller snapshot suitable for logging or host
/// display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerReport {
    pub version: f32,
    pub language: String,
    pub sched_state: String,
    pub fast_armed: bool,
    pub slow_armed: bool,
    pub config_loaded: bool,
    pub activations: u64,
}
