//! Update-frequency state machine.
//!
//! The scheduler never executes periodic work itself. It only tracks which
//! tick cadences are currently armed; the host consults [`Scheduler::armed`]
//! after every activation and re-invokes the controller accordingly:
//!
//! ```text
//!            ┌──────┐   arm_run    ┌─────────────┐
//!            │ Idle │─────────────▶│ RunningBoth │
//!            └──┬───┘              └──────┬──────┘
//!          halt │                    halt │  (stop command or
//!               ▼                         ▼   version-gate reject)
//!            ┌─────────┐  arm_run   ┌─────────┐
//!            │ Stopped │◀──────────▶│ Stopped │
//!            └─────────┘            └─────────┘
//! ```
//!
//! Transitions are command-driven only; there are no time-based
//! self-transitions. A one-shot initialize cadence is armed at construction
//! and consumed exactly once by the first initialize activation.

use log::info;

// ═══════════════════════════════════════════════════════════════
//  Cadence bitset
// ═══════════════════════════════════════════════════════════════

/// Tick cadences the host can re-invoke the controller on.
///
/// `Slow` covers both the every-10th and every-100th tick activations; the
/// host derives which of the two is due from its own tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cadence {
    /// Fires every tick.
    Fast = 0b01,
    /// Fires every 10th and every 100th tick.
    Slow = 0b10,
}

impl Cadence {
    /// Return the bitmask for this cadence.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

/// Set of armed cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CadenceSet(u8);

impl CadenceSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Cadence::Fast.mask() | Cadence::Slow.mask())
    }

    pub const fn contains(self, cadence: Cadence) -> bool {
        self.0 & cadence.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// ═══════════════════════════════════════════════════════════════
//  Run state
// ═══════════════════════════════════════════════════════════════

/// Externally observable scheduler state, derived from the cadence set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedState {
    /// Initial state, before the first start.
    Idle,
    RunningFast,
    RunningSlow,
    RunningBoth,
    /// All cadences cleared by a stop command or a version-gate reject.
    Stopped,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler
// ═══════════════════════════════════════════════════════════════

pub struct Scheduler {
    cadences: CadenceSet,
    /// Distinguishes Stopped from the pre-start Idle once cadences are empty.
    stopped: bool,
    /// One-shot initialize cadence, armed until consumed.
    init_armed: bool,
}

impl Scheduler {
    /// A new scheduler is Idle with the initialize cadence armed.
    pub fn new() -> Self {
        Self {
            cadences: CadenceSet::empty(),
            stopped: false,
            init_armed: true,
        }
    }

    /// Arm continuous execution: both the fast and slow cadences.
    pub fn arm_run(&mut self) {
        self.cadences = CadenceSet::all();
        self.stopped = false;
        info!("scheduler: armed fast+slow");
    }

    /// Disarm all cadences. Used by the stop command and forced by a
    /// version-gate reject regardless of prior state.
    pub fn halt(&mut self) {
        self.cadences = CadenceSet::empty();
        self.stopped = true;
        info!("scheduler: halted");
    }

    /// Consume the one-shot initialize cadence. True exactly once.
    pub fn take_init(&mut self) -> bool {
        let was_armed = self.init_armed;
        self.init_armed = false;
        was_armed
    }

    /// Cadences the host should currently re-invoke on.
    pub fn armed(&self) -> CadenceSet {
        self.cadences
    }

    pub fn is_armed(&self, cadence: Cadence) -> bool {
        self.cadences.contains(cadence)
    }

    /// Derived run state.
    pub fn state(&self) -> SchedState {
        match (
            self.cadences.contains(Cadence::Fast),
            self.cadences.contains(Cadence::Slow),
        ) {
            (true, true) => SchedState::RunningBoth,
            (true, false) => SchedState::RunningFast,
            (false, true) => SchedState::RunningSlow,
            (false, false) if self.stopped => SchedState::Stopped,
            (false, false) => SchedState::Idle,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
