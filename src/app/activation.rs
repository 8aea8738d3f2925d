//! Activation reasons.
//!
//! The host invokes the controller's entry point exactly once per discrete
//! activation event, tagged with why. This enum replaces any host-specific
//! callback convention: ticks carry no payload, a command carries the raw
//! argument string.

/// Why the host invoked [`Controller::activate`](super::service::Controller::activate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation<'a> {
    /// Operator-triggered, with the raw argument string.
    Command(&'a str),
    /// Every-tick cadence.
    FastTick,
    /// Every-10th-tick cadence.
    SlowTick10,
    /// Every-100th-tick cadence.
    SlowTick100,
    /// One-shot initialization, once per controller lifetime.
    Initialize,
}
