//! Autohelm — control loop core for host-embedded automation scripts.
//!
//! The host invokes the [`Controller`](app::service::Controller) exactly
//! once per activation (command, tick, or initialize); the controller
//! persists configuration in a host-provided text field behind a version
//! gate, dispatches operator commands through a registered table, tracks
//! which tick cadences are armed, and resolves user-facing text through a
//! language catalog with visible fallback.
//!
//! ```text
//!  host activation ──▶ Controller ──┬─▶ ConfigGate ──▶ ConfigFieldPort
//!    (reason-tagged)                ├─▶ CommandRegistry
//!                                   ├─▶ Scheduler (armed cadences)
//!                                   └─▶ StatusPanel ──▶ StatusSink
//! ```
//!
//! Everything is synchronous and single-threaded: one activation runs to
//! completion before the next begins, so no state here is ever shared
//! across concurrent calls.

#![deny(unused_must_use)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod i18n;
pub mod scheduler;
pub mod status;
