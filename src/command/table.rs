//! Concrete command handlers and table builder.
//!
//! Each operator command is a plain `fn` over [`CommandContext`], bound
//! once at controller construction:
//!
//! ```text
//!  load        reload configuration from the host field
//!  save        persist the in-memory document to the host field
//!  run/start   arm continuous execution (optional reserved sub-mode arg)
//!  stop        disarm all cadences
//! ```
//!
//! The initialize activation reuses `cmd_load`/`cmd_start` directly, so
//! auto-start and the operator commands share one code path.

use log::{debug, warn};

use super::context::CommandContext;
use super::{CommandRegistry, Handler};
use crate::error::Error;
use crate::i18n;

/// Build the command table. Called once at controller construction.
pub fn build_command_table() -> CommandRegistry {
    let mut table = CommandRegistry::new();
    table.register("load", Handler::NoArg(cmd_load));
    table.register("save", Handler::NoArg(cmd_save));
    table.register("run", Handler::NoArg(cmd_start));
    table.register("run", Handler::OneArg(cmd_start_mode));
    table.register("start", Handler::NoArg(cmd_start));
    table.register("start", Handler::OneArg(cmd_start_mode));
    table.register("stop", Handler::NoArg(cmd_stop));
    table
}

/// Reload configuration from the host field.
///
/// Blank or malformed field text falls back to defaults inside the gate. A
/// version-gate reject halts the scheduler and posts the localized mismatch
/// message carrying both version numbers.
pub fn cmd_load(ctx: &mut CommandContext<'_>) {
    let raw = ctx.field.read();
    match ctx.gate.load(&raw) {
        Ok(()) => ctx.say(i18n::CONFIGURATION_LOADED),
        Err(Error::VersionMismatch { stored, running }) => {
            ctx.scheduler.halt();
            let stored = format!("{stored:?}");
            let running = format!("{running:?}");
            ctx.say_args(i18n::ERROR_SAVE_VERSION_MISMATCH, &[&stored, &running]);
        }
        Err(e) => warn!("configuration load failed: {e}"),
    }
}

/// Persist the in-memory document to the host field.
pub fn cmd_save(ctx: &mut CommandContext<'_>) {
    let text = ctx.gate.serialize();
    ctx.field.write(&text);
    ctx.say(i18n::CONFIGURATION_SAVED);
}

/// Arm continuous execution.
pub fn cmd_start(ctx: &mut CommandContext<'_>) {
    ctx.scheduler.arm_run();
    ctx.say(i18n::EXECUTION_STARTED);
}

/// `run <mode>` — the parameter is reserved for future sub-modes; every
/// value currently falls through to a plain start.
pub fn cmd_start_mode(ctx: &mut CommandContext<'_>, mode: &str) {
    debug!("start sub-mode '{mode}' requested");
    cmd_start(ctx);
}

/// Disarm all cadences.
pub fn cmd_stop(ctx: &mut CommandContext<'_>) {
    ctx.scheduler.halt();
    ctx.say(i18n::EXECUTION_STOPPED);
}
