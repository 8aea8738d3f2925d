//! Shared mutable context threaded through every command handler.
//!
//! `CommandContext` is the single struct command handlers read from and
//! write to: the configuration gate, the scheduler, the status panel, the
//! message catalog, and the host's configuration field. The controller
//! assembles it from its own fields for the duration of one activation.

use crate::app::ports::ConfigFieldPort;
use crate::config::ConfigGate;
use crate::i18n::Catalog;
use crate::scheduler::Scheduler;
use crate::status::StatusPanel;

pub struct CommandContext<'a> {
    pub gate: &'a mut ConfigGate,
    pub scheduler: &'a mut Scheduler,
    pub status: &'a mut StatusPanel,
    pub catalog: &'a Catalog,
    pub field: &'a mut dyn ConfigFieldPort,
}

impl CommandContext<'_> {
    /// Resolve `key` in the active language and post it as the status
    /// message.
    pub fn say(&mut self, key: &str) {
        let msg = self.catalog.resolve(key, self.gate.language());
        self.status.set_message(&msg);
    }

    /// Like [`say`](Self::say), with positional placeholder substitution.
    pub fn say_args(&mut self, key: &str, args: &[&str]) {
        let msg = self.catalog.resolve_args(key, self.gate.language(), args);
        self.status.set_message(&msg);
    }
}
