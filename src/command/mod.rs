//! Command-line tokenizer and dispatch table.
//!
//! Operator input is a raw argument string: a command name followed by
//! whitespace-delimited positional arguments, with double-quoted segments
//! kept as single tokens. Each command is bound to a plain `fn` handler —
//! no closures, no heap — classified by arity:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  CommandRegistry                                      │
//! │  ┌────────┬───────────────────┬────────────────────┐  │
//! │  │ name    │ no-arg binding    │ one-arg binding    │  │
//! │  ├────────┼───────────────────┼────────────────────┤  │
//! │  │ load    │ fn(ctx)           │ —                  │  │
//! │  │ run     │ fn(ctx)           │ fn(ctx, arg)       │  │
//! │  └────────┴───────────────────┴────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! When a name carries both bindings, the no-arg binding wins and any
//! supplied arguments are ignored; this is the documented contract.
//! Unregistered names are a no-op — the caller logs them, nothing here
//! treats them as an error.

pub mod context;
pub mod table;

use heapless::Vec as BoundedVec;

use context::CommandContext;

/// Upper bound on tokens per command line (name + arguments).
pub const MAX_TOKENS: usize = 8;

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// A tokenized command line borrowing from the raw input.
#[derive(Debug)]
pub struct CommandLine<'a> {
    tokens: BoundedVec<&'a str, MAX_TOKENS>,
}

impl<'a> CommandLine<'a> {
    /// Tokenize `raw`.
    ///
    /// `None` — the NoCommand case — on empty input, an unterminated
    /// quoted segment, or more than [`MAX_TOKENS`] tokens.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut tokens: BoundedVec<&'a str, MAX_TOKENS> = BoundedVec::new();
        let bytes = raw.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            // Skip inter-token whitespace.
            if bytes[i].is_ascii_whitespace() {
                i += 1;
                continue;
            }

            let token = if bytes[i] == b'"' {
                let start = i + 1;
                let close = raw[start..].find('"').map(|off| start + off)?;
                i = close + 1;
                &raw[start..close]
            } else {
                let start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                &raw[start..i]
            };

            tokens.push(token).ok()?;
        }

        if tokens.is_empty() {
            return None;
        }
        Some(Self { tokens })
    }

    /// The command name (first token).
    pub fn name(&self) -> &'a str {
        self.tokens[0]
    }

    /// Positional arguments after the name.
    pub fn args(&self) -> &[&'a str] {
        &self.tokens[1..]
    }
}

// ---------------------------------------------------------------------------
// Handler bindings
// ---------------------------------------------------------------------------

/// Handler taking no argument.
pub type NoArgFn = fn(&mut CommandContext<'_>);

/// Handler taking one string argument.
pub type OneArgFn = fn(&mut CommandContext<'_>, &str);

/// A handler tagged with its arity class.
pub enum Handler {
    NoArg(NoArgFn),
    OneArg(OneArgFn),
}

/// One registry entry; a name may carry both arity bindings.
struct Binding {
    name: &'static str,
    no_arg: Option<NoArgFn>,
    one_arg: Option<OneArgFn>,
}

/// Outcome of a dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler ran.
    Handled,
    /// Only a one-arg binding exists and no argument was supplied; no-op.
    MissingArgument,
    /// No binding under that name; no-op.
    Unknown,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered, immutable-after-construction command table.
pub struct CommandRegistry {
    entries: Vec<Binding>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Bind `handler` under `name`, merging with any existing entry for the
    /// same name. A later registration of the same arity replaces the
    /// earlier one.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        let idx = match self
            .entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
        {
            Some(idx) => idx,
            None => {
                self.entries.push(Binding {
                    name,
                    no_arg: None,
                    one_arg: None,
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];
        match handler {
            Handler::NoArg(f) => entry.no_arg = Some(f),
            Handler::OneArg(f) => entry.one_arg = Some(f),
        }
    }

    /// Resolve `name` case-insensitively and invoke its handler.
    ///
    /// The no-arg binding wins when both are present; a one-arg binding is
    /// invoked with the first positional argument only.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        ctx: &mut CommandContext<'_>,
    ) -> Dispatch {
        let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
        else {
            return Dispatch::Unknown;
        };

        if let Some(f) = entry.no_arg {
            f(ctx);
            return Dispatch::Handled;
        }

        if let Some(f) = entry.one_arg {
            return match args.first() {
                Some(arg) => {
                    f(ctx, arg);
                    Dispatch::Handled
                }
                None => Dispatch::MissingArgument,
            };
        }

        Dispatch::Unknown
    }

    /// Registered command names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigGate;
    use crate::i18n::Catalog;
    use crate::scheduler::Scheduler;
    use crate::status::StatusPanel;

    // ── Tokenizer ─────────────────────────────────────────────

    #[test]
    fn tokenizes_name_and_args() {
        let line = CommandLine::parse("run fast now").unwrap();
        assert_eq!(line.name(), "run");
        assert_eq!(line.args(), ["fast", "now"]);
    }

    #[test]
    fn quoted_segment_is_one_token() {
        let line = CommandLine::parse("save \"main pump profile\" extra").unwrap();
        assert_eq!(line.name(), "save");
        assert_eq!(line.args(), ["main pump profile", "extra"]);
    }

    #[test]
    fn empty_and_blank_input_is_no_command() {
        assert!(CommandLine::parse("").is_none());
        assert!(CommandLine::parse("   \t ").is_none());
    }

    #[test]
    fn unterminated_quote_is_no_command() {
        assert!(CommandLine::parse("run \"half open").is_none());
    }

    #[test]
    fn token_overflow_is_no_command() {
        assert!(CommandLine::parse("a b c d e f g h i").is_none());
        assert!(CommandLine::parse("a b c d e f g h").is_some());
    }

    #[test]
    fn empty_quoted_token_is_kept() {
        let line = CommandLine::parse("run \"\"").unwrap();
        assert_eq!(line.args(), [""]);
    }

    // ── Registry ──────────────────────────────────────────────

    struct NullField;
    impl crate::app::ports::ConfigFieldPort for NullField {
        fn read(&self) -> String {
            String::new()
        }
        fn write(&mut self, _contents: &str) {}
    }

    fn with_ctx(run: impl FnOnce(&mut CommandContext<'_>)) {
        let mut gate = ConfigGate::new();
        let mut scheduler = Scheduler::new();
        let mut status = StatusPanel::new();
        let catalog = Catalog::builtin();
        let mut field = NullField;
        let mut ctx = CommandContext {
            gate: &mut gate,
            scheduler: &mut scheduler,
            status: &mut status,
            catalog: &catalog,
            field: &mut field,
        };
        run(&mut ctx);
    }

    fn mark_no_arg(ctx: &mut CommandContext<'_>) {
        ctx.status.set_message("no-arg ran");
    }

    fn mark_one_arg(ctx: &mut CommandContext<'_>, arg: &str) {
        ctx.status.set_message(arg);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut reg = CommandRegistry::new();
        reg.register("load", Handler::NoArg(mark_no_arg));
        with_ctx(|ctx| {
            assert_eq!(reg.dispatch("LoAd", &[], ctx), Dispatch::Handled);
            assert_eq!(ctx.status.message(), "no-arg ran");
        });
    }

    #[test]
    fn no_arg_wins_over_one_arg_for_same_name() {
        let mut reg = CommandRegistry::new();
        reg.register("run", Handler::OneArg(mark_one_arg));
        reg.register("run", Handler::NoArg(mark_no_arg));
        with_ctx(|ctx| {
            assert_eq!(reg.dispatch("run", &["mode"], ctx), Dispatch::Handled);
            assert_eq!(ctx.status.message(), "no-arg ran");
        });
    }

    #[test]
    fn one_arg_gets_first_positional_only() {
        let mut reg = CommandRegistry::new();
        reg.register("set", Handler::OneArg(mark_one_arg));
        with_ctx(|ctx| {
            assert_eq!(reg.dispatch("set", &["first", "second"], ctx), Dispatch::Handled);
            assert_eq!(ctx.status.message(), "first");
        });
    }

    #[test]
    fn one_arg_without_argument_is_a_no_op() {
        let mut reg = CommandRegistry::new();
        reg.register("set", Handler::OneArg(mark_one_arg));
        with_ctx(|ctx| {
            assert_eq!(reg.dispatch("set", &[], ctx), Dispatch::MissingArgument);
            assert_eq!(ctx.status.message(), "");
        });
    }

    #[test]
    fn unregistered_name_mutates_nothing() {
        let reg = CommandRegistry::new();
        with_ctx(|ctx| {
            let state_before = ctx.scheduler.state();
            assert_eq!(reg.dispatch("bogus", &["x"], ctx), Dispatch::Unknown);
            assert_eq!(ctx.scheduler.state(), state_before);
            assert_eq!(ctx.status.message(), "");
            assert!(!ctx.gate.is_loaded());
        });
    }
}
