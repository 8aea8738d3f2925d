//! Fuzz target: `CommandLine::parse`
//!
//! The tokenizer must never panic on arbitrary operator input, and every
//! accepted line must expose a name plus bounded arguments.
//!
//! cargo fuzz run fuzz_command_line

#![no_main]

use autohelm::command::{CommandLine, MAX_TOKENS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    if let Some(line) = CommandLine::parse(raw) {
        let _ = line.name();
        assert!(line.args().len() < MAX_TOKENS, "args exceed token bound");
    }
});
