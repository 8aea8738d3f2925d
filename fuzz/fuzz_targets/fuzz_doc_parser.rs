//! Fuzz target: `ConfigDoc::parse`
//!
//! Drives arbitrary text into the document codec and asserts that it
//! never panics and that any accepted document re-parses to an equal
//! value after rendering.
//!
//! cargo fuzz run fuzz_doc_parser

#![no_main]

use autohelm::config::doc::ConfigDoc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(doc) = ConfigDoc::parse(raw) {
        let rendered = doc.render();
        let reparsed = ConfigDoc::parse(&rendered).expect("rendered doc must re-parse");
        assert_eq!(doc, reparsed, "render/parse must be value-stable");
    }
});
