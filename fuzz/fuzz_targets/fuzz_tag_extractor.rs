//! Fuzz target for tag extraction.
//!
//! Goal: The extractor should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_tag_extractor
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Resource properties arrive as JSON; anything that parses must extract
    // without panicking.
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = tagguard_domain::extract_tags(Some(&value));
    }
});
