//! Fuzz target for [`Mapping`] edits and [`transform`]
//!
//! Totality of the engine over arbitrary text
//!
//! # Strategy
//!
//! - Edit sequences: Arbitrary letters (members or not) with arbitrary raw
//!   input, including empty and multi-character strings
//! - Messages: Arbitrary Unicode text run through both transform modes
//!
//! # Invariants
//!
//! - Every letter keeps exactly one entry after any edit sequence
//! - No stored value is ever uppercase Latin
//! - Out-of-alphabet edits leave the mapping untouched
//! - `transform` preserves character count in both modes
//! - Bijective mappings round-trip filtered messages
//! - NEVER panic on any input

#![no_main]

use arbitrary::Arbitrary;
use cipherpad_core::{Alphabet, Mapping, Mode, filter_message, transform};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Edit {
    letter: char,
    input: String,
}

#[derive(Debug, Arbitrary)]
struct Input {
    start_identity: bool,
    edits: Vec<Edit>,
    message: String,
}

fuzz_target!(|input: Input| {
    let alphabet = Alphabet::latin();
    let mut mapping = if input.start_identity {
        Mapping::identity(alphabet.clone())
    } else {
        Mapping::unset(alphabet.clone())
    };

    for edit in input.edits.iter().take(64) {
        let before = mapping.clone();
        if mapping.set(edit.letter, &edit.input).is_err() {
            assert!(!alphabet.contains(edit.letter));
            assert_eq!(mapping, before, "failed edit must not change the mapping");
        }
    }

    assert_eq!(mapping.entries().count(), alphabet.len());
    assert!(mapping.entries().all(|(_, v)| !v.is_some_and(|c| c.is_ascii_uppercase())));

    let message = filter_message(&input.message);
    assert_eq!(filter_message(&message), message);

    let chars = message.chars().count();
    let encrypted = transform(&message, &mapping, Mode::Encrypt);
    let decrypted = transform(&encrypted, &mapping, Mode::Decrypt);
    assert_eq!(encrypted.chars().count(), chars);
    assert_eq!(decrypted.chars().count(), chars);

    if mapping.is_bijective() {
        // Values outside the alphabet could collide with pass-through text
        let closed = mapping.entries().all(|(_, v)| v.is_some_and(|c| alphabet.contains(c)));
        if closed {
            assert_eq!(decrypted, message);
        }
    }
});
