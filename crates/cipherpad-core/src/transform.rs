//! Forward and inverse substitution over text.

use tracing::trace;

use crate::{mapping::Mapping, mode::Mode};

/// Apply `mapping` to every character of `message`.
///
/// - [`Mode::Encrypt`]: each letter with a set entry becomes its value
/// - [`Mode::Decrypt`]: each character becomes the first letter (in
///   alphabet order) whose value it is
///
/// Anything without a match passes through unchanged, so the output always
/// has the same number of characters as the input. Pure: neither argument is
/// modified.
pub fn transform(message: &str, mapping: &Mapping, mode: Mode) -> String {
    let output: String = match mode {
        Mode::Encrypt => message.chars().map(|c| mapping.encrypt_char(c)).collect(),
        Mode::Decrypt => message.chars().map(|c| mapping.decrypt_char(c)).collect(),
    };

    trace!(%mode, chars = output.chars().count(), "transformed message");
    output
}
