//! Message filtering.

use std::{fmt, ops::Deref};

use crate::alphabet::is_reserved;

/// Remove every reserved (uppercase Latin) character from `raw`.
///
/// All other characters keep their identity and relative order. Filtering is
/// idempotent.
pub fn filter_message(raw: &str) -> String {
    raw.chars().filter(|&c| !is_reserved(c)).collect()
}

/// A message that has passed through [`filter_message`].
///
/// Holding a `Message` guarantees it contains no reserved characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Filter `raw` into a message.
    pub fn new(raw: &str) -> Self {
        Self(filter_message(raw))
    }

    /// The filtered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Message {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Message {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_uppercase_latin_only() {
        assert_eq!(filter_message("Hello World!"), "ello orld!");
        assert_eq!(filter_message("ÉCOLE été 42"), "É été 42");
    }

    #[test]
    fn keeps_everything_else_in_order() {
        let raw = "a1 b2\t-c3\n😀";
        assert_eq!(filter_message(raw), raw);
    }

    #[test]
    fn all_uppercase_becomes_empty() {
        assert_eq!(filter_message("ABCXYZ"), "");
        assert_eq!(filter_message(""), "");
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_message("MiXeD CaSe 123");
        assert_eq!(filter_message(&once), once);
    }

    #[test]
    fn message_derefs_to_filtered_text() {
        let message = Message::new("Top Secret");
        assert_eq!(&*message, "op ecret");
        assert_eq!(message.char_count(), 8);
        assert_eq!(message.to_string(), "op ecret");
        assert_eq!(Message::from("ok"), Message::new("ok"));
    }
}
