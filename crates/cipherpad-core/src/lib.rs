//! Cipherpad Core
//!
//! The substitution mapping engine behind the cipherpad workbench. A
//! [`Mapping`] assigns every letter of an [`Alphabet`] a single replacement
//! character (or leaves it unset), and [`transform`] applies that mapping
//! forward or in reverse over arbitrary text.
//!
//! # Architecture
//!
//! Everything here is pure and synchronous:
//! - Randomness comes in through the [`Environment`] trait, so the initial
//!   shuffled mapping is reproducible under a seeded environment
//! - Nothing performs I/O; a presentation layer owns a [`MappingEngine`] and
//!   forwards user edits into it
//!
//! # Invariants
//!
//! - A mapping holds exactly one entry per alphabet letter at all times
//! - Stored values are never uppercase Latin letters; such writes are
//!   silently dropped
//! - [`transform`] preserves the character count of its input
//! - Decryption resolves shared values to the earliest letter in alphabet
//!   order

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod engine;
pub mod env;
mod error;
pub mod mapping;
pub mod message;
pub mod mode;
pub mod transform;

pub use alphabet::{Alphabet, is_reserved};
pub use engine::MappingEngine;
pub use env::{Environment, shuffle};
pub use error::{AlphabetError, MappingError, ParseModeError};
pub use mapping::{Mapping, SetOutcome};
pub use message::{Message, filter_message};
pub use mode::Mode;
pub use transform::transform;
