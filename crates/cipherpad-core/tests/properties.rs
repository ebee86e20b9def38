//! Property-based tests for the mapping engine.
//!
//! These cover the observable guarantees of the engine over arbitrary
//! mappings and messages: permutation seeding, filter idempotence, length
//! preservation, bijective round trips and the decryption tie-break.

use std::sync::{Arc, Mutex, PoisonError};

use cipherpad_core::{
    Alphabet, Environment, Mapping, MappingEngine, Mode, SetOutcome, filter_message, transform,
};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Test environment using a seeded ChaCha generator
#[derive(Clone)]
struct TestEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl TestEnv {
    fn with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }
}

impl Environment for TestEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}

/// Characters that exercise every branch: letters, reserved, digits,
/// whitespace, punctuation and non-Latin.
fn text_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('a', 'z'),
        2 => proptest::char::range('A', 'Z'),
        1 => proptest::char::range('0', '9'),
        1 => prop::sample::select(vec![' ', '\n', '.', '!', 'é', 'ß', '世', '😀']),
    ]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(text_char(), 0..64).prop_map(|chars| chars.into_iter().collect())
}

/// Arbitrary (possibly non-bijective, possibly partial) latin mapping.
fn any_mapping() -> impl Strategy<Value = Mapping> {
    let value = prop_oneof![
        1 => Just(None),
        4 => proptest::char::range('a', 'z').prop_map(Some),
        1 => prop::sample::select(vec!['0', '1', '#', 'é', ' ']).prop_map(Some),
    ];
    prop::collection::vec(value, 26).prop_map(|values| {
        let pairs = ('a'..='z').zip(values).filter_map(|(letter, value)| value.map(|v| (letter, v)));
        Mapping::from_pairs(Alphabet::latin(), pairs).unwrap()
    })
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Encrypt), Just(Mode::Decrypt)]
}

proptest! {
    #[test]
    fn prop_initial_mapping_is_permutation(seed in any::<u64>()) {
        let engine = MappingEngine::new(TestEnv::with_seed(seed), Alphabet::latin());

        let keys: String = engine.mapping().entries().map(|(letter, _)| letter).collect();
        prop_assert_eq!(keys, "abcdefghijklmnopqrstuvwxyz");

        let mut values: Vec<char> = engine.mapping().entries().filter_map(|(_, v)| v).collect();
        values.sort_unstable();
        prop_assert_eq!(values.into_iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn prop_filter_is_idempotent(raw in text()) {
        let once = filter_message(&raw);
        prop_assert_eq!(filter_message(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_transform_preserves_length(
        message in text(),
        mapping in any_mapping(),
        mode in any_mode(),
    ) {
        let output = transform(&message, &mapping, mode);
        prop_assert_eq!(output.chars().count(), message.chars().count());
    }

    #[test]
    fn prop_bijective_round_trip(seed in any::<u64>(), raw in text()) {
        let engine = MappingEngine::new(TestEnv::with_seed(seed), Alphabet::latin());
        let message = filter_message(&raw);

        let encrypted = engine.transform(&message, Mode::Encrypt);
        let decrypted = engine.transform(&encrypted, Mode::Decrypt);
        prop_assert_eq!(decrypted, message);
    }

    #[test]
    fn prop_decrypt_resolves_to_first_letter(
        mapping in any_mapping(),
        target in proptest::char::range('a', 'z'),
    ) {
        let decrypted: Vec<char> = transform(&target.to_string(), &mapping, Mode::Decrypt)
            .chars()
            .collect();
        let expected = mapping
            .entries()
            .find(|&(_, value)| value == Some(target))
            .map_or(target, |(letter, _)| letter);
        prop_assert_eq!(decrypted, vec![expected]);
    }

    #[test]
    fn prop_uppercase_write_never_lands(
        mapping in any_mapping(),
        letter in proptest::char::range('a', 'z'),
        prefix in text(),
        upper in proptest::char::range('A', 'Z'),
    ) {
        let mut edited = mapping.clone();
        let raw = format!("{prefix}{upper}");
        let outcome = edited.set(letter, &raw).unwrap();

        prop_assert_eq!(outcome, SetOutcome::Rejected { input: upper });
        prop_assert_eq!(edited, mapping);
    }

    #[test]
    fn prop_transform_is_pure(mapping in any_mapping(), message in text(), mode in any_mode()) {
        let before = mapping.clone();
        let first = transform(&message, &mapping, mode);
        let second = transform(&message, &mapping, mode);
        prop_assert_eq!(first, second);
        prop_assert_eq!(mapping, before);
    }
}

#[test]
fn identity_mapping_scenario() {
    let mapping = Mapping::identity(Alphabet::latin());
    assert_eq!(transform("hello world", &mapping, Mode::Encrypt), "hello world");
}

#[test]
fn partial_mapping_scenario() {
    let mut mapping = Mapping::unset(Alphabet::latin());
    mapping.set('a', "1").unwrap();
    mapping.set('b', "2").unwrap();
    assert_eq!(transform("ab cab", &mapping, Mode::Encrypt), "12 c12");
}

#[test]
fn tie_break_scenario() {
    let mut mapping = Mapping::identity(Alphabet::latin());
    mapping.set('a', "z").unwrap();
    mapping.set('b', "z").unwrap();
    mapping.set('c', "y").unwrap();
    for _ in 0..10 {
        assert_eq!(transform("z", &mapping, Mode::Decrypt), "a");
    }
}
