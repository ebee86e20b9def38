//! `letter=input` mapping edits from the command line.

use std::str::FromStr;

use crate::error::CliError;

/// A single `--set` argument.
///
/// `a=x` types `x` into the editor box for `a`; `a=` clears it. Everything
/// after the first `=` is passed on as raw input, so only its last character
/// ends up mattering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Letter being edited.
    pub letter: char,
    /// Raw editor input.
    pub input: String,
}

impl FromStr for Assignment {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidAssignment { input: s.to_string() };

        let (letter, input) = s.split_once('=').ok_or_else(invalid)?;
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };

        Ok(Self { letter, input: input.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_letter_and_input() {
        let assignment: Assignment = "q=k".parse().unwrap();
        assert_eq!(assignment, Assignment { letter: 'q', input: "k".to_string() });
    }

    #[test]
    fn empty_input_clears() {
        let assignment: Assignment = "q=".parse().unwrap();
        assert_eq!(assignment.input, "");
    }

    #[test]
    fn input_may_contain_equals() {
        let assignment: Assignment = "e==".parse().unwrap();
        assert_eq!(assignment, Assignment { letter: 'e', input: "=".to_string() });
    }

    #[test]
    fn rejects_malformed() {
        assert!("q".parse::<Assignment>().is_err());
        assert!("=x".parse::<Assignment>().is_err());
        assert!("ab=x".parse::<Assignment>().is_err());
    }

    proptest! {
        #[test]
        fn prop_any_letter_and_input_parse_back(
            letter in any::<char>().prop_filter("not a separator", |c| *c != '='),
            input in ".*",
        ) {
            let assignment: Assignment = format!("{letter}={input}").parse().unwrap();
            prop_assert_eq!(assignment, Assignment { letter, input });
        }

        #[test]
        fn prop_multi_char_letter_is_rejected(letter in "[a-z]{2,4}", input in "[a-z]*") {
            let text = format!("{letter}={input}");
            prop_assert!(text.parse::<Assignment>().is_err());
        }
    }
}
