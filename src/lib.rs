//! Regular expressions compiled into nondeterministic finite automata with
//! Thompson's construction.
//!
//! The supported syntax is deliberately small: literal characters,
//! concatenation, union `|`, the quantifiers `*`, `+` and `?`, and grouping
//! parentheses. A pattern always matches the whole input.
//!
//! ```
//! let regex = thompson_regex::compile("(ab)*c?").unwrap();
//!
//! assert!(thompson_regex::matches(&regex, "abab"));
//! assert!(thompson_regex::matches(&regex, "abc"));
//! assert!(!thompson_regex::matches(&regex, "aba"));
//! ```
//!
//! Compilation goes through three steps:
//! 1. the implicit concatenations of the pattern are made explicit
//!    ([`syntax::Linked`]);
//! 2. the pattern is reordered in postfix form ([`syntax::Postfix`]);
//! 3. the postfix sequence is turned into an automaton ([`automata::NFA`]).
//!
//! Matching then either simulates the automaton on every path at once
//! (the default) or searches an accepting path with backtracking. See
//! [`Strategy`].
pub use thompson_regex_automata as automata;
pub use thompson_regex_syntax as syntax;

mod construction;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod compiled;
pub use compiled::*;

/// Compiles the given pattern with the default configuration.
pub fn compile(pattern: &str) -> Result<Regex, Error> {
	Regex::new(pattern)
}

/// Checks if `regex` matches the whole `input`.
pub fn matches(regex: &Regex, input: &str) -> bool {
	regex.is_match(input)
}

/// Compiles `pattern` and checks if it matches the whole `input`.
pub fn is_match(pattern: &str, input: &str) -> Result<bool, Error> {
	Ok(compile(pattern)?.is_match(input))
}
