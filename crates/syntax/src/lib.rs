//! This library provides the pattern syntax of the [`thompson-regex`] crate.
//!
//! Patterns are made of literal characters and the reserved symbols `|`,
//! `*`, `?`, `+`, `(` and `)`. Concatenation is implicit in patterns; the
//! [`Linked`] sequence makes it explicit with the `·` operator, and the
//! [`Postfix`] sequence reorders the tokens so that every operator follows
//! its operands, ready for Thompson's construction.
//!
//! ```
//! use thompson_regex_syntax::Postfix;
//!
//! let postfix = Postfix::parse("(a|b)*c").unwrap();
//! assert_eq!(postfix.to_string(), "ab|*c·");
//! ```
//!
//! [`thompson-regex`]: <https://crates.io/crates/thompson-regex>
mod token;
pub use token::*;

mod linking;
pub use linking::*;

mod postfix;
pub use postfix::*;

mod display;

/// Syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("missing opening `(`")]
	UnmatchedClosingParenthesis,

	#[error("missing closing `)`")]
	MissingClosingParenthesis,

	#[error("reserved character `{0}`")]
	ReservedCharacter(char),
}
