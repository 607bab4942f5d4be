use std::ops::Deref;

use crate::{Error, Operator, Token};

/// Infix token sequence where every concatenation is explicit.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Linked(Vec<Token>);

impl Linked {
	/// Scans the raw `pattern` and inserts a concatenation operator between
	/// every pair of implicitly concatenated elements.
	///
	/// The concatenation operator `·` is itself reserved and cannot appear
	/// in `pattern`.
	pub fn parse(pattern: &str) -> Result<Self, Error> {
		let mut tokens = Vec::with_capacity(pattern.len() * 2);
		let mut previous: Option<Token> = None;

		for c in pattern.chars() {
			let token = Token::from_char(c);

			if token == Token::Operator(Operator::Concatenation) {
				return Err(Error::ReservedCharacter(c));
			}

			if let Some(previous) = previous {
				if ends_operand(previous) && starts_operand(token) {
					tokens.push(Token::Operator(Operator::Concatenation))
				}
			}

			tokens.push(token);
			previous = Some(token)
		}

		Ok(Self(tokens))
	}

	pub fn into_tokens(self) -> Vec<Token> {
		self.0
	}
}

/// Checks if an operand can end with `token`: a literal, a quantifier or a
/// closing parenthesis.
fn ends_operand(token: Token) -> bool {
	match token {
		Token::Literal(_) => true,
		Token::Operator(op) => op.is_quantifier() || op == Operator::Close,
	}
}

/// Checks if an operand can start with `token`: a literal or an opening
/// parenthesis.
fn starts_operand(token: Token) -> bool {
	matches!(token, Token::Literal(_) | Token::Operator(Operator::Open))
}

impl Deref for Linked {
	type Target = [Token];

	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl<'a> IntoIterator for &'a Linked {
	type IntoIter = std::slice::Iter<'a, Token>;
	type Item = &'a Token;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
