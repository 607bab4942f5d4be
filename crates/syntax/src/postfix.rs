use std::ops::Deref;

use crate::{Error, Linked, Operator, Token};

/// Postfix (Reverse Polish) token sequence.
///
/// Operands always precede their operator. A sequence translated from a
/// [`Linked`] one contains no grouping symbol.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Postfix(Vec<Token>);

impl Postfix {
	/// Links and translates the given raw pattern.
	pub fn parse(pattern: &str) -> Result<Self, Error> {
		Self::from_linked(&Linked::parse(pattern)?)
	}

	/// Translates an infix sequence into postfix order (shunting-yard).
	///
	/// Operators of equal precedence are popped before pushing, making every
	/// binary operator left-associative.
	pub fn from_linked(linked: &Linked) -> Result<Self, Error> {
		let mut output = Vec::with_capacity(linked.len());
		let mut operators: Vec<Operator> = Vec::new();

		for token in linked {
			match *token {
				Token::Literal(_) => output.push(*token),
				Token::Operator(Operator::Open) => operators.push(Operator::Open),
				Token::Operator(Operator::Close) => loop {
					match operators.pop() {
						Some(Operator::Open) => break,
						Some(op) => output.push(Token::Operator(op)),
						None => return Err(Error::UnmatchedClosingParenthesis),
					}
				},
				Token::Operator(op) => {
					while let Some(&top) = operators.last() {
						if top.precedence() >= op.precedence() {
							output.push(Token::Operator(top));
							operators.pop();
						} else {
							break;
						}
					}

					operators.push(op)
				}
			}
		}

		while let Some(op) = operators.pop() {
			if op == Operator::Open {
				return Err(Error::MissingClosingParenthesis);
			}

			output.push(Token::Operator(op))
		}

		Ok(Self(output))
	}

	pub fn into_tokens(self) -> Vec<Token> {
		self.0
	}
}

impl Deref for Postfix {
	type Target = [Token];

	fn deref(&self) -> &Self::Target {
		self.0.as_slice()
	}
}

impl<'a> IntoIterator for &'a Postfix {
	type IntoIter = std::slice::Iter<'a, Token>;
	type Item = &'a Token;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for Postfix {
	type IntoIter = std::vec::IntoIter<Token>;
	type Item = Token;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl FromIterator<Token> for Postfix {
	fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
		Self(Vec::from_iter(iter))
	}
}
