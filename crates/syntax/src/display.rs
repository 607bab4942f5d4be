use core::fmt;

use crate::{Linked, Operator, Postfix, Token};

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(&self.as_char(), f)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Literal(c) => fmt::Display::fmt(c, f),
			Self::Operator(op) => fmt::Display::fmt(op, f),
		}
	}
}

impl fmt::Display for Linked {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt_tokens(self, f)
	}
}

impl fmt::Display for Postfix {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt_tokens(self, f)
	}
}

fn fmt_tokens(tokens: &[Token], f: &mut fmt::Formatter) -> fmt::Result {
	for token in tokens {
		fmt::Display::fmt(token, f)?
	}

	Ok(())
}
