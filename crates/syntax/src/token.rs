/// Operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
	/// Union.
	///
	/// `|`
	Union,

	/// Explicit concatenation.
	///
	/// Never written by users, inserted by the linker. Displayed as `·`.
	Concatenation,

	/// Zero or more.
	///
	/// `*`
	Star,

	/// Zero or one.
	///
	/// `?`
	Optional,

	/// One or more.
	///
	/// `+`
	Plus,

	/// Group opening.
	///
	/// `(`
	Open,

	/// Group closing.
	///
	/// `)`
	Close,
}

impl Operator {
	/// Reserved characters, in the same order as the variants.
	pub const RESERVED: [char; 7] = ['|', '·', '*', '?', '+', '(', ')'];

	/// Returns the operator denoted by the given character, if it is
	/// reserved.
	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'|' => Some(Self::Union),
			'·' => Some(Self::Concatenation),
			'*' => Some(Self::Star),
			'?' => Some(Self::Optional),
			'+' => Some(Self::Plus),
			'(' => Some(Self::Open),
			')' => Some(Self::Close),
			_ => None,
		}
	}

	pub fn as_char(&self) -> char {
		match self {
			Self::Union => '|',
			Self::Concatenation => '·',
			Self::Star => '*',
			Self::Optional => '?',
			Self::Plus => '+',
			Self::Open => '(',
			Self::Close => ')',
		}
	}

	/// Binding strength of the operator.
	///
	/// Grouping symbols have no precedence and return `0`, so that no
	/// operator is ever popped past an opening parenthesis.
	pub fn precedence(&self) -> u8 {
		match self {
			Self::Union => 1,
			Self::Concatenation => 2,
			Self::Star | Self::Optional | Self::Plus => 3,
			Self::Open | Self::Close => 0,
		}
	}

	/// Checks if this is one of the postfix quantifiers `*`, `?` or `+`.
	pub fn is_quantifier(&self) -> bool {
		matches!(self, Self::Star | Self::Optional | Self::Plus)
	}
}

/// Pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
	/// Literal atom, matching exactly this character.
	Literal(char),

	/// Operator or grouping symbol.
	Operator(Operator),
}

impl Token {
	/// Classifies a pattern character.
	pub fn from_char(c: char) -> Self {
		match Operator::from_char(c) {
			Some(op) => Self::Operator(op),
			None => Self::Literal(c),
		}
	}
}

impl From<Operator> for Token {
	fn from(value: Operator) -> Self {
		Self::Operator(value)
	}
}

/// Checks if the given character is reserved by the pattern syntax.
pub fn is_reserved(c: char) -> bool {
	Operator::from_char(c).is_some()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reserved_table() {
		for c in Operator::RESERVED {
			let op = Operator::from_char(c).unwrap();
			assert_eq!(op.as_char(), c);
			assert!(is_reserved(c))
		}

		for c in ['a', 'Z', '0', ' ', '.', '[', '\\', 'é'] {
			assert_eq!(Token::from_char(c), Token::Literal(c))
		}
	}

	#[test]
	fn precedence() {
		assert!(Operator::Union.precedence() < Operator::Concatenation.precedence());
		assert!(Operator::Concatenation.precedence() < Operator::Star.precedence());
		assert_eq!(Operator::Star.precedence(), Operator::Plus.precedence());
		assert_eq!(Operator::Star.precedence(), Operator::Optional.precedence());
		assert_eq!(Operator::Open.precedence(), 0);
	}
}
