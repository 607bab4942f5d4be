use thompson_regex_automata::nfa::TooManyStates;
use thompson_regex_syntax::Operator;

/// Compilation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("malformed pattern: {0}")]
	MalformedPattern(MalformedPattern),

	#[error("unsupported token `{0}`")]
	UnsupportedToken(char),

	#[error("automaton exceeds the limit of {0} states")]
	TooManyStates(u32),
}

/// Reason why a pattern is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MalformedPattern {
	#[error("missing opening `(`")]
	UnmatchedClosingParenthesis,

	#[error("missing closing `)`")]
	MissingClosingParenthesis,

	#[error("missing operand for `{0}`")]
	MissingOperand(Operator),

	#[error("empty pattern")]
	Empty,

	#[error("{0} disconnected sub-patterns")]
	DanglingFragments(usize),
}

impl From<MalformedPattern> for Error {
	fn from(value: MalformedPattern) -> Self {
		Self::MalformedPattern(value)
	}
}

impl From<thompson_regex_syntax::Error> for Error {
	fn from(value: thompson_regex_syntax::Error) -> Self {
		use thompson_regex_syntax::Error as SyntaxError;
		match value {
			SyntaxError::UnmatchedClosingParenthesis => {
				MalformedPattern::UnmatchedClosingParenthesis.into()
			}
			SyntaxError::MissingClosingParenthesis => {
				MalformedPattern::MissingClosingParenthesis.into()
			}
			SyntaxError::ReservedCharacter(c) => Self::UnsupportedToken(c),
		}
	}
}

impl From<TooManyStates> for Error {
	fn from(TooManyStates(limit): TooManyStates) -> Self {
		Self::TooManyStates(limit)
	}
}
