use thompson_regex_automata::nfa::{Builder, Fragment, NFA};
use thompson_regex_syntax::{Operator, Postfix, Token};

use crate::{Error, MalformedPattern};

/// Builds the automaton of a postfix token sequence, using Thompson's
/// construction.
///
/// Each literal pushes a new fragment onto the operand stack, each operator
/// pops its operands and pushes their composition. The sequence is
/// well-formed if exactly one fragment remains at the end.
pub fn build_nfa(postfix: &Postfix, state_limit: u32) -> Result<NFA, Error> {
	let mut builder = Builder::with_limit(state_limit);
	let mut operands: Vec<Fragment> = Vec::new();

	for token in postfix {
		let fragment = match *token {
			Token::Literal(c) => builder.literal(c)?,
			Token::Operator(op) => match op {
				Operator::Star => builder.closure(pop(&mut operands, op)?)?,
				Operator::Optional => builder.optional(pop(&mut operands, op)?)?,
				Operator::Plus => builder.one_or_more(pop(&mut operands, op)?)?,
				Operator::Concatenation => {
					let (left, right) = pop_pair(&mut operands, op)?;
					builder.concatenation(left, right)
				}
				Operator::Union => {
					let (left, right) = pop_pair(&mut operands, op)?;
					builder.union(left, right)?
				}
				Operator::Open | Operator::Close => {
					return Err(Error::UnsupportedToken(op.as_char()))
				}
			},
		};

		operands.push(fragment)
	}

	match operands.as_slice() {
		[] => Err(MalformedPattern::Empty.into()),
		[fragment] => Ok(builder.finish(*fragment)),
		fragments => Err(MalformedPattern::DanglingFragments(fragments.len()).into()),
	}
}

fn pop(operands: &mut Vec<Fragment>, op: Operator) -> Result<Fragment, MalformedPattern> {
	operands.pop().ok_or(MalformedPattern::MissingOperand(op))
}

/// Pops the operands of a binary operator.
///
/// The right operand was pushed last.
fn pop_pair(
	operands: &mut Vec<Fragment>,
	op: Operator,
) -> Result<(Fragment, Fragment), MalformedPattern> {
	let right = pop(operands, op)?;
	let left = pop(operands, op)?;
	Ok((left, right))
}
