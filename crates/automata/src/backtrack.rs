use std::collections::HashSet;

use crate::nfa::{StateId, NFA};

/// Default maximum depth of the backtracking search.
pub const DEFAULT_DEPTH_LIMIT: usize = 1 << 16;

/// Error returned when the backtracking search grows beyond its depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("backtracking exceeded the depth limit of {0}")]
pub struct DepthExceeded(pub usize);

/// Depth-first search for an accepting path.
///
/// At each state the labeled transition is tried first, then the epsilon
/// transitions in insertion order. The search runs on an explicit stack of
/// frames and enters each state at most once per input position: every path
/// leaving a visited `(state, position)` pair has already been explored. This
/// keeps epsilon cycles from trapping the search and bounds its depth by the
/// number of states times the input length.
pub struct Backtracker<'a> {
	nfa: &'a NFA,
	depth_limit: usize,
}

/// Search frame.
struct Frame {
	state: StateId,

	/// Byte position in the input.
	position: usize,

	/// Next alternative to try.
	///
	/// `0` is the labeled transition, `n > 0` the `n`-th epsilon transition.
	alternative: usize,
}

impl<'a> Backtracker<'a> {
	pub fn new(nfa: &'a NFA) -> Self {
		Self {
			nfa,
			depth_limit: DEFAULT_DEPTH_LIMIT,
		}
	}

	/// Specifies the maximum number of frames the search stack may hold.
	pub fn depth_limit(mut self, limit: usize) -> Self {
		self.depth_limit = limit;
		self
	}

	/// Checks if the automaton accepts the whole `input`.
	pub fn run(&self, input: &str) -> Result<bool, DepthExceeded> {
		let mut stack: Vec<Frame> = Vec::new();
		let mut visited: HashSet<(StateId, usize)> = HashSet::new();

		if self.accepts_at(self.nfa.start(), 0, input) {
			return Ok(true);
		}

		self.enter(&mut stack, &mut visited, self.nfa.start(), 0)?;

		loop {
			let (q, position, alternative) = match stack.last_mut() {
				Some(frame) => {
					let alternative = frame.alternative;
					frame.alternative += 1;
					(frame.state, frame.position, alternative)
				}
				None => break Ok(false),
			};

			let state = self.nfa.state(q);
			let successor = if alternative == 0 {
				input[position..].chars().next().and_then(|c| {
					state
						.transition(c)
						.map(|r| (r, position + c.len_utf8()))
				})
			} else {
				match state.epsilon_transitions().get(alternative - 1) {
					Some(&r) => Some((r, position)),
					None => {
						// every alternative failed.
						stack.pop();
						continue;
					}
				}
			};

			if let Some((r, r_position)) = successor {
				if self.accepts_at(r, r_position, input) {
					break Ok(true);
				}

				if !visited.contains(&(r, r_position)) {
					self.enter(&mut stack, &mut visited, r, r_position)?
				}
			}
		}
	}

	fn accepts_at(&self, q: StateId, position: usize, input: &str) -> bool {
		position == input.len() && self.nfa.state(q).is_accepting()
	}

	fn enter(
		&self,
		stack: &mut Vec<Frame>,
		visited: &mut HashSet<(StateId, usize)>,
		state: StateId,
		position: usize,
	) -> Result<(), DepthExceeded> {
		if stack.len() >= self.depth_limit {
			return Err(DepthExceeded(self.depth_limit));
		}

		visited.insert((state, position));
		stack.push(Frame {
			state,
			position,
			alternative: 0,
		});

		Ok(())
	}
}
