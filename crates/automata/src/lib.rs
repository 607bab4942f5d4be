//! This library provides the nondeterministic finite automata (NFA) of the
//! [`thompson-regex`] crate, built with Thompson's construction, and the two
//! ways of running them on an input string:
//! - the simulation, following every path at once through the
//!   [`Automaton`] interface ([`NFA::simulate`]);
//! - the depth-first [`Backtracker`], following one path at a time.
//!
//! Both accept exactly the same strings.
//!
//! [`thompson-regex`]: <https://crates.io/crates/thompson-regex>
pub mod nfa;
pub use nfa::NFA;

pub mod backtrack;
pub use backtrack::Backtracker;

#[cfg(feature = "dot")]
pub mod dot;

/// Automaton running over tokens of type `T`.
pub trait Automaton<T> {
	type State<'a>
	where
		Self: 'a;

	/// Returns the initial state of the automaton, if any.
	fn initial_state(&self) -> Option<Self::State<'_>>;

	/// Returns the state reached from `current_state` when reading `token`,
	/// or `None` if the input can no longer be accepted.
	fn next_state<'a>(
		&'a self,
		current_state: Self::State<'a>,
		token: T,
	) -> Option<Self::State<'a>>;

	/// Checks if the given state is final.
	fn is_final_state<'a>(&'a self, state: &Self::State<'a>) -> bool;

	/// Checks if the automaton accepts the whole token sequence.
	fn accepts(&self, tokens: impl IntoIterator<Item = T>) -> bool {
		match self.initial_state() {
			Some(mut state) => {
				for token in tokens {
					match self.next_state(state, token) {
						Some(next) => state = next,
						None => return false,
					}
				}

				self.is_final_state(&state)
			}
			None => false,
		}
	}
}
