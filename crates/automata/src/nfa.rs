use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::Automaton;

mod builder;
pub use builder::*;

/// State identifier.
///
/// Index of the state in the automaton's state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
	pub fn index(&self) -> usize {
		self.0 as usize
	}
}

/// Automaton state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
	accepting: bool,
	transitions: BTreeMap<char, StateId>,
	epsilon_transitions: Vec<StateId>,
}

impl State {
	fn new(accepting: bool) -> Self {
		Self {
			accepting,
			..Default::default()
		}
	}

	/// Checks if reaching this state at the end of the input is a match.
	pub fn is_accepting(&self) -> bool {
		self.accepting
	}

	/// Returns the target of the transition labeled `c`, if any.
	pub fn transition(&self, c: char) -> Option<StateId> {
		self.transitions.get(&c).copied()
	}

	/// Returns an iterator over the labeled transitions.
	pub fn transitions(&self) -> impl '_ + Iterator<Item = (char, StateId)> {
		self.transitions.iter().map(|(c, q)| (*c, *q))
	}

	/// Returns the epsilon transitions, in insertion order.
	pub fn epsilon_transitions(&self) -> &[StateId] {
		&self.epsilon_transitions
	}
}

/// Nondeterministic finite automaton.
///
/// Produced by a [`Builder`] and immutable afterwards. All states live in a
/// single table owned by the automaton, so the cycles created by `*` and `+`
/// are just indices pointing backward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
	states: Vec<State>,
	start: StateId,
	end: StateId,
}

impl NFA {
	/// Returns the initial state.
	pub fn start(&self) -> StateId {
		self.start
	}

	/// Returns the (unique) accepting state.
	pub fn end(&self) -> StateId {
		self.end
	}

	/// Returns the state with the given identifier.
	pub fn state(&self, q: StateId) -> &State {
		&self.states[q.index()]
	}

	/// Returns the number of states.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns an iterator over the states and their identifiers.
	pub fn states(&self) -> impl '_ + Iterator<Item = (StateId, &State)> {
		self.states
			.iter()
			.enumerate()
			.map(|(i, state)| (StateId(i as u32), state))
	}

	/// Returns the set of accepting states.
	pub fn accepting_states(&self) -> BTreeSet<StateId> {
		self.states()
			.filter_map(|(q, state)| state.is_accepting().then_some(q))
			.collect()
	}

	/// Computes the epsilon-closure of `q`: every state reachable from `q`
	/// through epsilon transitions only, including `q` itself.
	pub fn epsilon_closure(&self, q: StateId) -> BTreeSet<StateId> {
		let mut closure = BTreeSet::new();
		let mut stack = vec![q];

		while let Some(q) = stack.pop() {
			if closure.insert(q) {
				stack.extend(self.state(q).epsilon_transitions())
			}
		}

		closure
	}

	/// Checks if the automaton accepts the whole `input`, by simulating all
	/// the paths at once.
	pub fn simulate(&self, input: &str) -> bool {
		let mut current = match self.initial_state() {
			Some(state) => state,
			None => return false,
		};

		for c in input.chars() {
			let checks = current.checks;
			match self.next_state(current, c) {
				Some(next) => current = next,
				None => {
					log::trace!("simulation failed after {checks} transition checks");
					return false;
				}
			}
		}

		log::trace!("simulation ended after {} transition checks", current.checks);
		self.is_final_state(&current)
	}

	fn close(&self, states: &mut HashSet<StateId>, stack: &mut Vec<StateId>) {
		while let Some(q) = stack.pop() {
			for &r in self.state(q).epsilon_transitions() {
				if states.insert(r) {
					stack.push(r)
				}
			}
		}
	}
}

impl Automaton<char> for NFA {
	type State<'a> = VisitingState where Self: 'a;

	fn initial_state(&self) -> Option<Self::State<'_>> {
		let mut states = HashSet::new();
		let mut stack = vec![self.start];
		states.insert(self.start);

		// epsilon-closure.
		self.close(&mut states, &mut stack);

		Some(VisitingState {
			states,
			next_states: HashSet::new(),
			stack,
			checks: 0,
		})
	}

	fn next_state<'a>(
		&'a self,
		VisitingState {
			mut states,
			mut next_states,
			mut stack,
			mut checks,
		}: Self::State<'a>,
		token: char,
	) -> Option<Self::State<'a>> {
		for &q in &states {
			checks += 1;
			if let Some(r) = self.state(q).transition(token) {
				if next_states.insert(r) {
					stack.push(r)
				}
			}
		}

		// epsilon-closure.
		self.close(&mut next_states, &mut stack);

		if next_states.is_empty() {
			None
		} else {
			states.clear();
			Some(VisitingState {
				states: next_states,
				next_states: states,
				stack,
				checks,
			})
		}
	}

	fn is_final_state<'a>(&'a self, VisitingState { states, .. }: &Self::State<'a>) -> bool {
		states.iter().any(|&q| self.state(q).is_accepting())
	}
}

/// Set of current states of a [`NFA`] simulation.
///
/// Always closed under epsilon transitions.
#[derive(Debug, Clone)]
pub struct VisitingState {
	states: HashSet<StateId>,
	next_states: HashSet<StateId>,
	stack: Vec<StateId>,
	checks: usize,
}

impl VisitingState {
	/// Returns the current states.
	pub fn states(&self) -> &HashSet<StateId> {
		&self.states
	}

	/// Number of labeled transitions checked so far.
	pub fn checks(&self) -> usize {
		self.checks
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ab_star() -> NFA {
		// (ab)*
		let mut builder = Builder::new();
		let a = builder.literal('a').unwrap();
		let b = builder.literal('b').unwrap();
		let ab = builder.concatenation(a, b);
		let f = builder.closure(ab).unwrap();
		builder.finish(f)
	}

	#[test]
	fn epsilon_closure() {
		let nfa = ab_star();
		let closure = nfa.epsilon_closure(nfa.start());
		assert!(closure.contains(&nfa.start()));
		assert!(closure.contains(&nfa.end()));
		assert_eq!(closure.len(), 3);
	}

	#[test]
	fn epsilon_closure_terminates_on_cycles() {
		// (a*)*
		let mut builder = Builder::new();
		let a = builder.literal('a').unwrap();
		let a_star = builder.closure(a).unwrap();
		let f = builder.closure(a_star).unwrap();
		let nfa = builder.finish(f);

		let closure = nfa.epsilon_closure(nfa.start());
		assert!(closure.contains(&nfa.end()));
		assert!(nfa.simulate(""));
		assert!(nfa.simulate("aaa"));
		assert!(!nfa.simulate("ab"));
	}

	#[test]
	fn simulate() {
		let nfa = ab_star();
		let vectors = [
			("", true),
			("ab", true),
			("abab", true),
			("a", false),
			("aba", false),
			("ba", false),
			("abc", false),
		];

		for (input, expected) in vectors {
			assert_eq!(nfa.simulate(input), expected, "input `{input}`");
			assert_eq!(nfa.accepts(input.chars()), expected, "input `{input}`")
		}
	}

	#[test]
	fn visiting_state() {
		let nfa = ab_star();
		let state = nfa.initial_state().unwrap();
		assert!(nfa.is_final_state(&state));

		let state = nfa.next_state(state, 'a').unwrap();
		assert!(!nfa.is_final_state(&state));
		assert!(state.checks() > 0);
		assert!(nfa.next_state(state.clone(), 'a').is_none());

		let state = nfa.next_state(state, 'b').unwrap();
		assert!(nfa.is_final_state(&state))
	}
}
