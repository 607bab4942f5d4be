use educe::Educe;

use super::{State, StateId, NFA};

/// Error returned when a [`Builder`] reaches its state limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("too many states (the limit is {0})")]
pub struct TooManyStates(pub u32);

/// Sub-automaton with a single entry and a single exit state.
///
/// Until it is spliced into a bigger fragment, the `end` state is the only
/// accepting state of the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
	pub start: StateId,
	pub end: StateId,
}

/// Thompson's construction.
///
/// Owns the state table while fragments are being composed. Every
/// construction demotes the `end` state of the fragments it consumes, so
/// that a fragment always has exactly one accepting state.
#[derive(Debug, Educe)]
#[educe(Default)]
pub struct Builder {
	states: Vec<State>,

	#[educe(Default = u32::MAX)]
	limit: u32,
}

impl Builder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a builder allocating at most `limit` states.
	pub fn with_limit(limit: u32) -> Self {
		Self {
			states: Vec::new(),
			limit,
		}
	}

	/// Returns the number of states allocated so far.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	fn next_state(&mut self, accepting: bool) -> Result<StateId, TooManyStates> {
		if self.states.len() as u64 >= self.limit as u64 {
			Err(TooManyStates(self.limit))
		} else {
			let q = StateId(self.states.len() as u32);
			self.states.push(State::new(accepting));
			Ok(q)
		}
	}

	fn new_fragment(&mut self) -> Result<Fragment, TooManyStates> {
		Ok(Fragment {
			start: self.next_state(false)?,
			end: self.next_state(true)?,
		})
	}

	fn state_mut(&mut self, q: StateId) -> &mut State {
		&mut self.states[q.index()]
	}

	fn demote(&mut self, q: StateId) {
		self.state_mut(q).accepting = false
	}

	fn add(&mut self, source: StateId, c: char, target: StateId) {
		self.state_mut(source).transitions.insert(c, target);
	}

	fn add_epsilon(&mut self, source: StateId, target: StateId) {
		self.state_mut(source).epsilon_transitions.push(target)
	}

	/// Fragment matching exactly `c`.
	pub fn literal(&mut self, c: char) -> Result<Fragment, TooManyStates> {
		let result = self.new_fragment()?;
		self.add(result.start, c, result.end);
		Ok(result)
	}

	/// Kleene closure `f*`.
	pub fn closure(&mut self, f: Fragment) -> Result<Fragment, TooManyStates> {
		let result = self.new_fragment()?;
		self.add_epsilon(result.start, f.start);
		self.add_epsilon(result.start, result.end);
		self.add_epsilon(f.end, f.start);
		self.add_epsilon(f.end, result.end);
		self.demote(f.end);
		Ok(result)
	}

	/// Optional `f?`.
	pub fn optional(&mut self, f: Fragment) -> Result<Fragment, TooManyStates> {
		let result = self.new_fragment()?;
		self.add_epsilon(result.start, f.start);
		self.add_epsilon(result.start, result.end);
		self.add_epsilon(f.end, result.end);
		self.demote(f.end);
		Ok(result)
	}

	/// One or more `f+`.
	///
	/// Same as the closure, without the edge skipping `f`.
	pub fn one_or_more(&mut self, f: Fragment) -> Result<Fragment, TooManyStates> {
		let result = self.new_fragment()?;
		self.add_epsilon(result.start, f.start);
		self.add_epsilon(f.end, result.end);
		self.add_epsilon(f.end, f.start);
		self.demote(f.end);
		Ok(result)
	}

	/// Concatenation `left·right`.
	///
	/// Links `left` into `right` in place, without allocating any state.
	pub fn concatenation(&mut self, left: Fragment, right: Fragment) -> Fragment {
		self.add_epsilon(left.end, right.start);
		self.demote(left.end);
		Fragment {
			start: left.start,
			end: right.end,
		}
	}

	/// Union `left|right`.
	pub fn union(&mut self, left: Fragment, right: Fragment) -> Result<Fragment, TooManyStates> {
		let result = self.new_fragment()?;
		self.add_epsilon(result.start, left.start);
		self.add_epsilon(result.start, right.start);
		self.add_epsilon(left.end, result.end);
		self.add_epsilon(right.end, result.end);
		self.demote(left.end);
		self.demote(right.end);
		Ok(result)
	}

	/// Turns the given fragment into an automaton.
	///
	/// The fragment must be the last one built, containing every other.
	pub fn finish(self, f: Fragment) -> NFA {
		debug_assert!(self.states[f.end.index()].is_accepting());
		debug_assert_eq!(
			self.states.iter().filter(|q| q.is_accepting()).count(),
			1,
			"a completed automaton has exactly one accepting state"
		);

		NFA {
			states: self.states,
			start: f.start,
			end: f.end,
		}
	}
}
