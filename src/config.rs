use educe::Educe;
use thompson_regex_automata::backtrack::DEFAULT_DEPTH_LIMIT;

use crate::{Error, Regex};

/// Matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Educe)]
#[educe(Default)]
pub enum Strategy {
	/// Follows every path at once, through epsilon-closures.
	///
	/// Linear in the input length, and always terminates.
	#[educe(Default)]
	Simulation,

	/// Depth-first search with backtracking.
	Backtrack,
}

/// Compilation and matching options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe)]
#[educe(Default)]
pub struct Config {
	pub(crate) strategy: Strategy,

	#[educe(Default = DEFAULT_DEPTH_LIMIT)]
	pub(crate) depth_limit: usize,

	#[educe(Default = u32::MAX)]
	pub(crate) state_limit: u32,
}

impl Config {
	pub fn new() -> Self {
		Self::default()
	}

	/// Specifies the strategy used by [`Regex::is_match`].
	pub fn strategy(mut self, strategy: Strategy) -> Self {
		self.strategy = strategy;
		self
	}

	/// Specifies the maximum depth of the backtracking search.
	///
	/// When the limit is reached, [`Regex::is_match`] falls back to the
	/// simulation.
	pub fn depth_limit(mut self, limit: usize) -> Self {
		self.depth_limit = limit;
		self
	}

	/// Specifies the maximum number of states of a compiled automaton.
	///
	/// Each literal and each operator but the concatenation costs two
	/// states.
	pub fn state_limit(mut self, limit: u32) -> Self {
		self.state_limit = limit;
		self
	}

	pub fn get_strategy(&self) -> Strategy {
		self.strategy
	}

	pub fn get_depth_limit(&self) -> usize {
		self.depth_limit
	}

	pub fn get_state_limit(&self) -> u32 {
		self.state_limit
	}

	/// Compiles `pattern` with these options.
	pub fn compile(&self, pattern: &str) -> Result<Regex, Error> {
		Regex::with_config(pattern, *self)
	}
}
