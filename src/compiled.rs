use core::fmt;

use thompson_regex_automata::{backtrack::DepthExceeded, Backtracker, NFA};
use thompson_regex_syntax::{Linked, Postfix};

use crate::{construction::build_nfa, Config, Error, Strategy};

/// Compiled regular expression.
///
/// Immutable once compiled: matching only reads the automaton, so the same
/// `Regex` can be shared between threads.
#[derive(Debug, Clone)]
pub struct Regex {
	pattern: String,
	postfix: Postfix,
	nfa: NFA,
	config: Config,
}

impl Regex {
	/// Compiles the given pattern with the default configuration.
	pub fn new(pattern: &str) -> Result<Self, Error> {
		Self::with_config(pattern, Config::default())
	}

	/// Compiles the given pattern.
	pub fn with_config(pattern: &str, config: Config) -> Result<Self, Error> {
		let linked = Linked::parse(pattern)?;
		log::trace!("linked `{pattern}` as `{linked}`");

		let postfix = Postfix::from_linked(&linked)?;
		log::trace!("translated `{pattern}` to `{postfix}`");

		let nfa = build_nfa(&postfix, config.state_limit)?;
		log::debug!("compiled `{pattern}` into {} states", nfa.len());

		Ok(Self {
			pattern: pattern.to_owned(),
			postfix,
			nfa,
			config,
		})
	}

	/// Returns the source pattern.
	pub fn as_str(&self) -> &str {
		&self.pattern
	}

	/// Returns the postfix form of the pattern.
	pub fn postfix(&self) -> &Postfix {
		&self.postfix
	}

	/// Returns the compiled automaton.
	pub fn nfa(&self) -> &NFA {
		&self.nfa
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Checks if the whole `input` matches, using the configured strategy.
	pub fn is_match(&self, input: &str) -> bool {
		self.is_match_with(self.config.strategy, input)
	}

	/// Checks if the whole `input` matches, using the given strategy.
	///
	/// If the backtracking search exceeds the configured depth limit, the
	/// answer is given by the simulation.
	pub fn is_match_with(&self, strategy: Strategy, input: &str) -> bool {
		match strategy {
			Strategy::Simulation => self.nfa.simulate(input),
			Strategy::Backtrack => match self.try_backtrack(input) {
				Ok(result) => result,
				Err(e) => {
					log::warn!("`{}`: {e}, falling back to simulation", self.pattern);
					self.nfa.simulate(input)
				}
			},
		}
	}

	/// Checks if the whole `input` matches, using the backtracking search
	/// only.
	pub fn try_backtrack(&self, input: &str) -> Result<bool, DepthExceeded> {
		Backtracker::new(&self.nfa)
			.depth_limit(self.config.depth_limit)
			.run(input)
	}
}

impl fmt::Display for Regex {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.pattern)
	}
}
