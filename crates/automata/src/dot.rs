use std::fmt;

use crate::nfa::{StateId, NFA};

pub trait DotDisplay {
	fn dot(&self) -> DotDisplayed<Self> {
		DotDisplayed(self)
	}

	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

impl DotDisplay for StateId {
	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "q{}", self.index())
	}
}

pub struct DotDisplayed<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized + DotDisplay> fmt::Display for DotDisplayed<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.dot_fmt(f)
	}
}

pub trait DotLabelDisplay {
	fn dot_label(&self) -> DotLabelDisplayed<Self> {
		DotLabelDisplayed(self)
	}

	fn dot_label_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result;
}

impl DotLabelDisplay for char {
	fn dot_label_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			'"' => f.write_str("\\\""),
			'\\' => f.write_str("\\\\"),
			c if c.is_ascii_graphic() || *c == ' ' => fmt::Display::fmt(c, f),
			c => write!(f, "\\\\u{{{:x}}}", *c as u32),
		}
	}
}

impl DotLabelDisplay for StateId {
	fn dot_label_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "q{}", self.index())
	}
}

impl<T: DotLabelDisplay> DotLabelDisplay for Option<T> {
	fn dot_label_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Some(t) => t.dot_label_fmt(f),
			None => f.write_str("ε"),
		}
	}
}

pub struct DotLabelDisplayed<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized + DotLabelDisplay> fmt::Display for DotLabelDisplayed<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.dot_label_fmt(f)
	}
}

impl DotDisplay for NFA {
	fn dot_fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "digraph {{")?;
		writeln!(f, "\tstart [shape = point]")?;

		for (q, state) in self.states() {
			let shape = if state.is_accepting() {
				"doublecircle"
			} else {
				"circle"
			};

			writeln!(
				f,
				"\t{} [label = \"{}\", shape = {shape}]",
				q.dot(),
				q.dot_label()
			)?;
		}

		writeln!(f, "\tstart -> {}", self.start().dot())?;

		for (q, state) in self.states() {
			for (c, r) in state.transitions() {
				writeln!(
					f,
					"\t{} -> {} [label = \"{}\"]",
					q.dot(),
					r.dot(),
					Some(c).dot_label()
				)?;
			}

			for r in state.epsilon_transitions() {
				writeln!(
					f,
					"\t{} -> {} [label = \"{}\"]",
					q.dot(),
					r.dot(),
					None::<char>.dot_label()
				)?;
			}
		}

		write!(f, "}}")
	}
}
