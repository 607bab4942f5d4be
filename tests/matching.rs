use std::{fs, path::Path};

use thompson_regex::{automata::dot::DotDisplay, compile, is_match, matches, Config, Regex, Strategy};

const STRATEGIES: [Strategy; 2] = [Strategy::Simulation, Strategy::Backtrack];

/// Checks every `(input, expected)` vector against `pattern`, with both
/// strategies.
fn check(pattern: &str, vectors: &[(&str, bool)]) {
	let regex = compile(pattern).unwrap();

	for &(input, expected) in vectors {
		for strategy in STRATEGIES {
			let result = regex.is_match_with(strategy, input);

			if result != expected {
				write_automaton(pattern, &regex);
			}

			assert_eq!(
				result, expected,
				"pattern `{pattern}`, input `{input}`, strategy {strategy:?}"
			)
		}
	}
}

#[test]
fn literal() {
	check(
		"a",
		&[("a", true), ("", false), ("aa", false), ("b", false)],
	)
}

#[test]
fn concatenation() {
	check(
		"ab",
		&[
			("ab", true),
			("", false),
			("a", false),
			("b", false),
			("ba", false),
			("abb", false),
		],
	)
}

#[test]
fn union() {
	check(
		"a|b",
		&[
			("a", true),
			("b", true),
			("ab", false),
			("", false),
			("c", false),
		],
	)
}

#[test]
fn closure() {
	check(
		"a*",
		&[
			("", true),
			("a", true),
			("aaaa", true),
			("b", false),
			("ab", false),
		],
	)
}

#[test]
fn one_or_more() {
	check(
		"a+",
		&[("a", true), ("aaa", true), ("", false), ("b", false), ("aab", false)],
	)
}

#[test]
fn optional() {
	check(
		"a?",
		&[("", true), ("a", true), ("aa", false), ("b", false)],
	)
}

#[test]
fn grouping() {
	check(
		"(ab)*",
		&[
			("", true),
			("ab", true),
			("abab", true),
			("a", false),
			("aba", false),
			("ba", false),
		],
	)
}

#[test]
fn precedence() {
	check(
		"ab*",
		&[
			("a", true),
			("ab", true),
			("abbb", true),
			("b", false),
			("aab", false),
			("abab", false),
		],
	);

	check(
		"ab|cd",
		&[
			("ab", true),
			("cd", true),
			("abd", false),
			("acd", false),
			("abcd", false),
		],
	);

	check(
		"a|b*",
		&[
			("", true),
			("a", true),
			("bbb", true),
			("ab", false),
			("abb", false),
		],
	)
}

#[test]
fn nested() {
	check(
		"(a|b)*abb",
		&[
			("abb", true),
			("aabb", true),
			("babb", true),
			("ababb", true),
			("ab", false),
			("abba", false),
		],
	);

	check(
		"((a|b)c)+d?",
		&[
			("ac", true),
			("acbc", true),
			("acbcd", true),
			("", false),
			("d", false),
			("acb", false),
		],
	);

	check(
		"(a*)*b",
		&[("b", true), ("aab", true), ("", false), ("aa", false)],
	);

	check(
		"(a?)+",
		&[("", true), ("a", true), ("aaa", true), ("b", false)],
	)
}

#[test]
fn non_ascii_literals() {
	check(
		"(é|ß)+ü",
		&[("éü", true), ("ßéßü", true), ("ü", false), ("eü", false)],
	);

	check(
		"a b",
		&[("a b", true), ("ab", false)],
	)
}

#[test]
fn deterministic_compilation() {
	let patterns = ["a", "ab*", "(a|b)*abb", "((a|b)c)+d?", "(a?)+"];
	let inputs = ["", "a", "ab", "abb", "acbcd", "aabb", "ba"];

	for pattern in patterns {
		let first = compile(pattern).unwrap();
		let second = compile(pattern).unwrap();
		assert_eq!(first.nfa(), second.nfa());

		for input in inputs {
			assert_eq!(first.is_match(input), second.is_match(input))
		}
	}
}

#[test]
fn idempotent_matching() {
	let regex = compile("(ab|c)*d").unwrap();
	let nfa = regex.nfa().clone();

	for _ in 0..3 {
		assert!(matches(&regex, "abcd"));
		assert!(!matches(&regex, "abc"));
	}

	assert_eq!(regex.nfa(), &nfa);
}

#[test]
fn configured_strategy() {
	let regex = Config::new()
		.strategy(Strategy::Backtrack)
		.compile("(a|b)*c")
		.unwrap();

	assert_eq!(regex.config().get_strategy(), Strategy::Backtrack);
	assert!(regex.is_match("abac"));
	assert!(!regex.is_match("abca"));
}

#[test]
fn one_shot() {
	assert_eq!(is_match("a+b", "aab"), Ok(true));
	assert_eq!(is_match("a+b", "b"), Ok(false));
	assert!(is_match("(a", "a").is_err());
}

#[test]
fn shared_between_threads() {
	let regex = compile("(a|b)*c").unwrap();

	std::thread::scope(|s| {
		for input in ["abc", "c", "ab", "bbbac"] {
			let regex = &regex;
			s.spawn(move || {
				assert_eq!(regex.is_match(input), input.ends_with('c'));
			});
		}
	})
}

fn write_automaton(pattern: &str, regex: &Regex) {
	let name: String = pattern
		.chars()
		.map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
		.collect();

	let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("{name}.dot"));
	fs::write(path, regex.nfa().dot().to_string()).unwrap();
}

#[test]
fn nested_quantifiers() {
	let input = format!("{}b", "a".repeat(64));

	check(
		"(((a*)*)+)*",
		&[("", true), ("aaaa", true), (input.as_str(), false)],
	);

	check(
		"((a?)*(a+)?)*c",
		&[("c", true), ("aaac", true), (input.as_str(), false)],
	)
}

#[test]
fn automaton_dump() {
	write_automaton("(a|b)*", &compile("(a|b)*").unwrap());

	let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("_a_b__.dot");
	let dot = fs::read_to_string(path).unwrap();
	assert!(dot.starts_with("digraph {"));
	assert!(dot.contains("doublecircle"))
}
