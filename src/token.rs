/*!
# Plaid: Tokens.

Raw arguments are grouped into tokens — a name and whatever values follow
it — before anything gets looked up.

The conventions are deliberately simple:
* An entry beginning with a single `-` (and something else) starts a token, sans dash;
* An entry beginning with `--` (and something else) starts a token, sans dashes;
* Everything else, including a lone `-` or `--`, is a value for the most recent token.

Values are never glued to keys; `-k=v` is a token named `k=v`.
*/

use crate::{
	registry::Registry,
	Warning,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Token.
pub(crate) struct Token {
	/// # Name.
	pub(crate) name: String,

	/// # Values.
	pub(crate) values: Vec<String>,
}

impl Token {
	/// # New (Empty).
	pub(crate) const fn new(name: String) -> Self {
		Self { name, values: Vec::new() }
	}
}



/// # Key Name.
///
/// Return the name portion of a key-like argument, or `None` if the argument
/// is a plain value.
fn key_name(raw: &str) -> Option<&str> {
	match raw.as_bytes() {
		// Long.
		[b'-', b'-', _, ..] => raw.get(2..),
		// Not a key; a lone double-dash is just a value.
		[b'-', b'-'] => None,
		// Short.
		[b'-', _, ..] => raw.get(1..),
		_ => None,
	}
}

/// # Tokenize.
///
/// The first argument is the invocation name and always gets a token of its
/// own, even if it looks like a key. An empty argument list produces no
/// tokens.
pub(crate) fn tokenize<I>(args: I) -> Vec<Token>
where I: IntoIterator<Item=String> {
	let mut args = args.into_iter();
	let Some(first) = args.next() else { return Vec::new(); };

	let mut out = vec![Token::new(first)];
	for arg in args {
		if let Some(name) = key_name(&arg) {
			out.push(Token::new(name.to_owned()));
		}
		// There's always at least one.
		else if let Some(last) = out.last_mut() {
			last.values.push(arg);
		}
	}

	out
}

/// # Resolve Ambiguity.
///
/// Unregistered names whose every character is itself registered are taken
/// to be combined short flags (e.g. `-abc` for `-a -b -c`) and split into
/// one token per character.
///
/// Combined flags never carry values; any that were attached are discarded
/// (with a warning).
pub(crate) fn resolve_ambiguity(
	tokens: Vec<Token>,
	registry: &Registry,
	warnings: &mut Vec<Warning>,
) -> Vec<Token> {
	let mut out = Vec::with_capacity(tokens.len());
	for token in tokens {
		if ! is_combined(&token.name, registry) {
			out.push(token);
			continue;
		}

		tracing::debug!(target: "plaid", name = %token.name, "expanding combined flags");
		out.extend(token.name.chars().map(|c| Token::new(c.to_string())));
		for v in token.values { Warning::Discarded(v).push(warnings); }
	}

	out
}

/// # Is Combined?
fn is_combined(name: &str, registry: &Registry) -> bool {
	if name.is_empty() || registry.contains(name) { return false; }

	let mut buf = [0_u8; 4];
	name.chars().all(|c| registry.contains(c.encode_utf8(&mut buf)))
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Command;

	/// # Helper: Owned Arguments.
	fn args(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|&s| s.to_owned()).collect()
	}

	/// # Helper: Token With Values.
	fn token(name: &str, values: &[&str]) -> Token {
		Token { name: name.to_owned(), values: args(values) }
	}

	#[test]
	fn t_key_name() {
		assert_eq!(key_name("-a"), Some("a"));
		assert_eq!(key_name("-abc"), Some("abc"));
		assert_eq!(key_name("--abc"), Some("abc"));
		assert_eq!(key_name("---abc"), Some("-abc"));
		assert_eq!(key_name("-5"), Some("5"));
		assert_eq!(key_name("-k=v"), Some("k=v"));
		assert_eq!(key_name("--Björk"), Some("Björk"));
		assert_eq!(key_name("-ö"), Some("ö"));

		for v in ["", "-", "--", "a", "a-b", "/foo/-bar"] {
			assert_eq!(key_name(v), None, "Bug: {v:?} should be a value.");
		}
	}

	#[test]
	fn t_tokenize() {
		assert!(tokenize(Vec::new()).is_empty());

		assert_eq!(
			tokenize(args(&["prog"])),
			[token("prog", &[])],
		);

		assert_eq!(
			tokenize(args(&["prog", "loose", "-o", "-r", "0.5", "--print", "a", "-", "b", "--", "--long"])),
			[
				token("prog", &["loose"]),
				token("o", &[]),
				token("r", &["0.5"]),
				token("print", &["a", "-", "b", "--"]),
				token("long", &[]),
			],
		);

		// The first entry is never a key.
		assert_eq!(
			tokenize(args(&["-prog", "-a"])),
			[token("-prog", &[]), token("a", &[])],
		);
	}

	#[test]
	fn t_resolve_ambiguity() {
		let mut reg = Registry::default();
		for k in ["a", "b", "c"] {
			reg.add(k, None, Command::noop()).expect("Add failed.");
		}
		reg.add("d", Some("e"), Command::noop()).expect("Add failed.");
		reg.add("ab", None, Command::noop()).expect("Add failed.");

		let mut warnings = Vec::new();
		let tokens = resolve_ambiguity(
			vec![
				token("prog", &[]),
				token("abc", &["x", "y"]),
				token("ab", &["z"]),
				token("ce", &[]),
				token("abz", &["w"]),
				token("a", &["v"]),
			],
			&reg,
			&mut warnings,
		);

		assert_eq!(
			tokens,
			[
				token("prog", &[]),
				// Expanded; the values are gone.
				token("a", &[]),
				token("b", &[]),
				token("c", &[]),
				// Registered directly, so left alone.
				token("ab", &["z"]),
				// Aliases count too.
				token("c", &[]),
				token("e", &[]),
				// The z spoils it.
				token("abz", &["w"]),
				token("a", &["v"]),
			],
		);

		assert_eq!(
			warnings,
			[Warning::Discarded("x".to_owned()), Warning::Discarded("y".to_owned())],
		);
	}
}
