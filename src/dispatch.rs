/*!
# Plaid: Dispatch.

Tokens are matched to bindings and packed into tasks, which are then sorted
by priority and held until [`Parsed::run`] is called.
*/

use crate::{
	Arity,
	CliError,
	registry::Registry,
	token::Token,
	Warning,
};
use std::{
	any::Any,
	cmp::Reverse,
	collections::BTreeMap,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Task.
///
/// A binding (by canonical name) and the values it will be called with.
pub(crate) struct Task {
	/// # Binding Name.
	name: String,

	/// # Values.
	values: Vec<String>,

	/// # Priority.
	priority: i32,
}

/// # Dispatch.
///
/// Resolve each token in order, returning the tasks sorted by descending
/// priority.
///
/// The sort is stable, so tasks sharing a priority run in the order they
/// appeared on the command line.
///
/// ## Errors
///
/// This will return [`CliError::TooFewValues`] if a token is missing values
/// its binding requires.
pub(crate) fn dispatch(
	tokens: Vec<Token>,
	registry: &Registry,
	warnings: &mut Vec<Warning>,
) -> Result<Vec<Task>, CliError> {
	let mut tasks = Vec::with_capacity(tokens.len());
	for Token { name, mut values } in tokens {
		let Some((canonical, binding)) = registry.resolve(&name) else {
			Warning::Unrecognized(name).push(warnings);
			for v in values { Warning::Discarded(v).push(warnings); }
			continue;
		};

		if let Arity::Exactly(expected) = binding.arity() {
			let given = values.len();
			if given < expected {
				return Err(CliError::TooFewValues {
					name: canonical.to_owned(),
					given,
					expected,
				});
			}
			if given > expected {
				Warning::TooManyValues {
					name: canonical.to_owned(),
					given,
					expected,
				}.push(warnings);
				values.truncate(expected);
			}
		}

		tasks.push(Task {
			name: canonical.to_owned(),
			values,
			priority: binding.priority(),
		});
	}

	tasks.sort_by_key(|t| Reverse(t.priority));
	Ok(tasks)
}



/// # Parsed Arguments.
///
/// This is what [`Cli::parse`](crate::Cli::parse) hands back. Registration
/// is over at this point; all that's left is to [`run`](Parsed::run) the
/// queued tasks.
///
/// ## Examples
///
/// ```
/// use plaid::{Cli, Command};
///
/// let mut parsed = Cli::new()
///     .with_option("v").unwrap()
///     .with_command("x", Command::new(|_| {}).with_priority(5)).unwrap()
///     .parse(["prog", "-v", "-x", "-z"])
///     .unwrap();
///
/// // The higher priority goes first.
/// assert_eq!(parsed.schedule().collect::<Vec<_>>(), ["x", "prog", "v"]);
///
/// // Nobody registered -z.
/// assert_eq!(parsed.warnings().len(), 1);
///
/// let out = parsed.run().unwrap();
/// assert!(out.flag("v"));
/// ```
pub struct Parsed {
	/// # Registry.
	registry: Registry,

	/// # Queued Tasks (Sorted).
	tasks: Vec<Task>,

	/// # Warnings.
	warnings: Vec<Warning>,
}

impl fmt::Debug for Parsed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Parsed")
			.field("tasks", &self.tasks)
			.field("warnings", &self.warnings)
			.finish_non_exhaustive()
	}
}

impl Parsed {
	/// # New.
	pub(crate) const fn new(
		registry: Registry,
		tasks: Vec<Task>,
		warnings: Vec<Warning>,
	) -> Self {
		Self { registry, tasks, warnings }
	}

	#[must_use]
	/// # Is Empty?
	///
	/// Returns `true` if there is nothing to run.
	pub fn is_empty(&self) -> bool { self.tasks.is_empty() }

	#[must_use]
	/// # Number of Tasks.
	pub fn len(&self) -> usize { self.tasks.len() }

	/// # Schedule.
	///
	/// Return the (canonical) binding names in the order they will run.
	pub fn schedule(&self) -> impl Iterator<Item=&str> {
		self.tasks.iter().map(|t| t.name.as_str())
	}

	#[must_use]
	/// # Warnings.
	///
	/// Return any warnings raised while parsing. These have already been
	/// logged.
	pub fn warnings(&self) -> &[Warning] { &self.warnings }

	/// # Run.
	///
	/// Execute each queued task once, in order, collecting their results.
	///
	/// Calling this again re-runs the same tasks from scratch; whether that
	/// is harmless depends on your handlers.
	///
	/// ## Errors
	///
	/// The first handler to fail — a value that won't convert or validate,
	/// or a fallible command — aborts the run. Nothing after it executes,
	/// and no partial results are returned.
	pub fn run(&mut self) -> Result<Outputs, CliError> {
		let mut out = Outputs::default();
		for task in &self.tasks {
			let Some(binding) = self.registry.get_mut(&task.name) else { continue; };
			tracing::trace!(target: "plaid", name = %task.name, priority = task.priority, "running task");
			binding.call(&task.values, &mut out)?;
		}

		Ok(out)
	}
}



#[derive(Default)]
/// # Outputs.
///
/// Results stored by value and option bindings during [`Parsed::run`],
/// keyed by canonical binding name (not alias).
///
/// Options only ever store `true`; an absent option is simply absent. Use
/// [`Outputs::flag`] to treat that as `false`.
pub struct Outputs(BTreeMap<String, Box<dyn Any>>);

impl fmt::Debug for Outputs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.0.keys()).finish()
	}
}

impl Outputs {
	#[must_use]
	/// # Contains?
	pub fn contains(&self, name: &str) -> bool { self.0.contains_key(name) }

	#[must_use]
	/// # Flag.
	///
	/// Returns `true` if a boolean is stored under `name`, and it is `true`.
	pub fn flag(&self, name: &str) -> bool {
		self.get::<bool>(name).copied().unwrap_or(false)
	}

	#[must_use]
	/// # Get.
	///
	/// Return the value stored under `name`, if any and if it is a `T`.
	pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
		self.0.get(name)?.downcast_ref::<T>()
	}

	#[must_use]
	/// # Get or Default.
	///
	/// Return a copy of the value stored under `name`, or `default` if
	/// there isn't one.
	///
	/// ## Examples
	///
	/// ```
	/// use plaid::{Cli, Validator};
	///
	/// let out = Cli::new()
	///     .with_value::<u8>("threads", Validator::always()).unwrap()
	///     .parse(["prog"]).unwrap()
	///     .run().unwrap();
	///
	/// assert_eq!(out.get_or("threads", 4_u8), 4);
	/// ```
	pub fn get_or<T: Clone + 'static>(&self, name: &str, default: T) -> T {
		self.get::<T>(name).cloned().unwrap_or(default)
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	/// # Insert.
	///
	/// Later values replace earlier ones.
	pub(crate) fn insert<T: 'static>(&mut self, name: &str, value: T) {
		self.0.insert(name.to_owned(), Box::new(value));
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Command;

	/// # Helper: Token With Values.
	fn token(name: &str, values: &[&str]) -> Token {
		Token {
			name: name.to_owned(),
			values: values.iter().map(|&s| s.to_owned()).collect(),
		}
	}

	/// # Helper: Registry.
	fn registry() -> Registry {
		let mut reg = Registry::default();
		reg.add("two", Some("pair"), Command::noop().with_arity(Arity::Exactly(2)))
			.expect("Add failed.");
		reg.add("any", None, Command::noop()).expect("Add failed.");
		reg.add("hi", None, Command::noop().with_priority(10)).expect("Add failed.");
		reg.add("lo", None, Command::noop().with_priority(-5)).expect("Add failed.");
		reg
	}

	#[test]
	fn t_arity() {
		let reg = registry();
		let mut warnings = Vec::new();

		// Exact.
		let tasks = dispatch(vec![token("two", &["a", "b"])], &reg, &mut warnings)
			.expect("Dispatch failed.");
		assert_eq!(tasks[0].values, ["a", "b"]);
		assert!(warnings.is_empty());

		// Too few.
		assert_eq!(
			dispatch(vec![token("pair", &["a"])], &reg, &mut warnings),
			Err(CliError::TooFewValues { name: "two".to_owned(), given: 1, expected: 2 }),
		);

		// Too many.
		let tasks = dispatch(vec![token("two", &["a", "b", "c"])], &reg, &mut warnings)
			.expect("Dispatch failed.");
		assert_eq!(tasks[0].values, ["a", "b"]);
		assert_eq!(
			warnings,
			[Warning::TooManyValues { name: "two".to_owned(), given: 3, expected: 2 }],
		);

		// Anything goes.
		warnings.clear();
		for n in 0..5 {
			let values: Vec<String> = (0..n).map(|i| i.to_string()).collect();
			let tasks = dispatch(
				vec![Token { name: "any".to_owned(), values: values.clone() }],
				&reg,
				&mut warnings,
			).expect("Dispatch failed.");
			assert_eq!(tasks[0].values, values);
		}
		assert!(warnings.is_empty());
	}

	#[test]
	fn t_unrecognized() {
		let reg = registry();
		let mut warnings = Vec::new();
		let tasks = dispatch(
			vec![token("z", &["x"]), token("any", &[])],
			&reg,
			&mut warnings,
		).expect("Dispatch failed.");

		assert_eq!(tasks.len(), 1);
		assert_eq!(tasks[0].name, "any");
		assert_eq!(
			warnings,
			[Warning::Unrecognized("z".to_owned()), Warning::Discarded("x".to_owned())],
		);
	}

	#[test]
	fn t_priority() {
		let reg = registry();
		let mut warnings = Vec::new();
		let tasks = dispatch(
			vec![
				token("lo", &[]),
				token("any", &["1"]),
				token("hi", &[]),
				token("any", &["2"]),
				token("pair", &["a", "b"]),
			],
			&reg,
			&mut warnings,
		).expect("Dispatch failed.");

		let order: Vec<(&str, i32)> = tasks.iter()
			.map(|t| (t.name.as_str(), t.priority))
			.collect();
		assert_eq!(
			order,
			[("hi", 10), ("any", -1), ("any", -1), ("two", -1), ("lo", -5)],
		);

		// Equal priorities keep their order.
		assert_eq!(tasks[1].values, ["1"]);
		assert_eq!(tasks[2].values, ["2"]);
	}

	#[test]
	fn t_outputs() {
		let mut out = Outputs::default();
		assert!(out.is_empty());
		assert!(! out.flag("o"));

		out.insert("o", true);
		out.insert("n", 3_i32);
		out.insert("n", 5_i32);
		assert_eq!(out.len(), 2);
		assert!(out.flag("o"));
		assert!(out.contains("n"));
		assert_eq!(out.get::<i32>("n"), Some(&5));
		assert_eq!(out.get::<u32>("n"), None, "Wrong type.");
		assert_eq!(out.get_or("n", 0_i32), 5);
		assert_eq!(out.get_or("m", 7_i32), 7);
		assert!(! out.flag("n"), "Not a bool.");
	}
}
