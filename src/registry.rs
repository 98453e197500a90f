/*!
# Plaid: Registry.

This module holds the bindings — handlers, arities, priorities — keyed by
name, along with the separate alias lookup.
*/

use crate::{
	CliError,
	FromArg,
	Outputs,
	Validator,
};
use std::{
	collections::BTreeMap,
	fmt,
};



/// # Default Priority.
///
/// Bindings registered without an explicit priority run last (along with
/// everything else sharing this value).
pub const DEFAULT_PRIORITY: i32 = -1;



/// # Handler.
///
/// Receives the values bound to the task, and may store a result.
pub(crate) type Handler = Box<dyn FnMut(&[String], &mut Outputs) -> Result<(), CliError>>;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Arity.
///
/// The number of values a binding expects to follow its name.
pub enum Arity {
	#[default]
	/// # Unconstrained.
	///
	/// Any number of values, including zero.
	Any,

	/// # Exactly N.
	///
	/// Fewer values is an error; extra values are dropped with a warning.
	Exactly(usize),
}



/// # Command.
///
/// A handler and its dispatch settings, ready to be registered with
/// [`Cli::with_command`](crate::Cli::with_command).
///
/// ## Examples
///
/// ```
/// use plaid::{Arity, Command};
///
/// let cmd = Command::new(|args| println!("print: {args:?}"))
///     .with_arity(Arity::Exactly(2))
///     .with_priority(10);
///
/// assert_eq!(cmd.arity(), Arity::Exactly(2));
/// assert_eq!(cmd.priority(), 10);
/// ```
pub struct Command {
	/// # Handler.
	handler: Handler,

	/// # Expected Values.
	arity: Arity,

	/// # Priority.
	priority: i32,
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("arity", &self.arity)
			.field("priority", &self.priority)
			.finish_non_exhaustive()
	}
}

impl Command {
	#[must_use]
	/// # New.
	///
	/// Wrap an infallible handler. The command accepts any number of values
	/// and runs at [`DEFAULT_PRIORITY`] unless told otherwise.
	pub fn new<F>(mut f: F) -> Self
	where F: FnMut(&[String]) + 'static {
		Self::from_handler(Box::new(move |args: &[String], _: &mut Outputs| {
			f(args);
			Ok(())
		}))
	}

	#[must_use]
	/// # New (Fallible).
	///
	/// Same as [`Command::new`], but the handler may fail, aborting the run.
	pub fn try_new<F>(mut f: F) -> Self
	where F: FnMut(&[String]) -> Result<(), CliError> + 'static {
		Self::from_handler(Box::new(move |args: &[String], _: &mut Outputs| f(args)))
	}

	#[must_use]
	/// # With Arity.
	pub fn with_arity(mut self, arity: Arity) -> Self {
		self.arity = arity;
		self
	}

	#[must_use]
	/// # With Priority.
	///
	/// Higher priorities run first.
	pub fn with_priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> Arity { self.arity }

	#[must_use]
	/// # Priority.
	pub const fn priority(&self) -> i32 { self.priority }
}

impl Command {
	/// # From Handler.
	fn from_handler(handler: Handler) -> Self {
		Self {
			handler,
			arity: Arity::Any,
			priority: DEFAULT_PRIORITY,
		}
	}

	/// # No-Op.
	///
	/// Used for the invocation name.
	pub(crate) fn noop() -> Self {
		Self::from_handler(Box::new(|_: &[String], _: &mut Outputs| Ok(())))
	}

	/// # Option (Switch).
	///
	/// Presence stores `true` under `key`.
	pub(crate) fn option(key: &str) -> Self {
		let key = key.to_owned();
		Self::from_handler(Box::new(move |_: &[String], out: &mut Outputs| {
			out.insert(&key, true);
			Ok(())
		}))
			.with_arity(Arity::Exactly(0))
	}

	/// # Value.
	///
	/// Convert and validate the first value, then store it under `key`.
	pub(crate) fn value<T: FromArg + 'static>(key: &str, validator: Validator<T>)
	-> Self {
		let key = key.to_owned();
		Self::from_handler(Box::new(move |args: &[String], out: &mut Outputs| {
			let Some(raw) = args.first() else {
				return Err(CliError::TooFewValues {
					name: key.clone(),
					given: 0,
					expected: 1,
				});
			};

			let value = T::from_arg(raw)?;
			if ! validator.check(&value) {
				return Err(CliError::Validation {
					name: key.clone(),
					raw: raw.clone(),
				});
			}

			out.insert(&key, value);
			Ok(())
		}))
			.with_arity(Arity::Exactly(1))
	}

	/// # Call.
	pub(crate) fn call(&mut self, args: &[String], out: &mut Outputs)
	-> Result<(), CliError> {
		(self.handler)(args, out)
	}
}



#[derive(Debug, Default)]
/// # Registry.
///
/// Binding and alias names share a single namespace; a name may only ever
/// be claimed once.
pub(crate) struct Registry {
	/// # Bindings.
	bindings: BTreeMap<String, Command>,

	/// # Aliases (Alias, Canonical).
	aliases: BTreeMap<String, String>,
}

impl Registry {
	/// # Add.
	///
	/// Register a binding, and optionally an alias for it. Both names are
	/// checked before anything is inserted.
	pub(crate) fn add(&mut self, name: &str, alias: Option<&str>, command: Command)
	-> Result<(), CliError> {
		if ! valid_name(name) { return Err(CliError::InvalidName(name.to_owned())); }
		if self.contains(name) { return Err(CliError::DuplicateName(name.to_owned())); }

		if let Some(alias) = alias {
			if ! valid_name(alias) { return Err(CliError::InvalidName(alias.to_owned())); }
			if alias == name || self.contains(alias) {
				return Err(CliError::DuplicateName(alias.to_owned()));
			}
			self.aliases.insert(alias.to_owned(), name.to_owned());
		}

		self.bindings.insert(name.to_owned(), command);
		Ok(())
	}

	/// # Add Invocation Name.
	///
	/// The program path gets a silent no-op binding so it never shows up as
	/// unrecognized. If the name is already a binding, that binding wins; if
	/// it is only an alias, the no-op shadows it, since bindings resolve
	/// first.
	pub(crate) fn add_program(&mut self, name: &str) {
		if ! self.bindings.contains_key(name) {
			self.bindings.insert(name.to_owned(), Command::noop());
		}
	}

	/// # Contains?
	///
	/// Returns `true` if the name is a binding or an alias.
	pub(crate) fn contains(&self, name: &str) -> bool {
		self.bindings.contains_key(name) || self.aliases.contains_key(name)
	}

	/// # Resolve.
	///
	/// Look up a binding directly or via alias, returning the canonical name
	/// along with it.
	pub(crate) fn resolve(&self, name: &str) -> Option<(&str, &Command)> {
		if let Some((k, v)) = self.bindings.get_key_value(name) {
			return Some((k.as_str(), v));
		}

		let canonical = self.aliases.get(name)?;
		self.bindings.get_key_value(canonical.as_str())
			.map(|(k, v)| (k.as_str(), v))
	}

	/// # Binding (Mutable).
	pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Command> {
		self.bindings.get_mut(name)
	}

	/// # Number of Bindings.
	pub(crate) fn len(&self) -> usize { self.bindings.len() }

	/// # Number of Aliases.
	pub(crate) fn aliases(&self) -> usize { self.aliases.len() }
}



/// # Valid Name?
///
/// Names cannot be empty, start with a dash, or contain whitespace or
/// control characters. The tokenizer could never produce such a name.
fn valid_name(name: &str) -> bool {
	! name.is_empty() &&
	! name.starts_with('-') &&
	! name.chars().any(|c| c.is_whitespace() || c.is_control())
}
