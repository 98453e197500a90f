/*!
# Plaid: Builder.
*/

use crate::{
	CliError,
	Command,
	dispatch::dispatch,
	FromArg,
	Parsed,
	registry::Registry,
	token::{
		resolve_ambiguity,
		tokenize,
	},
	Validator,
};
use std::ffi::OsString;



#[derive(Debug, Default)]
/// # CLI Builder.
///
/// `Cli` collects the commands, values, and options your program
/// understands. Once everything is registered, [`Cli::parse`] consumes it,
/// returning a [`Parsed`] that can be run.
///
/// Names are registered without their leading dashes; `-v` and `--v` both
/// resolve to `v`. Each name — binding or alias — may only be used once.
///
/// ## Examples
///
/// ```
/// use plaid::{Cli, Command, Validator};
///
/// let mut parsed = Cli::new()
///     .with_option_alias("o", "option").unwrap()
///     .with_value("r", Validator::range(0.0_f64, 1.0)).unwrap()
///     .with_value_alias("f", "oneof", Validator::one_of([1, 3, 5])).unwrap()
///     .with_command("p", Command::new(|args| println!("print: {args:?}"))).unwrap()
///     .parse(["prog", "-o", "-r", "0.5", "--oneof", "3"])
///     .unwrap();
///
/// let out = parsed.run().unwrap();
/// assert!(out.flag("o"));
/// assert_eq!(out.get::<f64>("r"), Some(&0.5));
/// assert_eq!(out.get::<i32>("f"), Some(&3));
/// ```
pub struct Cli {
	/// # Registry.
	registry: Registry,
}

impl Cli {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	/// # With Command.
	///
	/// Register a command under `name`.
	///
	/// ## Errors
	///
	/// This will return an error if the name is already taken or invalid.
	pub fn with_command(mut self, name: &str, command: Command)
	-> Result<Self, CliError> {
		self.registry.add(name, None, command)?;
		Ok(self)
	}

	/// # With Command (and Alias).
	///
	/// Register a command under `name`, reachable via `alias` as well.
	///
	/// ## Errors
	///
	/// This will return an error if either name is already taken or invalid.
	pub fn with_command_alias(mut self, name: &str, alias: &str, command: Command)
	-> Result<Self, CliError> {
		self.registry.add(name, Some(alias), command)?;
		Ok(self)
	}

	/// # With Value.
	///
	/// Register a key that takes exactly one value. The value is converted to
	/// `T`, checked against `validator`, and stored in the
	/// [`Outputs`](crate::Outputs) under `name`.
	///
	/// Use [`Validator::always`] if anything goes.
	///
	/// ## Errors
	///
	/// This will return an error if the name is already taken or invalid.
	pub fn with_value<T: FromArg + 'static>(mut self, name: &str, validator: Validator<T>)
	-> Result<Self, CliError> {
		self.registry.add(name, None, Command::value(name, validator))?;
		Ok(self)
	}

	/// # With Value (and Alias).
	///
	/// Same as [`Cli::with_value`], plus an alias. The result is stored under
	/// `name` either way.
	///
	/// ## Errors
	///
	/// This will return an error if either name is already taken or invalid.
	pub fn with_value_alias<T: FromArg + 'static>(
		mut self,
		name: &str,
		alias: &str,
		validator: Validator<T>,
	) -> Result<Self, CliError> {
		self.registry.add(name, Some(alias), Command::value(name, validator))?;
		Ok(self)
	}

	/// # With Option.
	///
	/// Register a boolean switch. If present, `true` is stored under `name`.
	///
	/// ## Errors
	///
	/// This will return an error if the name is already taken or invalid.
	pub fn with_option(mut self, name: &str) -> Result<Self, CliError> {
		self.registry.add(name, None, Command::option(name))?;
		Ok(self)
	}

	/// # With Option (and Alias).
	///
	/// ## Errors
	///
	/// This will return an error if either name is already taken or invalid.
	pub fn with_option_alias(mut self, name: &str, alias: &str)
	-> Result<Self, CliError> {
		self.registry.add(name, Some(alias), Command::option(name))?;
		Ok(self)
	}
}

impl Cli {
	/// # With Commands.
	///
	/// Register one or more commands in one go.
	///
	/// ## Errors
	///
	/// This will return an error if any of the names are already taken or
	/// invalid.
	pub fn with_commands<'a, I>(self, commands: I) -> Result<Self, CliError>
	where I: IntoIterator<Item=(&'a str, Command)> {
		commands.into_iter().try_fold(self, |acc, (k, v)| acc.with_command(k, v))
	}

	/// # With Options.
	///
	/// Register one or more boolean switches in one go.
	///
	/// ## Examples
	///
	/// ```
	/// let cli = plaid::Cli::new()
	///     .with_options(["a", "b", "c"])
	///     .unwrap();
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if any of the names are already taken or
	/// invalid.
	pub fn with_options<'a, I>(self, names: I) -> Result<Self, CliError>
	where I: IntoIterator<Item=&'a str> {
		names.into_iter().try_fold(self, Self::with_option)
	}
}

impl Cli {
	/// # Parse.
	///
	/// Tokenize the arguments — the first being the invocation name —,
	/// expand any combined short flags, and queue up a task for each
	/// recognized key, sorted by priority.
	///
	/// Unrecognized keys and dropped values are reported as warnings rather
	/// than errors; see [`Parsed::warnings`].
	///
	/// ## Errors
	///
	/// This will return [`CliError::TooFewValues`] if a key is missing
	/// values it requires.
	pub fn parse<I, S>(mut self, args: I) -> Result<Parsed, CliError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let tokens = tokenize(args.into_iter().map(Into::into));
		if let Some(first) = tokens.first() {
			self.registry.add_program(&first.name);
		}

		tracing::debug!(
			target: "plaid",
			bindings = self.registry.len(),
			aliases = self.registry.aliases(),
			tokens = tokens.len(),
			"parsing arguments"
		);

		let mut warnings = Vec::new();
		let tokens = resolve_ambiguity(tokens, &self.registry, &mut warnings);
		let tasks = dispatch(tokens, &self.registry, &mut warnings)?;

		tracing::debug!(
			target: "plaid",
			tasks = tasks.len(),
			warnings = warnings.len(),
			"arguments parsed"
		);

		Ok(Parsed::new(self.registry, tasks, warnings))
	}

	/// # Parse Environment.
	///
	/// Same as [`Cli::parse`], but using [`std::env::args_os`].
	///
	/// ## Errors
	///
	/// In addition to the [`Cli::parse`] errors, this will return
	/// [`CliError::InvalidUtf8`] if an argument cannot be stringified.
	pub fn parse_env(self) -> Result<Parsed, CliError> {
		let args = std::env::args_os()
			.map(OsString::into_string)
			.collect::<Result<Vec<String>, OsString>>()
			.map_err(CliError::InvalidUtf8)?;
		self.parse(args)
	}
}
