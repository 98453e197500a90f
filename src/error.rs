/*!
# Plaid: Errors and Warnings.
*/

use std::{
	ffi::OsString,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Error!
///
/// Every fatal condition the builder, parser, or runner can hit. Non-fatal
/// conditions are reported as [`Warning`](crate::Warning)s instead.
pub enum CliError {
	/// # Conversion Failed.
	///
	/// A raw value could not be parsed into the target type.
	#[error("Unexpected conversion of {raw:?} to {target}.")]
	Conversion {
		/// # Raw Value.
		raw: String,

		/// # Target Type.
		target: &'static str,
	},

	/// # Duplicate Name.
	#[error("Duplicate names are prohibited: {0:?}.")]
	DuplicateName(String),

	/// # Invalid Name.
	#[error("Invalid name: {0:?}.")]
	InvalidName(String),

	/// # Invalid Pattern.
	#[error("Invalid pattern: {0}")]
	InvalidPattern(String),

	/// # Invalid UTF-8.
	///
	/// The original [`OsString`] is kept in case you want to dig deeper.
	#[error("Invalid UTF-8: {0:?}.")]
	InvalidUtf8(OsString),

	/// # Too Few Values.
	#[error("{name}: Too few arguments ({given}), expects {expected}.")]
	TooFewValues {
		/// # Binding Name.
		name: String,

		/// # Values Supplied.
		given: usize,

		/// # Values Expected.
		expected: usize,
	},

	/// # Validation Failed.
	///
	/// The value converted fine, but its validator rejected it.
	#[error("{name}: Invalid value {raw:?}.")]
	Validation {
		/// # Binding Name.
		name: String,

		/// # Raw Value.
		raw: String,
	},
}

impl CliError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, static summary of the error kind. Use the `Display`
	/// implementation for the full message.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Conversion { .. } => "Conversion failed.",
			Self::DuplicateName(_) => "Duplicate name.",
			Self::InvalidName(_) => "Invalid name.",
			Self::InvalidPattern(_) => "Invalid pattern.",
			Self::InvalidUtf8(_) => "Invalid UTF-8.",
			Self::TooFewValues { .. } => "Too few arguments.",
			Self::Validation { .. } => "Invalid value.",
		}
	}

	#[must_use]
	/// # Exit Code.
	///
	/// Every error is fatal, so they all share the same conventional code.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # Is Configuration Error?
	///
	/// Returns `true` for mistakes in the registration schema itself rather
	/// than in the user-supplied arguments.
	pub const fn is_configuration(&self) -> bool {
		matches!(
			self,
			Self::DuplicateName(_) | Self::InvalidName(_) | Self::InvalidPattern(_)
		)
	}
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Warning.
///
/// Non-fatal diagnostics collected during parsing. These never change
/// control flow; they are logged (via `tracing`) and kept around on
/// [`Parsed`](crate::Parsed) for anyone who cares to look.
pub enum Warning {
	/// # Discarded Value.
	///
	/// A value that will never reach a handler, either because its option
	/// was unrecognized or because it was attached to a combined short-flag
	/// cluster.
	Discarded(String),

	/// # Too Many Values.
	///
	/// The extras are dropped.
	TooManyValues {
		/// # Binding Name.
		name: String,

		/// # Values Supplied.
		given: usize,

		/// # Values Expected.
		expected: usize,
	},

	/// # Unrecognized Option.
	Unrecognized(String),
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Discarded(s) => write!(f, "Discarded argument {s:?}."),
			Self::TooManyValues { name, given, expected } => write!(
				f,
				"{name}: Expected {expected} argument(s), but {given} were given.",
			),
			Self::Unrecognized(s) => write!(f, "Unrecognized option {s:?}."),
		}
	}
}

impl Warning {
	/// # Log and Push.
	///
	/// Emit the warning on the `plaid` tracing target and add it to the list.
	pub(crate) fn push(self, list: &mut Vec<Self>) {
		tracing::warn!(target: "plaid", "{self}");
		list.push(self);
	}
}
