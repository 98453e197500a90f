/*!
# Plaid: Value Conversion.
*/

use crate::CliError;
use std::path::PathBuf;



/// # From Argument.
///
/// This trait converts a single raw CLI value into a concrete type. It is
/// what [`Cli::with_value`](crate::Cli::with_value) uses under the hood.
///
/// Conversion is all-or-nothing: the entire string must be accepted, and no
/// partial value is ever produced.
///
/// ## Examples
///
/// ```
/// use plaid::FromArg;
///
/// assert_eq!(u8::from_arg("42"), Ok(42));
/// assert_eq!(bool::from_arg("TRUE"), Ok(true));
/// assert!(u8::from_arg("42abc").is_err());
/// ```
pub trait FromArg: Sized {
	/// # Target Name.
	///
	/// A human-readable name for the type, used in error messages.
	const TARGET: &'static str;

	/// # From Argument.
	///
	/// ## Errors
	///
	/// This will return [`CliError::Conversion`] if the value cannot be
	/// converted.
	fn from_arg(raw: &str) -> Result<Self, CliError>;
}

/// # Helper: Conversion Error.
fn conversion_error<T: FromArg>(raw: &str) -> CliError {
	CliError::Conversion {
		raw: raw.to_owned(),
		target: T::TARGET,
	}
}

/// # Helper: `FromStr`-backed Conversions.
///
/// Rust's numeric parsing is locale-independent and rejects trailing junk,
/// so these can all be handed straight through.
macro_rules! from_str {
	($($ty:ty),+ $(,)?) => ($(
		impl FromArg for $ty {
			const TARGET: &'static str = stringify!($ty);

			#[inline]
			fn from_arg(raw: &str) -> Result<Self, CliError> {
				raw.parse::<Self>().map_err(|_| conversion_error::<Self>(raw))
			}
		}
	)+);
}

from_str!(
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	f32, f64,
);

impl FromArg for String {
	const TARGET: &'static str = "String";

	#[inline]
	fn from_arg(raw: &str) -> Result<Self, CliError> { Ok(raw.to_owned()) }
}

impl FromArg for PathBuf {
	const TARGET: &'static str = "PathBuf";

	#[inline]
	fn from_arg(raw: &str) -> Result<Self, CliError> { Ok(Self::from(raw)) }
}

impl FromArg for char {
	const TARGET: &'static str = "char";

	fn from_arg(raw: &str) -> Result<Self, CliError> {
		let mut chars = raw.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(conversion_error::<Self>(raw)),
		}
	}
}

impl FromArg for bool {
	const TARGET: &'static str = "bool";

	fn from_arg(raw: &str) -> Result<Self, CliError> {
		if raw.eq_ignore_ascii_case("true") { Ok(true) }
		else if raw.eq_ignore_ascii_case("false") { Ok(false) }
		else { Err(conversion_error::<Self>(raw)) }
	}
}
