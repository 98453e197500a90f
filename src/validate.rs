/*!
# Plaid: Validators.
*/

#[cfg(feature = "regex")]
use crate::CliError;
use std::fmt;



#[cfg(feature = "regex")]
/// # Email Pattern.
///
/// Word characters are ASCII-only.
const EMAIL: &str = r"[0-9A-Za-z_]+([-+.][0-9A-Za-z_]+)*@[0-9A-Za-z_]+([-.][0-9A-Za-z_]+)*\.[0-9A-Za-z_]+([-.][0-9A-Za-z_]+)*";



/// # Validator.
///
/// A predicate gating acceptance of a converted value. Validation only ever
/// runs after a successful conversion.
///
/// ## Examples
///
/// ```
/// use plaid::Validator;
///
/// let v = Validator::range(0.0, 1.0);
/// assert!(v.check(&0.0));
/// assert!(! v.check(&1.0));
///
/// let v = Validator::one_of([1, 3, 5]);
/// assert!(v.check(&3));
/// assert!(! v.check(&4));
/// ```
pub struct Validator<T>(Box<dyn Fn(&T) -> bool>);

impl<T: 'static> Default for Validator<T> {
	#[inline]
	fn default() -> Self { Self::always() }
}

impl<T> fmt::Debug for Validator<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Validator")
	}
}

impl<T: 'static> Validator<T> {
	#[must_use]
	/// # Always.
	///
	/// Accept anything. This is the default.
	pub fn always() -> Self { Self(Box::new(|_: &T| true)) }

	#[must_use]
	/// # Custom Predicate.
	pub fn new<F>(f: F) -> Self
	where F: Fn(&T) -> bool + 'static { Self(Box::new(f)) }

	#[must_use]
	/// # Check.
	///
	/// Returns `true` if the value is acceptable.
	pub fn check(&self, value: &T) -> bool { (self.0)(value) }
}

impl<T: PartialOrd + 'static> Validator<T> {
	#[must_use]
	/// # Range.
	///
	/// Accept values in the half-open range `low..high`.
	///
	/// ## Examples
	///
	/// ```
	/// use plaid::Validator;
	///
	/// let v = Validator::range(1_u8, 5);
	/// assert!(v.check(&1));
	/// assert!(v.check(&4));
	/// assert!(! v.check(&5));
	/// ```
	pub fn range(low: T, high: T) -> Self {
		Self(Box::new(move |v: &T| low <= *v && *v < high))
	}
}

impl<T: PartialEq + 'static> Validator<T> {
	#[must_use]
	/// # One Of.
	///
	/// Accept values equal to one of the given items.
	pub fn one_of<I: IntoIterator<Item=T>>(items: I) -> Self {
		let items: Vec<T> = items.into_iter().collect();
		Self(Box::new(move |v: &T| items.contains(v)))
	}
}

#[cfg(feature = "regex")]
#[cfg_attr(docsrs, doc(cfg(feature = "regex")))]
impl Validator<String> {
	/// # Regular Expression.
	///
	/// Accept strings that match the pattern in full. Partial matches are
	/// rejected, so there is no need to anchor the pattern yourself.
	///
	/// ## Examples
	///
	/// ```
	/// use plaid::Validator;
	///
	/// let v = Validator::regex("[a-z]+").unwrap();
	/// assert!(v.check(&"abc".to_owned()));
	/// assert!(! v.check(&"abc1".to_owned()));
	/// ```
	///
	/// ## Errors
	///
	/// This will return [`CliError::InvalidPattern`] if the pattern does not
	/// compile.
	pub fn regex(pattern: &str) -> Result<Self, CliError> {
		let re = regex::Regex::new(&format!("^(?:{pattern})$"))
			.map_err(|e| CliError::InvalidPattern(e.to_string()))?;
		Ok(Self(Box::new(move |v: &String| re.is_match(v))))
	}

	#[must_use]
	#[expect(clippy::missing_panics_doc, reason = "The pattern is a constant.")]
	/// # Email.
	///
	/// Accept addresses of the form `local@domain.tld`.
	///
	/// ## Examples
	///
	/// ```
	/// use plaid::Validator;
	///
	/// let v = Validator::email();
	/// assert!(v.check(&"hello@blobfolio.com".to_owned()));
	/// assert!(! v.check(&"hello@blobfolio".to_owned()));
	/// ```
	pub fn email() -> Self {
		Self::regex(EMAIL).expect("The email pattern is valid.")
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_always() {
		let v = Validator::<i32>::default();
		assert!(v.check(&i32::MIN));
		assert!(v.check(&0));
		assert!(v.check(&i32::MAX));
	}

	#[test]
	fn t_range() {
		let v = Validator::range(0.0_f64, 1.0);
		assert!(v.check(&0.0));
		assert!(v.check(&0.5));
		assert!(v.check(&0.999_999));
		assert!(! v.check(&1.0), "The upper bound is exclusive.");
		assert!(! v.check(&-0.000_001));
		assert!(! v.check(&-1.0));
		assert!(! v.check(&f64::NAN));

		let v = Validator::range(-5_i64, 5);
		assert!((-5..5).all(|i| v.check(&i)));
		assert!(! v.check(&-6));
		assert!(! v.check(&5));
	}

	#[test]
	fn t_one_of() {
		let v = Validator::one_of([1, 3, 5]);
		for i in -10..=10 {
			assert_eq!(v.check(&i), matches!(i, 1 | 3 | 5), "Bug: one_of mismatch for {i}.");
		}

		let v = Validator::one_of(["fast".to_owned(), "slow".to_owned()]);
		assert!(v.check(&"fast".to_owned()));
		assert!(! v.check(&"Fast".to_owned()));
	}

	#[test]
	fn t_new() {
		let v = Validator::new(|s: &String| s.starts_with('/'));
		assert!(v.check(&"/tmp".to_owned()));
		assert!(! v.check(&"tmp".to_owned()));
	}

	#[cfg(feature = "regex")]
	#[test]
	fn t_regex() {
		let v = Validator::regex(r"\d{3}").expect("Pattern failed.");
		assert!(v.check(&"123".to_owned()));
		assert!(! v.check(&"1234".to_owned()), "Partial matches should fail.");
		assert!(! v.check(&"a123".to_owned()), "Partial matches should fail.");

		// Alternation must not escape the anchors.
		let v = Validator::regex("a|b").expect("Pattern failed.");
		assert!(v.check(&"a".to_owned()));
		assert!(! v.check(&"ab".to_owned()));
		assert!(! v.check(&"xb".to_owned()));

		assert!(matches!(Validator::regex("(unclosed"), Err(CliError::InvalidPattern(_))));
	}

	#[cfg(feature = "regex")]
	#[test]
	fn t_email() {
		let v = Validator::email();
		for good in [
			"hello@blobfolio.com",
			"first.last@example.co.uk",
			"first+tag@sub-domain.example.org",
		] {
			assert!(v.check(&good.to_owned()), "Bug: {good:?} should be an email.");
		}
		for bad in [
			"",
			"hello",
			"hello@",
			"@example.com",
			"hello@example",
			"hello world@example.com",
			"hello@example.com ",
			"björk@example.com",
			"bjork@exämple.com",
			"bjork@example.cöm",
			"日本@example.com",
		] {
			assert!(! v.check(&bad.to_owned()), "Bug: {bad:?} should not be an email.");
		}
	}
}
