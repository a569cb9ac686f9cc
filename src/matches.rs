/*!
# Gingham: Match Results.
*/

use std::ops::Deref;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Match Results.
///
/// `Matches` holds the values extracted by a single
/// [`Args::match_exact`](crate::Args::match_exact) or
/// [`Args::match_pairs`](crate::Args::match_pairs) query, in the order they
/// were discovered in the argument sequence (which is argument order, not
/// flag order).
///
/// For exact matches the values are the matched flags themselves; for pair
/// matches they are the extracted values, delimiters stripped. Either way, an
/// empty set simply means nothing matched; that is an answer, not an error.
///
/// ## Examples
///
/// ```
/// use gingham::Args;
///
/// let mut args: Args = ["-q", "build"].into_iter().collect();
///
/// let quiet = args.match_exact(&["-q", "--quiet"]);
/// assert!(quiet.is_available());
/// assert_eq!(quiet.values(), ["-q"]);
///
/// let color = args.match_exact(&["--color"]);
/// assert!(! color.is_available());
/// ```
pub struct Matches {
	/// # Extracted Values.
	values: Vec<String>,
}

impl Deref for Matches {
	type Target = [String];
	#[inline]
	fn deref(&self) -> &Self::Target { &self.values }
}

impl IntoIterator for Matches {
	type Item = String;
	type IntoIter = std::vec::IntoIter<String>;
	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.values.into_iter() }
}

impl<'a> IntoIterator for &'a Matches {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;
	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.values.iter() }
}

impl Matches {
	#[must_use]
	#[inline]
	/// # Any Matches?
	///
	/// Returns `true` if the query matched anything at all. Handy when the
	/// flags in question are boolean switches and the values don't matter.
	pub fn is_available(&self) -> bool { ! self.values.is_empty() }

	#[must_use]
	#[inline]
	/// # Values.
	///
	/// Borrow the extracted values, in discovery order.
	pub fn values(&self) -> &[String] { &self.values }

	#[must_use]
	#[inline]
	/// # Match Count.
	pub fn len(&self) -> usize { self.values.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.values.is_empty() }

	#[must_use]
	#[inline]
	/// # First Value.
	///
	/// Borrow the first extracted value, if any. Most options only expect
	/// one, so this is usually the only one you'll care about.
	pub fn first(&self) -> Option<&str> {
		self.values.first().map(String::as_str)
	}

	#[must_use]
	#[inline]
	/// # Into Owned Vec.
	///
	/// Consume the struct and return the extracted values.
	pub fn take(self) -> Vec<String> { self.values }

	#[inline]
	/// # Record a Value.
	///
	/// Append one extracted value. Results are append-only; entries are never
	/// altered or removed once recorded.
	pub(crate) fn push(&mut self, value: String) { self.values.push(value); }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_matches() {
		let mut m = Matches::default();
		assert!(! m.is_available());
		assert!(m.is_empty());
		assert_eq!(m.len(), 0);
		assert_eq!(m.first(), None);

		m.push("one".to_owned());
		m.push(String::new());

		assert!(m.is_available());
		assert_eq!(m.len(), 2);
		assert_eq!(m.first(), Some("one"));
		assert_eq!(m.values(), ["one", ""]);
		assert_eq!(m.take(), ["one", ""]);
	}
}
