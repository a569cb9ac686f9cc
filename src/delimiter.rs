/*!
# Gingham: Delimiters.
*/



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Flag/Value Delimiter.
///
/// A `Delimiter` tells [`Args::match_pairs`](crate::Args::match_pairs) how to
/// dig a value out of a token once a flag prefix has been recognized. It
/// holds a set of attachment tokens — the separators allowed between flag and
/// value when both share one argument, e.g. `=` in `--name=value` — and two
/// policy switches:
///
/// * `blank`: the value may be the *next* whole argument (`--name value`);
/// * `empty`: a flag prefix trailed by nothing at all still counts, yielding
///   an empty value (`-n` → `""`);
///
/// The token set may be empty; combined with `blank` that gives the classic
/// space-separated style, and combined with `empty` a bare presence check.
///
/// ## Examples
///
/// ```
/// use gingham::{Args, Delimiter};
///
/// let mut args: Args = ["-xJ", "--name=Ada"].into_iter().collect();
///
/// let eq = Delimiter::new(false, false, ["="]);
/// assert_eq!(args.match_pairs(&eq, &["--name"]).first(), Some("Ada"));
///
/// // Glued short options want a delimiter-less match, so lean on `empty`.
/// let glued = Delimiter::new(false, true, None::<&str>);
/// assert_eq!(args.match_pairs(&glued, &["-x"]).first(), Some("J"));
/// ```
///
/// ## Caveats
///
/// Tokens are tried in the order given and the first prefix hit wins; they
/// are *not* sorted by length. If `:` is registered before `:=`, the shorter
/// token will shadow the longer one and `--key:=val` will come back as
/// `=val`. Register longer tokens first if they overlap.
pub struct Delimiter {
	/// # Attachment Tokens.
	tokens: Vec<String>,

	/// # Allow a Blank (Next-Token) Separator?
	blank: bool,

	/// # Match an Empty Remainder?
	empty: bool,
}

impl Delimiter {
	#[must_use]
	/// # New Delimiter.
	///
	/// Build a delimiter from its two policy switches and any number of
	/// attachment tokens. Tokens keep their registration order — see the
	/// shadowing caveat on [`Delimiter`] — and are not de-duplicated.
	///
	/// ## Examples
	///
	/// ```
	/// use gingham::Delimiter;
	///
	/// // --key=val or --key:val
	/// let attached = Delimiter::new(false, false, ["=", ":"]);
	///
	/// // --key val
	/// let spaced = Delimiter::new(true, false, None::<&str>);
	/// ```
	pub fn new<I, T>(blank: bool, empty: bool, tokens: I) -> Self
	where
		I: IntoIterator<Item=T>,
		T: Into<String>,
	{
		Self {
			tokens: tokens.into_iter().map(Into::into).collect(),
			blank,
			empty,
		}
	}

	#[must_use]
	#[inline]
	/// # Blank Separator Allowed?
	///
	/// Returns `true` if a flag may take the next whole argument as its
	/// value.
	pub const fn is_blank(&self) -> bool { self.blank }

	#[must_use]
	#[inline]
	/// # Empty Remainder Allowed?
	///
	/// Returns `true` if a flag prefix followed by nothing (no attachment
	/// token, no text) still counts as a match with an empty value.
	pub const fn matches_empty(&self) -> bool { self.empty }

	#[must_use]
	#[inline]
	/// # Attachment Tokens.
	///
	/// Borrow the token set, in registration order.
	pub fn tokens(&self) -> &[String] { &self.tokens }

	#[must_use]
	/// # Match Length.
	///
	/// Given the remainder of an argument — the text after a flag prefix —
	/// return the byte length of the first attachment token it starts with,
	/// or `Some(0)` if no token fits but the `empty` policy is set. `None`
	/// means the remainder is not attached via this delimiter at all and the
	/// candidate should be rejected.
	///
	/// ## Examples
	///
	/// ```
	/// use gingham::Delimiter;
	///
	/// let delim = Delimiter::new(false, false, ["="]);
	/// assert_eq!(delim.match_len("=val"), Some(1));
	/// assert_eq!(delim.match_len("val"), None);
	///
	/// let loose = Delimiter::new(false, true, ["="]);
	/// assert_eq!(loose.match_len("val"), Some(0));
	/// ```
	pub fn match_len(&self, remainder: &str) -> Option<usize> {
		for token in &self.tokens {
			if remainder.starts_with(token.as_str()) {
				return Some(token.len());
			}
		}

		if self.empty { Some(0) }
		else { None }
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_match_len() {
		let delim = Delimiter::new(false, false, ["=", ":"]);
		assert_eq!(delim.match_len("=val"), Some(1));
		assert_eq!(delim.match_len(":val"), Some(1));
		assert_eq!(delim.match_len("val"), None);
		assert_eq!(delim.match_len(""), None);
	}

	#[test]
	fn t_match_len_empty_policy() {
		let delim = Delimiter::new(false, true, ["="]);
		assert_eq!(delim.match_len("=val"), Some(1));
		assert_eq!(delim.match_len("val"), Some(0));
		assert_eq!(delim.match_len(""), Some(0));

		// No tokens at all: the policy alone decides.
		let none = Delimiter::new(false, false, None::<&str>);
		assert_eq!(none.match_len("anything"), None);

		let bare = Delimiter::new(false, true, None::<&str>);
		assert_eq!(bare.match_len("anything"), Some(0));
	}

	#[test]
	fn t_match_len_order() {
		// Registration order wins, so the short token shadows the long one.
		let short_first = Delimiter::new(false, false, [":", ":="]);
		assert_eq!(short_first.match_len(":=val"), Some(1));

		let long_first = Delimiter::new(false, false, [":=", ":"]);
		assert_eq!(long_first.match_len(":=val"), Some(2));
		assert_eq!(long_first.match_len(":val"), Some(1));
	}

	#[test]
	fn t_accessors() {
		let delim = Delimiter::new(true, false, ["="]);
		assert!(delim.is_blank());
		assert!(! delim.matches_empty());
		assert_eq!(delim.tokens(), ["="]);
	}
}
