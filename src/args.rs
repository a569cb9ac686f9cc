/*!
# Gingham: Arguments.
*/

use crate::{
	Delimiter,
	Matches,
};
use std::ops::Deref;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Consume-As-You-Go Arguments.
///
/// `Args` owns an immutable, ordered copy of the raw argument tokens plus one
/// mutable "consumed" marker per token. Tokens are fixed at construction —
/// nothing is ever added, removed, or reordered — and each marker flips at
/// most once, when some query claims its token.
///
/// Queries come in two flavors: [`Args::match_exact`] for literal flag
/// lookups, and [`Args::match_pairs`] for flag/value extraction governed by a
/// [`Delimiter`]. Each query scans only what earlier queries left behind and
/// returns its findings as a [`Matches`]. Whatever remains at the end can be
/// retrieved with [`Args::unconsumed`].
///
/// ## Examples
///
/// ```
/// use gingham::{Args, Delimiter};
///
/// let mut args: Args = ["build", "-q", "--jobs", "4"].into_iter().collect();
///
/// let eq = Delimiter::new(true, false, ["="]);
/// let jobs = args.match_pairs(&eq, &["-j", "--jobs"]);
/// assert_eq!(jobs.first(), Some("4"));
///
/// let quiet = args.match_exact(&["-q", "--quiet"]).is_available();
/// assert!(quiet);
///
/// assert_eq!(args.unconsumed(), ["build"]);
/// ```
///
/// ## Caveats
///
/// Scanning halts at the first previously-consumed token it encounters
/// rather than skipping over it, so a query issued after an earlier,
/// unrelated query has claimed a low-index token may see a truncated view of
/// the sequence. (See the note on [`Args::match_exact`].) Issue broad,
/// low-index-claiming queries last, or build a fresh `Args` per pass if you
/// need full coverage.
pub struct Args {
	/// # Raw Tokens.
	raw: Vec<String>,

	/// # Consumed Markers.
	///
	/// Parallel to `raw`; `true` once some query has claimed the token at the
	/// same index. Never flips back.
	consumed: Vec<bool>,
}

impl Deref for Args {
	type Target = [String];
	#[inline]
	fn deref(&self) -> &Self::Target { &self.raw }
}

impl<S: Into<String>> FromIterator<S> for Args {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		let raw: Vec<String> = src.into_iter().map(Into::into).collect();
		let consumed = vec![false; raw.len()];
		Self { raw, consumed }
	}
}

/// ## Queries.
impl Args {
	/// # Match Flags Exactly.
	///
	/// Compare each not-yet-consumed token against `flags` by literal text
	/// equality, in caller order. A hit records the token's full text,
	/// marks the token consumed, and moves on to the next token; one token
	/// never matches twice, even if it equals several of the flags.
	///
	/// An empty flag slice returns an empty [`Matches`] without scanning.
	///
	/// ## Examples
	///
	/// ```
	/// use gingham::Args;
	///
	/// let mut args: Args = ["-v", "in.txt", "--verbose"].into_iter().collect();
	/// let verbose = args.match_exact(&["-v", "--verbose"]);
	/// assert_eq!(verbose.values(), ["-v", "--verbose"]);
	/// assert_eq!(args.unconsumed(), ["in.txt"]);
	/// ```
	///
	/// ## Caveats
	///
	/// The scan runs from index zero and stops dead at the first token some
	/// *earlier* query already consumed; it does not skip over it. Back to
	/// back queries against untouched regions behave as you'd expect, but a
	/// query whose predecessor claimed token zero will find nothing at all:
	///
	/// ```
	/// use gingham::Args;
	///
	/// let mut args: Args = ["-a", "-b"].into_iter().collect();
	/// assert!(args.match_exact(&["-a"]).is_available());
	///
	/// // -b is still there, but sits behind the consumed -a.
	/// assert!(! args.match_exact(&["-b"]).is_available());
	/// assert_eq!(args.unconsumed(), ["-b"]);
	/// ```
	pub fn match_exact(&mut self, flags: &[&str]) -> Matches {
		let mut out = Matches::default();
		if ! flags.is_empty() {
			for idx in 0..self.raw.len() {
				// Stop at the first token a previous query claimed.
				if self.consumed[idx] { break; }

				let value = self.raw[idx].as_str();
				if flags.iter().any(|&flag| value == flag) {
					out.push(value.to_owned());
					self.consumed[idx] = true;
				}
			}
		}
		out
	}

	/// # Match Flag/Value Pairs.
	///
	/// Extract the values paired with `flags`, as described by `delimiter`.
	/// For each not-yet-consumed token (same early-stop scan as
	/// [`Args::match_exact`]), each flag is tried in caller order; the first
	/// flag to produce any kind of match — exact, attached, or blank — wins
	/// the token, and the extracted value is recorded with the flag and
	/// delimiter stripped.
	///
	/// A token that merely *equals* a flag (nothing attached) is handled
	/// according to the delimiter's blank policy: with
	/// [`Delimiter::is_blank`] set, the next token is taken whole as the
	/// value and both tokens are consumed (falling back to an empty value if
	/// the sequence ends there); without it, the value is simply empty.
	///
	/// An empty flag slice returns an empty [`Matches`] without scanning.
	///
	/// ## Examples
	///
	/// ```
	/// use gingham::{Args, Delimiter};
	///
	/// let mut args: Args = ["--one=1", "--two", "2"].into_iter().collect();
	///
	/// let eq = Delimiter::new(true, false, ["="]);
	/// let nums = args.match_pairs(&eq, &["--one", "--two"]);
	/// assert_eq!(nums.values(), ["1", "2"]);
	/// assert!(args.unconsumed().is_empty());
	/// ```
	pub fn match_pairs(&mut self, delimiter: &Delimiter, flags: &[&str]) -> Matches {
		let mut out = Matches::default();
		if ! flags.is_empty() {
			if delimiter.is_blank() {
				self.match_pairs_blank(delimiter, flags, &mut out);
			}
			else {
				self.match_pairs_attached(delimiter, flags, &mut out);
			}
		}
		out
	}

	/// # Pair Match (Attached Values Only).
	///
	/// The value, if any, shares the flag's own token: either nothing at all
	/// (empty value) or whatever follows the first matching attachment token.
	fn match_pairs_attached(&mut self, delimiter: &Delimiter, flags: &[&str], out: &mut Matches) {
		for idx in 0..self.raw.len() {
			if self.consumed[idx] { break; }

			for &flag in flags {
				if let Some(remainder) = self.raw[idx].strip_prefix(flag) {
					// The token is the flag, nothing more.
					if remainder.is_empty() {
						self.consumed[idx] = true;
						out.push(String::new());
						break;
					}

					// Attached value, if the delimiter agrees. A miss here
					// only rejects this flag; another might still fit.
					if let Some(skip) = delimiter.match_len(remainder) {
						self.consumed[idx] = true;
						out.push(remainder[skip..].to_owned());
						break;
					}
				}
			}
		}
	}

	/// # Pair Match (Blank Separator).
	///
	/// Same as [`Args::match_pairs_attached`], except a token exactly equal
	/// to its flag takes the *next* token whole as the value, consuming both.
	fn match_pairs_blank(&mut self, delimiter: &Delimiter, flags: &[&str], out: &mut Matches) {
		let mut idx = 0;
		while idx < self.raw.len() && ! self.consumed[idx] {
			for &flag in flags {
				if let Some(remainder) = self.raw[idx].strip_prefix(flag) {
					if remainder.is_empty() {
						self.consumed[idx] = true;
						if idx + 1 < self.raw.len() {
							self.consumed[idx + 1] = true;
							out.push(self.raw[idx + 1].clone());
							idx += 1; // The value is spoken for; skip it.
						}
						else {
							// Dangling flag at the end of the line; record
							// an empty value rather than complain.
							out.push(String::new());
						}
						break;
					}

					if let Some(skip) = delimiter.match_len(remainder) {
						self.consumed[idx] = true;
						out.push(remainder[skip..].to_owned());
						break;
					}
				}
			}
			idx += 1;
		}
	}

	#[must_use]
	/// # Unconsumed Tokens.
	///
	/// Return the tokens no query has claimed yet, in their original
	/// relative order. Recomputed fresh on every call; anything a later
	/// query consumes will be missing from the next answer.
	///
	/// ## Examples
	///
	/// ```
	/// use gingham::Args;
	///
	/// let mut args: Args = ["-q", "build"].into_iter().collect();
	/// args.match_exact(&["-q"]);
	/// assert_eq!(args.unconsumed(), ["build"]);
	/// ```
	pub fn unconsumed(&self) -> Vec<&str> {
		self.raw.iter()
			.zip(self.consumed.iter())
			.filter_map(|(value, &consumed)|
				if consumed { None }
				else { Some(value.as_str()) }
			)
			.collect()
	}
}

/// ## Miscellany.
impl Args {
	#[must_use]
	#[inline]
	/// # Token Count.
	///
	/// The total number of tokens, consumed or not.
	pub fn len(&self) -> usize { self.raw.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	///
	/// `true` if the set was constructed with zero tokens. An empty set is a
	/// perfectly functional state; every query just comes back empty.
	pub fn is_empty(&self) -> bool { self.raw.is_empty() }
}



#[must_use]
/// # Environment Arguments.
///
/// Return an [`Args`] seeded from [`std::env::args_os`], skipping the first
/// (program path) entry. Conversion is lossy rather than panicking; invalid
/// UTF-8 sequences become replacement characters.
///
/// If you'd rather supply the tokens yourself — for testing, or because they
/// came from somewhere other than the command line — collect any iterator of
/// string-like values instead.
pub fn args() -> Args {
	std::env::args_os()
		.skip(1)
		.map(|raw| raw.to_string_lossy().into_owned())
		.collect()
}
