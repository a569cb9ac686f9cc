/*!
# Benchmark: `gingham::Args`
*/

use brunch::{
	Bench,
	benches,
};
use gingham::{
	Args,
	Delimiter,
};

/// # Seed Tokens.
fn argument() -> Args {
	[
		"/foo/bar",
		"/bar/baz",
		"out",
		"-x",
		"--key=val",
		"--quiet",
		"-k",
	].into_iter().collect()
}

benches!(
	Bench::new("gingham::args()")
		.run(gingham::args),

	Bench::spacer(),

	Bench::new("gingham::Args::match_exact(-q, --quiet)")
		.run_seeded_with(argument, |mut a| a.match_exact(&["-q", "--quiet"]).is_available()),

	Bench::new("gingham::Args::match_pairs(--key=val)")
		.run_seeded_with(argument, |mut a| {
			let delim = Delimiter::new(false, false, ["="]);
			a.match_pairs(&delim, &["-k", "--key"]).take()
		}),

	Bench::new("gingham::Args::unconsumed()")
		.run_seeded_with(argument, |a| a.unconsumed().len()),
);
