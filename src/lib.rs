/*!
# Gingham

This crate provides a small, dependency-free CLI argument matcher called
[`Args`], occupying the middle ground between the standard library's barebones
[`std::env::args_os`] helper and full-service crates like
[clap](https://crates.io/crates/clap).

Unlike most parsers, [`Args`] holds no grammar. It simply collects the raw
tokens up front and lets you fish flags out of them — one query at a time, in
whatever order your program cares about — marking each token "consumed" as it
goes. Whatever is left over at the end is yours to interpret (or reject)
however you see fit.

Three kinds of query are supported:

* [`Args::match_exact`]: exact flag lookup, e.g. `--verbose`;
* [`Args::match_pairs`] with an attached [`Delimiter`]: values glued to their
  flags, e.g. `--name=value` or `-nvalue`;
* [`Args::match_pairs`] with a blank [`Delimiter`]: values trailing their
  flags as separate tokens, e.g. `--name value`;

Every query returns a [`Matches`] holding the extracted values in the order
they were discovered.



## Example

```
use gingham::{Args, Delimiter};

// Pull tokens from the environment with `gingham::args()`, or supply your
// own by collecting anything string-like.
let mut args: Args = ["build", "--jobs=4", "--verbose"].into_iter().collect();

// Boolean switches first.
let verbose = args.match_exact(&["-v", "--verbose"]).is_available();
assert!(verbose);

// Then the key/value pairs.
let eq = Delimiter::new(false, false, ["="]);
let jobs = args.match_pairs(&eq, &["-j", "--jobs"]);
assert_eq!(jobs.first(), Some("4"));

// Whatever survived the queries is a trailing argument.
assert_eq!(args.unconsumed(), ["build"]);
```



## Caveats

Queries are stateful and order-sensitive: a token claimed by one query is
invisible to the next, and scanning halts early at the first
previously-consumed token it meets. Issue your queries in the order you want
them to win; don't expect a repeated query to return anything twice.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod args;
mod delimiter;
mod matches;

pub use args::{
	args,
	Args,
};
pub use delimiter::Delimiter;
pub use matches::Matches;
