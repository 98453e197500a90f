/*!
# Plaid

This crate provides a small, declarative CLI argument parser/dispatcher
called [`Cli`]: register the commands, values, and options your program
understands, parse the raw arguments, then run the resulting tasks.

Unlike a streaming parser, `Cli` does the looping for you. Each recognized
key is matched to a handler, checked for the right number of values, and
queued up as a task; tasks then run in priority order. Typed values are
converted and validated along the way, and the results are handed back as
[`Outputs`].

If that sounds like too much _opinion_, there's always [clap](https://crates.io/crates/clap). Haha.



## Conventions

`Cli` keeps things simple:
* An argument beginning with `-` or `--` (and something else) starts a new key; the dashes are stripped, so `-help` and `--help` are the same;
* Everything else is a value belonging to the most recent key;
* Values are always separate arguments; `--key=val` is not split;
* An unregistered key whose every character _is_ registered is treated as a cluster of short flags, so `-abc` means `-a -b -c` (any values attached to the cluster are discarded);
* Unrecognized keys, discarded values, and surplus values are reported as [`Warning`]s, logged via [`tracing`](https://crates.io/crates/tracing), and otherwise ignored.

Missing values, values that won't convert, and values that fail validation
are errors.



## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `regex` | Enable the pattern-based validators [`Validator::regex`] and [`Validator::email`]. | Y |



## Example

```
use plaid::{Cli, Command, Validator};

let mut parsed = Cli::new()
    // Boolean switches.
    .with_option_alias("v", "verbose").unwrap()

    // Keys that take a (validated) value.
    .with_value("threads", Validator::range(1_u8, 33)).unwrap()
    .with_value_alias("m", "mode", Validator::one_of(["fast".to_owned(), "slow".to_owned()])).unwrap()

    // Arbitrary commands, optionally with a fixed arity and priority.
    .with_command("about", Command::new(|_| println!("Plaid!")).with_priority(10)).unwrap()

    // An error will only occur if a required value is missing.
    .parse(["app", "-v", "--threads", "8", "--mode", "fast"]).unwrap();

// Unrecognized keys and the like are not fatal, but you can check.
assert!(parsed.warnings().is_empty());

// Run the tasks! Value errors are returned here.
let out = parsed.run().unwrap();
assert!(out.flag("v"));
assert_eq!(out.get::<u8>("threads"), Some(&8));
assert_eq!(out.get_or("m", String::new()), "fast");
```
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

#![cfg_attr(docsrs, feature(doc_cfg))]



mod cli;
mod dispatch;
mod error;
mod registry;
mod token;
mod validate;
mod value;

pub use cli::Cli;
pub use dispatch::{
	Outputs,
	Parsed,
};
pub use error::{
	CliError,
	Warning,
};
pub use registry::{
	Arity,
	Command,
	DEFAULT_PRIORITY,
};
pub use validate::Validator;
pub use value::FromArg;
