/*!
# Benchmark: `plaid::Cli`
*/

use brunch::{
	Bench,
	benches,
};
use plaid::{
	Cli,
	Command,
	Validator,
};

/// # Builder.
fn cli() -> Cli {
	Cli::new()
		.with_options(["a", "b", "c"]).unwrap()
		.with_value("r", Validator::range(0.0_f64, 1.0)).unwrap()
		.with_value_alias("f", "oneof", Validator::one_of([1_i32, 3, 5])).unwrap()
		.with_command("p", Command::new(|_| {}).with_priority(10)).unwrap()
}

/// # Arguments.
const ARGS: [&str; 10] = [
	"prog", "-abc", "-r", "0.5", "--oneof", "3", "-p", "one", "two", "-z",
];

benches!(
	Bench::new("plaid::Cli::new()")
		.run(cli),

	Bench::spacer(),

	Bench::new("plaid::Cli::parse()")
		.run_seeded_with(cli, |c| c.parse(ARGS)),

	Bench::new("plaid::Parsed::run()")
		.run_seeded_with(
			|| cli().parse(ARGS).unwrap(),
			|mut p| p.run(),
		),
);
