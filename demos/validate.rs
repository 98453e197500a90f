/*!
# Plaid: Validate

This example registers a handful of validated keys, then parses and runs
whatever arguments are fed to it. Try something like:

cargo run --example validate -- -o -r 0.5 --oneof 3 -s hello@example.com -p a b
*/

use plaid::{
	Cli,
	CliError,
	Command,
	Validator,
};
use tracing_subscriber::EnvFilter;



fn main() {
	// Warnings are logged; show them by default.
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("warn"))
		)
		.with_target(false)
		.without_time()
		.init();

	if let Err(e) = _main() {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(e.exit_code());
	}
}

/// # Actual Main.
fn _main() -> Result<(), CliError> {
	let out = Cli::new()
		.with_value("s", Validator::email())?
		.with_value("r", Validator::range(0.0_f64, 1.0))?
		.with_value_alias("f", "oneof", Validator::one_of([1_i32, 3, 5]))?
		.with_option_alias("o", "option")?
		.with_command_alias("p", "print", Command::new(|args| {
			let args: Vec<String> = args.iter().map(|a| format!("{a:?}")).collect();
			println!("print: {}", args.join(" "));
		}))?
		.parse_env()?
		.run()?;

	println!("\x1b[2m-----\x1b[0m");
	println!("email:  {:?}", out.get_or("s", String::new()));
	println!("range:  {}", out.get_or("r", 0.0_f64));
	println!("oneof:  {}", out.get_or("f", 0_i32));
	println!("option: {}", out.flag("o"));
	println!("\x1b[2m-----\x1b[0m");

	Ok(())
}
