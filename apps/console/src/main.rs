//! Binary entry point. All logic lives in the library crate so the command
//! handlers stay testable.

use clap::Parser;

fn main() {
    let cli = goldenhour_console::Cli::parse();

    if let Err(err) = goldenhour_console::run(cli) {
        eprintln!("Fatal: {err}");
        std::process::exit(1);
    }
}
