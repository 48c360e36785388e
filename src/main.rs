mod cmd;
mod json_schema;

use clap::Parser;
use cmd::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cmd::run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
