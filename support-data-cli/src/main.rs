use clap::Parser;
use slog::error;

mod args;
mod commands;
mod config;
mod host;
mod logging;

fn main() {
    let cli = args::Cli::parse();
    let log = logging::init(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::run(cli, &log, &mut stdout) {
        error!(log, "command failed"; "error" => format!("{e:#}"));
        std::process::exit(1);
    }
}
