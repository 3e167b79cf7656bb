use anyhow::Result;
use clap::Parser;

mod cli;
mod logging;
mod path_guard;
mod replace_cmd;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose);

    replace_cmd::run_replace(cli)
}
