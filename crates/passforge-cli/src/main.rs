//! passforge CLI: generate passwords and passphrases with strength ratings.

use clap::Parser;

use passforge::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = passforge::logging::init(cli.verbose);
    passforge::run(cli)
}
