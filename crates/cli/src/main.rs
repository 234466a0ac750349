//! `shelfwise` entry point.

use clap::Parser;

use shelfwise_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    shelfwise_observability::init(cli.log_format);

    let stdout = std::io::stdout();
    shelfwise_cli::run(&cli, &mut stdout.lock())
}
