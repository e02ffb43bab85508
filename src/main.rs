mod cli;
mod draw;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let args = cli::Args::parse();
    log::debug!("{args:?}");

    let stdout = std::io::stdout();
    cli::run(&args, &mut stdout.lock())
}
