use std::io;

use clap::Parser;
use tangent_cli::{Args, Prompter, session};

fn main() -> eyre::Result<()> {
    env_logger::Builder::new()
        .parse_filters("warn")
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    session::run(&args, &mut prompter)
}
