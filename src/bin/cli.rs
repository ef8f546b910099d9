// src/bin/cli.rs
use bootdev_bee::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
