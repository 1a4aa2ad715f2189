//! Terminal frontend for the Quarterturn cube simulator.
//!
//! Drives the simulation headlessly: applies a scramble and/or a twist
//! sequence through the full animation pipeline, then prints the
//! resulting sticker layout as a colored ASCII net.

use clap::Parser;

mod cli;
mod net;
mod prefs;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
