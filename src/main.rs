mod library;
mod sonar;

use std::{
    fs::File,
    io::{self, BufReader},
    num::NonZeroUsize,
    path::PathBuf,
};

use anyhow::Context;
use structopt::StructOpt;

#[derive(StructOpt)]
struct Args {
    /// Read measurements from this file, one integer per line; use - for stdin
    #[structopt(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// How many consecutive measurements each sliding sum covers
    #[structopt(short, long, default_value = "3")]
    width: NonZeroUsize,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::from_args();

    let measurements = if args.input.as_os_str() == "-" {
        sonar::load(io::stdin().lock()).context("failed to load measurements from stdin")?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open file: {:?}", args.input.display()))?;

        sonar::load(BufReader::new(file)).with_context(|| {
            format!(
                "failed to load measurements from {:?}",
                args.input.display()
            )
        })?
    };

    println!("Part 1: {}", sonar::part1(&measurements));
    println!("Part 2: {}", sonar::part2(&measurements, args.width.get()));

    Ok(())
}
