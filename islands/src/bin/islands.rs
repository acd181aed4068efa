use std::env;
use std::fs;

use miette::*;

use islands::process;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| miette!("please provide a path to a map file, e.g. 'islands.txt'"))?;
    let input = fs::read_to_string(&path).map_err(|e| miette!("failed to read {path}: {e}"))?;

    let count = process(&input)?;
    println!("{count}");
    Ok(())
}
