use anyhow::{bail, Result};
use life_bench::benchmark::{self, BenchConfig};
use std::time::Instant;

fn main() -> Result<()> {
    let config = BenchConfig::from_args(std::env::args().skip(1))?;

    let timer = Instant::now();
    let report = benchmark::run(&config);
    println!("{}", report);
    println!("Total time: {:?}", timer.elapsed());

    if !report.hashes_match() {
        bail!("Strategies diverged");
    }
    Ok(())
}
