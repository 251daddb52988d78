//! Timing of the two ways to advance a field: one generation per call
//! or all generations in a single call.

use crate::{
    patterns::{Pattern, GLIDER},
    utils::{state_hash, NiceInt, StateHash},
    LifeEngine,
};
use anyhow::{anyhow, bail, Context, Result};
use std::{
    fmt,
    time::{Duration, Instant},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// `step()` called once per generation.
    Stepwise,
    /// A single `multi_step()` call.
    Batched,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stepwise, Strategy::Batched];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stepwise => "stepwise",
            Self::Batched => "batched",
        }
    }

    /// Advances `engine` by `generations` and returns the time it took.
    pub fn advance(&self, engine: &mut LifeEngine, generations: u64) -> Duration {
        let timer = Instant::now();
        match self {
            Self::Stepwise => {
                for _ in 0..generations {
                    engine.step();
                }
            }
            Self::Batched => engine.multi_step(generations),
        }
        timer.elapsed()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub size: usize,
    pub iterations: u64,
    pub pattern: Pattern,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 16,
            iterations: 1000,
            pattern: GLIDER,
        }
    }
}

impl BenchConfig {
    pub const USAGE: &'static str = "usage: bench [--size N] [--iterations N] [--pattern NAME]";

    /// Parses `--size`, `--iterations` and `--pattern`; the rest keeps its defaults.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut result = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| anyhow!("Missing value for {}\n{}", flag, Self::USAGE))?;
            match flag.as_str() {
                "--size" => {
                    result.size = value
                        .parse()
                        .with_context(|| format!("Bad field size {:?}", value))?;
                    if result.size == 0 {
                        bail!("Field size must be positive");
                    }
                }
                "--iterations" => {
                    result.iterations = value
                        .parse()
                        .with_context(|| format!("Bad iteration count {:?}", value))?;
                }
                "--pattern" => result.pattern = Pattern::by_name(&value)?,
                _ => bail!("Unknown argument {:?}\n{}", flag, Self::USAGE),
            }
        }
        Ok(result)
    }

    fn engine(&self) -> LifeEngine {
        self.pattern.engine(self.size)
    }
}

/// Outcome of advancing one field with one strategy.
#[derive(Clone, Debug)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub generation: u64,
    pub hash: StateHash,
}

impl StrategyRun {
    fn measure(config: &BenchConfig, strategy: Strategy) -> Self {
        let mut engine = config.engine();
        let elapsed = strategy.advance(&mut engine, config.iterations);
        Self {
            strategy,
            elapsed,
            generation: engine.generation(),
            hash: state_hash(&engine.render()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub runs: Vec<StrategyRun>,
}

impl BenchReport {
    /// Whether every strategy reached the same field after the same number of generations.
    pub fn hashes_match(&self) -> bool {
        self.runs
            .windows(2)
            .all(|w| w[0].hash == w[1].hash && w[0].generation == w[1].generation)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} iterations of {} on a {}x{} field:",
            NiceInt::from(self.config.iterations),
            self.config.pattern.name,
            self.config.size,
            self.config.size
        )?;
        for run in &self.runs {
            writeln!(
                f,
                "  {:<8} {:>10.3} ms  generation {}  hash {}",
                run.strategy.name(),
                run.elapsed.as_secs_f64() * 1e3,
                NiceInt::from(run.generation),
                run.hash
            )?;
        }
        write!(f, "hash of last state is the same: {}", self.hashes_match())
    }
}

/// Runs every strategy on its own field, one after another.
pub fn run(config: &BenchConfig) -> BenchReport {
    let runs: Vec<StrategyRun> = Strategy::ALL
        .iter()
        .map(|&strategy| StrategyRun::measure(config, strategy))
        .collect();
    BenchReport {
        config: config.clone(),
        runs,
    }
}

/// Same as [`run`], but every strategy gets its own thread.
pub fn run_parallel(config: &BenchConfig) -> BenchReport {
    let runs: Vec<StrategyRun> = std::thread::scope(|s| {
        let handles = Strategy::ALL
            .map(|strategy| s.spawn(move || StrategyRun::measure(config, strategy)));
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });
    BenchReport {
        config: config.clone(),
        runs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BLINKER;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_strategies_agree() {
        let config = BenchConfig {
            size: 16,
            iterations: 100,
            pattern: GLIDER,
        };
        let report = run(&config);
        assert_eq!(report.runs.len(), 2);
        assert!(report.hashes_match());
        for r in &report.runs {
            assert_eq!(r.generation, 100);
        }
        // the glider is back home after 4 * 16 generations, then 36 more
        let mut expected = GLIDER.engine(16);
        expected.multi_step(36);
        assert_eq!(report.runs[0].hash, state_hash(&expected.render()));
    }

    #[test]
    fn test_parallel() {
        let config = BenchConfig::default();
        let sequential = run(&config);
        let parallel = run_parallel(&config);
        assert!(parallel.hashes_match());
        assert_eq!(sequential.runs[0].hash, parallel.runs[1].hash);
        assert_eq!(parallel.runs[0].strategy, Strategy::Stepwise);
        assert_eq!(parallel.runs[1].strategy, Strategy::Batched);
    }

    #[test]
    fn test_mismatch_is_reported() {
        let mut report = run(&BenchConfig::default());
        report.runs[1].hash = StateHash(report.runs[1].hash.0 ^ 1);
        assert!(!report.hashes_match());
        assert!(report.to_string().ends_with("is the same: false"));
    }

    #[test]
    fn test_report_text() {
        let report = run(&BenchConfig::default());
        let text = report.to_string();
        assert!(text.starts_with("1'000 iterations of glider on a 16x16 field:"));
        assert!(text.contains("stepwise"));
        assert!(text.contains("batched"));
        assert!(text.ends_with("is the same: true"));
    }

    #[test]
    fn test_from_args() {
        assert_eq!(BenchConfig::from_args(vec![]).unwrap(), BenchConfig::default());
        let config =
            BenchConfig::from_args(args("--size 32 --pattern blinker --iterations 5")).unwrap();
        assert_eq!(config.size, 32);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.pattern, BLINKER);

        assert!(BenchConfig::from_args(args("--size 0")).is_err());
        assert!(BenchConfig::from_args(args("--size")).is_err());
        assert!(BenchConfig::from_args(args("--iterations -3")).is_err());
        assert!(BenchConfig::from_args(args("--pattern nothing")).is_err());
        assert!(BenchConfig::from_args(args("--speed 3")).is_err());
    }
}
