//! Size sweep that times a subset generator.
//!
//! The driver writes a banner, then runs the generator on inputs `0..i` for
//! `i` in `0..max`, printing one `size,seconds` line per step. As soon as a
//! step takes longer than the threshold the sweep stops.

use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::BenchError;
use crate::format::general;

/// Exclusive upper bound of the default sweep.
pub const DEFAULT_MAX: usize = 100;

/// Default early-exit threshold in seconds.
pub const DEFAULT_THRESHOLD_SECS: f64 = 3.0;

/// Banner printed before a single-strategy sweep.
pub const BANNER: &str = "Rust subset performance test";

/// Sweep parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchConfig {
    /// Sizes `0..max` are measured.
    pub max: usize,
    /// Stop after the first step slower than this many seconds.
    pub threshold: f64,
    /// Untimed run on an input of this size before the sweep.
    pub warmup: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            threshold: DEFAULT_THRESHOLD_SECS,
            warmup: None,
        }
    }
}

impl BenchConfig {
    /// Reject thresholds that can never be compared sensibly.
    pub fn validate(&self) -> Result<(), BenchError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(BenchError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// One measured step of the sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchRecord {
    pub size: usize,
    pub elapsed: Duration,
}

impl fmt::Display for BenchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.size, general(self.elapsed.as_secs_f64()))
    }
}

/// How a sweep ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Every size below `max` was measured.
    Exhausted { steps: usize },
    /// `record` exceeded the threshold; no larger size was attempted.
    ThresholdExceeded { record: BenchRecord },
}

/// Subset collection produced by a generator under test.
pub type SubsetList = Vec<Vec<usize>>;

/// Run `generator` once and return how long the call took together with the
/// number of subsets it produced.
///
/// Only the call itself is timed. The result is counted and dropped after the
/// clock stops.
pub fn time_once<F>(generator: &mut F, input: &[usize]) -> (Duration, usize)
where
    F: FnMut(&[usize]) -> SubsetList,
{
    let start = Instant::now();
    let result = black_box(generator(black_box(input)));
    let elapsed = start.elapsed();
    (elapsed, result.len())
}

/// Sweep input sizes and write a report to `out`.
///
/// Writes `banner`, then one [`BenchRecord`] line per size. Returns
/// [`SweepOutcome::ThresholdExceeded`] as soon as a step is slower than
/// `config.threshold`; the offending record has already been written.
///
/// The input grows by one element per step, so memory follows the sizes
/// actually reached rather than `config.max`.
///
/// # Errors
/// [`BenchError::InvalidThreshold`] for a bad config, [`BenchError::Io`] if
/// writing to `out` fails.
pub fn run_sweep<F, W>(
    config: &BenchConfig,
    banner: &str,
    mut generator: F,
    out: &mut W,
) -> Result<SweepOutcome, BenchError>
where
    F: FnMut(&[usize]) -> SubsetList,
    W: Write,
{
    config.validate()?;
    tracing::debug!(
        max = config.max,
        threshold = config.threshold,
        warmup = ?config.warmup,
        "starting sweep"
    );

    writeln!(out, "{}", banner)?;
    out.flush()?;

    if let Some(size) = config.warmup {
        let warm: Vec<usize> = (0..size.min(config.max)).collect();
        let (elapsed, count) = time_once(&mut generator, &warm);
        tracing::debug!(
            size = warm.len(),
            subsets = count,
            secs = elapsed.as_secs_f64(),
            "warm-up run discarded"
        );
    }

    let mut input: Vec<usize> = Vec::new();
    for size in 0..config.max {
        if size > 0 {
            input.push(size - 1);
        }
        let (elapsed, count) = time_once(&mut generator, &input);
        let record = BenchRecord { size, elapsed };

        writeln!(out, "{}", record)?;
        out.flush()?;
        tracing::debug!(size, subsets = count, secs = elapsed.as_secs_f64(), "step complete");

        if elapsed.as_secs_f64() > config.threshold {
            tracing::info!(
                size,
                secs = elapsed.as_secs_f64(),
                threshold = config.threshold,
                "threshold exceeded, stopping sweep"
            );
            return Ok(SweepOutcome::ThresholdExceeded { record });
        }
    }

    Ok(SweepOutcome::Exhausted { steps: config.max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subsets::subsets;

    fn output_lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.max, 100);
        assert_eq!(config.threshold, 3.0);
        assert_eq!(config.warmup, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        for threshold in [-1.0, f64::NAN, f64::INFINITY] {
            let config = BenchConfig {
                threshold,
                ..BenchConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(BenchError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_invalid_threshold_writes_nothing() {
        let config = BenchConfig {
            threshold: -0.5,
            ..BenchConfig::default()
        };
        let mut buf = Vec::new();
        let res = run_sweep(&config, BANNER, |i: &[usize]| subsets(i), &mut buf);
        assert!(res.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_record_display() {
        let record = BenchRecord {
            size: 7,
            elapsed: Duration::from_micros(15),
        };
        assert_eq!(record.to_string(), "7,1.5e-05");

        let record = BenchRecord {
            size: 22,
            elapsed: Duration::from_millis(3250),
        };
        assert_eq!(record.to_string(), "22,3.25");
    }

    #[test]
    fn test_sweep_passes_prefix_inputs() {
        let config = BenchConfig {
            max: 4,
            ..BenchConfig::default()
        };
        let mut seen = Vec::new();
        let mut buf = Vec::new();
        let outcome = run_sweep(
            &config,
            BANNER,
            |input: &[usize]| {
                seen.push(input.to_vec());
                subsets(input)
            },
            &mut buf,
        )
        .unwrap();

        assert_eq!(outcome, SweepOutcome::Exhausted { steps: 4 });
        assert_eq!(seen, vec![vec![], vec![0], vec![0, 1], vec![0, 1, 2]]);
    }

    #[test]
    fn test_zero_threshold_stops_after_first_step() {
        let config = BenchConfig {
            max: 10,
            threshold: 0.0,
            warmup: None,
        };
        let mut buf = Vec::new();
        let outcome = run_sweep(
            &config,
            BANNER,
            |input: &[usize]| {
                std::thread::sleep(Duration::from_millis(2));
                subsets(input)
            },
            &mut buf,
        )
        .unwrap();

        match outcome {
            SweepOutcome::ThresholdExceeded { record } => assert_eq!(record.size, 0),
            other => panic!("unexpected outcome: {:?}", other),
        }
        let lines = output_lines(&buf);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], BANNER);
        assert!(lines[1].starts_with("0,"));
    }

    #[test]
    fn test_warmup_is_not_reported() {
        let config = BenchConfig {
            max: 3,
            threshold: 3.0,
            warmup: Some(10),
        };
        let mut calls = Vec::new();
        let mut buf = Vec::new();
        run_sweep(
            &config,
            BANNER,
            |input: &[usize]| {
                calls.push(input.len());
                subsets(input)
            },
            &mut buf,
        )
        .unwrap();

        // warm-up size is clamped to max
        assert_eq!(calls, vec![3, 0, 1, 2]);
        assert_eq!(output_lines(&buf).len(), 1 + 3);
    }

    #[test]
    fn test_huge_max_stops_at_threshold_without_preallocating() {
        let config = BenchConfig {
            max: usize::MAX,
            threshold: 0.0,
            warmup: None,
        };
        let mut buf = Vec::new();
        let outcome = run_sweep(
            &config,
            BANNER,
            |input: &[usize]| {
                std::thread::sleep(Duration::from_millis(1));
                subsets(input)
            },
            &mut buf,
        )
        .unwrap();

        assert!(matches!(outcome, SweepOutcome::ThresholdExceeded { record } if record.size == 0));
        let lines = output_lines(&buf);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], BANNER);
        assert!(lines[1].starts_with("0,"));
    }

    #[test]
    fn test_time_once_counts_subsets() {
        let mut generator = |input: &[usize]| subsets(input);
        let (_, count) = time_once(&mut generator, &[0, 1, 2]);
        assert_eq!(count, 8);
    }

    #[test]
    fn test_empty_sweep() {
        let config = BenchConfig {
            max: 0,
            ..BenchConfig::default()
        };
        let mut buf = Vec::new();
        let outcome = run_sweep(&config, "banner", |i: &[usize]| subsets(i), &mut buf).unwrap();
        assert_eq!(outcome, SweepOutcome::Exhausted { steps: 0 });
        assert_eq!(output_lines(&buf), vec!["banner".to_string()]);
    }
}
