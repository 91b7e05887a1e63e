//! Randomized dataset generation: sample coordinate points, evaluate the
//! compiled formula against each, and emit a formatted dataset.

use std::io::Write;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{error::GeneratorError, formula::compiled::CompiledExpression};

/// Default lower bound of the sampling interval.
pub const DEFAULT_MIN: f64 = -210.0;
/// Default upper bound of the sampling interval.
pub const DEFAULT_MAX: f64 = 210.0;

/// Configuration for one generation run.
///
/// Constructed once at startup (the CLI maps its arguments onto this
/// struct) and passed explicitly into [`sample`] or [`generate`]; the
/// generator reads no ambient or global state.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of coordinates per point.
    pub dimension: usize,
    /// Number of points to sample.
    pub count:     usize,
    /// Lower bound of the sampling interval (inclusive).
    pub min:       f64,
    /// Upper bound of the sampling interval (inclusive).
    pub max:       f64,
    /// Seed for reproducible sampling; seeded from entropy when `None`.
    pub seed:      Option<u64>,
}

impl GeneratorConfig {
    /// Creates a configuration with the default bounds and an entropy seed.
    #[must_use]
    pub const fn new(dimension: usize, count: usize) -> Self {
        Self { dimension,
               count,
               min: DEFAULT_MIN,
               max: DEFAULT_MAX,
               seed: None }
    }
}

/// A generated dataset: the declared dimension plus one
/// `(coordinates, value)` row per sampled point, in sampling order.
///
/// Every sampled coordinate is kept, duplicates included. Rows are
/// independently and identically sampled; nothing is deduplicated or
/// reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Number of coordinates per row.
    pub dimension: usize,
    /// Sampled rows, each pairing coordinates with the formula value.
    pub rows:      Vec<(Vec<f64>, f64)>,
}

impl Dataset {
    /// Writes the dataset in its text format: a `"<dimension> <count>"`
    /// header line followed by one whitespace-separated
    /// `"<c1> ... <cD> <value>"` line per row.
    ///
    /// # Errors
    /// Propagates any I/O error from the writer.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{} {}", self.dimension, self.rows.len())?;
        for (coords, value) in &self.rows {
            for c in coords {
                write!(out, "{c} ")?;
            }
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

/// Samples a dataset for a compiled formula.
///
/// The formula has already been compiled by the caller, so formula errors
/// are reported before any sampling begins. Each of the `count` rows draws
/// `dimension` independent values uniformly from `[min, max]` and evaluates
/// the expression against them.
///
/// # Parameters
/// - `config`: Dimension, count, bounds, and seed for the run.
/// - `expr`: The compiled formula.
///
/// # Returns
/// The sampled [`Dataset`].
///
/// # Errors
/// - `InvalidDimension` / `InvalidCount` for non-positive inputs.
/// - `InvalidBounds` for an empty or non-finite sampling interval.
/// - `Eval` if the formula references more coordinates than `dimension`
///   provides (checked up front, before any row is sampled).
pub fn sample(config: &GeneratorConfig,
              expr: &CompiledExpression)
              -> Result<Dataset, GeneratorError> {
    if config.dimension == 0 {
        return Err(GeneratorError::InvalidDimension { dimension: config.dimension });
    }
    if config.count == 0 {
        return Err(GeneratorError::InvalidCount { count: config.count });
    }
    if !config.min.is_finite() || !config.max.is_finite() || config.min > config.max {
        return Err(GeneratorError::InvalidBounds { min: config.min,
                                                   max: config.max, });
    }
    expr.check_input_len(config.dimension)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rows = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let coords: Vec<f64> = (0..config.dimension).map(|_| rng.gen_range(config.min..=config.max))
                                                    .collect();
        let value = expr.evaluate(&coords)?;
        rows.push((coords, value));
    }

    Ok(Dataset { dimension: config.dimension,
                 rows })
}

/// Samples a dataset and writes it to `out` in one step.
///
/// This is the library entry point behind the `generate` subcommand.
///
/// # Errors
/// Returns any error from [`sample`] or from writing the dataset.
pub fn generate(config: &GeneratorConfig,
                expr: &CompiledExpression,
                out: &mut impl Write)
                -> Result<(), GeneratorError> {
    let dataset = sample(config, expr)?;
    dataset.write_to(out)?;
    Ok(())
}
