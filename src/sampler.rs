use crate::ast::{Environment, Expression};
use crate::config::CalculatorConfig;
use crate::error::RangeError;
use log::debug;
use rayon::prelude::*;

// Absorbs rounding when deciding whether the last step still lands in range.
const STEP_EPSILON: f64 = 1e-9;

pub const MAX_POINTS: usize = 10_000_000;

const TRIG_NAMES: [&str; 3] = ["sin", "cos", "tan"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Inclusive range of evenly spaced sample points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    start: f64,
    end: f64,
    step: f64,
}

impl SampleRange {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::NonFiniteBounds { start, end });
        }
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RangeError::InvalidStep(step));
        }

        let count = Self::point_count(start, end, step);
        if !(count <= MAX_POINTS as f64) {
            return Err(RangeError::TooManyPoints {
                count,
                max: MAX_POINTS,
            });
        }
        Ok(Self { start, end, step })
    }

    /// Picks the configured range for `raw`, with the finer trig step when
    /// the input mentions sin, cos or tan.
    pub fn for_source(raw: &str, config: &CalculatorConfig) -> Result<Self, RangeError> {
        let lowered = raw.to_lowercase();
        let step = if TRIG_NAMES.iter().any(|name| lowered.contains(name)) {
            config.trig_step
        } else {
            config.step
        };
        Self::new(config.x_min, config.x_max, step)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        (Self::point_count(self.start, self.end, self.step) as usize).min(MAX_POINTS)
    }

    // May be infinite for a tiny step over a wide range.
    fn point_count(start: f64, end: f64, step: f64) -> f64 {
        ((end - start) / step + STEP_EPSILON).floor() + 1.0
    }

    /// Sample points, computed as `start + k * step` so no error accumulates.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |k| self.start + k as f64 * self.step)
    }
}

/// Evaluates `expr` at every point, writing each point into `env[variable]`
/// right before the evaluation that reads it.
pub fn sample(
    expr: &Expression,
    variable: &str,
    range: &SampleRange,
    env: &mut Environment,
) -> Vec<Sample> {
    let samples: Vec<Sample> = range
        .points()
        .map(|x| {
            env.insert(variable.to_string(), x);
            Sample {
                x,
                y: expr.evaluate(env),
            }
        })
        .collect();

    debug!("Sampled {} points of '{}'", samples.len(), variable);
    samples
}

/// Parallel [`sample`]. Every worker evaluates against its own copy of
/// `base`, so the caller's environment is never written.
pub fn sample_par(
    expr: &Expression,
    variable: &str,
    range: &SampleRange,
    base: &Environment,
) -> Vec<Sample> {
    let samples: Vec<Sample> = (0..range.len())
        .into_par_iter()
        .map_init(
            || base.clone(),
            |env, k| {
                let x = range.start + k as f64 * range.step;
                env.insert(variable.to_string(), x);
                Sample {
                    x,
                    y: expr.evaluate(env),
                }
            },
        )
        .collect();

    debug!("Sampled {} points of '{}' in parallel", samples.len(), variable);
    samples
}
