use std::f64::consts::PI;
use std::num::NonZeroUsize;

/// Tunables for [`Calculator`](crate::Calculator).
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// How many compiled trees stay cached, keyed by raw input.
    pub cache_capacity: NonZeroUsize,
    /// Free variable used when graphing.
    pub variable: String,
    pub x_min: f64,
    pub x_max: f64,
    pub step: f64,
    /// Step used instead of `step` when the input mentions a trig function.
    pub trig_step: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: NonZeroUsize::new(64).unwrap_or(NonZeroUsize::MIN),
            variable: "x".to_string(),
            x_min: -100.0,
            x_max: 100.0,
            step: 0.1,
            trig_step: PI / 18.0,
        }
    }
}
