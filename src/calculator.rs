use crate::ast::{Environment, Expression, Parser};
use crate::config::CalculatorConfig;
use crate::error::{GraphError, ParseError};
use crate::sampler::{sample, Sample, SampleRange};
use log::debug;
use lru::LruCache;
use std::fmt;
use std::sync::Arc;

/// What a calculator display shows for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    /// Evaluated, but to NaN or an infinity.
    Undefined,
    /// The input did not parse.
    Error,
}

impl Outcome {
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Outcome::Value(value)
        } else {
            Outcome::Undefined
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the trailing ".0" on integral values.
            Outcome::Value(value) => write!(f, "{:?}", value),
            Outcome::Undefined => f.write_str("Undefined"),
            Outcome::Error => f.write_str("Error"),
        }
    }
}

/// Compute and graph front end with a cache of compiled trees.
pub struct Calculator {
    config: CalculatorConfig,
    cache: LruCache<String, Arc<Expression>>,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            cache: LruCache::new(config.cache_capacity),
            config,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Parses `raw`, reusing the tree from an earlier call on the same text.
    /// Failed parses are not cached.
    pub fn compile(&mut self, raw: &str) -> Result<Arc<Expression>, ParseError> {
        if let Some(ast) = self.cache.get(raw) {
            debug!("Cache hit for {:?}", raw);
            return Ok(Arc::clone(ast));
        }

        debug!("Cache miss for {:?}", raw);
        let ast = Arc::new(Parser::parse_expression(raw)?);
        self.cache.put(raw.to_string(), Arc::clone(&ast));
        Ok(ast)
    }

    /// Evaluates `raw` with no variables bound.
    pub fn compute(&mut self, raw: &str) -> Outcome {
        match self.compile(raw) {
            Ok(ast) => Outcome::from_value(ast.compute()),
            Err(err) => {
                debug!("Failed to parse {:?}: {}", raw, err);
                Outcome::Error
            }
        }
    }

    /// Samples `raw` over the configured range and variable.
    ///
    /// When the configured variable does not occur but exactly one other
    /// variable does, that one is sampled instead.
    pub fn graph(&mut self, raw: &str) -> Result<Vec<Sample>, GraphError> {
        let ast = self.compile(raw)?;
        let range = SampleRange::for_source(raw, &self.config)?;
        let variable = self.graph_variable(&ast);
        let mut env = Environment::new();
        Ok(sample(&ast, &variable, &range, &mut env))
    }

    fn graph_variable(&self, ast: &Expression) -> String {
        let variables = ast.variables();
        let configured = self.config.variable.as_str();
        match variables.first() {
            Some(only) if variables.len() == 1 && *only != configured => {
                debug!("Graphing over '{}' instead of '{}'", only, configured);
                only.to_string()
            }
            _ => configured.to_string(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use std::num::NonZeroUsize;

    #[test]
    fn test_compute_display() {
        let mut calculator = Calculator::default();
        assert_eq!(calculator.compute("2+3*4").to_string(), "14.0");
        assert_eq!(calculator.compute("1/4").to_string(), "0.25");
        assert_eq!(calculator.compute("-(3)").to_string(), "-3.0");
    }

    #[test]
    fn test_undefined_is_distinct_from_error() {
        let mut calculator = Calculator::default();
        assert_eq!(calculator.compute("1/0"), Outcome::Undefined);
        assert_eq!(calculator.compute("sqrt(-4)"), Outcome::Undefined);
        assert_eq!(calculator.compute("x+1"), Outcome::Undefined);
        assert_eq!(calculator.compute("2+"), Outcome::Error);
        assert_eq!(calculator.compute("2+").to_string(), "Error");
        assert_eq!(calculator.compute("0/0").to_string(), "Undefined");
    }

    #[test]
    fn test_error_does_not_poison_next_input() {
        let mut calculator = Calculator::default();
        assert_eq!(calculator.compute("2+"), Outcome::Error);
        assert_eq!(calculator.compute("3+4"), Outcome::Value(7.0));
    }

    #[test]
    fn test_compile_reuses_cached_tree() {
        let mut calculator = Calculator::default();
        let first = calculator.compile("x^2").unwrap();
        let second = calculator.compile("x^2").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let config = CalculatorConfig {
            cache_capacity: NonZeroUsize::new(1).unwrap(),
            ..CalculatorConfig::default()
        };
        let mut calculator = Calculator::new(config);
        let first = calculator.compile("1+1").unwrap();
        calculator.compile("2+2").unwrap();
        let again = calculator.compile("1+1").unwrap();
        assert!(!Arc::ptr_eq(&first, &again));
        assert_eq!(first, again);
    }

    #[test]
    fn test_graph_uses_configured_range() {
        let mut calculator = Calculator::default();

        let samples = calculator.graph("2*x").unwrap();
        assert_eq!(samples.len(), 2001);
        assert_eq!(samples[0], Sample { x: -100.0, y: -200.0 });

        let samples = calculator.graph("sin(x)").unwrap();
        assert!((samples[1].x - samples[0].x - PI / 18.0).abs() < 1e-9);
        assert!(samples.iter().all(|s| s.y.abs() <= 1.0));
    }

    #[test]
    fn test_graph_custom_variable() {
        let config = CalculatorConfig {
            variable: "t".to_string(),
            x_min: 0.0,
            x_max: 2.0,
            step: 1.0,
            ..CalculatorConfig::default()
        };
        let mut calculator = Calculator::new(config);
        let ys: Vec<f64> = calculator
            .graph("t^2")
            .unwrap()
            .iter()
            .map(|s| s.y)
            .collect();
        assert_eq!(ys, [0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_graph_falls_back_to_single_free_variable() {
        let mut calculator = Calculator::default();
        let samples = calculator.graph("t*2").unwrap();
        assert_eq!(samples[0], Sample { x: -100.0, y: -200.0 });
        assert_eq!(samples[2000].y, 200.0);

        // Two candidates: keep the configured name, which stays unbound.
        let samples = calculator.graph("a*b").unwrap();
        assert!(samples.iter().all(|s| s.y.is_nan()));

        // The configured variable wins when present.
        let samples = calculator.graph("(x)+1").unwrap();
        assert_eq!(samples[0].y, -99.0);
    }

    #[test]
    fn test_graph_errors() {
        let mut calculator = Calculator::default();
        assert!(matches!(
            calculator.graph("x#"),
            Err(GraphError::Parse(ParseError::UnexpectedChar { found: '#', .. }))
        ));

        let config = CalculatorConfig {
            step: 0.0,
            ..CalculatorConfig::default()
        };
        let mut calculator = Calculator::new(config);
        assert!(matches!(calculator.graph("x"), Err(GraphError::Range(_))));
    }
}
