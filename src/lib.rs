pub mod ast;
pub mod calculator;
pub mod config;
pub mod error;
pub mod functions;
pub mod sampler;

pub use ast::{Environment, Expression, Operator, Parser};
pub use calculator::{Calculator, Outcome};
pub use config::CalculatorConfig;
pub use error::{GraphError, ParseError, RangeError};
pub use sampler::{sample, sample_par, Sample, SampleRange};

/// Compiles `expression` into a reusable tree.
pub fn parse(expression: &str) -> Result<Expression, ParseError> {
    Parser::parse_expression(expression)
}

/// Parses and evaluates `expression` once against `context`.
pub fn evaluate_expression(expression: &str, context: &Environment) -> Result<f64, ParseError> {
    let ast = parse(expression)?;
    Ok(ast.evaluate(context))
}
