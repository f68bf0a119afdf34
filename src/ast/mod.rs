use crate::functions::Builtin;
use std::collections::{BTreeSet, HashMap};

mod normalizer;
mod parser;
mod scanner;

pub use normalizer::{normalize, NTH_ROOT_MARKER};
pub use parser::Parser;

/// Caller-owned variable bindings, read at evaluation time.
pub type Environment = HashMap<String, f64>;

/// A compiled expression tree.
///
/// Trees own their children outright and hold no variable values, so the
/// same tree can be evaluated against an environment that changes between
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    BinaryOperation {
        left: Box<Expression>,
        operator: Operator,
        right: Box<Expression>,
    },
    Negate(Box<Expression>),
    FunctionCall {
        function: Builtin,
        argument: Box<Expression>,
    },
    Variable(String),
}

impl Expression {
    /// Evaluates the tree against `env`.
    ///
    /// Never fails: division by zero, domain errors and unbound variables
    /// all come back as NaN or an infinity.
    pub fn evaluate(&self, env: &Environment) -> f64 {
        match self {
            Expression::Constant(value) => *value,
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => operator.apply(left.evaluate(env), right.evaluate(env)),
            Expression::Negate(inner) => -1.0 * inner.evaluate(env),
            Expression::FunctionCall { function, argument } => {
                function.apply(argument.evaluate(env))
            }
            Expression::Variable(name) => env.get(name).copied().unwrap_or(f64::NAN),
        }
    }

    /// Evaluates with no bindings at all. Any variable yields NaN.
    pub fn compute(&self) -> f64 {
        self.evaluate(&Environment::new())
    }

    /// Names of every variable the tree reads, sorted.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Expression::Constant(_) => {}
            Expression::BinaryOperation { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
            Expression::Negate(inner) => inner.collect_variables(names),
            Expression::FunctionCall { argument, .. } => argument.collect_variables(names),
            Expression::Variable(name) => {
                names.insert(name.as_str());
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    NthRoot,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            // Truncating remainder: the sign follows the dividend.
            Operator::Modulo => left % right,
            Operator::Power => left.powf(right),
            Operator::NthRoot => left.powf(1.0 / right),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
            Operator::Power => '^',
            Operator::NthRoot => NTH_ROOT_MARKER,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '%' => Ok(Operator::Modulo),
            '^' => Ok(Operator::Power),
            NTH_ROOT_MARKER => Ok(Operator::NthRoot),
            other => Err(other),
        }
    }
}
