use crate::ast::normalizer::normalize;
use crate::ast::scanner::{Cursor, MAX_DEPTH};
use crate::ast::{Expression, Operator};
use crate::error::ParseError;
use crate::functions::lookup;
use log::{debug, trace, warn};

const SUM_OPERATORS: &[Operator] = &[Operator::Add, Operator::Subtract];
const PRODUCT_OPERATORS: &[Operator] = &[Operator::Multiply, Operator::Divide, Operator::Modulo];
const POWER_OPERATORS: &[Operator] = &[Operator::Power, Operator::NthRoot];

/// A subtree together with its height, so the height limit is checked as
/// nodes are built instead of by walking the finished tree.
struct Parsed {
    ast: Expression,
    height: usize,
}

impl Parsed {
    fn leaf(ast: Expression) -> Self {
        Self { ast, height: 1 }
    }

    fn node(cursor: &Cursor, ast: Expression, child_height: usize) -> Result<Self, ParseError> {
        let height = child_height + 1;
        if height > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: cursor.position(),
            });
        }
        Ok(Self { ast, height })
    }
}

/// Recursive-descent parser over four precedence tiers:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := power (('*' | '/' | '%') power)*
/// power   := term (('^' | '@') term)*
/// term    := ('+' | '-') term | '(' sum ')' | number | identifier term
/// ```
///
/// Every binary tier folds to the left, `^` and `@` included. The parser
/// keeps no state between calls; each call scans with its own cursor.
///
/// Term nesting and the height of the returned tree are both capped at
/// [`MAX_DEPTH`]; exceeding either is [`ParseError::TooDeep`].
pub struct Parser;

impl Parser {
    pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
        let normalized = normalize(input);
        debug!("Parsing expression: {}", normalized);

        let mut cursor = Cursor::new(&normalized);
        let parsed = Self::parse_sum(&mut cursor)?;
        if let Some(found) = cursor.current() {
            return Err(ParseError::TrailingInput {
                found,
                position: cursor.position(),
            });
        }

        debug!("Parse result: {:?}", parsed.ast);
        Ok(parsed.ast)
    }

    fn parse_sum(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        Self::fold_binary(cursor, SUM_OPERATORS, Self::parse_product)
    }

    fn parse_product(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        Self::fold_binary(cursor, PRODUCT_OPERATORS, Self::parse_power)
    }

    fn parse_power(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        Self::fold_binary(cursor, POWER_OPERATORS, Self::parse_term)
    }

    fn fold_binary(
        cursor: &mut Cursor,
        operators: &[Operator],
        operand: fn(&mut Cursor) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        let mut node = operand(cursor)?;

        while let Some(operator) = operators
            .iter()
            .copied()
            .find(|operator| cursor.consume(operator.symbol()))
        {
            let right = operand(cursor)?;
            let child_height = node.height.max(right.height);
            let ast = Expression::BinaryOperation {
                left: Box::new(node.ast),
                operator,
                right: Box::new(right.ast),
            };
            node = Parsed::node(cursor, ast, child_height)?;
        }

        Ok(node)
    }

    fn parse_term(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        match Self::parse_optional_term(cursor)? {
            Some(node) => Ok(node),
            None => Err(Self::unexpected(cursor)),
        }
    }

    /// Parses a term if the current character can start one.
    ///
    /// Returns `Ok(None)` without consuming anything at end of input, at `)`
    /// and at a binary operator. Any other unknown character is an error.
    fn parse_optional_term(cursor: &mut Cursor) -> Result<Option<Parsed>, ParseError> {
        cursor.enter()?;
        let term = Self::scan_term(cursor);
        cursor.leave();
        term
    }

    fn scan_term(cursor: &mut Cursor) -> Result<Option<Parsed>, ParseError> {
        if cursor.consume('+') {
            return Self::parse_term(cursor).map(Some);
        }
        if cursor.consume('-') {
            let inner = Self::parse_term(cursor)?;
            let ast = Expression::Negate(Box::new(inner.ast));
            return Parsed::node(cursor, ast, inner.height).map(Some);
        }
        if cursor.consume('(') {
            let inner = Self::parse_sum(cursor)?;
            if !cursor.consume(')') {
                warn!(
                    "Missing ')' at position {}, closing group implicitly",
                    cursor.position()
                );
            }
            return Ok(Some(inner));
        }
        if cursor.at_number() {
            return Self::parse_number(cursor).map(Some);
        }
        if cursor.at_alpha() {
            return Self::parse_identifier(cursor).map(Some);
        }

        match cursor.current() {
            None | Some(')') => Ok(None),
            Some(c) if Operator::try_from(c).is_ok() => Ok(None),
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                position: cursor.position(),
            }),
        }
    }

    fn parse_number(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        let position = cursor.position();
        let literal = cursor.take_while(Cursor::at_number);
        trace!("Number literal {:?} at {}", literal, position);

        match literal.parse::<f64>() {
            Ok(value) => Ok(Parsed::leaf(Expression::Constant(value))),
            Err(_) => Err(ParseError::InvalidNumber { literal, position }),
        }
    }

    fn parse_identifier(cursor: &mut Cursor) -> Result<Parsed, ParseError> {
        let position = cursor.position();
        let name = cursor.take_while(Cursor::at_alpha);
        trace!("Identifier {:?} at {}", name, position);

        if let Some(function) = lookup(&name) {
            let argument = Self::parse_term(cursor)?;
            let ast = Expression::FunctionCall {
                function,
                argument: Box::new(argument.ast),
            };
            return Parsed::node(cursor, ast, argument.height);
        }

        // A term following a variable is still scanned, then dropped.
        if let Some(discarded) = Self::parse_optional_term(cursor)? {
            debug!(
                "Variable '{}' at {} drops trailing term {:?}",
                name, position, discarded.ast
            );
        }
        Ok(Parsed::leaf(Expression::Variable(name)))
    }

    fn unexpected(cursor: &Cursor) -> ParseError {
        let position = cursor.position();
        match cursor.current() {
            Some(found) => ParseError::UnexpectedChar { found, position },
            None => ParseError::UnexpectedEnd { position },
        }
    }
}
