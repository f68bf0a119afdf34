use thiserror::Error;

/// Structural failure raised while parsing an expression.
///
/// Positions are character indices into the normalized input, i.e. after
/// whitespace stripping and glyph replacement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("invalid number literal '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("unconsumed input starting with '{found}' at position {position}")]
    TrailingInput { found: char, position: usize },

    #[error("expression nests too deeply at position {position}")]
    TooDeep { position: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { position, .. }
            | ParseError::UnexpectedEnd { position }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::TrailingInput { position, .. }
            | ParseError::TooDeep { position } => *position,
        }
    }
}

/// Rejected sampling range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("range bounds must be finite, got {start}..={end}")]
    NonFiniteBounds { start: f64, end: f64 },

    #[error("range start {start} is greater than end {end}")]
    Inverted { start: f64, end: f64 },

    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("range would hold {count} points, at most {max} are allowed")]
    TooManyPoints { count: f64, max: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
