pub mod other;
pub mod trig;

use std::fmt;

pub type UnaryFn = fn(f64) -> f64;

/// A named unary real function callable from expressions.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub function: UnaryFn,
}

impl Builtin {
    pub fn apply(&self, value: f64) -> f64 {
        (self.function)(value)
    }
}

// Names are unique within the table, so they identify the function.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

/// Every function an identifier can resolve to.
pub static BUILTINS: &[Builtin] = &[
    trig::SIN,
    trig::COS,
    trig::TAN,
    trig::ASIN,
    trig::ACOS,
    trig::ATAN,
    trig::SEC,
    trig::CSC,
    trig::COT,
    other::SQRT,
    other::LOG,
    other::EXP,
];

/// Exact, case-sensitive lookup.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}
