use super::Builtin;

pub const SQRT: Builtin = Builtin {
    name: "sqrt",
    function: f64::sqrt,
};

/// Natural logarithm.
pub const LOG: Builtin = Builtin {
    name: "log",
    function: f64::ln,
};

pub const EXP: Builtin = Builtin {
    name: "exp",
    function: f64::exp,
};
