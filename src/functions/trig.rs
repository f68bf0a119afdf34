use super::Builtin;

pub const SIN: Builtin = Builtin {
    name: "sin",
    function: f64::sin,
};
pub const COS: Builtin = Builtin {
    name: "cos",
    function: f64::cos,
};
pub const TAN: Builtin = Builtin {
    name: "tan",
    function: f64::tan,
};
pub const ASIN: Builtin = Builtin {
    name: "asin",
    function: f64::asin,
};
pub const ACOS: Builtin = Builtin {
    name: "acos",
    function: f64::acos,
};
pub const ATAN: Builtin = Builtin {
    name: "atan",
    function: f64::atan,
};

// Reciprocal functions
pub const SEC: Builtin = Builtin {
    name: "sec",
    function: sec,
};
pub const CSC: Builtin = Builtin {
    name: "csc",
    function: csc,
};
pub const COT: Builtin = Builtin {
    name: "cot",
    function: cot,
};

pub fn sec(value: f64) -> f64 {
    1.0 / value.cos()
}

pub fn csc(value: f64) -> f64 {
    1.0 / value.sin()
}

pub fn cot(value: f64) -> f64 {
    1.0 / value.tan()
}
