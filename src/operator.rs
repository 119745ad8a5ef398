use std::fmt;

/// Rank of the line sentinel. Every real operator ranks above it.
pub const BOUNDARY_PRECEDENCE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Division by zero follows IEEE-754 and yields an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns true if `s` is exactly one of `+ - * /`.
pub fn is_operator(s: &str) -> bool {
    Operator::from_lexeme(s).is_some()
}

/// Returns true if `s` is non-empty, made only of ASCII digits and `.`,
/// with at most one `.`.
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let mut has_decimal_point = false;
    for c in s.chars() {
        if c.is_ascii_digit() {
            continue;
        }
        if c == '.' && !has_decimal_point {
            has_decimal_point = true;
            continue;
        }
        return false;
    }

    true
}
