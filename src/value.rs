use std::fmt;

/// A line's numeric result, formatted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value(pub f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.0;
        // Always show at least one decimal place for whole numbers
        if n.is_finite() && n.fract() == 0.0 {
            write!(f, "{:.1}", n)
        } else {
            write!(f, "{}", n)
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value(n)
    }
}
