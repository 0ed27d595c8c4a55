use crate::lang::token::{Operator, Relation};

/// ## Arithmetic, comparison and number formatting
///
/// All arithmetic is IEEE-754 double precision. Division by zero and
/// overflow produce infinities or NaN rather than errors.

pub struct Operation {}

impl Operation {
    pub fn binary(op: &Operator, lhs: f64, rhs: f64) -> f64 {
        use Operator::*;
        match op {
            Caret => lhs.powf(rhs),
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
            Plus => lhs + rhs,
            Minus => lhs - rhs,
        }
    }

    pub fn relation(rel: &Relation, lhs: f64, rhs: f64) -> bool {
        use Relation::*;
        match rel {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }

    /// Integral values print without a fraction. Very large and very
    /// small magnitudes switch to exponent form, `1E+21` and `1.5E-7`.
    pub fn format(n: f64) -> String {
        if n.is_nan() {
            return "NAN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "INFINITY" } else { "-INFINITY" }.to_string();
        }
        if n == 0.0 {
            return "0".to_string();
        }
        let magnitude = n.abs();
        if magnitude >= 1e21 || magnitude < 1e-6 {
            let s = format!("{:e}", n).to_uppercase();
            return match s.find("E-") {
                Some(_) => s,
                None => s.replacen('E', "E+", 1),
            };
        }
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary() {
        assert_eq!(Operation::binary(&Operator::Caret, 2.0, 10.0), 1024.0);
        assert_eq!(Operation::binary(&Operator::Minus, 1.0, 3.0), -2.0);
        assert!(Operation::binary(&Operator::Divide, 1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_relation() {
        assert!(Operation::relation(&Relation::LessEqual, 2.0, 2.0));
        assert!(!Operation::relation(&Relation::Less, 2.0, 2.0));
        assert!(Operation::relation(&Relation::NotEqual, 2.0, 3.0));
    }

    #[test]
    fn test_format() {
        assert_eq!(Operation::format(8.0), "8");
        assert_eq!(Operation::format(-0.0), "0");
        assert_eq!(Operation::format(0.5), "0.5");
        assert_eq!(Operation::format(-12.25), "-12.25");
        assert_eq!(Operation::format(1e21), "1E+21");
        assert_eq!(Operation::format(1.5e-7), "1.5E-7");
        assert_eq!(Operation::format(123456789.0), "123456789");
        assert_eq!(Operation::format(f64::NAN), "NAN");
        assert_eq!(Operation::format(-f64::INFINITY), "-INFINITY");
    }
}
