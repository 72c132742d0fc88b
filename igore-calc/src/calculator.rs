//! The calculator state machine.
//!
//! The entry is kept as text and grows one key at a time, so `"12."` can be
//! shown before the fractional digit exists. It is parsed only when an
//! operator or `=` needs its value.
//!
//! Operators are applied eagerly, left to right: `2 + 3 × 4 =` gives `20`.

use thiserror::Error;

/// Display value shown after an arithmetic failure. Distinct from every
/// numeric literal.
pub const ERROR_SENTINEL: &str = "Error";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("result out of range")]
    Overflow,
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
}

/// A binary operator, or a unary one expressed on the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Square,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Sqrt => "√",
            Operation::Square => "x²",
        }
    }
}

/// Immediate keys that rewrite the entry without touching the pending
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Sqrt,
    Square,
}

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Apply `op` to `a` and `b`. `Sqrt` and `Square` ignore `a`.
///
/// Any non-finite result is reported as [`CalcError::Overflow`].
pub fn compute(a: f64, b: f64, op: Operation) -> Result<f64, CalcError> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operation::Sqrt => {
            if b < 0.0 {
                return Err(CalcError::NegativeSquareRoot);
            }
            b.sqrt()
        }
        Operation::Square => b * b,
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Text for a computed value: shortest round-trip form, so `8.0` is `"8"`.
/// Negative zero prints as `"0"`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn parse_entry(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber(text.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: String,
    previous: Option<f64>,
    operation: Option<Operation>,
    wait_for_operand: bool,
    last_error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operation: None,
            wait_for_operand: false,
            last_error: None,
        }
    }

    pub fn reset(&mut self) -> String {
        *self = Self::new();
        self.display()
    }

    pub fn input_digit(&mut self, digit: Digit) -> String {
        if self.is_error() {
            return self.display();
        }

        let c = digit.as_char();
        if self.wait_for_operand {
            self.current = c.to_string();
            self.wait_for_operand = false;
        } else if self.current == "0" {
            self.current = c.to_string();
        } else {
            self.current.push(c);
        }
        self.display()
    }

    pub fn input_decimal_point(&mut self) -> String {
        if self.is_error() {
            return self.display();
        }

        if self.wait_for_operand {
            self.current = "0.".to_string();
            self.wait_for_operand = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
        self.display()
    }

    /// Select the next operator. A pending operation is resolved first
    /// against the current entry.
    pub fn input_operator(&mut self, op: Operation) -> String {
        if self.is_error() {
            return self.display();
        }

        let current = match parse_entry(&self.current) {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        match (self.previous, self.operation) {
            (Some(previous), Some(pending)) => match compute(previous, current, pending) {
                Ok(result) => {
                    self.current = format_value(result);
                    self.previous = Some(result);
                }
                Err(e) => return self.fail(e),
            },
            _ => self.previous = Some(current),
        }

        self.wait_for_operand = true;
        self.operation = Some(op);
        self.display()
    }

    /// The `=` key. A no-op when nothing is pending.
    pub fn evaluate(&mut self) -> String {
        if self.is_error() {
            return self.display();
        }

        let (Some(previous), Some(pending)) = (self.previous, self.operation) else {
            return self.display();
        };

        let outcome = parse_entry(&self.current).and_then(|current| compute(previous, current, pending));
        match outcome {
            Ok(result) => {
                self.current = format_value(result);
                self.previous = None;
                self.operation = None;
                self.wait_for_operand = true;
                self.display()
            }
            Err(e) => self.fail(e),
        }
    }

    /// The immediate keys (±, √, x²). They rewrite the entry in place and
    /// leave `previous` and `operation` alone, so `5 + 9 √ =` gives `8`.
    pub fn apply_unary(&mut self, op: UnaryOp) -> String {
        if self.is_error() {
            return self.display();
        }

        let value = match parse_entry(&self.current) {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };

        let binary = match op {
            UnaryOp::Negate => {
                // Keep the literal as typed, so "5." stays editable as "-5.".
                if value != 0.0 {
                    match self.current.strip_prefix('-') {
                        Some(rest) => self.current = rest.to_string(),
                        None => self.current.insert(0, '-'),
                    }
                }
                return self.display();
            }
            UnaryOp::Sqrt => Operation::Sqrt,
            UnaryOp::Square => Operation::Square,
        };

        match compute(0.0, value, binary) {
            Ok(result) => {
                self.current = format_value(result);
                self.wait_for_operand = true;
                self.display()
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: CalcError) -> String {
        tracing::info!(%error, entry = %self.current, "calculation failed");
        self.current = ERROR_SENTINEL.to_string();
        self.last_error = Some(error);
        self.display()
    }

    pub fn display(&self) -> String {
        self.current.clone()
    }

    /// The entry parsed as a number; `None` in the error state.
    pub fn current_value(&self) -> Option<f64> {
        parse_entry(&self.current).ok()
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.wait_for_operand
    }

    pub fn is_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Why the calculator is in the error state, if it is.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    fn type_number(calc: &mut Calculator, text: &str) {
        for c in text.chars() {
            match c {
                '.' => {
                    calc.input_decimal_point();
                }
                _ => {
                    calc.input_digit(d(c.to_digit(10).unwrap() as u8));
                }
            }
        }
    }

    fn run(a: &str, op: Operation, b: &str) -> String {
        let mut calc = Calculator::new();
        type_number(&mut calc, a);
        calc.input_operator(op);
        type_number(&mut calc, b);
        calc.evaluate()
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.previous(), None);
        assert_eq!(calc.operation(), None);
        assert!(!calc.is_waiting_for_operand());
        assert!(!calc.is_error());
    }

    #[test]
    fn test_digit_replaces_leading_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.input_digit(d(5)), "5");

        let mut calc = Calculator::new();
        calc.input_digit(d(0));
        assert_eq!(calc.input_digit(d(0)), "0");
    }

    #[test]
    fn test_digits_accumulate() {
        let mut calc = Calculator::new();
        calc.input_digit(d(1));
        calc.input_digit(d(2));
        assert_eq!(calc.input_digit(d(3)), "123");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut calc = Calculator::new();
        calc.input_digit(d(5));
        assert_eq!(calc.input_decimal_point(), "5.");
        assert_eq!(calc.input_decimal_point(), "5.");
    }

    #[test]
    fn test_decimal_point_on_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.input_decimal_point(), "0.");
        assert_eq!(calc.input_digit(d(0)), "0.0");
        assert_eq!(calc.input_digit(d(7)), "0.07");
    }

    #[test]
    fn test_decimal_point_after_operator_starts_fresh() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "1.5");
        calc.input_operator(Operation::Add);
        assert_eq!(calc.input_decimal_point(), "0.");
        assert!(!calc.is_waiting_for_operand());
    }

    #[test]
    fn test_four_functions() {
        assert_eq!(run("5", Operation::Add, "3"), "8");
        assert_eq!(run("10", Operation::Subtract, "4"), "6");
        assert_eq!(run("6", Operation::Multiply, "7"), "42");
        assert_eq!(run("15", Operation::Divide, "3"), "5");
    }

    #[test]
    fn test_decimal_sum() {
        assert_eq!(run("2.5", Operation::Add, "1.5"), "4");
    }

    #[test]
    fn test_non_integer_results() {
        assert_eq!(run("1", Operation::Divide, "4"), "0.25");
        assert_eq!(run("3", Operation::Subtract, "5"), "-2");
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "5");
        calc.input_operator(Operation::Divide);
        type_number(&mut calc, "0");
        assert_eq!(calc.evaluate(), ERROR_SENTINEL);
        assert!(calc.is_error());
        assert_eq!(calc.last_error(), Some(&CalcError::DivisionByZero));
    }

    #[test]
    fn test_eager_chaining() {
        let mut calc = Calculator::new();
        calc.input_digit(d(2));
        calc.input_operator(Operation::Add);
        calc.input_digit(d(3));
        assert_eq!(calc.input_operator(Operation::Multiply), "5");
        assert_eq!(calc.previous(), Some(5.0));
        assert_eq!(calc.operation(), Some(Operation::Multiply));
        calc.input_digit(d(4));
        assert_eq!(calc.evaluate(), "20");
    }

    #[test]
    fn test_operator_stores_previous() {
        let mut calc = Calculator::new();
        calc.input_digit(d(7));
        assert_eq!(calc.input_operator(Operation::Subtract), "7");
        assert_eq!(calc.previous(), Some(7.0));
        assert_eq!(calc.operation(), Some(Operation::Subtract));
        assert!(calc.is_waiting_for_operand());
    }

    #[test]
    fn test_equals_without_operation_is_noop() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "42");
        let before = calc.clone();
        assert_eq!(calc.evaluate(), "42");
        assert_eq!(calc, before);
    }

    #[test]
    fn test_equals_clears_pending() {
        let mut calc = Calculator::new();
        calc.input_digit(d(2));
        calc.input_operator(Operation::Multiply);
        calc.input_digit(d(9));
        calc.evaluate();
        assert_eq!(calc.previous(), None);
        assert_eq!(calc.operation(), None);
        assert!(calc.is_waiting_for_operand());
        assert_eq!(calc.input_digit(d(1)), "1");
    }

    #[test]
    fn test_result_feeds_next_operator() {
        let mut calc = Calculator::new();
        calc.input_digit(d(2));
        calc.input_operator(Operation::Add);
        calc.input_digit(d(2));
        calc.evaluate();
        calc.input_operator(Operation::Multiply);
        calc.input_digit(d(3));
        assert_eq!(calc.evaluate(), "12");
    }

    #[test]
    fn test_error_in_chain_keeps_pending_operation() {
        let mut calc = Calculator::new();
        calc.input_digit(d(8));
        calc.input_operator(Operation::Divide);
        calc.input_digit(d(0));
        assert_eq!(calc.input_operator(Operation::Add), ERROR_SENTINEL);
        assert_eq!(calc.operation(), Some(Operation::Divide));
        assert_eq!(calc.previous(), Some(8.0));
    }

    #[test]
    fn test_error_latches_until_reset() {
        let mut calc = Calculator::new();
        calc.input_digit(d(1));
        calc.input_operator(Operation::Divide);
        calc.input_digit(d(0));
        calc.evaluate();

        assert_eq!(calc.input_digit(d(3)), ERROR_SENTINEL);
        assert_eq!(calc.input_decimal_point(), ERROR_SENTINEL);
        assert_eq!(calc.input_operator(Operation::Add), ERROR_SENTINEL);
        assert_eq!(calc.apply_unary(UnaryOp::Square), ERROR_SENTINEL);
        assert_eq!(calc.evaluate(), ERROR_SENTINEL);

        assert_eq!(calc.reset(), "0");
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_reset_from_mid_expression() {
        let mut calc = Calculator::new();
        calc.input_digit(d(5));
        calc.input_operator(Operation::Add);
        calc.input_digit(d(3));
        assert_eq!(calc.reset(), "0");
        assert_eq!(calc.previous(), None);
        assert_eq!(calc.operation(), None);
    }

    #[test]
    fn test_overflow_is_error() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "1");
        for _ in 0..308 {
            calc.input_digit(d(0));
        }
        calc.input_operator(Operation::Multiply);
        type_number(&mut calc, "10");
        assert_eq!(calc.evaluate(), ERROR_SENTINEL);
        assert_eq!(calc.last_error(), Some(&CalcError::Overflow));
    }

    #[test]
    fn test_compute_truth_table() {
        assert_eq!(compute(2.0, 3.0, Operation::Add), Ok(5.0));
        assert_eq!(compute(2.0, 3.0, Operation::Subtract), Ok(-1.0));
        assert_eq!(compute(2.0, 3.0, Operation::Multiply), Ok(6.0));
        assert_eq!(compute(3.0, 2.0, Operation::Divide), Ok(1.5));
        assert_eq!(compute(1.0, 0.0, Operation::Divide), Err(CalcError::DivisionByZero));
        assert_eq!(compute(99.0, 16.0, Operation::Sqrt), Ok(4.0));
        assert_eq!(compute(0.0, -1.0, Operation::Sqrt), Err(CalcError::NegativeSquareRoot));
        assert_eq!(compute(99.0, -3.0, Operation::Square), Ok(9.0));
        assert_eq!(compute(0.0, 1e200, Operation::Square), Err(CalcError::Overflow));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(8.0), "8");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(-12.25), "-12.25");
    }

    #[test]
    fn test_sqrt_and_square_commit_result() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "9");
        assert_eq!(calc.apply_unary(UnaryOp::Sqrt), "3");
        assert!(calc.is_waiting_for_operand());
        assert_eq!(calc.input_digit(d(4)), "4");
        assert_eq!(calc.apply_unary(UnaryOp::Square), "16");
    }

    #[test]
    fn test_unary_leaves_pending_operation_alone() {
        let mut calc = Calculator::new();
        calc.input_digit(d(5));
        calc.input_operator(Operation::Add);
        calc.input_digit(d(9));
        assert_eq!(calc.apply_unary(UnaryOp::Sqrt), "3");
        assert_eq!(calc.previous(), Some(5.0));
        assert_eq!(calc.operation(), Some(Operation::Add));
        assert_eq!(calc.evaluate(), "8");
    }

    #[test]
    fn test_unary_result_chains_into_operator() {
        let mut calc = Calculator::new();
        calc.input_digit(d(2));
        calc.input_digit(d(5));
        calc.apply_unary(UnaryOp::Sqrt);
        assert_eq!(calc.input_operator(Operation::Add), "5");
        calc.input_digit(d(1));
        assert_eq!(calc.evaluate(), "6");
    }

    #[test]
    fn test_sqrt_of_negative_is_error() {
        let mut calc = Calculator::new();
        calc.input_digit(d(4));
        calc.apply_unary(UnaryOp::Negate);
        assert_eq!(calc.apply_unary(UnaryOp::Sqrt), ERROR_SENTINEL);
        assert_eq!(calc.last_error(), Some(&CalcError::NegativeSquareRoot));
    }

    #[test]
    fn test_negate_toggles_literal() {
        let mut calc = Calculator::new();
        type_number(&mut calc, "5.");
        assert_eq!(calc.apply_unary(UnaryOp::Negate), "-5.");
        assert_eq!(calc.input_digit(d(2)), "-5.2");
        assert_eq!(calc.apply_unary(UnaryOp::Negate), "5.2");
    }

    #[test]
    fn test_negate_zero_stays_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.apply_unary(UnaryOp::Negate), "0");
        type_number(&mut calc, "0.");
        assert_eq!(calc.apply_unary(UnaryOp::Negate), "0.");
    }

    #[test]
    fn test_negated_operand_in_sum() {
        let mut calc = Calculator::new();
        calc.input_digit(d(3));
        calc.input_operator(Operation::Add);
        calc.input_digit(d(8));
        calc.apply_unary(UnaryOp::Negate);
        assert_eq!(calc.evaluate(), "-5");
    }

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(d(7).as_char(), '7');
        assert_eq!(d(7).value(), 7);
    }
}
