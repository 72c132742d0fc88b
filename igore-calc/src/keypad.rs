//! Keypad buttons and the click-to-calculator mapping.
//!
//! Each click becomes exactly one [`Calculator`] call; the returned display
//! value and a [`Status`] describing the action go back to the window.

use crate::calculator::{CalcError, Calculator, Digit, Operation, UnaryOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    Unary(UnaryOp),
}

/// Groups keys for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Function,
    Operator,
    Clear,
}

const fn digit(n: u8) -> Button {
    match Digit::new(n) {
        Some(d) => Button::Digit(d),
        None => panic!("digit out of range"),
    }
}

/// Keypad rows, top to bottom.
pub const LAYOUT: [[Button; 4]; 5] = [
    [Button::Clear, Button::Unary(UnaryOp::Negate), Button::Unary(UnaryOp::Sqrt), Button::Operator(Operation::Divide)],
    [digit(7), digit(8), digit(9), Button::Operator(Operation::Multiply)],
    [digit(4), digit(5), digit(6), Button::Operator(Operation::Subtract)],
    [digit(1), digit(2), digit(3), Button::Operator(Operation::Add)],
    [digit(0), Button::Decimal, Button::Unary(UnaryOp::Square), Button::Equals],
];

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Digit(d) => DIGIT_LABELS[d.value() as usize],
            Button::Decimal => ".",
            Button::Operator(op) => op.symbol(),
            Button::Equals => "=",
            Button::Clear => "AC",
            Button::Unary(UnaryOp::Negate) => "±",
            Button::Unary(UnaryOp::Sqrt) => "√",
            Button::Unary(UnaryOp::Square) => "x²",
        }
    }

    pub fn kind(self) -> ButtonKind {
        match self {
            Button::Digit(_) | Button::Decimal => ButtonKind::Digit,
            Button::Unary(_) => ButtonKind::Function,
            Button::Operator(_) | Button::Equals => ButtonKind::Operator,
            Button::Clear => ButtonKind::Clear,
        }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// The most recent action, for the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Result,
    CalcFailed(CalcError),
    /// Input ignored while an error is on screen.
    Locked,
    Cleared,
    Negated,
    SquareRoot { input: f64, output: f64 },
    Squared { input: f64, output: f64 },
    /// A handler panicked; carries the panic text.
    Internal(String),
}

/// Result of one click.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Raw display value; pass it through `display::render` before showing.
    pub display: String,
    pub status: Status,
}

pub fn dispatch(calc: &mut Calculator, button: Button) -> Outcome {
    tracing::debug!(button = button.label(), "key pressed");

    if calc.is_error() && button != Button::Clear {
        return Outcome { display: calc.display(), status: Status::Locked };
    }

    let input = calc.current_value();
    let display = match button {
        Button::Digit(d) => calc.input_digit(d),
        Button::Decimal => calc.input_decimal_point(),
        Button::Operator(op) => calc.input_operator(op),
        Button::Equals => calc.evaluate(),
        Button::Clear => calc.reset(),
        Button::Unary(op) => calc.apply_unary(op),
    };

    let status = match (calc.last_error(), button) {
        (Some(e), _) => Status::CalcFailed(e.clone()),
        (None, Button::Digit(d)) => Status::Digit(d),
        (None, Button::Decimal) => Status::Decimal,
        (None, Button::Operator(op)) => Status::Operator(op),
        (None, Button::Equals) => Status::Result,
        (None, Button::Clear) => Status::Cleared,
        (None, Button::Unary(UnaryOp::Negate)) => Status::Negated,
        (None, Button::Unary(op)) => {
            let output = calc.current_value().unwrap_or_default();
            let input = input.unwrap_or_default();
            if op == UnaryOp::Sqrt {
                Status::SquareRoot { input, output }
            } else {
                Status::Squared { input, output }
            }
        }
    };

    Outcome { display, status }
}
