//! igore-calc: a four-function desktop calculator.
//!
//! Everything here is free of GUI code: the state machine, the keypad
//! mapping, display formatting, wording and settings. The egui window
//! lives in the binary.

pub mod calculator;
pub mod display;
pub mod keypad;
pub mod locale;
pub mod settings;

pub use calculator::{CalcError, Calculator, Digit, Operation, UnaryOp, ERROR_SENTINEL};
pub use keypad::{dispatch, Button, Outcome, Status};
pub use locale::Locale;
pub use settings::CalcSettings;
