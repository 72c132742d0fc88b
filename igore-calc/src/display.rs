//! What the screen label shows for a calculator display value.

use crate::calculator::ERROR_SENTINEL;
use crate::locale::Locale;

/// Characters that fit on the screen.
pub const DISPLAY_WIDTH: usize = 12;

/// Mantissa decimals used when a value is too wide.
pub const SCIENTIFIC_PRECISION: usize = 4;

/// Screen text for `value`.
///
/// The error sentinel becomes the localized error word. Anything wider
/// than [`DISPLAY_WIDTH`] is reformatted in scientific notation, e.g.
/// `"1234567890123"` shows as `"1.2346e12"`.
pub fn render(value: &str, locale: Locale) -> String {
    if value == ERROR_SENTINEL {
        return locale.error_word().to_string();
    }
    if value.chars().count() <= DISPLAY_WIDTH {
        return value.to_string();
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => format!("{:.*e}", SCIENTIFIC_PRECISION, n),
        _ => locale.error_word().to_string(),
    }
}
