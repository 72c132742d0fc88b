//! Panic isolation for per-click and per-frame work.
//!
//! A desktop tool should never die because one handler hit a bug. Wrap the
//! handler in [`catch_or`] and show a fallback instead.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    catch_or_else(|_| fallback, f)
}

/// Like [`catch_or`], but builds the fallback from the panic message.
pub fn catch_or_else<T>(fallback: impl FnOnce(&str) -> T, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%message, "caught panic in handler, recovered");
            fallback(message)
        }
    }
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        assert_eq!(catch_or(0, || 42), 42);
    }

    #[test]
    fn test_panic_yields_fallback() {
        let out = catch_or("fallback", || -> &str { panic!("boom") });
        assert_eq!(out, "fallback");
    }

    #[test]
    fn test_fallback_sees_message() {
        let out = catch_or_else(|msg| msg.to_string(), || -> String { panic!("bad {}", 7) });
        assert_eq!(out, "bad 7");

        let out = catch_or_else(|msg| msg.to_string(), || -> String { panic!("static text") });
        assert_eq!(out, "static text");
    }

    #[test]
    fn test_state_mutated_before_panic_is_kept() {
        let mut hits = 0;
        let _ = catch_or((), || {
            hits += 1;
            panic!("after mutation");
        });
        assert_eq!(hits, 1);
    }
}
