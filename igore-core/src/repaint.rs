//! Input-driven repaint control.
//!
//! egui redraws the whole window every frame. A calculator changes only
//! when the user clicks, so the controller never schedules timed repaints:
//! a frame is painted because of input, or because the app marked itself
//! dirty (e.g. a settings change made from a menu). Otherwise egui sleeps
//! until the next event.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()` and
//! [`RepaintController::end_frame`] at the bottom.

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// Pointer or keyboard activity.
    Input,
    /// The app asked for a repaint.
    StateChange,
    /// Woken by something outside our control (window resize, focus).
    External,
}

impl RepaintReason {
    fn classify(frame: u64, had_input: bool, needs_repaint: bool) -> Self {
        if frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if needs_repaint {
            RepaintReason::StateChange
        } else {
            RepaintReason::External
        }
    }
}

#[derive(Debug)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Ask for one more frame after this one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.observe(had_input);
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.finish() {
            ctx.request_repaint();
        }
    }

    fn observe(&mut self, had_input: bool) {
        self.reason = RepaintReason::classify(self.frame, had_input, self.needs_repaint);
        self.needs_repaint = false;
    }

    /// Advances the frame counter; true when another frame was requested
    /// while this one was being built.
    fn finish(&mut self) -> bool {
        self.frame += 1;
        self.needs_repaint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_init() {
        let mut rc = RepaintController::new();
        rc.observe(true);
        assert_eq!(rc.reason(), RepaintReason::Init);
        assert!(!rc.finish());
        assert_eq!(rc.frame(), 1);
    }

    #[test]
    fn test_input_beats_state_change() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.finish();

        rc.mark_needs_repaint();
        rc.observe(true);
        assert_eq!(rc.reason(), RepaintReason::Input);
    }

    #[test]
    fn test_mark_during_frame_requests_another() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.mark_needs_repaint();
        assert!(rc.finish());

        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::StateChange);
        assert!(!rc.finish());
    }

    #[test]
    fn test_idle_wake_is_external() {
        let mut rc = RepaintController::new();
        rc.observe(false);
        rc.finish();
        rc.observe(false);
        assert_eq!(rc.reason(), RepaintReason::External);
    }
}
