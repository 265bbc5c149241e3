//! Host clipboard seam and the "Copied!" feedback state.

use std::time::{Duration, Instant};

use laguerre_model::ClipboardConfig;

use crate::timer::ScheduledTask;

/// The host clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents. The error string is shown to the user.
    fn write(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    /// A copy succeeded recently; the copy control shows confirmation.
    Copied,
}

/// Feedback after a successful copy, reverting to [`CopyStatus::Idle`]
/// after a fixed duration.
#[derive(Debug, Clone)]
pub struct ClipboardFeedback {
    duration: Duration,
    revert: ScheduledTask,
}

impl ClipboardFeedback {
    pub fn new(config: &ClipboardConfig) -> Self {
        Self {
            duration: config.feedback_duration(),
            revert: ScheduledTask::new(),
        }
    }

    pub fn status(&self) -> CopyStatus {
        if self.revert.is_pending() {
            CopyStatus::Copied
        } else {
            CopyStatus::Idle
        }
    }

    /// Enter `Copied`, restarting the revert deadline if already there.
    pub fn mark_copied(&mut self, now: Instant) {
        self.revert.schedule(now, self.duration);
    }

    /// Returns true when this poll reverted the feedback.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.revert.poll(now)
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.revert.remaining(now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.revert.deadline()
    }

    pub fn cancel(&mut self) {
        self.revert.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_reverts_after_duration() {
        let start = Instant::now();
        let mut feedback = ClipboardFeedback::new(&ClipboardConfig::default());
        assert_eq!(feedback.status(), CopyStatus::Idle);

        feedback.mark_copied(start);
        assert_eq!(feedback.status(), CopyStatus::Copied);
        assert!(!feedback.poll(start + Duration::from_millis(1500)));
        assert!(feedback.poll(start + Duration::from_millis(2000)));
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }
}
