//! Submission status and the timer that clears it

use std::time::{Duration, Instant};

/// How long a success or error banner stays up before reverting to unset
pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Outcome of the most recent submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Banner title shown to the user
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Success => Some("Message Sent Successfully!"),
            Self::Error => Some("Failed to Send Message"),
        }
    }

    /// Banner body shown to the user. Never includes the underlying cause.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Success => Some(
                "Thank you for reaching out! I've received your message and will get back to you within 24 hours.",
            ),
            Self::Error => Some(
                "There was a problem sending your message. Please try again or contact me directly via email.",
            ),
        }
    }
}

/// Lifecycle position of the form, derived from the in-flight flag and status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmissionPhase {
    pub fn derive(submitting: bool, status: SubmissionStatus) -> Self {
        if submitting {
            return Self::Pending;
        }
        match status {
            SubmissionStatus::Unset => Self::Idle,
            SubmissionStatus::Success => Self::Success,
            SubmissionStatus::Error => Self::Error,
        }
    }
}

/// A single pending reversion of the status back to unset.
///
/// Owned by the form; there is never more than one. Scheduling a new timer
/// replaces the old deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTimer {
    pub deadline: Instant,
}

impl StatusTimer {
    pub fn schedule(now: Instant) -> Self {
        Self {
            deadline: now + STATUS_DISPLAY_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_unset() {
        let status = SubmissionStatus::default();
        assert_eq!(status, SubmissionStatus::Unset);
        assert!(!status.is_set());
        assert!(status.title().is_none());
        assert!(status.description().is_none());
    }

    #[test]
    fn test_error_description_is_generic() {
        let text = SubmissionStatus::Error.description().unwrap();
        assert!(text.contains("try again"));
        assert!(text.contains("contact me directly"));
    }

    #[test]
    fn test_phase_pending_wins_over_status() {
        assert_eq!(
            SubmissionPhase::derive(true, SubmissionStatus::Unset),
            SubmissionPhase::Pending
        );
        assert_eq!(
            SubmissionPhase::derive(false, SubmissionStatus::Unset),
            SubmissionPhase::Idle
        );
        assert_eq!(
            SubmissionPhase::derive(false, SubmissionStatus::Success),
            SubmissionPhase::Success
        );
        assert_eq!(
            SubmissionPhase::derive(false, SubmissionStatus::Error),
            SubmissionPhase::Error
        );
    }

    #[test]
    fn test_timer_expires_after_display_duration() {
        let now = Instant::now();
        let timer = StatusTimer::schedule(now);
        assert!(!timer.is_expired(now));
        assert!(!timer.is_expired(now + Duration::from_millis(4999)));
        assert!(timer.is_expired(now + STATUS_DISPLAY_DURATION));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let now = Instant::now();
        let timer = StatusTimer::schedule(now);
        assert_eq!(timer.remaining(now), STATUS_DISPLAY_DURATION);
        assert_eq!(
            timer.remaining(now + Duration::from_secs(60)),
            Duration::ZERO
        );
    }
}
