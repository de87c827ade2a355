use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    #[error("a detection request is already in flight")]
    AlreadyInFlight,
    #[error("pipeline is stopping, new detection requests are rejected")]
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotState {
    Idle,
    Awaiting,
    Cancelled,
}

/// Tracks the single in-flight detection request.
///
/// Invariant: at most one request is outstanding at any time. Once the
/// slot is cancelled it stays cancelled; results completing afterwards
/// are reported stale so the driver discards them instead of drawing a
/// frame after stop.
pub struct DetectionSlot {
    state: SlotState,
}

impl DetectionSlot {
    pub fn new() -> Self {
        Self {
            state: SlotState::Idle,
        }
    }

    /// Claims the slot for a new request.
    pub fn submit(&mut self) -> Result<(), SlotError> {
        match self.state {
            SlotState::Idle => {
                self.state = SlotState::Awaiting;
                Ok(())
            }
            SlotState::Awaiting => Err(SlotError::AlreadyInFlight),
            SlotState::Cancelled => Err(SlotError::Stopped),
        }
    }

    /// Releases the slot when its result arrives. Returns `false` if the
    /// result is stale and must be discarded.
    pub fn complete(&mut self) -> bool {
        match self.state {
            SlotState::Awaiting => {
                self.state = SlotState::Idle;
                true
            }
            SlotState::Idle | SlotState::Cancelled => false,
        }
    }

    pub fn cancel(&mut self) {
        self.state = SlotState::Cancelled;
    }
}

impl Default for DetectionSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_then_complete_cycles() {
        let mut slot = DetectionSlot::new();
        for _ in 0..3 {
            slot.submit().unwrap();
            assert!(slot.complete());
        }
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut slot = DetectionSlot::new();
        slot.submit().unwrap();
        assert_eq!(slot.submit(), Err(SlotError::AlreadyInFlight));
    }

    #[test]
    fn test_complete_without_submit_is_stale() {
        let mut slot = DetectionSlot::new();
        assert!(!slot.complete());
    }

    #[test]
    fn test_cancel_marks_pending_result_stale() {
        let mut slot = DetectionSlot::new();
        slot.submit().unwrap();
        slot.cancel();
        assert!(!slot.complete());
    }

    #[test]
    fn test_cancelled_slot_rejects_new_submits() {
        let mut slot = DetectionSlot::new();
        slot.cancel();
        assert_eq!(slot.submit(), Err(SlotError::Stopped));
        // Cancellation is sticky
        assert!(!slot.complete());
        assert_eq!(slot.submit(), Err(SlotError::Stopped));
    }
}
