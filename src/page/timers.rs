//! Deferred callbacks on a virtual clock.
//!
//! Nothing here sleeps. The host reports elapsed time through
//! [`Timers::pop_due`] and runs each task it gets back, in due order.

use std::time::Duration;

/// Work scheduled for later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Look at a field after a paste has landed.
    InspectPaste { field: String },
    /// Remove one character-limit notice.
    DismissWarning { id: u64 },
    /// Start the banner's exit animation.
    BannerExit,
    /// Remove the banner.
    DismissBanner,
    /// Clear the form after a submission.
    ResetForm,
    /// Coalesced draft save.
    DebouncedSave,
    /// Drop the root transition class.
    EndTransition,
    /// Release the theme toggle's pressed state.
    ReleasePress,
    /// Release the language selector's pressed state.
    ReleaseLocalePress,
    /// Bring faded localized text back to full opacity.
    RestoreTextOpacity,
    /// Detach the text fade transition.
    EndTextFade,
}

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Duration,
    task: Task,
}

/// Pending deferred tasks plus the current virtual time.
#[derive(Debug, Default)]
pub struct Timers {
    now: Duration,
    next_id: u64,
    pending: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the page loaded.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `task` to run `delay` from now. A zero delay runs on the
    /// next call to [`pop_due`](Self::pop_due).
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    /// Cancels a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Removes and returns the earliest task due at or before `until`,
    /// moving the clock to its due time. Ties run in scheduling order.
    ///
    /// Returns `None` once nothing else is due; the clock then sits at `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i);
        match index {
            Some(i) => {
                let timer = self.pending.remove(i);
                self.now = self.now.max(timer.due);
                Some(timer.task)
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
