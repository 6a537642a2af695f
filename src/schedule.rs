/// Delayed one-shot tasks with cancellation handles
use gloo_timers::callback::Timeout;

use crate::state::Followup;

/// Schedules `task` to run once after `after_ms`. Dropping or cancelling the
/// returned handle before then means the task never runs.
pub trait Scheduler {
    type Handle: Cancel;

    fn schedule<F>(&self, after_ms: u32, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

pub trait Cancel {
    fn cancel(self);
}

/// window.setTimeout via gloo
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserScheduler;

pub struct PendingTimeout(Timeout);

impl Cancel for PendingTimeout {
    fn cancel(self) {
        // The returned closure is the never-run callback
        drop(self.0.cancel());
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = PendingTimeout;

    fn schedule<F>(&self, after_ms: u32, task: F) -> PendingTimeout
    where
        F: FnOnce() + 'static,
    {
        PendingTimeout(Timeout::new(after_ms, task))
    }
}

/// Turn a follow-up into its scheduled task
pub fn arm_followup<S, C, R>(
    scheduler: &S,
    followup: Followup,
    on_close: C,
    on_reset: R,
) -> S::Handle
where
    S: Scheduler,
    C: FnOnce() + 'static,
    R: FnOnce() + 'static,
{
    match followup {
        Followup::ClosePopup { after_ms } => scheduler.schedule(after_ms, on_close),
        Followup::ResetToIdle { after_ms } => scheduler.schedule(after_ms, on_reset),
    }
}
