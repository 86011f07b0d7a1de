use gloo_timers::callback::Timeout;

/// Something that can run a task later. Dropping the returned handle
/// cancels the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Holds at most one pending "stop shaking" task.
pub struct ShakeTimer<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ShakeTimer<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    /// Cancels whatever was pending and schedules `task` instead.
    pub fn rearm<F>(&mut self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }

    /// A fired task still counts as armed until the owner cancels it.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::*;

    #[test]
    fn dropping_handle_cancels_task() {
        let clock = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(false));
        let handle = {
            let fired = fired.clone();
            clock.schedule(100, Box::new(move || *fired.borrow_mut() = true))
        };
        drop(handle);
        clock.advance(1_000);
        assert!(!*fired.borrow());
    }

    #[test]
    fn rearm_replaces_pending_task() {
        let clock = ManualScheduler::default();
        let mut timer = ShakeTimer::new(clock.clone());
        let fired = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second"] {
            let fired = fired.clone();
            timer.rearm(500, move || fired.borrow_mut().push(label));
        }
        assert_eq!(clock.pending(), 1);

        clock.advance(500);
        assert_eq!(*fired.borrow(), vec!["second"]);

        timer.cancel();
        assert!(!timer.is_armed());
    }
}
