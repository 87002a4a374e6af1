use gloo_timers::callback::Timeout;

/// Holds at most one scheduled callback. Scheduling cancels whatever was
/// there before; dropping the slot cancels the pending callback too.
#[derive(Default)]
pub struct DebounceSlot {
    timeout: Option<Timeout>,
}

impl DebounceSlot {
    pub fn schedule<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.timeout = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        self.timeout = None;
    }
}
