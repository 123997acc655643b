use gloo_timers::callback::Interval;

/// Cancellable once-per-second tick source.
///
/// The handle owns the underlying interval: cancelling or dropping it clears
/// the scheduled callback, so no tick can fire after its owner is gone. Only
/// one callback is scheduled at a time; scheduling again replaces the
/// previous one.
#[derive(Default)]
pub struct TickSchedule {
    interval: Option<Interval>,
}

impl TickSchedule {
    const TICK_MILLIS: u32 = 1000;

    #[must_use]
    pub fn unscheduled() -> Self {
        Self { interval: None }
    }

    pub fn schedule<F: FnMut() + 'static>(&mut self, callback: F) {
        self.interval = Some(Interval::new(Self::TICK_MILLIS, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.interval.is_some()
    }
}
