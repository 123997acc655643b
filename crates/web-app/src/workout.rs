use std::{cell::RefCell, rc::Rc};

use chrono::Local;
use entrena_domain as domain;

use crate::schedule::TickSchedule;

/// Drives one exercise through its interval timer.
///
/// The workout owns the tick schedule that advances the timer once per
/// second. The schedule only runs while the timer does: pausing, resetting
/// and stopping cancel the pending tick, so no stale decrement can apply
/// afterwards. On completion the timer latches into its finished state and
/// the summary is held until it is collected with
/// [`take_summary`](OngoingWorkout::take_summary), which also tears the
/// schedule down.
pub struct OngoingWorkout {
    timer: Rc<RefCell<domain::IntervalTimer>>,
    schedule: TickSchedule,
    summary: Rc<RefCell<Option<domain::WorkoutSummary>>>,
}

impl OngoingWorkout {
    #[must_use]
    pub fn start(exercise: &domain::Exercise, total_sets: domain::SetCount) -> Self {
        Self {
            timer: Rc::new(RefCell::new(domain::IntervalTimer::start(
                exercise, total_sets,
            ))),
            schedule: TickSchedule::unscheduled(),
            summary: Rc::new(RefCell::new(None)),
        }
    }

    /// Starts or pauses the countdown.
    pub fn toggle(&mut self) {
        let running = {
            let mut timer = self.timer.borrow_mut();
            timer.toggle();
            timer.is_running()
        };
        if running {
            let timer = Rc::clone(&self.timer);
            let summary = Rc::clone(&self.summary);
            self.schedule.schedule(move || {
                if let domain::TickOutcome::Complete(completed) = timer.borrow_mut().tick() {
                    *summary.borrow_mut() = Some(completed);
                }
            });
        } else {
            self.schedule.cancel();
        }
    }

    /// Returns to the initial state for the exercise, discarding all
    /// progress and cancelling the pending tick.
    pub fn reset(&mut self) {
        self.schedule.cancel();
        self.summary.borrow_mut().take();
        self.timer.borrow_mut().reset();
    }

    /// Terminates the session. No summary is emitted.
    pub fn stop(&mut self) {
        self.schedule.cancel();
        self.summary.borrow_mut().take();
        self.timer.borrow_mut().stop();
    }

    /// The completion summary, if the session has finished. Returns it at
    /// most once and cancels the tick schedule when it does.
    pub fn take_summary(&mut self) -> Option<domain::WorkoutSummary> {
        let summary = self.summary.borrow_mut().take();
        if summary.is_some() {
            self.schedule.cancel();
        }
        summary
    }

    #[must_use]
    pub fn phase(&self) -> domain::Phase {
        self.timer.borrow().phase()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.timer.borrow().time_left()
    }

    /// Remaining phase time as `mm:ss` for display.
    #[must_use]
    pub fn clock(&self) -> String {
        domain::clock(self.time_left())
    }

    #[must_use]
    pub fn current_set(&self) -> u32 {
        self.timer.borrow().current_set()
    }

    #[must_use]
    pub fn total_sets(&self) -> domain::SetCount {
        self.timer.borrow().total_sets()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_running()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.borrow().is_finished()
    }
}

/// A session dated today, ready to be persisted.
#[must_use]
pub fn session_for_today(summary: domain::WorkoutSummary) -> domain::WorkoutSession {
    domain::WorkoutSession::from_summaries(Local::now().date_naive(), vec![summary])
}

/// Persists a completed workout. The timer has already reached its terminal
/// state by this point, so a failure here leaves no state to repair; the
/// caller reports it and may retry with the same summary.
pub async fn log_completed_workout<S: domain::WorkoutService>(
    service: &S,
    summary: domain::WorkoutSummary,
) -> Result<domain::WorkoutSession, domain::CreateError> {
    service.log_workout(session_for_today(summary)).await
}
