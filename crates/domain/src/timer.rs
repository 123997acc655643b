use derive_more::{Display, Into};

use crate::{Exercise, ExerciseID, Time};

/// The two states of a single set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Rest,
}

/// The number of work/rest cycles of a session.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct SetCount(u32);

impl SetCount {
    pub const DEFAULT: SetCount = SetCount(3);

    pub fn new(value: u32) -> Result<Self, SetCountError> {
        if !(1..100).contains(&value) {
            return Err(SetCountError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl Default for SetCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetCountError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
}

/// Result of one completed session, reported exactly once when the rest phase
/// of the final set reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub exercise_id: ExerciseID,
    pub sets_completed: SetCount,
    pub total_duration: u32,
}

/// Observable effect of a single [`IntervalTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is paused or already finished; nothing changed.
    Idle,
    /// The countdown of the current phase advanced.
    Counting,
    /// The current phase ended and the given phase begins.
    PhaseChange(Phase),
    /// The rest phase of the final set ended; the session is over.
    Complete(WorkoutSummary),
}

/// Drives one exercise through `total_sets` repetitions of work followed by
/// rest, seeded from the exercise's default durations.
///
/// The timer does not schedule anything itself. A single external tick source
/// calls [`tick`](IntervalTimer::tick) once per elapsed second while the timer
/// is running. Phases advance automatically; pausing only halts the countdown
/// and never loses progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    exercise_id: ExerciseID,
    work_duration: Time,
    rest_duration: Time,
    total_sets: SetCount,
    current_set: u32,
    phase: Phase,
    time_left: u32,
    running: bool,
    finished: bool,
}

impl IntervalTimer {
    #[must_use]
    pub fn start(exercise: &Exercise, total_sets: SetCount) -> Self {
        Self {
            exercise_id: exercise.id,
            work_duration: exercise.default_duration,
            rest_duration: exercise.default_rest,
            total_sets,
            current_set: 1,
            phase: Phase::Work,
            time_left: exercise.default_duration.into(),
            running: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Remaining seconds of the current phase.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// The 1-indexed set currently being performed.
    #[must_use]
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    #[must_use]
    pub fn total_sets(&self) -> SetCount {
        self.total_sets
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Starts or pauses the countdown without affecting elapsed phase time.
    pub fn toggle(&mut self) {
        if !self.finished {
            self.running = !self.running;
        }
    }

    /// Advances the timer by one second.
    ///
    /// The countdown of the current phase is decremented first; when it
    /// reaches zero, the next phase begins within the same tick. A phase with
    /// a zero duration is skipped on the following tick. After the rest phase
    /// of the final set the session summary is returned and the timer becomes
    /// finished, turning all further calls into no-ops.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.finished {
            return TickOutcome::Idle;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
        }

        if self.time_left > 0 {
            return TickOutcome::Counting;
        }

        match self.phase {
            Phase::Work => {
                self.phase = Phase::Rest;
                self.time_left = self.rest_duration.into();
                TickOutcome::PhaseChange(Phase::Rest)
            }
            Phase::Rest if self.current_set < u32::from(self.total_sets) => {
                self.current_set += 1;
                self.phase = Phase::Work;
                self.time_left = self.work_duration.into();
                TickOutcome::PhaseChange(Phase::Work)
            }
            Phase::Rest => {
                self.running = false;
                self.finished = true;
                TickOutcome::Complete(self.summary())
            }
        }
    }

    /// Returns to the initial state for the exercise, discarding all progress.
    pub fn reset(&mut self) {
        self.phase = Phase::Work;
        self.time_left = self.work_duration.into();
        self.current_set = 1;
        self.running = false;
        self.finished = false;
    }

    /// Terminates the session without a summary.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            exercise_id: self.exercise_id,
            sets_completed: self.total_sets,
            total_duration: (u32::from(self.work_duration) + u32::from(self.rest_duration))
                * u32::from(self.total_sets),
        }
    }
}

/// `mm:ss` rendering of a number of seconds for the timer display.
#[must_use]
pub fn clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{ExerciseType, Level, Name, Reps, VideoUrl};

    use super::*;

    const EXERCISE_ID: u128 = 7;

    fn exercise(work: u32, rest: u32) -> Exercise {
        Exercise {
            id: EXERCISE_ID.into(),
            name: Name::new("Mountain Climber").unwrap(),
            description: String::from("Ejercicio cardiovascular"),
            video_url: VideoUrl::new("https://www.youtube.com/watch?v=nmwgirgXLYM"),
            exercise_type: ExerciseType::Cardio,
            level: Level::Intermediate,
            default_duration: Time::new(work).unwrap(),
            default_rest: Time::new(rest).unwrap(),
            default_repetitions: Some(Reps::new(20).unwrap()),
            instructions: vec![],
            muscle_groups: vec![String::from("Core")],
            equipment: vec![],
        }
    }

    fn running_timer(work: u32, rest: u32, sets: u32) -> IntervalTimer {
        let mut timer = IntervalTimer::start(&exercise(work, rest), SetCount::new(sets).unwrap());
        timer.toggle();
        timer
    }

    #[test]
    fn test_start_state() {
        let timer = IntervalTimer::start(&exercise(30, 15), SetCount::DEFAULT);
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.time_left(), 30);
        assert_eq!(timer.current_set(), 1);
        assert_eq!(timer.total_sets(), SetCount::DEFAULT);
        assert!(!timer.is_running());
        assert!(!timer.is_finished());
    }

    #[test]
    fn test_tick_while_paused_changes_nothing() {
        let mut timer = IntervalTimer::start(&exercise(30, 15), SetCount::DEFAULT);
        let before = timer.clone();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer, before);
    }

    #[test]
    fn test_toggle_preserves_progress() {
        let mut timer = running_timer(30, 15, 3);
        for _ in 0..10 {
            timer.tick();
        }
        let time_left = timer.time_left();
        let phase = timer.phase();

        timer.toggle();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.time_left(), time_left);
        assert_eq!(timer.phase(), phase);

        timer.toggle();
        assert!(timer.is_running());
        assert_eq!(timer.time_left(), time_left);
        assert_eq!(timer.phase(), phase);
    }

    #[rstest]
    #[case(30, 15, 3)]
    #[case(2, 1, 2)]
    #[case(45, 40, 1)]
    fn test_ticks_until_completion(#[case] work: u32, #[case] rest: u32, #[case] sets: u32) {
        let mut timer = running_timer(work, rest, sets);
        let expected_ticks = sets * (work + rest);
        let mut summaries = vec![];

        for remaining in (0..expected_ticks).rev() {
            match timer.tick() {
                TickOutcome::Complete(summary) => {
                    summaries.push(summary);
                    assert_eq!(remaining, 0, "completion before the final tick");
                }
                TickOutcome::Counting | TickOutcome::PhaseChange(_) => {
                    assert!(remaining > 0, "no completion on the final tick");
                }
                TickOutcome::Idle => panic!("running timer must not be idle"),
            }
        }

        assert_eq!(
            summaries,
            vec![WorkoutSummary {
                exercise_id: EXERCISE_ID.into(),
                sets_completed: SetCount::new(sets).unwrap(),
                total_duration: sets * (work + rest),
            }]
        );
        assert!(timer.is_finished());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_work_and_rest_phases_alternate() {
        let mut timer = running_timer(2, 2, 3);

        // Set 1
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Work));
        assert_eq!(timer.current_set(), 2);

        // Set 2, up to the last second of the rest phase
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert_eq!(timer.tick(), TickOutcome::Counting);
        assert_eq!(timer.phase(), Phase::Rest);
        assert_eq!(timer.time_left(), 1);
        assert_eq!(timer.current_set(), 2);

        // A single tick moves to the work phase of the next set
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Work));
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.time_left(), 2);
        assert_eq!(timer.current_set(), 3);
    }

    #[test]
    fn test_completion_happens_exactly_once() {
        let mut timer = running_timer(1, 1, 2);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Work));
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert!(matches!(timer.tick(), TickOutcome::Complete(_)));

        assert_eq!(timer.tick(), TickOutcome::Idle);
        timer.toggle();
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_zero_durations_degrade_to_immediate_transitions() {
        let mut timer = running_timer(0, 0, 2);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Work));
        assert_eq!(timer.current_set(), 2);
        assert_eq!(timer.tick(), TickOutcome::PhaseChange(Phase::Rest));
        assert_eq!(
            timer.tick(),
            TickOutcome::Complete(WorkoutSummary {
                exercise_id: EXERCISE_ID.into(),
                sets_completed: SetCount::new(2).unwrap(),
                total_duration: 0,
            })
        );
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut timer = running_timer(30, 15, 3);
        for _ in 0..50 {
            timer.tick();
        }
        assert_eq!(timer.current_set(), 2);

        timer.reset();
        assert_eq!(timer.phase(), Phase::Work);
        assert_eq!(timer.time_left(), 30);
        assert_eq!(timer.current_set(), 1);
        assert!(!timer.is_running());
        assert!(!timer.is_finished());
    }

    #[test]
    fn test_stop_never_emits_a_summary() {
        let mut timer = running_timer(2, 1, 2);
        for _ in 0..5 {
            timer.tick();
        }

        timer.stop();
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[rstest]
    #[case(1, Ok(SetCount(1)))]
    #[case(3, Ok(SetCount(3)))]
    #[case(99, Ok(SetCount(99)))]
    #[case(0, Err(SetCountError::OutOfRange))]
    #[case(100, Err(SetCountError::OutOfRange))]
    fn test_set_count_new(#[case] value: u32, #[case] expected: Result<SetCount, SetCountError>) {
        assert_eq!(SetCount::new(value), expected);
    }

    #[rstest]
    #[case(0, "00:00")]
    #[case(5, "00:05")]
    #[case(65, "01:05")]
    #[case(135, "02:15")]
    #[case(600, "10:00")]
    fn test_clock(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(clock(seconds), expected);
    }
}
