use chrono::NaiveDate;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, ReadError, WorkoutSummary};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    async fn read_workout_stats(&self) -> Result<WorkoutStats, ReadError>;
    async fn create_workout(&self, workout: WorkoutSession)
    -> Result<WorkoutSession, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    async fn get_workout_stats(&self) -> Result<WorkoutStats, ReadError>;
    async fn log_workout(&self, workout: WorkoutSession) -> Result<WorkoutSession, CreateError>;
}

/// One persisted workout: the summaries of the completed exercises plus
/// optional self-assessment. The ID is assigned by the backend and nil until
/// then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: WorkoutSessionID,
    pub date: NaiveDate,
    pub exercises_completed: Vec<WorkoutSummary>,
    pub total_duration: u32,
    pub difficulty_rating: Option<Rating>,
    pub energy_level: Option<Rating>,
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// A session to be persisted, built from the summaries of a completed
    /// workout. Ratings and notes are left unset.
    #[must_use]
    pub fn from_summaries(date: NaiveDate, exercises_completed: Vec<WorkoutSummary>) -> Self {
        let total_duration = exercises_completed.iter().map(|s| s.total_duration).sum();
        Self {
            id: WorkoutSessionID::nil(),
            date,
            exercises_completed,
            total_duration,
            difficulty_rating: None,
            energy_level: None,
            notes: None,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSessionID(Uuid);

impl WorkoutSessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A 1 to 5 self-assessment of difficulty or energy.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if !(1..=5).contains(&value) {
            return Err(RatingError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RatingError {
    #[error("Rating must be in the range 1 to 5")]
    OutOfRange,
}

/// Aggregate statistics served by the backend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_sessions: u32,
    /// Sessions within the last 30 days.
    pub recent_sessions: u32,
    /// Cumulative workout time in seconds.
    pub total_workout_time: u32,
    /// Average session time in seconds.
    pub average_session_time: u32,
}

impl WorkoutStats {
    /// Total workout time rounded to whole minutes for display.
    #[must_use]
    pub fn total_workout_minutes(&self) -> u32 {
        (self.total_workout_time + 30) / 60
    }
}
