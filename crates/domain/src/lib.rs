#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod name;
mod service;
mod timer;
mod workout;

pub use error::{CreateError, ReadError, StorageError};
pub use exercise::{
    Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, ExerciseService, ExerciseType,
    Level, Reps, RepsError, Time, TimeError, VideoUrl,
};
pub use name::{Name, NameError};
pub use service::Service;
pub use timer::{
    IntervalTimer, Phase, SetCount, SetCountError, TickOutcome, WorkoutSummary, clock,
};
pub use workout::{
    Rating, RatingError, WorkoutRepository, WorkoutService, WorkoutSession, WorkoutSessionID,
    WorkoutStats,
};
