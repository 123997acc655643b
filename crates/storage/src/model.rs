//! Transfer models mirroring the JSON served by the backend API. Values are
//! validated while being converted into domain types; the backend may carry
//! additional fields (such as `created_at`) which are ignored here.

use std::str::FromStr;

use chrono::NaiveDate;
use entrena_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Time(#[from] domain::TimeError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Rating(#[from] domain::RatingError),
    #[error(transparent)]
    SetCount(#[from] domain::SetCountError),
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub exercise_type: String,
    pub level: String,
    pub default_duration: u32,
    pub default_rest: u32,
    #[serde(default)]
    pub default_repetitions: Option<u32>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ConversionError;

    fn try_from(exercise: Exercise) -> Result<Self, Self::Error> {
        // Unknown types are kept as a catch-all instead of failing the whole
        // exercise list, unknown levels are rejected.
        let exercise_type = domain::ExerciseType::from_str(&exercise.exercise_type)
            .unwrap_or(domain::ExerciseType::Other);
        let level = domain::Level::from_str(&exercise.level)
            .map_err(|_| ConversionError::UnknownLevel(exercise.level.clone()))?;

        Ok(domain::Exercise {
            id: exercise.id.into(),
            name: domain::Name::new(&exercise.name)?,
            description: exercise.description,
            video_url: domain::VideoUrl::new(&exercise.video_url),
            exercise_type,
            level,
            default_duration: domain::Time::new(exercise.default_duration)?,
            default_rest: domain::Time::new(exercise.default_rest)?,
            default_repetitions: exercise
                .default_repetitions
                .map(domain::Reps::new)
                .transpose()?,
            instructions: exercise.instructions,
            muscle_groups: exercise.muscle_groups,
            equipment: exercise.equipment,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub exercise_id: Uuid,
    pub sets_completed: u32,
    pub total_duration: u32,
}

impl From<&domain::WorkoutSummary> for WorkoutSummary {
    fn from(summary: &domain::WorkoutSummary) -> Self {
        Self {
            exercise_id: *summary.exercise_id,
            sets_completed: summary.sets_completed.into(),
            total_duration: summary.total_duration,
        }
    }
}

impl TryFrom<WorkoutSummary> for domain::WorkoutSummary {
    type Error = ConversionError;

    fn try_from(summary: WorkoutSummary) -> Result<Self, Self::Error> {
        Ok(domain::WorkoutSummary {
            exercise_id: summary.exercise_id.into(),
            sets_completed: domain::SetCount::new(summary.sets_completed)?,
            total_duration: summary.total_duration,
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub exercises_completed: Vec<WorkoutSummary>,
    pub total_duration: u32,
    pub difficulty_rating: Option<u8>,
    pub energy_level: Option<u8>,
    pub notes: Option<String>,
}

impl TryFrom<WorkoutSession> for domain::WorkoutSession {
    type Error = ConversionError;

    fn try_from(session: WorkoutSession) -> Result<Self, Self::Error> {
        Ok(domain::WorkoutSession {
            id: session.id.into(),
            date: session.date,
            exercises_completed: session
                .exercises_completed
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            total_duration: session.total_duration,
            difficulty_rating: session
                .difficulty_rating
                .map(domain::Rating::new)
                .transpose()?,
            energy_level: session.energy_level.map(domain::Rating::new).transpose()?,
            notes: session.notes,
        })
    }
}

/// Body of a workout creation request. The backend assigns the ID.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutSession {
    pub date: NaiveDate,
    pub exercises_completed: Vec<WorkoutSummary>,
    pub total_duration: u32,
    pub difficulty_rating: Option<u8>,
    pub energy_level: Option<u8>,
    pub notes: Option<String>,
}

impl From<&domain::WorkoutSession> for NewWorkoutSession {
    fn from(session: &domain::WorkoutSession) -> Self {
        Self {
            date: session.date,
            exercises_completed: session.exercises_completed.iter().map(Into::into).collect(),
            total_duration: session.total_duration,
            difficulty_rating: session.difficulty_rating.map(Into::into),
            energy_level: session.energy_level.map(Into::into),
            notes: session.notes.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_sessions: u32,
    pub recent_sessions: u32,
    pub total_workout_time: u32,
    pub average_session_time: u32,
}

impl From<WorkoutStats> for domain::WorkoutStats {
    fn from(stats: WorkoutStats) -> Self {
        Self {
            total_sessions: stats.total_sessions,
            recent_sessions: stats.recent_sessions,
            total_workout_time: stats.total_workout_time,
            average_session_time: stats.average_session_time,
        }
    }
}
