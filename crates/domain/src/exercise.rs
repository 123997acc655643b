use derive_more::{AsRef, Deref, Display, Into};
use thiserror::Error;
use uuid::Uuid;

use crate::{Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self, filter: ExerciseFilter) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self, filter: ExerciseFilter) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub description: String,
    pub video_url: VideoUrl,
    pub exercise_type: ExerciseType,
    pub level: Level,
    pub default_duration: Time,
    pub default_rest: Time,
    pub default_repetitions: Option<Reps>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseType {
    Abdominal,
    Pectoral,
    Cardio,
    FullBody,
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// Criteria for narrowing an exercise list, matching the query parameters of
/// the exercise endpoint. An empty filter matches every exercise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub exercise_type: Option<ExerciseType>,
    pub level: Option<Level>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.exercise_type
            .is_none_or(|exercise_type| exercise.exercise_type == exercise_type)
            && self.level.is_none_or(|level| exercise.level == level)
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct VideoUrl(String);

impl VideoUrl {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self(url.trim().to_string())
    }

    /// The YouTube video ID, if the URL is a `watch?v=` or `youtu.be` link.
    #[must_use]
    pub fn youtube_id(&self) -> Option<&str> {
        let rest = self
            .0
            .split_once("youtube.com/watch?v=")
            .or_else(|| self.0.split_once("youtu.be/"))
            .map(|(_, rest)| rest)?;
        let id = rest.split(['&', '?', '#', '\n']).next().unwrap_or_default();
        if id.is_empty() { None } else { Some(id) }
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> Option<String> {
        self.youtube_id()
            .map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    }

    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        self.youtube_id()
            .map(|id| format!("https://www.youtube.com/embed/{id}"))
    }
}

/// A duration in seconds of a single work or rest phase.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(0..1000).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 0 to 999")]
    OutOfRange,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}
