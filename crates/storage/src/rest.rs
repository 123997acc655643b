use entrena_domain as domain;
use gloo_net::http::Request;

use crate::model;

/// Client for the backend REST API. All routes are relative to the host
/// serving the application, under the `api/` prefix.
pub struct Rest;

impl domain::ExerciseRepository for Rest {
    async fn read_exercises(
        &self,
        filter: domain::ExerciseFilter,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let exercises: Vec<model::Exercise> =
            fetch(Request::get(&exercises_url(filter)).build().unwrap()).await?;
        exercises
            .into_iter()
            .map(|exercise| domain::Exercise::try_from(exercise).map_err(into_read_error))
            .collect()
    }

    async fn read_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        let exercise: model::Exercise = fetch(
            Request::get(&format!("api/exercises/{}", *id))
                .build()
                .unwrap(),
        )
        .await?;
        domain::Exercise::try_from(exercise).map_err(into_read_error)
    }
}

impl domain::WorkoutRepository for Rest {
    async fn read_workouts(&self) -> Result<Vec<domain::WorkoutSession>, domain::ReadError> {
        let sessions: Vec<model::WorkoutSession> =
            fetch(Request::get("api/workouts").build().unwrap()).await?;
        sessions
            .into_iter()
            .map(|session| {
                domain::WorkoutSession::try_from(session)
                    .map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }

    async fn read_workout_stats(&self) -> Result<domain::WorkoutStats, domain::ReadError> {
        let stats: model::WorkoutStats =
            fetch(Request::get("api/workouts/stats").build().unwrap()).await?;
        Ok(stats.into())
    }

    async fn create_workout(
        &self,
        workout: domain::WorkoutSession,
    ) -> Result<domain::WorkoutSession, domain::CreateError> {
        let created: model::WorkoutSession = fetch(
            Request::post("api/workouts")
                .json(&model::NewWorkoutSession::from(&workout))
                .expect("serialization failed"),
        )
        .await?;
        domain::WorkoutSession::try_from(created)
            .map_err(|err| domain::CreateError::Other(Box::new(err)))
    }
}

fn exercises_url(filter: domain::ExerciseFilter) -> String {
    let mut url = String::from("api/exercises");
    let mut params = vec![];
    if let Some(exercise_type) = filter.exercise_type {
        params.push(format!("exercise_type={exercise_type}"));
    }
    if let Some(level) = filter.level {
        params.push(format!("level={level}"));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

fn into_read_error(err: model::ConversionError) -> domain::ReadError {
    domain::ReadError::Other(Box::new(err))
}

#[derive(thiserror::Error, Debug)]
enum FetchError {
    #[error("no connection")]
    NoConnection,
    #[error("{status} {text}")]
    Status { status: u16, text: String },
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl From<FetchError> for domain::ReadError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NoConnection => domain::StorageError::NoConnection.into(),
            error => domain::ReadError::Other(Box::new(error)),
        }
    }
}

impl From<FetchError> for domain::CreateError {
    fn from(value: FetchError) -> Self {
        match value {
            FetchError::NoConnection => domain::StorageError::NoConnection.into(),
            FetchError::Status { status: 409, .. } => domain::CreateError::Conflict,
            error => domain::CreateError::Other(Box::new(error)),
        }
    }
}

async fn fetch<T>(request: Request) -> Result<T, FetchError>
where
    T: 'static + for<'de> serde::Deserialize<'de>,
{
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                response
                    .json::<T>()
                    .await
                    .map_err(|error| FetchError::Deserialization(format!("{error:?}")))
            } else {
                Err(FetchError::Status {
                    status: response.status(),
                    text: response.status_text(),
                })
            }
        }
        Err(_) => Err(FetchError::NoConnection),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, None, "api/exercises")]
    #[case(
        Some(domain::ExerciseType::Cardio),
        None,
        "api/exercises?exercise_type=cardio"
    )]
    #[case(None, Some(domain::Level::Beginner), "api/exercises?level=beginner")]
    #[case(
        Some(domain::ExerciseType::FullBody),
        Some(domain::Level::Advanced),
        "api/exercises?exercise_type=full_body&level=advanced"
    )]
    fn test_exercises_url(
        #[case] exercise_type: Option<domain::ExerciseType>,
        #[case] level: Option<domain::Level>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            exercises_url(domain::ExerciseFilter {
                exercise_type,
                level,
            }),
            expected
        );
    }

    #[test]
    fn test_fetch_error_conversion() {
        assert!(matches!(
            domain::ReadError::from(FetchError::NoConnection),
            domain::ReadError::Storage(domain::StorageError::NoConnection)
        ));
        assert!(matches!(
            domain::CreateError::from(FetchError::Status {
                status: 409,
                text: String::from("Conflict")
            }),
            domain::CreateError::Conflict
        ));
        assert!(matches!(
            domain::CreateError::from(FetchError::Status {
                status: 500,
                text: String::from("Internal Server Error")
            }),
            domain::CreateError::Other(_)
        ));
    }
}
