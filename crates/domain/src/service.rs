use log::{debug, error};

use crate::{
    CreateError, Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, ExerciseService,
    ReadError, WorkoutRepository, WorkoutService, WorkoutSession, WorkoutStats,
};

/// Application service in front of a repository. Failures are logged before
/// being passed on; a missing connection is expected during offline use and
/// only logged at debug level.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self, filter: ExerciseFilter) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(filter),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(
            self.repository.read_exercise(id),
            ReadError,
            "get",
            "exercise"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<WorkoutSession>, ReadError> {
        log_on_error!(self.repository.read_workouts(), ReadError, "get", "workouts")
    }

    async fn get_workout_stats(&self) -> Result<WorkoutStats, ReadError> {
        log_on_error!(
            self.repository.read_workout_stats(),
            ReadError,
            "get",
            "workout stats"
        )
    }

    async fn log_workout(&self, workout: WorkoutSession) -> Result<WorkoutSession, CreateError> {
        log_on_error!(
            self.repository.create_workout(workout),
            CreateError,
            "create",
            "workout"
        )
    }
}
