use crate::domain::repository::{ActivityRepository, EnrollmentRepository};
use crate::error::ActivitiesServiceError;

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub activity_name: String,
    pub email: String,
}

pub struct SignUpUseCase<A: ActivityRepository, E: EnrollmentRepository> {
    pub activities: A,
    pub enrollments: E,
}

impl<A: ActivityRepository, E: EnrollmentRepository> SignUpUseCase<A, E> {
    pub async fn execute(&self, input: SignUpInput) -> Result<(), ActivitiesServiceError> {
        let activity = self
            .activities
            .find_by_name(&input.activity_name)
            .await?
            .ok_or(ActivitiesServiceError::ActivityNotFound)?;

        // Duplicate wins over capacity: a student already on the roster gets
        // the duplicate answer even when the activity is full.
        if self
            .enrollments
            .find(activity.id, &input.email)
            .await?
            .is_some()
        {
            return Err(ActivitiesServiceError::AlreadySignedUp);
        }

        let enrolled = self.enrollments.count(activity.id).await?;
        if activity.is_full(enrolled) {
            return Err(ActivitiesServiceError::ActivityFull);
        }

        self.enrollments.create(activity.id, &input.email).await
    }
}

// ── Unregister ───────────────────────────────────────────────────────────────

pub struct UnregisterInput {
    pub activity_name: String,
    pub email: String,
}

pub struct UnregisterUseCase<A: ActivityRepository, E: EnrollmentRepository> {
    pub activities: A,
    pub enrollments: E,
}

impl<A: ActivityRepository, E: EnrollmentRepository> UnregisterUseCase<A, E> {
    pub async fn execute(&self, input: UnregisterInput) -> Result<(), ActivitiesServiceError> {
        let activity = self
            .activities
            .find_by_name(&input.activity_name)
            .await?
            .ok_or(ActivitiesServiceError::ActivityNotFound)?;

        let deleted = self.enrollments.delete(activity.id, &input.email).await?;
        if !deleted {
            return Err(ActivitiesServiceError::NotSignedUp);
        }
        Ok(())
    }
}
