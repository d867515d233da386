#![allow(async_fn_in_trait)]

use crate::domain::types::{Activity, Enrollment};
use crate::error::ActivitiesServiceError;

/// Repository for the activity catalog.
pub trait ActivityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Activity>, ActivitiesServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, ActivitiesServiceError>;
}

/// Repository for student enrollments.
pub trait EnrollmentRepository: Send + Sync {
    /// Emails enrolled in an activity, in signup order.
    async fn list_emails(&self, activity_id: i32) -> Result<Vec<String>, ActivitiesServiceError>;

    async fn count(&self, activity_id: i32) -> Result<u64, ActivitiesServiceError>;

    async fn find(
        &self,
        activity_id: i32,
        email: &str,
    ) -> Result<Option<Enrollment>, ActivitiesServiceError>;

    /// Insert an enrollment. Fails with `AlreadySignedUp` when the student
    /// already holds a row for this activity.
    async fn create(&self, activity_id: i32, email: &str) -> Result<(), ActivitiesServiceError>;

    /// Delete an enrollment. Returns `true` if a row was deleted.
    async fn delete(&self, activity_id: i32, email: &str) -> Result<bool, ActivitiesServiceError>;
}
