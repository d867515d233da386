use crate::domain::repository::{ActivityRepository, EnrollmentRepository};
use crate::domain::types::ActivityRoster;
use crate::error::ActivitiesServiceError;

// ── ListActivities ───────────────────────────────────────────────────────────

pub struct ListActivitiesUseCase<A: ActivityRepository, E: EnrollmentRepository> {
    pub activities: A,
    pub enrollments: E,
}

impl<A: ActivityRepository, E: EnrollmentRepository> ListActivitiesUseCase<A, E> {
    pub async fn execute(&self) -> Result<Vec<ActivityRoster>, ActivitiesServiceError> {
        let activities = self.activities.list().await?;
        let mut rosters = Vec::with_capacity(activities.len());
        for activity in activities {
            let participants = self.enrollments.list_emails(activity.id).await?;
            rosters.push(ActivityRoster {
                activity,
                participants,
            });
        }
        Ok(rosters)
    }
}
