use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use mergington_activities_schema::{activities, enrollments};

use crate::domain::repository::{ActivityRepository, EnrollmentRepository};
use crate::domain::types::{Activity, Enrollment};
use crate::error::ActivitiesServiceError;

// ── Activity repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityRepository {
    pub db: DatabaseConnection,
}

impl ActivityRepository for DbActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, ActivitiesServiceError> {
        let models = activities::Entity::find()
            .order_by_asc(activities::Column::Id)
            .all(&self.db)
            .await
            .context("list activities")?;
        Ok(models.into_iter().map(activity_from_model).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, ActivitiesServiceError> {
        let model = activities::Entity::find()
            .filter(activities::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find activity by name")?;
        Ok(model.map(activity_from_model))
    }
}

fn activity_from_model(model: activities::Model) -> Activity {
    Activity {
        id: model.id,
        name: model.name,
        description: model.description,
        schedule: model.schedule,
        max_participants: model.max_participants,
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn list_emails(&self, activity_id: i32) -> Result<Vec<String>, ActivitiesServiceError> {
        let models = enrollments::Entity::find()
            .filter(enrollments::Column::ActivityId.eq(activity_id))
            .order_by_asc(enrollments::Column::Id)
            .all(&self.db)
            .await
            .context("list enrollment emails")?;
        Ok(models.into_iter().map(|m| m.email).collect())
    }

    async fn count(&self, activity_id: i32) -> Result<u64, ActivitiesServiceError> {
        let count = enrollments::Entity::find()
            .filter(enrollments::Column::ActivityId.eq(activity_id))
            .count(&self.db)
            .await
            .context("count enrollments")?;
        Ok(count)
    }

    async fn find(
        &self,
        activity_id: i32,
        email: &str,
    ) -> Result<Option<Enrollment>, ActivitiesServiceError> {
        let model = enrollments::Entity::find()
            .filter(enrollments::Column::ActivityId.eq(activity_id))
            .filter(enrollments::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find enrollment")?;
        Ok(model.map(enrollment_from_model))
    }

    async fn create(&self, activity_id: i32, email: &str) -> Result<(), ActivitiesServiceError> {
        let result = enrollments::ActiveModel {
            id: NotSet,
            activity_id: Set(activity_id),
            email: Set(email.to_owned()),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique index on (activity_id, email) turns a lost
            // check-then-act race into a constraint violation. Surface it as
            // the same duplicate error the pre-check produces.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ActivitiesServiceError::AlreadySignedUp)
            }
            Err(err) => Err(anyhow::Error::new(err).context("insert enrollment").into()),
        }
    }

    async fn delete(&self, activity_id: i32, email: &str) -> Result<bool, ActivitiesServiceError> {
        let result = enrollments::Entity::delete_many()
            .filter(enrollments::Column::ActivityId.eq(activity_id))
            .filter(enrollments::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete enrollment")?;
        Ok(result.rows_affected > 0)
    }
}

fn enrollment_from_model(model: enrollments::Model) -> Enrollment {
    Enrollment {
        id: model.id,
        activity_id: model.activity_id,
        email: model.email,
    }
}
