use sea_orm::DatabaseConnection;

use crate::infra::db::{DbActivityRepository, DbEnrollmentRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn activity_repo(&self) -> DbActivityRepository {
        DbActivityRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }
}
