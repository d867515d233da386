//! SeaORM entities owned by the activities service.

pub mod activities;
pub mod enrollments;
