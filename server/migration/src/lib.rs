use sea_orm_migration::prelude::*;

mod m20260825_000001_create_activities;
mod m20260825_000002_create_enrollments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_create_activities::Migration),
            Box::new(m20260825_000002_create_enrollments::Migration),
        ]
    }
}
