use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::ActivityId).integer().not_null())
                    .col(ColumnDef::new(Enrollments::Email).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::ActivityId)
                            .to(Activities::Table, Activities::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Enrollments::Table)
                    .col(Enrollments::Email)
                    .name("idx_enrollments_email")
                    .to_owned(),
            )
            .await?;

        // One row per student per activity, enforced by the database so two
        // concurrent signups cannot both land.
        manager
            .create_index(
                Index::create()
                    .table(Enrollments::Table)
                    .col(Enrollments::ActivityId)
                    .col(Enrollments::Email)
                    .name("idx_enrollments_activity_id_email")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    ActivityId,
    Email,
}

#[derive(Iden)]
enum Activities {
    Table,
    Id,
}
