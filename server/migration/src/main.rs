use sea_orm_migration::prelude::*;

use mergington_activities_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
