use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use mergington_activities::config::ActivitiesConfig;
use mergington_activities::router::build_router;
use mergington_activities::seed::{load_catalog, seed_database};
use mergington_activities::state::AppState;
use mergington_activities_migration::Migrator;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ActivitiesConfig::from_env();

    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).expect("failed to create database directory");
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", config.db_path.display());
    let db = Database::connect(&db_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let catalog = load_catalog(config.seed_path.as_deref()).expect("failed to load seed catalog");
    seed_database(&db, &catalog)
        .await
        .expect("failed to seed database");

    let state = AppState { db };
    let router = build_router(state, &config.static_dir);
    let addr = format!("0.0.0.0:{}", config.activities_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("activities service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
