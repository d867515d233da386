use std::path::Path;

use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use mergington_activities::router::build_router;
use mergington_activities::seed::{SeedCatalog, load_catalog, seed_database};
use mergington_activities::state::AppState;
use mergington_activities_migration::Migrator;

/// Fresh in-memory database with the schema applied.
///
/// The pool is pinned to one connection: each pooled `sqlite::memory:`
/// connection would otherwise open its own empty database.
pub async fn fresh_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("failed to migrate");
    db
}

pub fn bundled_catalog() -> SeedCatalog {
    load_catalog(None).expect("bundled catalog parses")
}

/// Migrated database seeded with the bundled catalog.
pub async fn seeded_db() -> DatabaseConnection {
    let db = fresh_db().await;
    seed_database(&db, &bundled_catalog())
        .await
        .expect("seeding an empty database succeeds");
    db
}

/// Test server over a seeded database. The handle to the database is returned
/// alongside for direct row inspection.
pub async fn seeded_server() -> (TestServer, DatabaseConnection) {
    let db = seeded_db().await;
    let router = build_router(AppState { db: db.clone() }, Path::new("static"));
    let server = TestServer::new(router).expect("failed to start test server");
    (server, db)
}
