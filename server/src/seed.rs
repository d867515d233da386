use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, DatabaseConnection, EntityTrait,
    TransactionTrait,
};
use serde::Deserialize;
use tracing::info;

use mergington_activities_schema::{activities, enrollments};

use crate::error::ActivitiesServiceError;

/// Catalog compiled into the binary. Used when `APP_SEED_PATH` is not set.
const BUNDLED_CATALOG: &str = include_str!("../seed/activities.json");

/// One activity as described in the seed catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    pub participants: Vec<String>,
}

/// The seed catalog, keyed by activity name.
pub type SeedCatalog = BTreeMap<String, SeedActivity>;

/// Load the seed catalog from `path`, or the bundled one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<SeedCatalog> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read seed catalog {}", path.display()))?,
        None => BUNDLED_CATALOG.to_owned(),
    };
    serde_json::from_str(&raw).context("parse seed catalog")
}

/// Insert the catalog into an empty database.
///
/// A database that already holds any activity row is left untouched, so
/// repeated startups never duplicate the catalog. All inserts run in one
/// transaction; a partially seeded catalog is never visible. Returns `true`
/// when rows were written.
pub async fn seed_database(
    db: &DatabaseConnection,
    catalog: &SeedCatalog,
) -> Result<bool, ActivitiesServiceError> {
    let existing = activities::Entity::find()
        .one(db)
        .await
        .context("probe for existing activities")?;
    if existing.is_some() {
        return Ok(false);
    }

    let activity_count = catalog.len();
    let catalog = catalog.clone();
    db.transaction::<_, (), sea_orm::DbErr>(|txn| {
        Box::pin(async move {
            for (name, seed) in &catalog {
                let activity = activities::ActiveModel {
                    id: NotSet,
                    name: Set(name.clone()),
                    description: Set(seed.description.clone()),
                    schedule: Set(seed.schedule.clone()),
                    max_participants: Set(seed.max_participants),
                }
                .insert(txn)
                .await?;

                for email in &seed.participants {
                    enrollments::ActiveModel {
                        id: NotSet,
                        activity_id: Set(activity.id),
                        email: Set(email.clone()),
                    }
                    .insert(txn)
                    .await?;
                }
            }
            Ok(())
        })
    })
    .await
    .context("seed activity catalog")?;

    info!(activities = activity_count, "seeded activity catalog");
    Ok(true)
}
