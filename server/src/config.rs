use std::path::PathBuf;

/// Activities service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ActivitiesConfig {
    /// SQLite database file (default "data/app.db"). Env var: `APP_DB_PATH`.
    pub db_path: PathBuf,
    /// TCP port for the HTTP server (default 8000). Env var: `ACTIVITIES_PORT`.
    pub activities_port: u16,
    /// Directory served under `/static` (default "static"). Env var: `STATIC_DIR`.
    pub static_dir: PathBuf,
    /// Seed catalog file. When unset, the bundled catalog is used.
    /// Env var: `APP_SEED_PATH`.
    pub seed_path: Option<PathBuf>,
}

impl ActivitiesConfig {
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("APP_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/app.db")),
            activities_port: std::env::var("ACTIVITIES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            seed_path: std::env::var("APP_SEED_PATH").ok().map(PathBuf::from),
        }
    }
}
