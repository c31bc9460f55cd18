use crate::api::{ReadplanApi, ReadplanPaths};
use crate::config::ReadplanConfig;
use crate::error::{ReadplanError, Result};
use crate::plan::ReadingPlan;
use crate::preferences::AmbientDetector;
use crate::store::fs::FileStore;
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "READPLAN_HOME";

pub struct ReadplanContext {
    pub api: ReadplanApi<FileStore>,
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Explicit data directory; beats `READPLAN_HOME` and the platform default.
    pub data_dir: Option<PathBuf>,
    /// The session's notion of today; the local date when absent.
    pub today: Option<NaiveDate>,
    pub ambient: AmbientDetector,
}

/// Picks the data directory: explicit path, then `env_home`, then the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("org", "unitybible", "readplan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ReadplanError::Store("Could not determine data directory".to_string()))
}

/// The configured plan directory, or the bundled plan. A relative `plan-dir` is taken
/// relative to the data directory.
pub fn load_plan(config: &ReadplanConfig, data_dir: &Path) -> Result<ReadingPlan> {
    match &config.plan_dir {
        Some(dir) => {
            let dir = if dir.is_relative() {
                data_dir.join(dir)
            } else {
                dir.clone()
            };
            info!(dir = %dir.display(), "loading plan directory");
            ReadingPlan::from_dir(&dir)
        }
        None => ReadingPlan::bundled(),
    }
}

pub fn initialize(options: InitOptions) -> Result<ReadplanContext> {
    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(options.data_dir.as_deref(), env_home)?;
    info!(data_dir = %data_dir.display(), "using data directory");

    let config = ReadplanConfig::load_or_default(&data_dir);
    let plan = load_plan(&config, &data_dir)?;

    let today = options.today.unwrap_or_else(|| Local::now().date_naive());
    let today_id = today.format("%Y-%m-%d").to_string();

    let store = FileStore::new(data_dir.clone());
    let api = ReadplanApi::open(
        plan,
        &today_id,
        store,
        options.ambient,
        config,
        ReadplanPaths::new(data_dir),
    );

    Ok(ReadplanContext { api, today })
}
