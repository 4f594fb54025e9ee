pub mod book;
pub mod config;
pub mod customer;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod payment;
pub mod service;
pub mod slots;
pub mod staff;
pub mod status;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::repository::Repository;
use crate::errors::AppResult;

/// Open the configured database and load every record.
pub(crate) fn open_repository(cfg: &Config) -> AppResult<(DbPool, Repository)> {
    let pool = DbPool::new(&cfg.database)?;
    let repo = Repository::load(&pool)?;
    Ok((pool, repo))
}

/// `"a, b,,c"` → `["a", "b", "c"]`
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
