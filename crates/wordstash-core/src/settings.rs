//! Database location resolution.
//!
//! The store lives in a single SQLite file in the user's home directory by
//! default. An explicit path always wins, which is what keeps tests and the
//! web server free of ambient state.

use crate::error::{Result, StoreError};
use std::path::PathBuf;

/// File name of the word database inside the home directory.
pub const DB_FILE_NAME: &str = ".wordstash.sqlite";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

impl Settings {
    /// Resolve settings, preferring an explicit database path over the
    /// default location in the home directory.
    ///
    /// A missing home directory is a fatal configuration error; it is
    /// raised here, before any store access.
    pub fn resolve(db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(path) => path,
            None => dirs::home_dir()
                .ok_or_else(|| StoreError::config_error("could not determine home directory"))?
                .join(DB_FILE_NAME),
        };
        Ok(Self { db_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let settings = Settings::resolve(Some(PathBuf::from("/tmp/words.sqlite"))).unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/tmp/words.sqlite"));
    }

    #[test]
    fn test_default_path_is_in_home() {
        let settings = Settings::resolve(None).unwrap();
        assert!(settings.db_path.ends_with(DB_FILE_NAME));
    }
}
