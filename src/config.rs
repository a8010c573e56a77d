//! Session configuration: where the data files live and whether an empty
//! install gets the example routes and students.

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
const DATA_DIR_NAME: &str = "data";
/// Binary file holding the route collection.
const ROUTES_FILE_NAME: &str = "routes.dat";
/// Binary file holding the student collection.
const STUDENTS_FILE_NAME: &str = "students.dat";
/// Append-only text log of issued fee slips.
const RECEIPTS_FILE_NAME: &str = "receipts.txt";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding every data file. Created on first run.
    pub data_dir: PathBuf,
    /// File name of the route collection inside `data_dir`.
    pub routes_file: String,
    /// File name of the student collection inside `data_dir`.
    pub students_file: String,
    /// File name of the receipt log inside `data_dir`.
    pub receipts_file: String,
    /// Seed example routes and students when nothing was loaded.
    pub seed_examples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(DATA_DIR_NAME)
    }
}

impl Config {
    /// Default configuration rooted at a custom data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            routes_file: ROUTES_FILE_NAME.to_string(),
            students_file: STUDENTS_FILE_NAME.to_string(),
            receipts_file: RECEIPTS_FILE_NAME.to_string(),
            seed_examples: true,
        }
    }

    /// Disable example seeding.
    #[must_use]
    pub fn without_seed(mut self) -> Self {
        self.seed_examples = false;
        self
    }

    /// Full path of the route collection file.
    #[must_use]
    pub fn routes_path(&self) -> PathBuf {
        self.data_dir.join(&self.routes_file)
    }

    /// Full path of the student collection file.
    #[must_use]
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    /// Full path of the receipt log.
    #[must_use]
    pub fn receipts_path(&self) -> PathBuf {
        self.data_dir.join(&self.receipts_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.routes_path(), Path::new("data").join("routes.dat"));
        assert_eq!(
            config.students_path(),
            Path::new("data").join("students.dat")
        );
        assert_eq!(
            config.receipts_path(),
            Path::new("data").join("receipts.txt")
        );
        assert!(config.seed_examples);
    }

    #[test]
    fn test_in_dir_without_seed() {
        let config = Config::in_dir("/tmp/buses").without_seed();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/buses"));
        assert_eq!(
            config.routes_path(),
            PathBuf::from("/tmp/buses/routes.dat")
        );
        assert!(!config.seed_examples);
    }
}
