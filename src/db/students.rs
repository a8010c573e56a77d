use std::path::Path;

use super::files::{load_collection, save_collection};
use crate::error::Result;
use crate::store::StudentStore;

/// Overwrite the student file with the whole student collection.
pub fn save_students(path: &Path, students: &StudentStore) -> Result<()> {
    save_collection(path, students)
}

/// Load the student file into `students`, reseeding its id counter. All or
/// nothing: a failed load leaves `students` as it was.
pub fn load_students(path: &Path, students: &mut StudentStore) -> Result<usize> {
    load_collection(path, students)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::db::save_routes;
    use crate::error::Error;
    use crate::store::RouteStore;

    #[test]
    fn test_round_trip_keeps_dangling_route_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");

        let mut students = StudentStore::new();
        students.add_student("Aman Kumar", 1).unwrap();
        students.add_student("Priya Singh", 0).unwrap();
        students.add_student("Ravi Das", 404).unwrap();
        save_students(&path, &students).unwrap();

        let mut reloaded = StudentStore::new();
        assert_eq!(load_students(&path, &mut reloaded).unwrap(), 3);
        assert_eq!(reloaded.records(), students.records());
        assert_eq!(reloaded.next_id(), 4);
    }

    #[test]
    fn test_empty_collection_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");
        save_students(&path, &StudentStore::new()).unwrap();

        let mut reloaded = StudentStore::new();
        assert_eq!(load_students(&path, &mut reloaded).unwrap(), 0);
        assert!(reloaded.is_empty());
        assert_eq!(reloaded.next_id(), 1);
    }

    #[test]
    fn test_invalid_utf8_name_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");

        let mut saved = StudentStore::new();
        saved.add_student("Al", 1).unwrap();
        save_students(&path, &saved).unwrap();
        let mut bytes = fs::read(&path).unwrap();
        // Header (7) + count (4) + id (4) + name length (4).
        bytes[19] = 0xFF;
        fs::write(&path, &bytes).unwrap();

        let mut students = StudentStore::new();
        students.add_student("Existing", 0).unwrap();
        let err = load_students(&path, &mut students).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(students.len(), 1);
        assert_eq!(students.records()[0].name, "Existing");
        assert_eq!(students.next_id(), 2);
    }

    #[test]
    fn test_route_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.dat");
        let mut routes = RouteStore::new();
        routes.add_route("North Campus", 4.5, 6.0).unwrap();
        save_routes(&path, &routes).unwrap();

        let mut students = StudentStore::new();
        let err = load_students(&path, &mut students).unwrap_err();
        assert!(matches!(err, Error::WrongCollection { .. }));
        assert!(students.is_empty());
    }
}
