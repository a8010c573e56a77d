use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::billing::FeeSlip;
use crate::error::{Error, Result};

/// Append a rendered slip to the receipt log, creating the log if needed.
/// The log is write-only; nothing reads it back.
pub fn append_fee_slip(path: &Path, slip: &FeeSlip) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::io(path, source))?;
    file.write_all(slip.render().as_bytes())
        .map_err(|source| Error::io(path, source))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::Local;

    use super::*;
    use crate::models::Student;
    use crate::store::RouteStore;

    #[test]
    fn test_slips_are_appended_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.txt");

        let mut routes = RouteStore::new();
        routes.add_route("North Campus", 4.5, 6.0).unwrap();
        let first = FeeSlip::issue(&Student::new(1, "Aman Kumar", 1), &routes, Local::now()).unwrap();
        let second = FeeSlip::issue(&Student::new(2, "Priya Singh", 1), &routes, Local::now()).unwrap();

        append_fee_slip(&path, &first).unwrap();
        append_fee_slip(&path, &second).unwrap();

        let log = fs::read_to_string(&path).unwrap();
        assert_eq!(log, format!("{}{}", first.render(), second.render()));
    }

    #[test]
    fn test_unwritable_log_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut routes = RouteStore::new();
        routes.add_route("North Campus", 4.5, 6.0).unwrap();
        let slip = FeeSlip::issue(&Student::new(1, "A", 1), &routes, Local::now()).unwrap();

        // The directory itself cannot be opened as a file.
        let err = append_fee_slip(dir.path(), &slip).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
