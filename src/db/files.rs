use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::codec::{self, Persisted};
use crate::error::{Error, Result};
use crate::store::RecordStore;

/// Create the data directory (and parents) if it does not exist yet.
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })
}

/// Sibling path the new contents are staged in before the rename.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `bytes` so readers see either the old file or the new
/// one, never a partial write.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let staging = staging_path(path);
    let write = || -> std::io::Result<()> {
        let mut file = File::create(&staging)?;
        file.write_all(bytes)?;
        file.sync_all()
    };
    if let Err(source) = write() {
        let _ = fs::remove_file(&staging);
        return Err(Error::io(&staging, source));
    }
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(Error::io(path, source));
    }
    Ok(())
}

/// Overwrite `path` with every record in `store`.
pub(crate) fn save_collection<T: Persisted>(path: &Path, store: &RecordStore<T>) -> Result<()> {
    let bytes = codec::encode(store.records()).map_err(|source| Error::io(path, source))?;
    write_atomic(path, &bytes)?;
    info!(
        collection = T::COLLECTION,
        count = store.len(),
        path = %path.display(),
        "collection saved"
    );
    Ok(())
}

/// Replace the contents of `store` with the collection at `path`, returning
/// the number of records loaded. On any error the store is left untouched.
pub(crate) fn load_collection<T: Persisted>(path: &Path, store: &mut RecordStore<T>) -> Result<usize> {
    let bytes = fs::read(path).map_err(|source| Error::io(path, source))?;
    debug!(path = %path.display(), len = bytes.len(), "read collection file");
    let records = codec::decode::<T>(path, &bytes)?;
    let count = records.len();
    store.replace_all(records)?;
    info!(
        collection = T::COLLECTION,
        count,
        path = %path.display(),
        "collection loaded"
    );
    Ok(count)
}
