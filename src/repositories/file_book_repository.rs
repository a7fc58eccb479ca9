use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Book repository backed by a single binary snapshot file.
///
/// The file is an opaque `bincode` encoding of the book. It carries no
/// version header, so a snapshot written by an incompatible build fails to
/// decode rather than loading partially.
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookRepository for FileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            bincode::deserialize(&bytes).map_err(|source| StorageError::Decode {
                path: self.path.clone(),
                source,
            })?;

        if let Some(key) = book.misfiled_key() {
            return Err(StorageError::Decode {
                path: self.path.clone(),
                source: Box::new(bincode::ErrorKind::Custom(format!(
                    "record stored under '{}' has a different name",
                    key
                ))),
            });
        }

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = bincode::serialize(book).map_err(StorageError::Encode)?;
        debug!(bytes = bytes.len(), "Encoded address book");

        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
