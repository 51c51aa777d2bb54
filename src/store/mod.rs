mod availability;
mod error;
mod mutations;
mod queries;
mod seed;
mod validate;

pub use availability::{conflicting_booking, is_available, windows_overlap};
pub use error::{StoreError, ValidationError};
pub use seed::{default_bookings, default_professors, default_resources};
pub use validate::validate_request;

use std::io;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::model::*;
use crate::storage::{BOOKINGS_KEY, PROFESSORS_KEY, RESOURCES_KEY, Storage};

/// In-memory owner of professors, resources and bookings, written through to
/// a [`Storage`] on every mutation.
///
/// Construct with [`DirectoryStore::open`] and hand it to callers by
/// reference. [`DirectoryStore::close`] performs a final write and returns the
/// backing storage.
pub struct DirectoryStore<S: Storage> {
    storage: S,
    professors: Vec<Professor>,
    resources: Vec<Resource>,
    bookings: Vec<Booking>,
}

/// Outcome of loading one collection.
enum Loaded<T> {
    Stored(Vec<T>),
    /// Key absent or unparseable; compiled-in default substituted.
    Defaulted(Vec<T>),
}

impl<T> Loaded<T> {
    fn was_defaulted(&self) -> bool {
        matches!(self, Loaded::Defaulted(_))
    }

    fn into_inner(self) -> Vec<T> {
        match self {
            Loaded::Stored(v) | Loaded::Defaulted(v) => v,
        }
    }
}

/// Read one collection. Each key falls back to its own default independently.
fn load_collection<T: DeserializeOwned>(
    storage: &impl Storage,
    key: &str,
    default: fn() -> Vec<T>,
) -> io::Result<Loaded<T>> {
    let Some(raw) = storage.get(key)? else {
        info!("{key}: not stored yet, using defaults");
        return Ok(Loaded::Defaulted(default()));
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(Loaded::Stored(items)),
        Err(e) => {
            warn!("{key}: unreadable ({e}), using defaults");
            Ok(Loaded::Defaulted(default()))
        }
    }
}

fn write_collection<T: Serialize>(storage: &impl Storage, key: &str, items: &[T]) -> bool {
    let result = serde_json::to_string(items)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        .and_then(|json| storage.set(key, &json));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("failed to persist {key}: {e}");
            metrics::counter!(crate::observability::STORAGE_WRITE_FAILURES_TOTAL, "key" => key.to_string())
                .increment(1);
            false
        }
    }
}

impl<S: Storage> DirectoryStore<S> {
    /// Load all three collections from `storage`.
    ///
    /// A missing or corrupt key is replaced by that collection's default and
    /// the full state is written back once. Only I/O errors from the storage
    /// itself fail the open.
    pub fn open(storage: S) -> io::Result<Self> {
        let professors = load_collection(&storage, PROFESSORS_KEY, default_professors)?;
        let resources = load_collection(&storage, RESOURCES_KEY, default_resources)?;
        let bookings = load_collection(&storage, BOOKINGS_KEY, default_bookings)?;

        let needs_seed =
            professors.was_defaulted() || resources.was_defaulted() || bookings.was_defaulted();

        let store = Self {
            storage,
            professors: professors.into_inner(),
            resources: resources.into_inner(),
            bookings: bookings.into_inner(),
        };

        if needs_seed {
            info!("writing initial data");
            store.persist();
        }

        info!(
            "store opened: {} professors, {} resources, {} bookings",
            store.professors.len(),
            store.resources.len(),
            store.bookings.len()
        );
        Ok(store)
    }

    /// Final write-through, then hand back the storage.
    pub fn close(self) -> S {
        self.persist();
        info!("store closed");
        self.storage
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-serialize all three collections. Failures are logged and counted;
    /// the in-memory state stays authoritative either way.
    fn persist(&self) -> bool {
        let professors = write_collection(&self.storage, PROFESSORS_KEY, &self.professors);
        let resources = write_collection(&self.storage, RESOURCES_KEY, &self.resources);
        let bookings = write_collection(&self.storage, BOOKINGS_KEY, &self.bookings);
        professors && resources && bookings
    }
}
