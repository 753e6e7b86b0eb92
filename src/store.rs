use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use time::OffsetDateTime;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, warn};

/// Named JSON document under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Bookings,
    Technicians,
    Services,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Bookings => "bookings",
            Collection::Technicians => "technicians",
            Collection::Services => "services",
        }
    }

    fn file_name(self) -> String {
        format!("{}.json", self.name())
    }

    /// Users and bookings are rewritten by the service; catalogs are data.
    pub fn is_written(self) -> bool {
        matches!(self, Collection::Users | Collection::Bookings)
    }
}

/// Anything stored in a list collection with a numeric id.
pub trait Record {
    fn id(&self) -> u64;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 1 for an empty collection, otherwise one past the largest id.
pub fn next_id<R: Record>(records: &[R]) -> u64 {
    records.iter().map(Record::id).max().map_or(1, |max| max + 1)
}

/// Whole-document JSON persistence, one file per collection.
///
/// Reads hand back a full snapshot, writes replace the full document.
/// Callers doing read-modify-write hold [`Store::lock`] for the whole
/// sequence so two requests cannot assign the same id or drop each
/// other's records.
pub struct Store {
    dir: PathBuf,
    users: Mutex<()>,
    bookings: Mutex<()>,
    technicians: Mutex<()>,
    services: Mutex<()>,
}

impl Store {
    pub async fn open(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| anyhow::anyhow!("create data dir {}: {}", dir.display(), e))?;
        debug!(dir = %dir.display(), "record store opened");
        Ok(Self {
            dir,
            users: Mutex::new(()),
            bookings: Mutex::new(()),
            technicians: Mutex::new(()),
            services: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    pub async fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        match collection {
            Collection::Users => self.users.lock().await,
            Collection::Bookings => self.bookings.lock().await,
            Collection::Technicians => self.technicians.lock().await,
            Collection::Services => self.services.lock().await,
        }
    }

    /// Loads the full snapshot of `collection`, or the first failure.
    ///
    /// Missing or blank documents yield `T::default()`.
    pub async fn try_load<T>(&self, collection: Collection) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_of(collection);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(collection = collection.name(), "no document yet; empty snapshot");
                return Ok(T::default());
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        if raw.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse { path, source })
    }

    /// Loads the full snapshot of `collection`, degrading to empty.
    ///
    /// A failed load is logged and yields `T::default()`. For collections
    /// the service writes, the unreadable document is also moved aside so
    /// the caller's next save cannot overwrite it. Catalogs are never
    /// written by the service and stay where they are.
    pub async fn load<T>(&self, collection: Collection) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.try_load(collection).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(collection = collection.name(), error = %e, "load failed; empty snapshot");
                if collection.is_written() {
                    self.quarantine(collection).await;
                }
                T::default()
            }
        }
    }

    /// Replaces the document for `collection` with `snapshot`.
    pub async fn save<T>(&self, collection: Collection, snapshot: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path_of(collection);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(snapshot)?;

        tokio::fs::write(&tmp, &body)
            .await
            .map_err(|source| StoreError::Write { path: tmp.clone(), source })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| StoreError::Write { path: path.clone(), source })?;

        debug!(collection = collection.name(), bytes = body.len(), "snapshot saved");
        Ok(())
    }

    /// Renames the document to `<name>.json.<unix ts>[-n].corrupt`.
    async fn quarantine(&self, collection: Collection) {
        let path = self.path_of(collection);
        let ts = OffsetDateTime::now_utc().unix_timestamp();
        let mut aside = self.dir.join(format!("{}.{ts}.corrupt", collection.file_name()));
        let mut n = 1;
        while tokio::fs::try_exists(&aside).await.unwrap_or(false) {
            aside = self
                .dir
                .join(format!("{}.{ts}-{n}.corrupt", collection.file_name()));
            n += 1;
        }

        if let Err(e) = tokio::fs::rename(&path, &aside).await {
            warn!(path = %path.display(), error = %e, "could not move unreadable document aside");
        } else {
            warn!(path = %aside.display(), "unreadable document moved aside");
        }
    }
}
