use crate::mirror::{
    DurableMirror,
    error::{MirrorError, Result as MirrorResult},
    load_result::LoadResult,
};

use std::fs;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use soul_core::UserIdentity;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Mirror of a `T` stored as `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileMirror<T = UserIdentity> {
    dir: PathBuf,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl FileMirror {
    /// Mirror for the signed-in identity.
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self::at(dir, key)
    }
}

impl<T> Clone for FileMirror<T> {
    fn clone(&self) -> Self {
        Self {
            dir: self.dir.clone(),
            key: self.key.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> FileMirror<T> {
    /// Mirror of any serializable value under `key`.
    pub fn at(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the mirror file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.json.tmp.{}", self.key, std::process::id()))
    }
}

impl<T> DurableMirror<T> for FileMirror<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> MirrorResult<LoadResult<T>> {
        let path = self.path();

        if !path.exists() {
            info!("No {} mirror at {path:?}", self.key);
            return Ok(LoadResult::empty());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| MirrorError::file_read(path.clone(), e))?;

        match serde_json::from_str::<T>(&contents) {
            Ok(value) => {
                info!("Restored {} from {path:?}", self.key);
                Ok(LoadResult::found(value))
            }
            Err(e) => {
                warn!("Mirror corrupted at {path:?}: {e}");
                Ok(LoadResult::corrupted(e.to_string()))
            }
        }
    }

    /// Saves using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn save(&self, value: &T) -> MirrorResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| MirrorError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self.temp_path();

        let json = serde_json::to_string_pretty(value)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| MirrorError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| MirrorError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| MirrorError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MirrorError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        debug!("Saved {} to {final_path:?}", self.key);
        Ok(())
    }

    fn clear(&self) -> MirrorResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed mirror at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MirrorError::remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    fn backup_corrupted(&self) -> MirrorResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.json.corrupted.{timestamp}", self.key));

        fs::rename(&path, &backup_path).map_err(|e| MirrorError::backup_failed(path, e))?;

        warn!("Backed up corrupted mirror to {backup_path:?}");
        Ok(Some(backup_path))
    }
}
