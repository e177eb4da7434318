use crate::mirror::{DurableMirror, error::Result as MirrorResult, load_result::LoadResult};

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Serialize, de::DeserializeOwned};
use soul_core::UserIdentity;

/// In-process mirror holding the serialized blob in memory.
///
/// Clones share the same slot, so a second store opened on a clone sees
/// what the first one wrote.
#[derive(Debug)]
pub struct MemoryMirror<T = UserIdentity> {
    slot: Arc<Mutex<Option<String>>>,
    writes: Arc<AtomicUsize>,
    _value: PhantomData<fn() -> T>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw blob, well-formed or not.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        let mirror = Self::default();
        mirror.set_contents(raw);
        mirror
    }
}

impl<T> Default for MemoryMirror<T> {
    fn default() -> Self {
        Self {
            slot: Arc::default(),
            writes: Arc::default(),
            _value: PhantomData,
        }
    }
}

impl<T> Clone for MemoryMirror<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            writes: Arc::clone(&self.writes),
            _value: PhantomData,
        }
    }
}

impl<T> MemoryMirror<T> {
    /// Replace the raw blob without counting a write.
    pub fn set_contents(&self, raw: impl Into<String>) {
        *self.lock() = Some(raw.into());
    }

    /// Raw blob currently held.
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Number of successful saves since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> DurableMirror<T> for MemoryMirror<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> MirrorResult<LoadResult<T>> {
        let Some(raw) = self.contents() else {
            return Ok(LoadResult::empty());
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(LoadResult::found(value)),
            Err(e) => Ok(LoadResult::corrupted(e.to_string())),
        }
    }

    fn save(&self, value: &T) -> MirrorResult<()> {
        let json = serde_json::to_string(value)?;
        *self.lock() = Some(json);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> MirrorResult<()> {
        *self.lock() = None;
        Ok(())
    }

    /// Drops the blob; nothing addressable is kept.
    fn backup_corrupted(&self) -> MirrorResult<Option<PathBuf>> {
        *self.lock() = None;
        Ok(None)
    }
}
