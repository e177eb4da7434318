//! Durable copies of client state, read once at start-up.

pub(crate) mod error;
pub(crate) mod file_mirror;
pub(crate) mod load_result;
pub(crate) mod memory_mirror;

use crate::mirror::{error::Result as MirrorResult, load_result::LoadResult};

use std::path::PathBuf;

use soul_core::UserIdentity;

/// Storage slot holding at most one serialized `T`.
///
/// Each slot has a single owning store, which is its only writer.
pub trait DurableMirror<T = UserIdentity>: Send + Sync {
    /// Read the slot. A blob that fails to parse is reported through
    /// `LoadResult::corruption_error`, not as an error.
    fn load(&self) -> MirrorResult<LoadResult<T>>;

    /// Replace the slot contents with `value`.
    fn save(&self, value: &T) -> MirrorResult<()>;

    /// Empty the slot. Succeeds when the slot is already empty.
    fn clear(&self) -> MirrorResult<()>;

    /// Move an unreadable blob out of the way so the next save starts clean.
    ///
    /// Returns where the blob went, if it was kept somewhere addressable.
    fn backup_corrupted(&self) -> MirrorResult<Option<PathBuf>>;
}
