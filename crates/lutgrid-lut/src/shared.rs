//! Swappable grid snapshot shared between threads.
//!
//! Readers take an `Arc<Grid>` and evaluate against it for as long as they
//! like. Loading new data replaces the whole snapshot under a write lock, so
//! a reader sees either the old grid or the new one, never a mix.
//!
//! # Example
//!
//! ```rust
//! use lutgrid_lut::{Grid, SharedGrid};
//!
//! let shared = SharedGrid::new();
//! assert!(shared.load().is_none());
//!
//! shared.replace(Grid::identity_3d(9).unwrap());
//! let grid = shared.load().unwrap();
//! assert!(grid.is_3d());
//! assert_eq!(shared.generation(), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::Grid;

/// Holder of the current grid snapshot, if any.
#[derive(Debug, Default)]
pub struct SharedGrid {
    slot: RwLock<Option<Arc<Grid>>>,
    generation: AtomicU64,
}

impl SharedGrid {
    /// Empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holder with an initial grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            slot: RwLock::new(Some(Arc::new(grid))),
            generation: AtomicU64::new(1),
        }
    }

    /// Current snapshot.
    pub fn load(&self) -> Option<Arc<Grid>> {
        // A poisoned lock still holds a whole snapshot; a swap is one store.
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns true if a grid is loaded.
    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Installs `grid`, returning the previous snapshot.
    pub fn replace(&self, grid: Grid) -> Option<Arc<Grid>> {
        self.swap(Some(Arc::new(grid)))
    }

    /// Drops the current grid, returning it.
    pub fn clear(&self) -> Option<Arc<Grid>> {
        self.swap(None)
    }

    /// Number of replacements and clears so far.
    ///
    /// Lets a reader notice that the snapshot it holds is stale.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn swap(&self, next: Option<Arc<Grid>>) -> Option<Arc<Grid>> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let prev = std::mem::replace(&mut *slot, next);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let size = slot.as_ref().map(|g| g.size());
        drop(slot);
        debug!(generation, loaded = size.is_some(), size, "grid snapshot swapped");
        prev
    }
}

impl From<Grid> for SharedGrid {
    fn from(grid: Grid) -> Self {
        Self::with_grid(grid)
    }
}
