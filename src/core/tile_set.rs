//! Bitmask of tiles on the current search path

use std::fmt;

/// Set of tile indices (0-15) packed into a `u16`
///
/// Threaded by value through the recursive search, so each call sees the tiles
/// already used by its own path and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSet(u16);

impl TileSet {
    pub const EMPTY: Self = Self(0);

    /// Set containing every tile of `path`
    #[must_use]
    pub fn from_path(path: &[usize]) -> Self {
        path.iter().fold(Self::EMPTY, |set, &idx| set.with(idx))
    }

    /// Copy of this set with `index` added
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 16`
    #[inline]
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        debug_assert!(index < 16, "TileSet index must be < 16");
        Self(self.0 | (1 << index))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < 16 && self.0 & (1 << index) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({:016b})", self.0)
    }
}
