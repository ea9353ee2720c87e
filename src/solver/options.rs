//! Search configuration

use super::kprefix::{DEFAULT_K_PREFIX, MAX_K_PREFIX};
use std::fmt;

/// How the prefix cache participates in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Every query is searched exhaustively (exact scores)
    #[default]
    Off,
    /// A cached entry for the exact word is returned without searching
    Exact,
    /// As `Exact`; on a miss the longest cached prefix (two letters or more) seeds
    /// the search, which then only extends that cached path
    Seeded,
}

impl CacheMode {
    /// Parse a mode name: "off", "exact" or "seeded"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "off" | "none" => Some(Self::Off),
            "exact" => Some(Self::Exact),
            "seeded" | "seed" => Some(Self::Seeded),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for CacheMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Exact => write!(f, "exact"),
            Self::Seeded => write!(f, "seeded"),
        }
    }
}

/// Error type for invalid search options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    KPrefixLength(usize),
    ZeroBudget,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KPrefixLength(k) => {
                write!(f, "k-prefix length must be between 1 and {MAX_K_PREFIX}, got {k}")
            }
            Self::ZeroBudget => write!(f, "Search budget must be at least 1"),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Configuration for a [`super::WordFinder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Length of the k-prefix filter, or `None` to disable it
    pub k_prefix: Option<usize>,
    pub cache: CacheMode,
    /// Maximum tiles expanded per query, or `None` for an exhaustive search
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            k_prefix: Some(DEFAULT_K_PREFIX),
            cache: CacheMode::Off,
            max_expansions: None,
        }
    }
}

impl SearchOptions {
    /// Exhaustive search with no filter and no cache
    #[must_use]
    pub const fn exhaustive() -> Self {
        Self {
            k_prefix: None,
            cache: CacheMode::Off,
            max_expansions: None,
        }
    }

    #[must_use]
    pub const fn with_k_prefix(mut self, k_prefix: Option<usize>) -> Self {
        self.k_prefix = k_prefix;
        self
    }

    #[must_use]
    pub const fn with_cache(mut self, cache: CacheMode) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Check option ranges
    ///
    /// # Errors
    /// Returns `OptionsError` if k is outside `1..=MAX_K_PREFIX` or the budget is zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(k) = self.k_prefix
            && (k == 0 || k > MAX_K_PREFIX)
        {
            return Err(OptionsError::KPrefixLength(k));
        }
        if let Some(0) = self.max_expansions {
            return Err(OptionsError::ZeroBudget);
        }
        Ok(())
    }
}
