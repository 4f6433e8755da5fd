/// Per-level filter configuration for the Ads Manager screen
///
/// Each of the three entity levels carries an independent status filter and
/// free-text search term. Filters only configure predicates; applying them
/// to the collections happens in the query layer, and mutating a filter
/// never touches selection state.
use crate::models::EntityStatus;
use std::fmt;

/// The three levels of the advertising hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLevel {
    Campaigns,
    AdSets,
    Ads,
}

impl EntityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLevel::Campaigns => "campaigns",
            EntityLevel::AdSets => "ad sets",
            EntityLevel::Ads => "ads",
        }
    }
}

/// Status criterion: either everything, or exactly one delivery status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EntityStatus),
}

impl StatusFilter {
    /// Every selectable choice, in display order (for pick lists).
    pub const ALL_CHOICES: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(EntityStatus::Active),
        StatusFilter::Only(EntityStatus::Paused),
        StatusFilter::Only(EntityStatus::Archived),
    ];

    pub fn matches(&self, status: EntityStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All statuses"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Filter record for a single level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelFilter {
    pub status: StatusFilter,
    pub search: String,
}

impl LevelFilter {
    /// The predicate shared by all three levels: status must match (or the
    /// filter is `All`) and the name must contain the search term,
    /// case-insensitively. An empty search term matches everything.
    pub fn matches(&self, name: &str, status: EntityStatus) -> bool {
        if !self.status.matches(status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.search.to_lowercase())
    }
}

/// Partial update applied to one level's filter. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub status: Option<StatusFilter>,
    pub search: Option<String>,
}

impl FilterPatch {
    pub fn status(status: StatusFilter) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }
}

/// Three independent filter records, one per hierarchy level.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub campaigns: LevelFilter,
    pub ad_sets: LevelFilter,
    pub ads: LevelFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: EntityLevel) -> &LevelFilter {
        match level {
            EntityLevel::Campaigns => &self.campaigns,
            EntityLevel::AdSets => &self.ad_sets,
            EntityLevel::Ads => &self.ads,
        }
    }

    /// Apply a partial update to the named level. No validation beyond the
    /// types; no side effects on any other state.
    pub fn apply(&mut self, level: EntityLevel, patch: FilterPatch) {
        let record = match level {
            EntityLevel::Campaigns => &mut self.campaigns,
            EntityLevel::AdSets => &mut self.ad_sets,
            EntityLevel::Ads => &mut self.ads,
        };
        if let Some(status) = patch.status {
            record.status = status;
        }
        if let Some(search) = patch.search {
            record.search = search;
        }
        tracing::trace!(level = level.as_str(), "filter updated");
    }

    /// Reset every level back to "all statuses, no search".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
