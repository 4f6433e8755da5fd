// Merchdesk: e-commerce operator dashboard
// Core library: advertising-entity models, hierarchical selection engine,
// per-level filters, and the query layer the Ads Manager screen renders from.

pub mod config;
pub mod errors;
pub mod filters;
pub mod models;
pub mod queries;
pub mod selection;
pub mod store;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export commonly used types
pub use errors::{AdsApiError, AdsApiResult};

pub use models::{
    Ad, AdCreative, AdSet, BidStrategy, Campaign, CampaignObjective, EntityStatus, Insight,
    InsightAction,
};

pub use filters::{EntityLevel, FilterPatch, FilterState, LevelFilter, StatusFilter};

pub use queries::{filtered_ad_sets, filtered_ads, filtered_campaigns};

pub use selection::{SelectionCounts, SelectionEngine};

pub use store::{AdsSnapshot, EntityStore};

pub use traits::AdsDataSource;

pub use config::{
    AdsScreenConfig, DashboardConfig, GraphApiConfig, LoggingConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
