/// Trait boundary between the dashboard core and its data-fetch
/// collaborator.
use crate::errors::AdsApiResult;
use crate::store::AdsSnapshot;
use async_trait::async_trait;

/// Anything that can produce a wholesale snapshot of the advertising
/// hierarchy for one ad account. Implementations own retries, pagination,
/// and staleness handling; the core only ever sees complete snapshots and
/// never awaits inside a mutation.
#[async_trait]
pub trait AdsDataSource: Send + Sync {
    /// Fetch campaigns, ad sets, ads, and per-level insights in one pass.
    async fn fetch_snapshot(&self) -> AdsApiResult<AdsSnapshot>;
}
