/// Entity store for the Ads Manager screen
///
/// Holds the three raw collections (campaigns, ad sets, ads) plus per-level
/// insight maps, exactly as delivered by the data-fetch collaborator. The
/// snapshot is replaced wholesale on every refresh; there is no incremental
/// patching. Lookup helpers tolerate dangling foreign keys: an ad set whose
/// campaign is missing from the snapshot simply has no parent, it is not an
/// error (the upstream API is known to return partially-consistent
/// hierarchies under pagination and rate limiting).
use crate::models::{Ad, AdSet, Campaign, Insight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One wholesale fetch result, as produced by an [`AdsDataSource`]
/// implementation.
///
/// [`AdsDataSource`]: crate::traits::AdsDataSource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdsSnapshot {
    pub campaigns: Vec<Campaign>,
    pub ad_sets: Vec<AdSet>,
    pub ads: Vec<Ad>,
    #[serde(default)]
    pub campaign_insights: HashMap<String, Insight>,
    #[serde(default)]
    pub ad_set_insights: HashMap<String, Insight>,
    #[serde(default)]
    pub ad_insights: HashMap<String, Insight>,
}

/// In-memory copy of the current snapshot, read-only from the point of view
/// of the selection and query layers.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub campaigns: Vec<Campaign>,
    pub ad_sets: Vec<AdSet>,
    pub ads: Vec<Ad>,
    pub campaign_insights: HashMap<String, Insight>,
    pub ad_set_insights: HashMap<String, Insight>,
    pub ad_insights: HashMap<String, Insight>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot. Selection and filter state live outside
    /// the store and deliberately survive this call (stale selected ids are
    /// documented behavior, not a bug: every query re-derives against the
    /// current collections).
    pub fn replace(&mut self, snapshot: AdsSnapshot) {
        tracing::debug!(
            campaigns = snapshot.campaigns.len(),
            ad_sets = snapshot.ad_sets.len(),
            ads = snapshot.ads.len(),
            "replacing entity snapshot"
        );
        self.campaigns = snapshot.campaigns;
        self.ad_sets = snapshot.ad_sets;
        self.ads = snapshot.ads;
        self.campaign_insights = snapshot.campaign_insights;
        self.ad_set_insights = snapshot.ad_set_insights;
        self.ad_insights = snapshot.ad_insights;
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty() && self.ad_sets.is_empty() && self.ads.is_empty()
    }

    pub fn ad_set(&self, ad_set_id: &str) -> Option<&AdSet> {
        self.ad_sets.iter().find(|a| a.id == ad_set_id)
    }

    pub fn campaign(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == campaign_id)
    }

    /// Ids of all ad sets under the given campaign, in snapshot order.
    pub fn ad_set_ids_of_campaign<'a>(
        &'a self,
        campaign_id: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.ad_sets
            .iter()
            .filter(move |a| a.campaign_id == campaign_id)
            .map(|a| a.id.as_str())
    }

    /// Ids of all ads under the given ad set, in snapshot order.
    pub fn ad_ids_of_ad_set<'a>(&'a self, ad_set_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.ads
            .iter()
            .filter(move |a| a.ad_set_id == ad_set_id)
            .map(|a| a.id.as_str())
    }

    /// Campaign owning the given ad set, `None` when the back-reference
    /// dangles.
    pub fn campaign_id_of_ad_set(&self, ad_set_id: &str) -> Option<&str> {
        self.ad_set(ad_set_id).map(|a| a.campaign_id.as_str())
    }

    /// Campaign owning the given ad, derived transitively through its ad
    /// set. `None` as soon as either hop dangles.
    pub fn campaign_id_of_ad(&self, ad_id: &str) -> Option<&str> {
        let ad = self.ads.iter().find(|a| a.id == ad_id)?;
        self.campaign_id_of_ad_set(&ad.ad_set_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ad, ad_set, campaign};

    fn sample_store() -> EntityStore {
        let mut store = EntityStore::new();
        store.replace(AdsSnapshot {
            campaigns: vec![campaign("c1", "Spring Sale"), campaign("c2", "Brand")],
            ad_sets: vec![
                ad_set("as1", "c1", "Retargeting"),
                ad_set("as2", "c1", "Lookalike"),
                ad_set("as3", "c2", "Broad"),
            ],
            ads: vec![
                ad("ad1", "as1", "Promo Video"),
                ad("ad2", "as1", "Promo Image"),
                ad("ad3", "as3", "Logo Spot"),
            ],
            ..Default::default()
        });
        store
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = sample_store();
        store.replace(AdsSnapshot::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_descendant_lookups_preserve_order() {
        let store = sample_store();
        let ad_sets: Vec<&str> = store.ad_set_ids_of_campaign("c1").collect();
        assert_eq!(ad_sets, vec!["as1", "as2"]);
        let ads: Vec<&str> = store.ad_ids_of_ad_set("as1").collect();
        assert_eq!(ads, vec!["ad1", "ad2"]);
    }

    #[test]
    fn test_transitive_campaign_of_ad() {
        let store = sample_store();
        assert_eq!(store.campaign_id_of_ad("ad3"), Some("c2"));
    }

    #[test]
    fn test_dangling_references_resolve_to_none() {
        let mut store = sample_store();
        // Ad whose ad set is not in the snapshot
        store.ads.push(ad("ad9", "as-missing", "Orphan"));
        assert_eq!(store.campaign_id_of_ad("ad9"), None);
        assert_eq!(store.campaign_id_of_ad_set("as-missing"), None);
    }
}
