/// Three-level checkbox selection state for the advertising hierarchy
///
/// Keeps one id set per level (campaigns, ad sets, ads) and enforces the
/// propagation rules on every mutation:
///
/// - selecting a campaign cascades downward through every descendant;
/// - selecting an ad set or ad propagates upward, registering its ancestors
///   without touching siblings;
/// - deselecting propagates downward only, from the level clicked —
///   deselecting a node never deselects its ancestors.
///
/// The engine holds ids only. Descendants are resolved against the current
/// [`EntityStore`] snapshot at mutation time, so ids left over from a
/// previous snapshot are harmless: queries only ever test membership
/// against current entities. No automatic pruning happens on refresh.
use crate::filters::EntityLevel;
use crate::store::EntityStore;
use std::collections::HashSet;

/// Per-level selection totals, for UI badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCounts {
    pub campaigns: usize,
    pub ad_sets: usize,
    pub ads: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    campaigns: HashSet<String>,
    ad_sets: HashSet<String>,
    ads: HashSet<String>,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_campaign_selected(&self, id: &str) -> bool {
        self.campaigns.contains(id)
    }

    pub fn is_ad_set_selected(&self, id: &str) -> bool {
        self.ad_sets.contains(id)
    }

    pub fn is_ad_selected(&self, id: &str) -> bool {
        self.ads.contains(id)
    }

    pub fn selected_campaigns(&self) -> &HashSet<String> {
        &self.campaigns
    }

    pub fn selected_ad_sets(&self) -> &HashSet<String> {
        &self.ad_sets
    }

    pub fn selected_ads(&self) -> &HashSet<String> {
        &self.ads
    }

    pub fn counts(&self) -> SelectionCounts {
        SelectionCounts {
            campaigns: self.campaigns.len(),
            ad_sets: self.ad_sets.len(),
            ads: self.ads.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty() && self.ad_sets.is_empty() && self.ads.is_empty()
    }

    /// Drop every selected id at every level. Filters are not touched.
    pub fn clear(&mut self) {
        self.campaigns.clear();
        self.ad_sets.clear();
        self.ads.clear();
    }

    /// Select or deselect a campaign, cascading through all descendants in
    /// both directions: after this call no partial selection remains under
    /// the campaign.
    pub fn select_campaign(&mut self, store: &EntityStore, campaign_id: &str, selected: bool) {
        let descendant_ad_sets: Vec<String> = store
            .ad_set_ids_of_campaign(campaign_id)
            .map(str::to_string)
            .collect();
        let descendant_ads: Vec<String> = descendant_ad_sets
            .iter()
            .flat_map(|ad_set_id| store.ad_ids_of_ad_set(ad_set_id))
            .map(str::to_string)
            .collect();

        if selected {
            self.campaigns.insert(campaign_id.to_string());
            self.ad_sets.extend(descendant_ad_sets);
            self.ads.extend(descendant_ads);
        } else {
            self.campaigns.remove(campaign_id);
            for ad_set_id in &descendant_ad_sets {
                self.ad_sets.remove(ad_set_id);
            }
            for ad_id in &descendant_ads {
                self.ads.remove(ad_id);
            }
        }
        tracing::trace!(campaign_id, selected, "campaign selection changed");
    }

    /// Select or deselect an ad set. Selecting registers the parent
    /// campaign (upward propagation, siblings untouched) and cascades down
    /// to the ad set's own ads. Deselecting removes the ad set and its ads
    /// but leaves the parent campaign selected.
    pub fn select_ad_set(
        &mut self,
        store: &EntityStore,
        ad_set_id: &str,
        campaign_id: &str,
        selected: bool,
    ) {
        let own_ads: Vec<String> = store
            .ad_ids_of_ad_set(ad_set_id)
            .map(str::to_string)
            .collect();

        if selected {
            self.ad_sets.insert(ad_set_id.to_string());
            self.campaigns.insert(campaign_id.to_string());
            self.ads.extend(own_ads);
        } else {
            self.ad_sets.remove(ad_set_id);
            for ad_id in &own_ads {
                self.ads.remove(ad_id);
            }
        }
        tracing::trace!(ad_set_id, selected, "ad set selection changed");
    }

    /// Select or deselect a single ad. Selecting registers both ancestors;
    /// deselecting removes the ad only.
    pub fn select_ad(&mut self, ad_id: &str, ad_set_id: &str, campaign_id: &str, selected: bool) {
        if selected {
            self.ads.insert(ad_id.to_string());
            self.ad_sets.insert(ad_set_id.to_string());
            self.campaigns.insert(campaign_id.to_string());
        } else {
            self.ads.remove(ad_id);
        }
        tracing::trace!(ad_id, selected, "ad selection changed");
    }

    /// Toggle-style bulk operation over the currently visible ids at one
    /// level. If every visible id is already selected, they are all
    /// deselected (with the same downward cascade as the single-item
    /// operations); otherwise every visible id is selected, cascading and
    /// propagating exactly as the single-item operations would. Ancestors
    /// of ad sets and ads are resolved from the store; unresolvable links
    /// silently select only the reachable levels.
    pub fn select_all_visible(
        &mut self,
        store: &EntityStore,
        level: EntityLevel,
        visible_ids: &[String],
    ) {
        let all_selected = !visible_ids.is_empty()
            && visible_ids.iter().all(|id| match level {
                EntityLevel::Campaigns => self.campaigns.contains(id),
                EntityLevel::AdSets => self.ad_sets.contains(id),
                EntityLevel::Ads => self.ads.contains(id),
            });
        let selected = !all_selected;

        for id in visible_ids {
            match level {
                EntityLevel::Campaigns => self.select_campaign(store, id, selected),
                EntityLevel::AdSets => {
                    if let Some(campaign_id) = store.campaign_id_of_ad_set(id) {
                        let campaign_id = campaign_id.to_string();
                        self.select_ad_set(store, id, &campaign_id, selected);
                    } else if selected {
                        // Broken ancestor chain: select the reachable level only
                        self.ad_sets.insert(id.clone());
                        self.ads
                            .extend(store.ad_ids_of_ad_set(id).map(str::to_string));
                    } else {
                        self.ad_sets.remove(id);
                        let own_ads: Vec<String> =
                            store.ad_ids_of_ad_set(id).map(str::to_string).collect();
                        for ad_id in &own_ads {
                            self.ads.remove(ad_id);
                        }
                    }
                }
                EntityLevel::Ads => {
                    let parent = store.ads.iter().find(|a| &a.id == id);
                    match parent {
                        Some(ad) => {
                            let ad_set_id = ad.ad_set_id.clone();
                            match store.campaign_id_of_ad_set(&ad_set_id) {
                                Some(campaign_id) => {
                                    let campaign_id = campaign_id.to_string();
                                    self.select_ad(id, &ad_set_id, &campaign_id, selected);
                                }
                                None if selected => {
                                    self.ads.insert(id.clone());
                                    self.ad_sets.insert(ad_set_id);
                                }
                                None => {
                                    self.ads.remove(id);
                                }
                            }
                        }
                        None if selected => {
                            self.ads.insert(id.clone());
                        }
                        None => {
                            self.ads.remove(id);
                        }
                    }
                }
            }
        }
        tracing::debug!(
            level = level.as_str(),
            count = visible_ids.len(),
            selected,
            "bulk selection toggled"
        );
    }
}
