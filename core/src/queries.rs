/// Hierarchical query layer for the Ads Manager screen
///
/// Pure derivation functions over `(EntityStore, FilterState,
/// SelectionEngine)`. Nothing here stores state or mutates its inputs: the
/// same input tuple always yields the same output, in the snapshot's
/// original order, so a reactive UI can memoize results however it likes.
///
/// Selecting campaigns narrows which ad sets (and transitively which ads)
/// are *shown*, independently of whether those rows are themselves
/// selected. When both campaigns and ad sets are selected, the ad-set
/// selection takes precedence for the ads list.
use crate::filters::FilterState;
use crate::models::{Ad, AdSet, Campaign};
use crate::selection::SelectionEngine;
use crate::store::EntityStore;

/// Campaigns passing the campaign-level filter. The campaign list itself is
/// never narrowed by selection.
pub fn filtered_campaigns<'a>(store: &'a EntityStore, filters: &FilterState) -> Vec<&'a Campaign> {
    store
        .campaigns
        .iter()
        .filter(|c| filters.campaigns.matches(&c.name, c.status))
        .collect()
}

/// Ad sets passing the ad-set-level filter, restricted to the selected
/// campaigns when any campaign is selected.
pub fn filtered_ad_sets<'a>(
    store: &'a EntityStore,
    filters: &FilterState,
    selection: &SelectionEngine,
) -> Vec<&'a AdSet> {
    let selected_campaigns = selection.selected_campaigns();
    store
        .ad_sets
        .iter()
        .filter(|a| selected_campaigns.is_empty() || selected_campaigns.contains(&a.campaign_id))
        .filter(|a| filters.ad_sets.matches(&a.name, a.status))
        .collect()
}

/// Ads passing the ad-level filter, restricted by the tiered fallback:
///
/// 1. nothing selected above: all ads;
/// 2. any ad set selected: ads of the selected ad sets;
/// 3. only campaigns selected: ads whose ad set belongs to a selected
///    campaign (an ad whose ad set is missing from the snapshot cannot
///    establish that ancestry and is treated as not belonging).
pub fn filtered_ads<'a>(
    store: &'a EntityStore,
    filters: &FilterState,
    selection: &SelectionEngine,
) -> Vec<&'a Ad> {
    let selected_campaigns = selection.selected_campaigns();
    let selected_ad_sets = selection.selected_ad_sets();

    store
        .ads
        .iter()
        .filter(|ad| {
            if selected_campaigns.is_empty() && selected_ad_sets.is_empty() {
                true
            } else if !selected_ad_sets.is_empty() {
                selected_ad_sets.contains(&ad.ad_set_id)
            } else {
                store
                    .campaign_id_of_ad_set(&ad.ad_set_id)
                    .map(|campaign_id| selected_campaigns.contains(campaign_id))
                    .unwrap_or(false)
            }
        })
        .filter(|ad| filters.ads.matches(&ad.name, ad.status))
        .collect()
}
