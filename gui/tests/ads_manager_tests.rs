//! Integration tests for the Ads Manager screen message loop
//!
//! These tests drive the screen the way the UI does, through messages:
//! - Snapshot load → visible columns
//! - Checkbox toggles → propagated selection → narrowed columns
//! - Select-all toggles over filtered rows
//! - Filter changes and resets
//! - Fetch failure leaving selection and filters intact

use merchdesk_core::{
    Ad, AdSet, AdsSnapshot, Campaign, CampaignObjective, EntityLevel, EntityStatus, StatusFilter,
};
use merchdesk_gui::ads_manager::{update, AdsManagerMessage, AdsManagerState};

fn campaign(id: &str, name: &str) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: name.to_string(),
        status: EntityStatus::Active,
        objective: CampaignObjective::OutcomeSales,
        created_time: chrono::Utc::now(),
        daily_budget: Some(5_000),
        lifetime_budget: None,
    }
}

fn ad_set(id: &str, campaign_id: &str, name: &str) -> AdSet {
    AdSet {
        id: id.to_string(),
        campaign_id: campaign_id.to_string(),
        name: name.to_string(),
        status: EntityStatus::Active,
        bid_strategy: None,
        daily_budget: None,
        lifetime_budget: None,
        start_time: None,
        end_time: None,
    }
}

fn ad(id: &str, ad_set_id: &str, name: &str, status: EntityStatus) -> Ad {
    Ad {
        id: id.to_string(),
        ad_set_id: ad_set_id.to_string(),
        name: name.to_string(),
        status,
        creative: None,
    }
}

/// Campaign A with two ad sets (3 + 1 ads), campaign B with one (2 ads).
fn sample_snapshot() -> AdsSnapshot {
    AdsSnapshot {
        campaigns: vec![campaign("A", "Spring Sale"), campaign("B", "Brand Push")],
        ad_sets: vec![
            ad_set("A.as1", "A", "Retargeting"),
            ad_set("A.as2", "A", "Lookalike"),
            ad_set("B.as1", "B", "Broad Reach"),
        ],
        ads: vec![
            ad("a1", "A.as1", "Promo Video", EntityStatus::Active),
            ad("a2", "A.as1", "Promo Image", EntityStatus::Paused),
            ad("a3", "A.as1", "Promo Carousel", EntityStatus::Active),
            ad("a4", "A.as2", "Lookalike Video", EntityStatus::Active),
            ad("b1", "B.as1", "Logo Spot", EntityStatus::Active),
            ad("b2", "B.as1", "Logo Banner", EntityStatus::Paused),
        ],
        ..Default::default()
    }
}

fn loaded_state() -> AdsManagerState {
    let mut state = AdsManagerState::new();
    update(&mut state, AdsManagerMessage::SnapshotLoaded(sample_snapshot()));
    state
}

#[test]
fn test_snapshot_load_populates_columns() {
    let state = loaded_state();
    assert_eq!(state.visible_campaigns().len(), 2);
    assert_eq!(state.visible_ad_sets().len(), 3);
    assert_eq!(state.visible_ads().len(), 6);
}

#[test]
fn test_campaign_toggle_cascades_and_narrows() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("A".to_string(), true),
    );

    let counts = state.selection_counts();
    assert_eq!(counts.campaigns, 1);
    assert_eq!(counts.ad_sets, 2);
    assert_eq!(counts.ads, 4);

    // Only A's branch is shown now
    let shown: Vec<String> = state
        .visible_ad_sets()
        .iter()
        .map(|a| a.id.clone())
        .collect();
    assert_eq!(shown, vec!["A.as1".to_string(), "A.as2".to_string()]);
    assert_eq!(state.visible_ads().len(), 4);
}

#[test]
fn test_combined_selection_scenario_totals() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("A".to_string(), true),
    );
    update(
        &mut state,
        AdsManagerMessage::AdSetToggled {
            ad_set_id: "B.as1".to_string(),
            campaign_id: "B".to_string(),
            selected: true,
        },
    );

    let counts = state.selection_counts();
    assert_eq!(counts.campaigns, 2);
    assert_eq!(counts.ad_sets, 3);
    assert_eq!(counts.ads, 6);
}

#[test]
fn test_ad_set_selection_takes_precedence_for_ads() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("B".to_string(), true),
    );
    // Deselect B's cascaded ad set so only the campaign remains, then
    // select an ad set under A.
    update(
        &mut state,
        AdsManagerMessage::AdSetToggled {
            ad_set_id: "B.as1".to_string(),
            campaign_id: "B".to_string(),
            selected: false,
        },
    );
    update(
        &mut state,
        AdsManagerMessage::AdSetToggled {
            ad_set_id: "A.as1".to_string(),
            campaign_id: "A".to_string(),
            selected: true,
        },
    );

    let shown: Vec<String> = state.visible_ads().iter().map(|a| a.id.clone()).collect();
    assert_eq!(
        shown,
        vec!["a1".to_string(), "a2".to_string(), "a3".to_string()]
    );
}

#[test]
fn test_ad_toggle_registers_ancestors_and_deselect_keeps_them() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::AdToggled {
            ad_id: "b1".to_string(),
            ad_set_id: "B.as1".to_string(),
            campaign_id: "B".to_string(),
            selected: true,
        },
    );
    assert!(state.selection.is_campaign_selected("B"));
    assert!(state.selection.is_ad_set_selected("B.as1"));

    update(
        &mut state,
        AdsManagerMessage::AdToggled {
            ad_id: "b1".to_string(),
            ad_set_id: "B.as1".to_string(),
            campaign_id: "B".to_string(),
            selected: false,
        },
    );
    assert!(!state.selection.is_ad_selected("b1"));
    assert!(state.selection.is_campaign_selected("B"));
    assert!(state.selection.is_ad_set_selected("B.as1"));
}

#[test]
fn test_select_all_respects_active_filters() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::SearchChanged(EntityLevel::Ads, "promo".to_string()),
    );
    update(
        &mut state,
        AdsManagerMessage::StatusFilterChanged(
            EntityLevel::Ads,
            StatusFilter::Only(EntityStatus::Active),
        ),
    );
    assert_eq!(state.visible_ads().len(), 2);

    update(
        &mut state,
        AdsManagerMessage::SelectAllVisible(EntityLevel::Ads),
    );
    assert!(state.selection.is_ad_selected("a1"));
    assert!(state.selection.is_ad_selected("a3"));
    assert!(!state.selection.is_ad_selected("a2"));
    // Ancestors registered through upward propagation
    assert!(state.selection.is_ad_set_selected("A.as1"));
    assert!(state.selection.is_campaign_selected("A"));
}

#[test]
fn test_filter_change_does_not_touch_selection() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("A".to_string(), true),
    );
    let before = state.selection_counts();

    update(
        &mut state,
        AdsManagerMessage::SearchChanged(EntityLevel::Campaigns, "brand".to_string()),
    );
    assert_eq!(state.selection_counts(), before);
    assert_eq!(state.visible_campaigns().len(), 1);

    update(&mut state, AdsManagerMessage::ClearFilters);
    assert_eq!(state.visible_campaigns().len(), 2);
    assert_eq!(state.selection_counts(), before);
}

#[test]
fn test_load_error_keeps_selection_and_filters() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("A".to_string(), true),
    );
    update(
        &mut state,
        AdsManagerMessage::SearchChanged(EntityLevel::Ads, "promo".to_string()),
    );

    update(&mut state, AdsManagerMessage::RefreshRequested);
    update(
        &mut state,
        AdsManagerMessage::LoadError("rate limited".to_string()),
    );

    assert_eq!(state.error.as_deref(), Some("rate limited"));
    assert!(!state.loading);
    assert!(state.selection.is_campaign_selected("A"));
    assert_eq!(state.filters.ads.search, "promo");
}

#[test]
fn test_refresh_keeps_stale_selection_without_pruning() {
    let mut state = loaded_state();
    update(
        &mut state,
        AdsManagerMessage::CampaignToggled("A".to_string(), true),
    );

    // New snapshot no longer contains campaign A
    let snapshot = AdsSnapshot {
        campaigns: vec![campaign("B", "Brand Push")],
        ad_sets: vec![ad_set("B.as1", "B", "Broad Reach")],
        ads: vec![ad("b1", "B.as1", "Logo Spot", EntityStatus::Active)],
        ..Default::default()
    };
    update(&mut state, AdsManagerMessage::SnapshotLoaded(snapshot));

    // Stale ids persist in the engine but are never rendered
    assert!(state.selection.is_campaign_selected("A"));
    assert!(state
        .visible_campaigns()
        .iter()
        .all(|c| c.id != "A"));
}
