/// Shared fixture builders for unit tests.
use crate::models::{Ad, AdSet, Campaign, CampaignObjective, EntityStatus};
use chrono::{TimeZone, Utc};

pub fn campaign(id: &str, name: &str) -> Campaign {
    Campaign {
        id: id.to_string(),
        name: name.to_string(),
        status: EntityStatus::Active,
        objective: CampaignObjective::OutcomeSales,
        created_time: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap(),
        daily_budget: Some(5_000),
        lifetime_budget: None,
    }
}

pub fn ad_set(id: &str, campaign_id: &str, name: &str) -> AdSet {
    AdSet {
        id: id.to_string(),
        campaign_id: campaign_id.to_string(),
        name: name.to_string(),
        status: EntityStatus::Active,
        bid_strategy: None,
        daily_budget: Some(1_000),
        lifetime_budget: None,
        start_time: None,
        end_time: None,
    }
}

pub fn ad(id: &str, ad_set_id: &str, name: &str) -> Ad {
    ad_with_status(id, ad_set_id, name, EntityStatus::Active)
}

pub fn ad_with_status(id: &str, ad_set_id: &str, name: &str, status: EntityStatus) -> Ad {
    Ad {
        id: id.to_string(),
        ad_set_id: ad_set_id.to_string(),
        name: name.to_string(),
        status,
        creative: None,
    }
}
