/// Advertising entity models for the Meta Ads management screen
///
/// Campaigns own Ad Sets by `campaign_id` back-reference, Ad Sets own Ads by
/// `ad_set_id`. All entities are delivered wholesale by the data-fetch
/// collaborator and treated as immutable snapshots; ids are opaque strings
/// assigned by the upstream API.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery status shared by all three entity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Active,
    Paused,
    Archived,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Paused => "Paused",
            EntityStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Marketing objective of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignObjective {
    OutcomeSales,
    OutcomeTraffic,
    OutcomeEngagement,
    OutcomeLeads,
    OutcomeAwareness,
    OutcomeAppPromotion,
}

/// Bid strategy carried by an ad set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStrategy {
    LowestCostWithoutCap,
    LowestCostWithBidCap,
    CostCap,
}

/// Top-level advertising container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: EntityStatus,
    pub objective: CampaignObjective,
    pub created_time: DateTime<Utc>,
    /// Budget in minor currency units (cents)
    #[serde(default)]
    pub daily_budget: Option<u64>,
    #[serde(default)]
    pub lifetime_budget: Option<u64>,
}

/// Mid-level grouping under a campaign, carrying bid/budget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSet {
    pub id: String,
    /// Owning campaign. Required by the upstream API, but the referenced
    /// campaign may be absent from a partially-consistent snapshot.
    pub campaign_id: String,
    pub name: String,
    pub status: EntityStatus,
    #[serde(default)]
    pub bid_strategy: Option<BidStrategy>,
    #[serde(default)]
    pub daily_budget: Option<u64>,
    #[serde(default)]
    pub lifetime_budget: Option<u64>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Creative descriptor attached to an ad
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdCreative {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Leaf-level creative unit under an ad set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    /// Owning ad set, same tolerance rule as [`AdSet::campaign_id`].
    /// The upstream API spells this key `adset_id`.
    #[serde(alias = "adset_id")]
    pub ad_set_id: String,
    pub name: String,
    pub status: EntityStatus,
    #[serde(default)]
    pub creative: Option<AdCreative>,
}

/// A single action metric reported by the insights API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightAction {
    pub action_type: String,
    pub value: f64,
}

/// Performance metrics keyed by entity id, consumed only for display.
/// The selection/filter core never inspects insight contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Insight {
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub reach: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub actions: Vec<InsightAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserializes_screaming_case() {
        let status: EntityStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(status, EntityStatus::Active);
        let status: EntityStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(status, EntityStatus::Paused);
    }

    #[test]
    fn test_campaign_deserializes_without_budgets() {
        let campaign: Campaign = serde_json::from_value(serde_json::json!({
            "id": "120210000000000001",
            "name": "Spring Sale",
            "status": "ACTIVE",
            "objective": "OUTCOME_SALES",
            "created_time": "2025-03-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(campaign.name, "Spring Sale");
        assert_eq!(campaign.objective, CampaignObjective::OutcomeSales);
        assert!(campaign.daily_budget.is_none());
    }

    #[test]
    fn test_insight_defaults_missing_metrics() {
        let insight: Insight =
            serde_json::from_value(serde_json::json!({ "spend": 12.5 })).unwrap();
        assert_eq!(insight.spend, 12.5);
        assert_eq!(insight.impressions, 0);
        assert!(insight.actions.is_empty());
    }
}
